use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Failures a handler can surface to the HTTP caller. Each variant carries
/// the externally visible message; underlying service errors are stringified
/// into it, never exposed as structured objects.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Required input missing from the request. Always the client's fault.
    #[error("{0}")]
    Validation(&'static str),

    /// The recognizer answered but found no intelligible speech.
    #[error("Could not understand audio. Please speak louder and clearer.")]
    RecognitionAmbiguous,

    /// The recognition backend itself failed (network, HTTP error).
    #[error("Google Speech Recognition service error: {0}. Check internet connection.")]
    RecognitionService(String),

    /// A translation step on the text path failed.
    #[error("Text translation failed: {0}")]
    Translation(String),

    /// Catch-all for the voice path: file I/O, translation of recognized
    /// text, anything after the upload was accepted.
    #[error("Voice processing failed: {0}")]
    Voice(String),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::RecognitionAmbiguous => StatusCode::BAD_REQUEST,
            ApiError::RecognitionService(_) | ApiError::Translation(_) | ApiError::Voice(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_the_http_contract() {
        assert_eq!(
            ApiError::Validation("No text provided").to_string(),
            "No text provided"
        );
        assert_eq!(
            ApiError::RecognitionAmbiguous.to_string(),
            "Could not understand audio. Please speak louder and clearer."
        );
        assert_eq!(
            ApiError::RecognitionService("timed out".to_string()).to_string(),
            "Google Speech Recognition service error: timed out. Check internet connection."
        );
        assert_eq!(
            ApiError::Translation("boom".to_string()).to_string(),
            "Text translation failed: boom"
        );
        assert_eq!(
            ApiError::Voice("disk full".to_string()).to_string(),
            "Voice processing failed: disk full"
        );
    }

    #[test]
    fn client_faults_are_400_and_backend_faults_are_500() {
        assert_eq!(
            ApiError::Validation("No audio file").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::RecognitionAmbiguous.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::RecognitionService(String::new()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::Translation(String::new()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::Voice(String::new()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
