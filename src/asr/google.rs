use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use super::interface::{RecognitionError, SpeechRecognizer};

/// Client for the Google Web Speech API (v2). The response body is a stream
/// of newline-separated JSON objects; the first line is usually an empty
/// `{"result":[]}` placeholder.
pub struct GoogleSpeechClient {
    http: Client,
    endpoint: String,
    api_key: String,
    language: String,
}

impl GoogleSpeechClient {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        language: impl Into<String>,
        timeout_secs: u64,
    ) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("failed to build HTTP client");
        Self {
            http,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            language: language.into(),
        }
    }
}

#[async_trait]
impl SpeechRecognizer for GoogleSpeechClient {
    async fn recognize(&self, wav: &Path) -> Result<String, RecognitionError> {
        let audio = tokio::fs::read(wav)
            .await
            .map_err(|e| RecognitionError::Service(format!("could not read audio file: {e}")))?;
        debug!("Sending {} bytes of audio for recognition", audio.len());

        let response = self
            .http
            .post(&self.endpoint)
            .query(&[
                ("client", "chromium"),
                ("lang", self.language.as_str()),
                ("key", self.api_key.as_str()),
            ])
            .header(CONTENT_TYPE, "audio/l16; rate=16000")
            .body(audio)
            .send()
            .await
            .map_err(|e| RecognitionError::Service(e.to_string()))?;

        if !response.status().is_success() {
            return Err(RecognitionError::Service(format!(
                "recognition service returned {}",
                response.status()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| RecognitionError::Service(e.to_string()))?;
        parse_transcript(&body).ok_or(RecognitionError::Ambiguous)
    }
}

/// Picks the first non-empty transcript out of the line-delimited results.
/// An answer with no transcript at all means the audio was unintelligible.
fn parse_transcript(body: &str) -> Option<String> {
    for line in body.lines().filter(|l| !l.trim().is_empty()) {
        let Ok(value) = serde_json::from_str::<Value>(line) else {
            continue;
        };
        let transcript = value
            .get("result")
            .and_then(Value::as_array)
            .and_then(|results| results.first())
            .and_then(|result| result.get("alternative"))
            .and_then(Value::as_array)
            .and_then(|alternatives| alternatives.first())
            .and_then(|alternative| alternative.get("transcript"))
            .and_then(Value::as_str);
        if let Some(text) = transcript {
            if !text.is_empty() {
                return Some(text.to_string());
            }
        }
    }
    None
}
