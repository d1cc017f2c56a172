use axum::extract::{Multipart, State};
use axum::{Form, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::asr::RecognitionError;
use crate::error::ApiError;
use crate::state::AppState;
use crate::translate::Language;
use crate::utils::temp_audio::TempAudioFile;

#[derive(Debug, Deserialize)]
pub struct TranslateForm {
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TranslationResult {
    pub original: String,
    pub translated: Translated,
}

#[derive(Debug, Serialize)]
pub struct Translated {
    pub english: String,
    pub telugu: String,
    pub tamil: String,
}

/// POST /translate - translate a text snippet into English, Telugu and Tamil.
pub async fn translate_text(
    State(state): State<AppState>,
    form: Option<Form<TranslateForm>>,
) -> Result<Json<TranslationResult>, ApiError> {
    let text = form
        .and_then(|Form(f)| f.text)
        .filter(|t| !t.is_empty())
        .ok_or(ApiError::Validation("No text provided"))?;

    // English is best effort; the original text stands in when it fails.
    let english = match state.translator.translate(&text, Language::English).await {
        Ok(translated) => translated,
        Err(e) => {
            warn!("English translation failed, keeping original text: {}", e);
            text.clone()
        }
    };

    let telugu = state
        .translator
        .translate(&text, Language::Telugu)
        .await
        .map_err(|e| ApiError::Translation(e.to_string()))?;
    let tamil = state
        .translator
        .translate(&text, Language::Tamil)
        .await
        .map_err(|e| ApiError::Translation(e.to_string()))?;

    Ok(Json(TranslationResult {
        original: text,
        translated: Translated {
            english,
            telugu,
            tamil,
        },
    }))
}

/// POST /voice - recognize speech from an uploaded clip, then translate the
/// recognized text. The recognized text doubles as the English output.
pub async fn translate_voice(
    State(state): State<AppState>,
    multipart: Option<Multipart>,
) -> Result<Json<TranslationResult>, ApiError> {
    let mut audio = None;
    if let Some(mut multipart) = multipart {
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| ApiError::Voice(e.to_string()))?
        {
            if field.name() == Some("audio") {
                audio = Some(
                    field
                        .bytes()
                        .await
                        .map_err(|e| ApiError::Voice(e.to_string()))?,
                );
                break;
            }
        }
    }
    let audio = audio.ok_or(ApiError::Validation("No audio file"))?;

    // The guard removes the file again on every exit path below.
    let wav = TempAudioFile::create(&audio).map_err(|e| ApiError::Voice(e.to_string()))?;
    info!("Audio file saved: {}", wav.path().display());

    let recognized = state
        .recognizer
        .recognize(wav.path())
        .await
        .map_err(|e| match e {
            RecognitionError::Ambiguous => ApiError::RecognitionAmbiguous,
            RecognitionError::Service(msg) => ApiError::RecognitionService(msg),
        })?;
    info!("Recognized: {}", recognized);

    let telugu = state
        .translator
        .translate(&recognized, Language::Telugu)
        .await
        .map_err(|e| ApiError::Voice(e.to_string()))?;
    let tamil = state
        .translator
        .translate(&recognized, Language::Tamil)
        .await
        .map_err(|e| ApiError::Voice(e.to_string()))?;

    Ok(Json(TranslationResult {
        original: recognized.clone(),
        translated: Translated {
            english: recognized,
            telugu,
            tamil,
        },
    }))
}
