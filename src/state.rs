use std::sync::Arc;

use crate::asr::{GoogleSpeechClient, SpeechRecognizer};
use crate::config::Config;
use crate::translate::{GoogleTranslateClient, Translator};

/// Per-call timeout for the external translation and recognition services.
const EXTERNAL_REQUEST_TIMEOUT_SECS: u64 = 30;

const RECOGNITION_LANGUAGE: &str = "en-US";

/// Shared application state. Handlers are stateless; everything in here is
/// immutable after startup, so cloning per request is cheap.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub translator: Arc<dyn Translator>,
    pub recognizer: Arc<dyn SpeechRecognizer>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let translator = Arc::new(GoogleTranslateClient::new(
            &config.translate_api_url,
            EXTERNAL_REQUEST_TIMEOUT_SECS,
        ));
        let recognizer = Arc::new(GoogleSpeechClient::new(
            &config.speech_api_url,
            &config.speech_api_key,
            RECOGNITION_LANGUAGE,
            EXTERNAL_REQUEST_TIMEOUT_SECS,
        ));

        Self {
            config,
            translator,
            recognizer,
        }
    }
}
