use async_trait::async_trait;
use thiserror::Error;

/// Target languages the service translates into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    Telugu,
    Tamil,
}

impl Language {
    /// ISO 639-1 code understood by the translation service.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Telugu => "te",
            Language::Tamil => "ta",
        }
    }
}

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("request to translation service failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("translation service returned {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("translation service returned no translation")]
    Empty,
}

/// Translation collaborator. One target language per call.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str, target: Language) -> Result<String, TranslateError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_codes() {
        assert_eq!(Language::English.code(), "en");
        assert_eq!(Language::Telugu.code(), "te");
        assert_eq!(Language::Tamil.code(), "ta");
    }
}
