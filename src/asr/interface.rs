use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

/// How recognition can fail. `Ambiguous` means the service answered but found
/// no intelligible speech; `Service` covers network and protocol failures.
#[derive(Debug, Error)]
pub enum RecognitionError {
    #[error("no speech could be recognized")]
    Ambiguous,
    #[error("{0}")]
    Service(String),
}

/// Speech-recognition collaborator operating on a saved audio file.
#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    async fn recognize(&self, wav: &Path) -> Result<String, RecognitionError>;
}
