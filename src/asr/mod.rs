pub mod google;
pub mod interface;

pub use google::GoogleSpeechClient;
pub use interface::{RecognitionError, SpeechRecognizer};
