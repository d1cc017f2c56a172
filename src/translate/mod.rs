pub mod google;
pub mod interface;

pub use google::GoogleTranslateClient;
pub use interface::{Language, TranslateError, Translator};
