use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use super::interface::{Language, TranslateError, Translator};

/// Client for the public Google Translate `translate_a/single` endpoint.
/// Source language is always auto-detected.
pub struct GoogleTranslateClient {
    http: Client,
    base_url: String,
}

impl GoogleTranslateClient {
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("failed to build HTTP client");
        Self {
            http,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl Translator for GoogleTranslateClient {
    async fn translate(&self, text: &str, target: Language) -> Result<String, TranslateError> {
        let url = format!("{}/translate_a/single", self.base_url);
        debug!(
            "Requesting translation to {} ({} chars)",
            target.code(),
            text.len()
        );

        let response = self
            .http
            .get(&url)
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", target.code()),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(TranslateError::Api {
                status: response.status(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        let body: Value = response.json().await?;
        parse_translation(&body).ok_or(TranslateError::Empty)
    }
}

/// The endpoint answers with nested arrays; index 0 holds one entry per
/// sentence, whose first element is the translated segment.
fn parse_translation(body: &Value) -> Option<String> {
    let segments = body.get(0)?.as_array()?;
    let mut translated = String::new();
    for segment in segments {
        if let Some(part) = segment.get(0).and_then(Value::as_str) {
            translated.push_str(part);
        }
    }
    (!translated.is_empty()).then_some(translated)
}
