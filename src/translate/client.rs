use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{debug, error, warn};

use super::interface::Translator;

/// Client for the public Google Translate `translate_a/single` endpoint
#[derive(Debug, Clone)]
pub struct GoogleTranslateClient {
    client: Client,
    base_url: String,
    source_lang: String,
}

impl GoogleTranslateClient {
    pub fn new(client: Client, base_url: String, source_lang: String) -> Self {
        Self {
            client,
            base_url,
            source_lang,
        }
    }
}

#[async_trait]
impl Translator for GoogleTranslateClient {
    async fn translate(&self, text: &str, target_lang: &str) -> Result<String> {
        debug!("Translating '{}' from {} to {}", text, self.source_lang, target_lang);

        let response = self
            .client
            .get(self.base_url.as_str())
            .query(&[
                ("client", "gtx"),
                ("sl", self.source_lang.as_str()),
                ("tl", target_lang),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .context("Failed to reach translation service")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(status, &body));
        }

        let body = response
            .text()
            .await
            .context("Failed to read translation response")?;
        let json: Value = serde_json::from_str(&body).map_err(|e| {
            error!("Failed to parse JSON: {} - Body: {}", e, body);
            anyhow::anyhow!("Failed to parse translation response: {}", e)
        })?;

        let translation = parse_translation(&json)?;
        debug!("Translated '{}' -> '{}'", text, translation);
        Ok(translation)
    }
}

/// Error for a non-2xx reply; unsupported target languages surface this way
pub fn status_error(status: StatusCode, body: &str) -> anyhow::Error {
    warn!("Translation service error: {} - {}", status, body);
    anyhow::anyhow!("Translation service returned error: {}", status)
}

/// Concatenate the segments found at `[0][*][0]`
pub fn parse_translation(json: &Value) -> Result<String> {
    let segments = json
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| anyhow::anyhow!("Invalid translation response format: missing segments"))?;

    let translation: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    if translation.is_empty() {
        anyhow::bail!("Empty translation received from translation service");
    }
    Ok(translation)
}
