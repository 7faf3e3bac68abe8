use std::sync::Arc;
use std::time::Duration;
use anyhow::{Context, Result};
use tracing::info;

use crate::config::TranslatorConfig;
use super::client::GoogleTranslateClient;
use super::interface::Translator;

/// Factory for creating translator clients
pub struct TranslatorFactory;

impl TranslatorFactory {
    /// Build the translator described by `config`
    ///
    /// The underlying HTTP client is created once here and shared by every request.
    pub fn create_translator(config: &TranslatorConfig) -> Result<Arc<dyn Translator>> {
        info!(
            "Initializing translator: {} (source {}, timeout {}s)",
            config.base_url, config.source_lang, config.timeout_secs
        );

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Arc::new(GoogleTranslateClient::new(
            client,
            config.base_url.clone(),
            config.source_lang.clone(),
        )))
    }
}
