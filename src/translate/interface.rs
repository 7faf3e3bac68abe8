use async_trait::async_trait;

/// Translate interface - actual implementation talks to a remote service
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text` into `target_lang`, returning only the translated text
    ///
    /// # Arguments
    /// * `text` - The text to translate, source language is auto-detected
    /// * `target_lang` - Destination language code, passed through unvalidated
    async fn translate(&self, text: &str, target_lang: &str) -> Result<String, anyhow::Error>;
}
