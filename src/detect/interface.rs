/// Language detection interface
///
/// Implementations must be deterministic: the same text always yields the
/// same code.
pub trait LanguageDetector: Send + Sync {
    /// Best-guess language code for `text` (ISO 639-1 where one exists)
    fn detect(&self, text: &str) -> Result<String, anyhow::Error>;
}
