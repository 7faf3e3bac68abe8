use std::sync::Arc;

use crate::config::Config;
use crate::detect::{LanguageDetector, WhatlangDetector};
use crate::translate::{Translator, TranslatorFactory};

/// Process-wide handles shared read-only by every request
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub detector: Arc<dyn LanguageDetector>,
    pub translator: Arc<dyn Translator>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let detector = Arc::new(WhatlangDetector::new(&config.detector_config)?);
        let translator = TranslatorFactory::create_translator(&config.translator_config)?;

        Ok(Self::with_collaborators(config, detector, translator))
    }

    pub fn with_collaborators(
        config: Config,
        detector: Arc<dyn LanguageDetector>,
        translator: Arc<dyn Translator>,
    ) -> Self {
        Self {
            config,
            detector,
            translator,
        }
    }
}
