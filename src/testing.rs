//! Recording stand-ins for the detector and translator

use std::sync::{Arc, Mutex};
use async_trait::async_trait;

use crate::config::Config;
use crate::detect::LanguageDetector;
use crate::state::AppState;
use crate::translate::Translator;

pub struct MockDetector {
    result: Result<String, String>,
}

impl MockDetector {
    pub fn returning(code: &str) -> Self {
        Self { result: Ok(code.to_string()) }
    }

    pub fn failing(message: &str) -> Self {
        Self { result: Err(message.to_string()) }
    }
}

impl LanguageDetector for MockDetector {
    fn detect(&self, _text: &str) -> anyhow::Result<String> {
        self.result.clone().map_err(anyhow::Error::msg)
    }
}

/// Translates to `[<target>] <text>` and records every call
pub struct MockTranslator {
    failure: Option<String>,
    calls: Mutex<Vec<(String, String)>>,
}

impl MockTranslator {
    pub fn prefixing() -> Self {
        Self { failure: None, calls: Mutex::new(Vec::new()) }
    }

    pub fn failing(message: &str) -> Self {
        Self { failure: Some(message.to_string()), calls: Mutex::new(Vec::new()) }
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Translator for MockTranslator {
    async fn translate(&self, text: &str, target_lang: &str) -> anyhow::Result<String> {
        self.calls
            .lock()
            .unwrap()
            .push((text.to_string(), target_lang.to_string()));
        match &self.failure {
            Some(message) => Err(anyhow::anyhow!("{}", message)),
            None => Ok(format!("[{}] {}", target_lang, text)),
        }
    }
}

/// State with the given mocks; the translator handle is returned for call inspection
pub fn mock_state(detector: MockDetector, translator: MockTranslator) -> (AppState, Arc<MockTranslator>) {
    let translator = Arc::new(translator);
    let mut config = Config::default();
    config.system_config.static_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/static").to_string();
    let state = AppState::with_collaborators(config, Arc::new(detector), translator.clone());
    (state, translator)
}
