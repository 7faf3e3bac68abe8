use anyhow::Result;
use tracing::{debug, info};
use whatlang::{Detector, Lang};

use crate::config::DetectorConfig;
use super::interface::LanguageDetector;

/// Trigram-based detector backed by the `whatlang` crate
pub struct WhatlangDetector {
    detector: Detector,
}

impl WhatlangDetector {
    pub fn new(config: &DetectorConfig) -> Result<Self> {
        if config.allowlist.is_empty() {
            info!("Initializing whatlang detector with all languages");
            return Ok(Self {
                detector: Detector::new(),
            });
        }

        let allowlist = config
            .allowlist
            .iter()
            .map(|code| {
                Lang::from_code(code.to_lowercase().as_str())
                    .ok_or_else(|| anyhow::anyhow!("Unknown language in detector allowlist: {}", code))
            })
            .collect::<Result<Vec<Lang>>>()?;

        info!("Initializing whatlang detector restricted to {:?}", allowlist);
        Ok(Self {
            detector: Detector::with_allowlist(allowlist),
        })
    }
}

impl LanguageDetector for WhatlangDetector {
    fn detect(&self, text: &str) -> Result<String> {
        let info = self
            .detector
            .detect(text)
            .ok_or_else(|| anyhow::anyhow!("No features in text."))?;

        let code = lang_to_code(info.lang());
        debug!(
            "Detected {} (confidence {:.2}, reliable {})",
            code,
            info.confidence(),
            info.is_reliable()
        );
        Ok(code.to_string())
    }
}

/// Map whatlang's ISO 639-3 languages onto the codes the translator accepts
fn lang_to_code(lang: Lang) -> &'static str {
    match lang {
        Lang::Eng => "en",
        Lang::Fra => "fr",
        Lang::Spa => "es",
        Lang::Deu => "de",
        Lang::Ita => "it",
        Lang::Por => "pt",
        Lang::Rus => "ru",
        Lang::Ukr => "uk",
        Lang::Bel => "be",
        Lang::Bul => "bg",
        Lang::Mkd => "mk",
        Lang::Srp => "sr",
        Lang::Hrv => "hr",
        Lang::Slv => "sl",
        Lang::Ces => "cs",
        Lang::Pol => "pl",
        Lang::Nld => "nl",
        Lang::Dan => "da",
        Lang::Swe => "sv",
        Lang::Nob => "no",
        Lang::Fin => "fi",
        Lang::Est => "et",
        Lang::Lav => "lv",
        Lang::Lit => "lt",
        Lang::Hun => "hu",
        Lang::Ron => "ro",
        Lang::Ell => "el",
        Lang::Tur => "tr",
        Lang::Ara => "ar",
        Lang::Heb => "he",
        Lang::Pes => "fa",
        Lang::Hin => "hi",
        Lang::Ben => "bn",
        Lang::Urd => "ur",
        Lang::Tam => "ta",
        Lang::Tha => "th",
        Lang::Vie => "vi",
        Lang::Ind => "id",
        Lang::Jpn => "ja",
        Lang::Kor => "ko",
        Lang::Cmn => "zh-cn",
        Lang::Kat => "ka",
        Lang::Epo => "eo",
        Lang::Lat => "la",
        // No two-letter mapping; keep whatlang's own code
        other => other.code(),
    }
}
