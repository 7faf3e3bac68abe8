use serde::{Deserialize, Serialize};

/// Body of `POST /speak`
#[derive(Debug, Clone, Deserialize)]
pub struct SpeakRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default = "default_language")]
    pub language: String,
    /// `null` counts as absent
    #[serde(default, rename = "autoDetect")]
    pub auto_detect: Option<bool>,
}

fn default_language() -> String {
    "en-US".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeakResponse {
    pub status: String,
    pub text: String,
    pub language: String,
}

impl SpeakResponse {
    pub fn translated(text: String, language: String) -> Self {
        Self {
            status: "translated".to_string(),
            text,
            language,
        }
    }
}

/// Body of `POST /detect`
#[derive(Debug, Clone, Deserialize)]
pub struct DetectRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectResponse {
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speak_request_defaults() {
        let req: SpeakRequest = serde_json::from_str(r#"{"text": "hi", "voice": "ignored"}"#).unwrap();
        assert_eq!(req.text, "hi");
        assert_eq!(req.language, "en-US");
        assert_eq!(req.auto_detect, None);
    }

    #[test]
    fn null_auto_detect_counts_as_absent() {
        let req: SpeakRequest = serde_json::from_str(r#"{"text": "hi", "autoDetect": null}"#).unwrap();
        assert_eq!(req.auto_detect, None);
    }

    #[test]
    fn null_text_or_language_is_rejected() {
        assert!(serde_json::from_str::<SpeakRequest>(r#"{"text": null}"#).is_err());
        assert!(serde_json::from_str::<SpeakRequest>(r#"{"text": "hi", "language": null}"#).is_err());
    }

    #[test]
    fn speak_request_reads_camel_case_flag() {
        let req: SpeakRequest =
            serde_json::from_str(r#"{"text": "hi", "language": "fr-FR", "autoDetect": true}"#).unwrap();
        assert_eq!(req.language, "fr-FR");
        assert_eq!(req.auto_detect, Some(true));
    }

    #[test]
    fn detect_request_defaults_to_empty_text() {
        let req: DetectRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.text, "");
    }
}
