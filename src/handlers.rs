use tracing::{debug, info};

use crate::error::ServiceError;
use crate::state::AppState;
use crate::types::{DetectRequest, DetectResponse, SpeakRequest, SpeakResponse};

pub const EMPTY_SPEAK_TEXT: &str = "Text input is empty.";
pub const EMPTY_DETECT_TEXT: &str = "No text provided";

/// Reduce a caller-supplied tag such as `fr-FR` to the bare language code `fr`
pub fn normalize_language(language: &str) -> String {
    let lowered = language.to_lowercase();
    match lowered.split_once('-') {
        Some((code, _region)) => code.to_string(),
        None => lowered,
    }
}

/// Decode a request body as JSON whatever its declared content type
pub fn parse_body<T: serde::de::DeserializeOwned>(body: &[u8]) -> Result<T, ServiceError> {
    Ok(serde_json::from_slice(body)?)
}

pub async fn handle_speak(state: &AppState, body: &[u8]) -> Result<SpeakResponse, ServiceError> {
    let request: SpeakRequest = parse_body(body)?;
    let text = request.text.trim();
    if text.is_empty() {
        return Err(ServiceError::Validation(EMPTY_SPEAK_TEXT));
    }

    let lang_code = if request.auto_detect.unwrap_or(false) {
        let detected = state.detector.detect(text)?;
        debug!("Auto-detected language {} for speak request", detected);
        detected.to_lowercase()
    } else {
        normalize_language(&request.language)
    };

    // English input is spoken as-is
    let text = if lang_code == "en" {
        text.to_string()
    } else {
        state.translator.translate(text, &lang_code).await?
    };

    info!("Prepared speech text in {}", lang_code);
    Ok(SpeakResponse::translated(text, lang_code))
}

pub async fn handle_detect(state: &AppState, body: &[u8]) -> Result<DetectResponse, ServiceError> {
    let request: DetectRequest = parse_body(body)?;
    let text = request.text.trim();
    if text.is_empty() {
        return Err(ServiceError::Validation(EMPTY_DETECT_TEXT));
    }

    let language = state.detector.detect(text)?.to_lowercase();
    debug!("Detected language {}", language);
    Ok(DetectResponse { language })
}
