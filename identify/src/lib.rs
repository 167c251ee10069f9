//! # Waste Identification
//!
//! Turns a photographed item into a trustworthy [`WasteIdentification`]
//! record, or nothing.
//!
//! ## Pipeline
//!
//! - The caller hands over a `data:` URI straight from the capture surface.
//! - [`request_identification`] extracts the base64 payload and asks the
//!   recognizer (Gemini in production, a stub in tests) for a best-effort
//!   structured guess. One outbound request per call, no retries.
//! - [`validate_identification`](validate::validate_identification) is the
//!   single trust boundary: it either produces a fully populated record or
//!   rejects the answer. There is exactly one validation implementation.
//!
//! Every failure mode collapses to `None` at [`identify_waste`], so callers
//! only branch once: show the result, or prompt for a clearer photo.
use reqwest::Client;
use serde_json::Value;
use tracing::warn;

pub mod config;
pub mod error;
pub mod models;
pub mod utils;
pub mod validate;

use config::Config;
use error::IdentifyError;
use models::{Response, WasteIdentification};
use utils::{build_payload, mime_type, split_data_uri};
use validate::validate_identification;

/// External image-understanding capability: one image in, one raw untrusted
/// structured guess out. Implementations must not interpret the answer.
pub trait Recognizer {
    fn recognize(
        &self,
        mime_type: &str,
        base64_image: &str,
    ) -> impl Future<Output = Result<Value, IdentifyError>> + Send;
}

pub struct GeminiRecognizer {
    client: Client,
    config: Config,
}

impl GeminiRecognizer {
    pub fn new(config: Config) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn url(&self) -> String {
        format!(
            "{}/{}:generateContent?key={}",
            self.config.endpoint, self.config.model, self.config.api_key
        )
    }
}

impl Recognizer for GeminiRecognizer {
    async fn recognize(
        &self,
        mime_type: &str,
        base64_image: &str,
    ) -> Result<Value, IdentifyError> {
        let payload = build_payload(mime_type, base64_image);

        let res = self.client.post(self.url()).json(&payload).send().await?;

        #[cfg(feature = "verbose")]
        println!("Status: {}\n", res.status());

        let json_string = res.error_for_status()?.text().await?;
        let response: Response = serde_json::from_str(&json_string)?;

        let answer = response
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .ok_or(IdentifyError::EmptyResponse)?;

        Ok(serde_json::from_str(&answer.text)?)
    }
}

/// Requests a raw classification for the captured image.
///
/// A data URI without a separator or with a blank payload fails here,
/// before anything leaves the device.
pub async fn request_identification<R: Recognizer>(
    recognizer: &R,
    data_uri: &str,
) -> Result<Value, IdentifyError> {
    let (metadata, payload) = split_data_uri(data_uri).ok_or(IdentifyError::UnusableImage)?;

    recognizer.recognize(mime_type(metadata), payload).await
}

/// Full capture-to-record pipeline. Requester failures and validation
/// rejections both collapse to `None`; the cause is logged, not returned.
pub async fn identify_waste<R: Recognizer>(
    recognizer: &R,
    data_uri: &str,
) -> Option<WasteIdentification> {
    let raw = match request_identification(recognizer, data_uri).await {
        Ok(raw) => raw,
        Err(error) => {
            warn!("Error identifying waste: {error}");
            return None;
        }
    };

    let record = validate_identification(&raw);

    if record.is_none() {
        warn!("Recognition answer failed validation");
    }

    record
}
