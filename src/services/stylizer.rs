//! Optional cartoon stylizing of photos before quantization.

use async_trait::async_trait;
use base64::Engine;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

use crate::models::StylizeConfig;

#[derive(Debug, Error)]
pub enum StylizeError {
    #[error("Missing stylizer API key")]
    MissingApiKey,

    #[error("Stylizer request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Stylizer returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Stylizer response contained no image")]
    MissingImage,

    #[error("Stylizer image is not valid base64: {0}")]
    Decode(#[from] base64::DecodeError),
}

/// Turns a photo into a simpler, flatter image that quantizes well.
#[async_trait]
pub trait Stylizer: Send + Sync {
    /// Stylize PNG bytes, returning PNG bytes.
    async fn stylize(&self, image: Vec<u8>, api_key: &str) -> Result<Vec<u8>, StylizeError>;
}

/// Image-edit client for the OpenAI images API.
///
/// Sends a multipart form (`model`, `prompt`, `image`, `size`) with the
/// caller's bearer key and returns the decoded `data[0].b64_json`.
pub struct OpenAiStylizer {
    client: reqwest::Client,
    config: StylizeConfig,
}

#[derive(Debug, Deserialize)]
struct EditResponse {
    #[serde(default)]
    data: Vec<EditImage>,
}

#[derive(Debug, Deserialize)]
struct EditImage {
    b64_json: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: Option<ErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl OpenAiStylizer {
    pub fn new(config: StylizeConfig) -> Result<Self, StylizeError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl Stylizer for OpenAiStylizer {
    async fn stylize(&self, image: Vec<u8>, api_key: &str) -> Result<Vec<u8>, StylizeError> {
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(StylizeError::MissingApiKey);
        }

        let image_part = reqwest::multipart::Part::bytes(image)
            .file_name("image.png")
            .mime_str("image/png")?;
        let form = reqwest::multipart::Form::new()
            .text("model", self.config.model.clone())
            .text("prompt", self.config.prompt.clone())
            .part("image", image_part)
            .text("size", self.config.size.clone());

        tracing::debug!(
            endpoint = %self.config.endpoint,
            model = %self.config.model,
            "Sending stylize request"
        );

        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(api_key)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .ok()
                .and_then(|r| r.error)
                .and_then(|e| e.message)
                .unwrap_or_else(|| format!("request failed with status {status}"));
            tracing::warn!(status = status.as_u16(), %message, "Stylizer rejected request");
            return Err(StylizeError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: EditResponse = response.json().await?;
        let b64 = body
            .data
            .into_iter()
            .next()
            .and_then(|img| img.b64_json)
            .ok_or(StylizeError::MissingImage)?;

        let png = base64::engine::general_purpose::STANDARD.decode(b64.as_bytes())?;
        tracing::info!(bytes = png.len(), "Stylized image received");
        Ok(png)
    }
}
