//! Boundary to the hosted language and vision models.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::listing::ListingDraft;
use crate::extractor;

pub mod huggingface;

pub use huggingface::HuggingFaceGateway;

/// Errors raised while talking to a hosted model.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Missing credential or invalid client settings.
    #[error("configuration error: {0}")]
    Config(String),
    /// Connection failure or timeout.
    #[error("network error: {0}")]
    Network(String),
    /// Non-success HTTP status returned by the provider.
    #[error("api error: {0}")]
    Api(String),
    /// The model output did not have the expected shape.
    #[error("parse error: {0}")]
    Parse(String),
}

pub type GatewayResult<T> = Result<T, GatewayError>;

/// Capabilities offered by the hosted models.
#[async_trait]
pub trait ModelGateway: Send + Sync {
    /// Describe the image behind `image_url` in one sentence.
    async fn caption(&self, image_url: &str) -> GatewayResult<String>;

    /// Generate text for the given instructions. The result is trimmed.
    async fn generate_text(
        &self,
        system: &str,
        user: &str,
        temperature: f32,
        max_tokens: u32,
    ) -> GatewayResult<String>;

    /// Turn seller notes (and an optional image caption) into a draft.
    async fn extract_structured(
        &self,
        raw_text: &str,
        caption: Option<&str>,
    ) -> GatewayResult<ListingDraft> {
        extractor::extract_fields(self, raw_text, caption).await
    }
}
