//! Listing generation pipeline.
//!
//! Every step runs sequentially against the injected [`ModelGateway`]. Only a
//! failed image caption is tolerated; any other error aborts the build.

use std::sync::Arc;

use thiserror::Error;

use crate::categorizer::CategoryMatcher;
use crate::domain::listing::{ListingDraft, NewListing};
use crate::domain::types::{CategoryName, LanguageCode, ProductName, TypeConstraintError};
use crate::gateway::{GatewayError, ModelGateway};
use crate::prompts;

const TRANSLATION_TEMPERATURE: f32 = 0.1;
const TRANSLATION_MAX_TOKENS: u32 = 256;
const COPY_TEMPERATURE: f32 = 0.4;
const COPY_MAX_TOKENS: u32 = 300;
const COPY_TONE: &str = "friendly";

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    #[error("generated listing is invalid: {0}")]
    InvalidListing(#[from] TypeConstraintError),
    #[error("failed to serialize draft: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Input of a single listing build.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingRequest {
    pub text_input: String,
    pub image_url: Option<String>,
    /// Language of the seller's text, or `auto`.
    pub source_lang: LanguageCode,
    /// Marketplace language of the listing name.
    pub target_lang: LanguageCode,
}

/// Builds catalog listings from seller notes.
#[derive(Clone)]
pub struct ListingPipeline {
    gateway: Arc<dyn ModelGateway>,
    matcher: Arc<CategoryMatcher>,
}

impl ListingPipeline {
    pub fn new(gateway: Arc<dyn ModelGateway>, matcher: Arc<CategoryMatcher>) -> Self {
        Self { gateway, matcher }
    }

    pub async fn build_listing(
        &self,
        request: &ListingRequest,
    ) -> Result<NewListing, PipelineError> {
        let caption = match request.image_url.as_deref() {
            Some(image_url) => match self.gateway.caption(image_url).await {
                Ok(caption) => Some(caption),
                Err(e) => {
                    log::warn!("Captioning {image_url} failed, continuing without it: {e}");
                    None
                }
            },
            None => None,
        };

        let draft = self
            .gateway
            .extract_structured(&request.text_input, caption.as_deref())
            .await?;
        log::debug!("Extracted draft '{}'", draft.name);

        let category = self
            .matcher
            .categorize(&category_hint(&draft, caption.as_deref()));

        let name = if draft.language.as_deref() != Some(request.target_lang.as_str()) {
            self.translate(&draft.name, &request.target_lang).await?
        } else {
            draft.name.clone()
        };

        let draft_json = serde_json::to_string(&draft)?;
        let description_en = self
            .gateway
            .generate_text(
                prompts::COPYWRITER_SYSTEM,
                &prompts::copy_request(&draft_json, COPY_TONE),
                COPY_TEMPERATURE,
                COPY_MAX_TOKENS,
            )
            .await?;

        let description_local =
            if wants_local_description(&request.source_lang, &request.target_lang) {
                Some(self.translate(&description_en, &request.source_lang).await?)
            } else {
                None
            };

        Ok(assemble_listing(
            ProductName::new(name)?,
            category,
            draft,
            description_en,
            description_local,
            request.image_url.clone(),
        ))
    }

    async fn translate(&self, text: &str, target: &LanguageCode) -> Result<String, GatewayError> {
        self.gateway
            .generate_text(
                prompts::TRANSLATOR_SYSTEM,
                &prompts::translation_request(text, target.as_str()),
                TRANSLATION_TEMPERATURE,
                TRANSLATION_MAX_TOKENS,
            )
            .await
    }
}

/// Text fed to the category matcher: name, tags and the image caption.
pub fn category_hint(draft: &ListingDraft, caption: Option<&str>) -> String {
    let mut hint = format!("{} {}", draft.name, draft.tags.join(" "));
    if let Some(caption) = caption {
        hint.push(' ');
        hint.push_str(caption);
    }
    hint
}

/// A local description is written only for a concrete source language that
/// differs from the target.
pub fn wants_local_description(source_lang: &LanguageCode, target_lang: &LanguageCode) -> bool {
    !source_lang.is_auto() && source_lang != target_lang
}

fn assemble_listing(
    name: ProductName,
    category: CategoryName,
    draft: ListingDraft,
    description_en: String,
    description_local: Option<String>,
    image_url: Option<String>,
) -> NewListing {
    NewListing {
        name,
        category,
        price: draft.price,
        unit: draft.unit,
        color: draft.color,
        material: draft.material,
        weight: draft.weight,
        dimensions: draft.dimensions,
        stock_qty: draft.stock_qty,
        tags: draft.tags,
        language: draft.language,
        description_en,
        description_local,
        image_url,
    }
}
