use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::types::{LanguageCode, SellerId, TypeConstraintError};
use crate::models::product::DEFAULT_SELLER_ID;
use crate::pipeline::ListingRequest;

pub const DEFAULT_SOURCE_LANG: &str = "auto";
pub const DEFAULT_TARGET_LANG: &str = "en";

/// Body of `POST /agent/create_listing`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateListingForm {
    /// Free-form voice transcript or typed text.
    #[validate(length(min = 1))]
    pub text_input: String,
    pub image_url: Option<String>,
    /// e.g. `ta`, `hi`, `bn` or `auto`.
    pub source_lang: Option<String>,
    /// Main marketplace language.
    pub target_lang: Option<String>,
    pub seller_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateListingPayload {
    pub seller_id: SellerId,
    pub request: ListingRequest,
}

#[derive(Debug, Error)]
pub enum CreateListingFormError {
    #[error("Create listing form validation failed: {0}")]
    Validation(String),
    #[error("Create listing form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for CreateListingFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for CreateListingFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Missing and blank optional values fall back to `default`.
fn or_default(value: Option<String>, default: &str) -> String {
    non_blank(value).unwrap_or_else(|| default.to_string())
}

impl TryFrom<CreateListingForm> for CreateListingPayload {
    type Error = CreateListingFormError;

    fn try_from(value: CreateListingForm) -> Result<Self, Self::Error> {
        value.validate()?;
        if value.text_input.trim().is_empty() {
            return Err(TypeConstraintError::EmptyString("text_input").into());
        }

        let source_lang = or_default(value.source_lang, DEFAULT_SOURCE_LANG);
        let target_lang = or_default(value.target_lang, DEFAULT_TARGET_LANG);

        Ok(Self {
            seller_id: SellerId::new(or_default(value.seller_id, DEFAULT_SELLER_ID))?,
            request: ListingRequest {
                text_input: value.text_input,
                image_url: non_blank(value.image_url).map(|url| url.trim().to_string()),
                source_lang: LanguageCode::new(source_lang)?,
                target_lang: LanguageCode::new(target_lang)?,
            },
        })
    }
}
