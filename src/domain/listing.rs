use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryName, ListingId, ProductName, SellerId};

/// Structured attributes extracted from a seller's free-form notes.
///
/// Every field except `name` may be missing; values are taken verbatim from
/// the extractor and never filled in locally.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "server", derive(schemars::JsonSchema))]
pub struct ListingDraft {
    /// Product name/title.
    pub name: String,
    /// Numeric price, if mentioned.
    pub price: Option<f64>,
    /// Selling unit such as "kg" or "piece".
    pub unit: Option<String>,
    pub color: Option<String>,
    pub material: Option<String>,
    pub weight: Option<String>,
    pub dimensions: Option<String>,
    /// Item count or quantity in stock.
    pub stock_qty: Option<i32>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// ISO-639-1 code of the input text, if identifiable.
    pub language: Option<String>,
}

/// A fully assembled listing that has not been persisted yet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewListing {
    pub name: ProductName,
    pub category: CategoryName,
    pub price: Option<f64>,
    pub unit: Option<String>,
    pub color: Option<String>,
    pub material: Option<String>,
    pub weight: Option<String>,
    pub dimensions: Option<String>,
    pub stock_qty: Option<i32>,
    pub tags: Vec<String>,
    /// Language detected in the seller's input.
    pub language: Option<String>,
    pub description_en: String,
    /// Description in the seller's own language, when one was requested.
    pub description_local: Option<String>,
    pub image_url: Option<String>,
}

/// A listing stored in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Listing {
    pub id: ListingId,
    pub seller_id: SellerId,
    pub name: ProductName,
    /// Stored category; rows written by other tools may lack one.
    pub category: Option<CategoryName>,
    pub price: Option<f64>,
    pub unit: Option<String>,
    pub color: Option<String>,
    pub material: Option<String>,
    pub weight: Option<String>,
    pub dimensions: Option<String>,
    pub stock_qty: Option<i32>,
    pub tags: Vec<String>,
    pub language: Option<String>,
    pub description_en: Option<String>,
    pub description_local: Option<String>,
    pub image_url: Option<String>,
}

impl Listing {
    /// Combine a freshly persisted [`NewListing`] with its storage identity.
    pub fn from_new(id: ListingId, seller_id: SellerId, listing: NewListing) -> Self {
        Self {
            id,
            seller_id,
            name: listing.name,
            category: Some(listing.category),
            price: listing.price,
            unit: listing.unit,
            color: listing.color,
            material: listing.material,
            weight: listing.weight,
            dimensions: listing.dimensions,
            stock_qty: listing.stock_qty,
            tags: listing.tags,
            language: listing.language,
            description_en: Some(listing.description_en),
            description_local: listing.description_local,
            image_url: listing.image_url,
        }
    }
}
