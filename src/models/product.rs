use diesel::prelude::*;

use crate::domain::listing::{Listing as DomainListing, NewListing as DomainNewListing};
use crate::domain::types::{CategoryName, ProductName, SellerId, TypeConstraintError};

/// Language stored when the extractor could not detect one.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Seller owning rows that were stored without one.
pub const DEFAULT_SELLER_ID: &str = "demo";

const TAG_SEPARATOR: &str = ",";

/// Diesel model representing the `products` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::products)]
pub struct Product {
    pub id: i32,
    pub seller_id: Option<String>,
    pub name: String,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub unit: Option<String>,
    pub color: Option<String>,
    pub material: Option<String>,
    pub weight: Option<String>,
    pub dimensions: Option<String>,
    pub stock_qty: Option<i32>,
    pub tags: Option<String>,
    pub lang: Option<String>,
    pub description_en: Option<String>,
    pub description_local: Option<String>,
    pub image_url: Option<String>,
}

/// Insertable/patchable form of [`Product`].
///
/// `None` values are written as NULL so that an update replaces every column.
#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::products)]
#[diesel(treat_none_as_null = true)]
pub struct NewProduct {
    pub seller_id: String,
    pub name: String,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub unit: Option<String>,
    pub color: Option<String>,
    pub material: Option<String>,
    pub weight: Option<String>,
    pub dimensions: Option<String>,
    pub stock_qty: Option<i32>,
    pub tags: Option<String>,
    pub lang: Option<String>,
    pub description_en: Option<String>,
    pub description_local: Option<String>,
    pub image_url: Option<String>,
}

/// Join tags into the comma-separated column value; empty lists become NULL.
pub fn join_tags(tags: &[String]) -> Option<String> {
    if tags.is_empty() {
        None
    } else {
        Some(tags.join(TAG_SEPARATOR))
    }
}

/// Seller of a stored row; NULL and blank values belong to [`DEFAULT_SELLER_ID`].
pub fn stored_seller_id(seller_id: Option<&str>) -> &str {
    match seller_id.map(str::trim) {
        Some(seller_id) if !seller_id.is_empty() => seller_id,
        _ => DEFAULT_SELLER_ID,
    }
}

/// Split the stored tag column back into an ordered list.
pub fn split_tags(tags: Option<&str>) -> Vec<String> {
    match tags {
        Some(tags) if !tags.is_empty() => tags.split(TAG_SEPARATOR).map(str::to_string).collect(),
        _ => vec![],
    }
}

impl NewProduct {
    /// Map a listing onto the row layout, field by field.
    pub fn from_listing(seller_id: &SellerId, listing: &DomainNewListing) -> Self {
        Self {
            seller_id: seller_id.as_str().to_string(),
            name: listing.name.as_str().to_string(),
            category: Some(listing.category.as_str().to_string()),
            price: listing.price,
            unit: listing.unit.clone(),
            color: listing.color.clone(),
            material: listing.material.clone(),
            weight: listing.weight.clone(),
            dimensions: listing.dimensions.clone(),
            stock_qty: listing.stock_qty,
            tags: join_tags(&listing.tags),
            lang: Some(
                listing
                    .language
                    .clone()
                    .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            ),
            description_en: Some(listing.description_en.clone()),
            description_local: listing.description_local.clone(),
            image_url: listing.image_url.clone(),
        }
    }
}

impl TryFrom<Product> for DomainListing {
    type Error = TypeConstraintError;

    fn try_from(product: Product) -> Result<Self, Self::Error> {
        let tags = split_tags(product.tags.as_deref());
        Ok(Self {
            id: product.id.try_into()?,
            seller_id: SellerId::new(stored_seller_id(product.seller_id.as_deref()))?,
            name: ProductName::new(product.name)?,
            category: product
                .category
                .filter(|category| !category.trim().is_empty())
                .map(CategoryName::new)
                .transpose()?,
            price: product.price,
            unit: product.unit,
            color: product.color,
            material: product.material,
            weight: product.weight,
            dimensions: product.dimensions,
            stock_qty: product.stock_qty,
            tags,
            language: product.lang,
            description_en: product.description_en,
            description_local: product.description_local,
            image_url: product.image_url,
        })
    }
}
