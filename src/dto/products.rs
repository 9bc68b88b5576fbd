use serde::Serialize;

use crate::domain::listing::Listing;

/// Listing as returned by the JSON API.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDto {
    pub id: i32,
    pub name: String,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub unit: Option<String>,
    pub color: Option<String>,
    pub material: Option<String>,
    pub weight: Option<String>,
    pub dimensions: Option<String>,
    pub stock_qty: Option<i32>,
    pub tags: Vec<String>,
    pub description_en: Option<String>,
    pub description_local: Option<String>,
    pub image_url: Option<String>,
}

impl From<Listing> for ProductDto {
    fn from(value: Listing) -> Self {
        Self {
            id: value.id.get(),
            name: value.name.into_inner(),
            category: value.category.map(|c| c.into_inner()),
            price: value.price,
            unit: value.unit,
            color: value.color,
            material: value.material,
            weight: value.weight,
            dimensions: value.dimensions,
            stock_qty: value.stock_qty,
            tags: value.tags,
            description_en: value.description_en,
            description_local: value.description_local,
            image_url: value.image_url,
        }
    }
}

/// CSV export wrapped in a JSON envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportDto {
    pub filename: String,
    pub content: String,
}
