//! CSV export of the whole catalog.

use thiserror::Error;

use crate::domain::listing::Listing;
use crate::dto::products::ExportDto;
use crate::models::product::join_tags;
use crate::repository::{ListingReader, SortOrder};

use super::{ServiceError, ServiceResult};

pub const EXPORT_FILE_NAME: &str = "export.csv";

pub const EXPORT_HEADERS: [&str; 14] = [
    "id",
    "name",
    "category",
    "price",
    "unit",
    "color",
    "material",
    "weight",
    "dimensions",
    "stock_qty",
    "tags",
    "description_en",
    "description_local",
    "image_url",
];

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to render csv: {0}")]
    CsvRender(#[from] csv::Error),
    #[error("failed to finish csv: {0}")]
    CsvFlush(String),
    #[error("csv output is not valid utf-8")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Export every listing, oldest first, as CSV text in a JSON envelope.
pub fn export_csv<R>(repo: &R) -> ServiceResult<ExportDto>
where
    R: ListingReader,
{
    let listings = match repo.list_listings(SortOrder::OldestFirst) {
        Ok(listings) => listings,
        Err(e) => {
            log::error!("Failed to list products for export: {e}");
            return Err(ServiceError::Internal);
        }
    };

    match render_csv(&listings) {
        Ok(content) => Ok(ExportDto {
            filename: EXPORT_FILE_NAME.to_string(),
            content,
        }),
        Err(e) => {
            log::error!("Failed to export products: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Render listings as CRLF-terminated CSV. Missing values become empty cells.
pub fn render_csv(listings: &[Listing]) -> Result<String, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(vec![]);

    writer.write_record(EXPORT_HEADERS)?;
    for listing in listings {
        writer.write_record(export_row(listing))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::CsvFlush(e.to_string()))?;
    Ok(String::from_utf8(bytes)?)
}

fn export_row(listing: &Listing) -> [String; 14] {
    let text = |value: &Option<String>| value.clone().unwrap_or_default();
    [
        listing.id.to_string(),
        listing.name.to_string(),
        listing
            .category
            .as_ref()
            .map(|c| c.to_string())
            .unwrap_or_default(),
        listing.price.map(format_price).unwrap_or_default(),
        text(&listing.unit),
        text(&listing.color),
        text(&listing.material),
        text(&listing.weight),
        text(&listing.dimensions),
        listing
            .stock_qty
            .map(|qty| qty.to_string())
            .unwrap_or_default(),
        join_tags(&listing.tags).unwrap_or_default(),
        text(&listing.description_en),
        text(&listing.description_local),
        text(&listing.image_url),
    ]
}

/// Integral prices keep a trailing `.0`, e.g. `250.0`.
fn format_price(price: f64) -> String {
    format!("{price:?}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::test::TestRepository;
    use crate::services::products::tests::sample_listing;

    #[test]
    fn exports_oldest_first_with_crlf() {
        let repo = TestRepository::new(vec![
            sample_listing(2, "Tiffin box"),
            sample_listing(1, "Steel bottle"),
        ]);

        let export = export_csv(&repo).unwrap();

        assert_eq!(export.filename, "export.csv");
        let lines: Vec<&str> = export.content.split("\r\n").collect();
        assert_eq!(
            lines[0],
            "id,name,category,price,unit,color,material,weight,dimensions,stock_qty,tags,\
description_en,description_local,image_url"
        );
        assert_eq!(
            lines[1],
            "1,Steel bottle,Kitchen,250.0,piece,,steel,,,10,\"steel,bottle\",Keeps water cool.,,"
        );
        assert!(lines[2].starts_with("2,Tiffin box,"));
        assert_eq!(lines[3], "");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn missing_values_are_empty_cells() {
        let mut listing = sample_listing(1, "Mystery item");
        listing.category = None;
        listing.price = None;
        listing.unit = None;
        listing.material = None;
        listing.stock_qty = None;
        listing.tags = vec![];
        listing.description_en = None;

        let content = render_csv(&[listing]).unwrap();

        assert!(content.ends_with("\r\n1,Mystery item,,,,,,,,,,,,\r\n"));
    }

    #[test]
    fn fractional_prices_are_kept() {
        assert_eq!(format_price(99.5), "99.5");
        assert_eq!(format_price(250.0), "250.0");
    }

    #[test]
    fn empty_catalog_exports_only_the_header() {
        let content = render_csv(&[]).unwrap();
        assert_eq!(content.lines().count(), 1);
        assert!(content.ends_with("image_url\r\n"));
    }
}
