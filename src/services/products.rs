use crate::dto::products::ProductDto;
use crate::repository::{ListingReader, SortOrder};

use super::{ServiceError, ServiceResult};

/// Return every stored listing, newest first.
pub fn list_products<R>(repo: &R) -> ServiceResult<Vec<ProductDto>>
where
    R: ListingReader,
{
    match repo.list_listings(SortOrder::NewestFirst) {
        Ok(listings) => Ok(listings.into_iter().map(ProductDto::from).collect()),
        Err(e) => {
            log::error!("Failed to list products: {e}");
            Err(ServiceError::Internal)
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::listing::Listing;
    use crate::domain::types::{CategoryName, ListingId, ProductName, SellerId};
    use crate::repository::test::TestRepository;

    pub(crate) fn sample_listing(id: i32, name: &str) -> Listing {
        Listing {
            id: ListingId::new(id).unwrap(),
            seller_id: SellerId::new("demo").unwrap(),
            name: ProductName::new(name).unwrap(),
            category: Some(CategoryName::new("Kitchen").unwrap()),
            price: Some(250.0),
            unit: Some("piece".to_string()),
            color: None,
            material: Some("steel".to_string()),
            weight: None,
            dimensions: None,
            stock_qty: Some(10),
            tags: vec!["steel".to_string(), "bottle".to_string()],
            language: Some("en".to_string()),
            description_en: Some("Keeps water cool.".to_string()),
            description_local: None,
            image_url: None,
        }
    }

    #[test]
    fn lists_newest_first() {
        let repo = TestRepository::new(vec![
            sample_listing(1, "Steel bottle"),
            sample_listing(3, "Tiffin box"),
            sample_listing(2, "Copper jug"),
        ]);

        let products = list_products(&repo).unwrap();

        let ids: Vec<i32> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
        assert_eq!(products[0].name, "Tiffin box");
        assert_eq!(products[0].tags, vec!["steel", "bottle"]);
    }

    #[test]
    fn empty_catalog_is_empty_list() {
        let repo = TestRepository::default();
        assert!(list_products(&repo).unwrap().is_empty());
    }
}
