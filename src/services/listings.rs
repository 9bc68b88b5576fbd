use crate::domain::listing::Listing;
use crate::dto::products::ProductDto;
use crate::forms::listings::CreateListingPayload;
use crate::pipeline::ListingPipeline;
use crate::repository::ListingWriter;

use super::{ServiceError, ServiceResult};

/// Build a listing from the seller's notes and store it.
///
/// A listing with the same seller and name is overwritten in place and keeps
/// its id.
pub async fn create_listing<R>(
    payload: CreateListingPayload,
    pipeline: &ListingPipeline,
    repo: &R,
) -> ServiceResult<ProductDto>
where
    R: ListingWriter,
{
    let listing = match pipeline.build_listing(&payload.request).await {
        Ok(listing) => listing,
        Err(e) => {
            log::error!("Failed to build listing: {e}");
            return Err(ServiceError::Internal);
        }
    };

    let id = match repo.upsert_listing(&payload.seller_id, &listing) {
        Ok(id) => id,
        Err(e) => {
            log::error!("Failed to store listing '{}': {e}", listing.name);
            return Err(ServiceError::Internal);
        }
    };

    log::info!(
        "Stored listing {id} '{}' for seller {}",
        listing.name,
        payload.seller_id
    );

    Ok(Listing::from_new(id, payload.seller_id, listing).into())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::categorizer::{CategoryMatcher, Taxonomy};
    use crate::domain::types::{LanguageCode, SellerId};
    use crate::gateway::test::{STUB_DESCRIPTION, StubGateway, bottle_draft};
    use crate::pipeline::ListingRequest;
    use crate::repository::test::TestRepository;
    use crate::repository::{ListingReader, SortOrder};

    fn pipeline(gateway: StubGateway) -> ListingPipeline {
        let taxonomy = Taxonomy::from_json(r#"{"Kitchen": ["water bottle", "tiffin"]}"#).unwrap();
        ListingPipeline::new(
            Arc::new(gateway),
            Arc::new(CategoryMatcher::new(&taxonomy).unwrap()),
        )
    }

    fn payload(seller_id: &str) -> CreateListingPayload {
        CreateListingPayload {
            seller_id: SellerId::new(seller_id).unwrap(),
            request: ListingRequest {
                text_input: "blue steel water bottle 1L, ₹250".to_string(),
                image_url: None,
                source_lang: LanguageCode::new("en").unwrap(),
                target_lang: LanguageCode::new("en").unwrap(),
            },
        }
    }

    #[actix_web::test]
    async fn stores_and_returns_listing() {
        let repo = TestRepository::default();
        let pipeline = pipeline(StubGateway::new(bottle_draft(Some("en"))));

        let product = create_listing(payload("demo"), &pipeline, &repo)
            .await
            .unwrap();

        assert_eq!(product.id, 1);
        assert_eq!(product.name, "Blue steel water bottle");
        assert_eq!(product.category.as_deref(), Some("Kitchen"));
        assert_eq!(product.description_en.as_deref(), Some(STUB_DESCRIPTION));
        assert_eq!(product.description_local, None);
        assert_eq!(product.tags, vec!["bottle", "steel"]);
        assert_eq!(repo.len(), 1);
    }

    #[actix_web::test]
    async fn same_seller_and_name_overwrites() {
        let repo = TestRepository::default();
        let pipeline = pipeline(StubGateway::new(bottle_draft(Some("en"))));

        let first = create_listing(payload("demo"), &pipeline, &repo)
            .await
            .unwrap();
        let second = create_listing(payload("demo"), &pipeline, &repo)
            .await
            .unwrap();
        let other_seller = create_listing(payload("seller-2"), &pipeline, &repo)
            .await
            .unwrap();

        assert_eq!(first.id, second.id);
        assert_ne!(first.id, other_seller.id);
        assert_eq!(repo.list_listings(SortOrder::OldestFirst).unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn pipeline_failure_is_internal_and_stores_nothing() {
        let repo = TestRepository::default();
        let pipeline = pipeline(StubGateway::failing_extraction());

        let result = create_listing(payload("demo"), &pipeline, &repo).await;

        assert_eq!(result, Err(ServiceError::Internal));
        assert_eq!(repo.len(), 0);
    }
}
