use serde::Serialize;

use crate::repository::ListingReader;

use super::{ServiceError, ServiceResult};

/// Figures shown on the status page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexStats {
    pub listing_count: usize,
}

/// Core business logic for rendering the index page.
pub fn show_index<R>(repo: &R) -> ServiceResult<IndexStats>
where
    R: ListingReader,
{
    match repo.count_listings() {
        Ok(listing_count) => Ok(IndexStats { listing_count }),
        Err(e) => {
            log::error!("Failed to count listings: {e}");
            Err(ServiceError::Internal)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::test::TestRepository;
    use crate::services::products::tests::sample_listing;

    #[test]
    fn counts_stored_listings() {
        let repo = TestRepository::new(vec![
            sample_listing(1, "Steel bottle"),
            sample_listing(2, "Tiffin box"),
        ]);

        assert_eq!(show_index(&repo).unwrap().listing_count, 2);
    }
}
