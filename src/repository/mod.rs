use crate::db::{DbConnection, DbPool};
use crate::domain::listing::{Listing, NewListing};
use crate::domain::types::{ListingId, SellerId};

pub mod errors;
pub mod product;

pub use errors::{RepositoryError, RepositoryResult};

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Ordering of listings by identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Most recently created first.
    #[default]
    NewestFirst,
    OldestFirst,
}

/// Read-only operations for catalog listings.
pub trait ListingReader {
    /// List every stored listing in the requested order.
    fn list_listings(&self, order: SortOrder) -> RepositoryResult<Vec<Listing>>;

    /// Number of stored listings.
    fn count_listings(&self) -> RepositoryResult<usize>;
}

/// Write operations for catalog listings.
pub trait ListingWriter {
    /// Insert a listing or overwrite the one with the same seller and name.
    fn upsert_listing(
        &self,
        seller_id: &SellerId,
        listing: &NewListing,
    ) -> RepositoryResult<ListingId>;
}
