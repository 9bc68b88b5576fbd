use diesel::prelude::*;

use crate::domain::listing::{Listing, NewListing};
use crate::domain::types::{ListingId, SellerId};
use crate::models::product::{
    NewProduct as DbNewProduct, Product as DbProduct, stored_seller_id,
};
use crate::repository::{
    DieselRepository, ListingReader, ListingWriter, RepositoryResult, SortOrder,
};

impl ListingReader for DieselRepository {
    fn list_listings(&self, order: SortOrder) -> RepositoryResult<Vec<Listing>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let query = products::table.select(DbProduct::as_select());
        let rows = match order {
            SortOrder::NewestFirst => query.order(products::id.desc()).load(&mut conn)?,
            SortOrder::OldestFirst => query.order(products::id.asc()).load(&mut conn)?,
        };

        let items = rows
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Listing>, _>>()?;

        Ok(items)
    }

    fn count_listings(&self) -> RepositoryResult<usize> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let count: i64 = products::table.count().get_result(&mut conn)?;
        Ok(count as usize)
    }
}

impl ListingWriter for DieselRepository {
    fn upsert_listing(
        &self,
        seller_id: &SellerId,
        listing: &NewListing,
    ) -> RepositoryResult<ListingId> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let row = DbNewProduct::from_listing(seller_id, listing);

        let id = conn.transaction::<i32, diesel::result::Error, _>(|conn| {
            let existing = products::table
                .filter(products::name.eq(&row.name))
                .select((products::id, products::seller_id))
                .order(products::id.asc())
                .load::<(i32, Option<String>)>(conn)?
                .into_iter()
                .find(|(_, seller)| stored_seller_id(seller.as_deref()) == row.seller_id)
                .map(|(id, _)| id);

            match existing {
                Some(id) => {
                    diesel::update(products::table.find(id))
                        .set(&row)
                        .execute(conn)?;
                    Ok(id)
                }
                None => diesel::insert_into(products::table)
                    .values(&row)
                    .returning(products::id)
                    .get_result(conn),
            }
        })?;

        Ok(ListingId::new(id)?)
    }
}
