// src/db/seed.rs
use crate::db::connection::Database;
use crate::db::listings::{count_listings, upsert_listing};
use crate::domain::fixtures::fixture_listings;
use crate::errors::ServerError;

/// Development-mode convenience: load the fixture documents into an empty
/// database so the pages render something out of the box. A non-empty table
/// is left alone, so repeated startups insert nothing.
pub fn seed_if_empty(db: &Database) -> Result<usize, ServerError> {
    if count_listings(db)? > 0 {
        return Ok(0);
    }

    let fixtures = fixture_listings();
    db.with_conn(|conn| {
        let tx = conn
            .transaction()
            .map_err(|e| ServerError::DbError(e.to_string()))?;
        for listing in &fixtures {
            upsert_listing(&tx, listing)?;
        }
        tx.commit()
            .map_err(|e| ServerError::DbError(e.to_string()))?;
        Ok(fixtures.len())
    })
}
