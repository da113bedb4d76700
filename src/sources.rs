// src/sources.rs
//
// Where the detail page gets its listing from. The controller only sees the
// trait; main picks the implementations once at startup based on the
// configured mode, so no runtime-environment checks hide inside error paths.

use crate::db::connection::Database;
use crate::db::listings;
use crate::domain::fixtures::fixture_by_numeric_id;
use crate::domain::ids::is_valid_listing_id;
use crate::domain::listing::Listing;
use crate::errors::ServerError;

pub trait ListingSource: Send + Sync {
    fn fetch(&self, id: &str) -> Result<Listing, ServerError>;
}

/// Production source: point lookup against the document table.
pub struct DbSource {
    db: Database,
}

impl DbSource {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

impl ListingSource for DbSource {
    fn fetch(&self, id: &str) -> Result<Listing, ServerError> {
        if !is_valid_listing_id(id) {
            return Err(ServerError::BadRequest("Invalid PG ID format".into()));
        }
        listings::find_by_id(&self.db, id)?.ok_or(ServerError::NotFound)
    }
}

/// Development fallback: serves the static dataset, addressed by a numeric
/// parse of the requested id.
pub struct FixtureSource;

impl ListingSource for FixtureSource {
    fn fetch(&self, id: &str) -> Result<Listing, ServerError> {
        fixture_by_numeric_id(id).ok_or(ServerError::NotFound)
    }
}
