use crate::db::connection::Database;
use crate::domain::listing::{Listing, ListingSummary};
use crate::errors::ServerError;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};

/// Point lookup: the raw document text for one id, untouched. This is what
/// `/api/pg/{id}` serves back out.
pub fn find_doc_by_id(db: &Database, id: &str) -> Result<Option<String>, ServerError> {
    db.with_conn(|conn| {
        conn.query_row(
            "SELECT doc FROM listings WHERE id = ?1",
            params![id],
            |row| row.get::<_, String>(0),
        )
        .optional()
        .map_err(|e| ServerError::DbError(format!("listing lookup failed: {e}")))
    })
}

/// Point lookup decoded into the domain record. A document that no longer
/// parses is an internal fault, not a missing listing.
pub fn find_by_id(db: &Database, id: &str) -> Result<Option<Listing>, ServerError> {
    let doc = find_doc_by_id(db, id)?;
    match doc {
        Some(text) => {
            let listing =
                serde_json::from_str(&text).map_err(|_| ServerError::InternalError)?;
            Ok(Some(listing))
        }
        None => Ok(None),
    }
}

/// All listings, slimmed down for the index card grid.
pub fn list_summaries(db: &Database) -> Result<Vec<ListingSummary>, ServerError> {
    db.with_conn(|conn| {
        let mut stmt = conn
            .prepare("SELECT doc FROM listings ORDER BY created_at DESC")
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let rows = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let mut out = Vec::new();
        for row in rows {
            let text = row.map_err(|e| ServerError::DbError(e.to_string()))?;
            let listing: Listing =
                serde_json::from_str(&text).map_err(|_| ServerError::InternalError)?;
            out.push(ListingSummary {
                id: listing.id,
                name: listing.name,
                city: listing.city,
                price: listing.price,
                rating: listing.rating,
                room_type: listing.room_type,
                cover_image: listing.images.into_iter().next(),
            });
        }
        Ok(out)
    })
}

pub fn count_listings(db: &Database) -> Result<i64, ServerError> {
    db.with_conn(|conn| {
        conn.query_row("SELECT COUNT(*) FROM listings", [], |row| row.get(0))
            .map_err(|e| ServerError::DbError(e.to_string()))
    })
}

/// Insert or refresh one document. Used by seeding and by tests.
pub fn upsert_listing(conn: &Connection, listing: &Listing) -> Result<(), ServerError> {
    let doc = serde_json::to_string(listing).map_err(|_| ServerError::InternalError)?;
    let now = Utc::now().to_rfc3339();

    conn.execute(
        r#"
        INSERT INTO listings (id, doc, created_at, updated_at)
        VALUES (?1, ?2, ?3, ?3)
        ON CONFLICT(id) DO UPDATE SET
            doc = excluded.doc,
            updated_at = excluded.updated_at
        "#,
        params![listing.id, doc, now],
    )
    .map_err(|e| ServerError::DbError(format!("listing upsert failed: {e}")))?;

    Ok(())
}
