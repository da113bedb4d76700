// src/domain/ids.rs

/// Length of a native document id: 24 hex characters.
pub const LISTING_ID_LEN: usize = 24;

/// Check an id against the document store's native format before ever
/// touching the database. Accepts upper or lower case hex.
pub fn is_valid_listing_id(id: &str) -> bool {
    id.len() == LISTING_ID_LEN && id.bytes().all(|b| b.is_ascii_hexdigit())
}
