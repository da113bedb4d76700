use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A PG listing document as stored in the `listings` table and served raw
/// by `/api/pg/{id}`. Field names stay camelCase on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub name: String,
    pub location: String,
    pub price: i64,
    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub room_type: String,

    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,

    #[serde(default)]
    pub images: Vec<String>,

    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub reviews: Vec<Review>,

    #[serde(default)]
    pub owner_id: String,
    #[serde(default)]
    pub owner_name: String,
    #[serde(default)]
    pub owner_contact: String,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    // Optional extras; the view-model formatter fills these with defaults.
    #[serde(default)]
    pub rules: Option<Vec<String>>,
    #[serde(default)]
    pub nearby_places: Option<Vec<String>>,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
}

/// One review inside a listing document. Reviews are owned by the listing
/// and never addressed on their own.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub user_id: String,
    pub user_name: String,
    pub rating: f64,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Slim row for the index page card grid.
#[derive(Debug, Clone)]
pub struct ListingSummary {
    pub id: String,
    pub name: String,
    pub city: String,
    pub price: i64,
    pub rating: f64,
    pub room_type: String,
    pub cover_image: Option<String>,
}
