// src/domain/view_model.rs
//
// Turns a raw listing document into the fully-defaulted structure the detail
// page renders. Pure and total: missing optionals degrade to fixed defaults,
// never to an error.

use crate::domain::listing::{Coordinates, Listing, Review};

/// Label -> icon table for amenities. Lookup is by exact label; anything
/// unrecognized gets the first entry's icon.
pub const AMENITY_ICONS: &[(&str, &str)] = &[
    ("WiFi", "\u{1F4F6}"),          // antenna bars
    ("AC", "\u{2744}\u{FE0F}"),     // snowflake
    ("Food", "\u{1F37D}\u{FE0F}"),  // plate
    ("Laundry", "\u{1F9FA}"),       // basket
    ("Parking", "\u{1F697}"),       // car
    ("TV", "\u{1F4FA}"),
    ("Gym", "\u{1F3CB}\u{FE0F}"),
    ("Security", "\u{1F6E1}\u{FE0F}"),
    ("Power Backup", "\u{1F50B}"),
    ("Housekeeping", "\u{1F9F9}"),
];

/// Substituted for any image reference that is neither absolute nor
/// root-relative, and for an entirely empty image list.
pub const PLACEHOLDER_IMAGE: &str = "/static/img/pg-placeholder.svg";

pub const DEFAULT_RATING: f64 = 4.0;
pub const DEFAULT_OWNER_NAME: &str = "Property Owner";
pub const DEFAULT_OWNER_CONTACT: &str = "Contact via platform";
pub const OWNER_RESPONSE_TIME: &str = "usually within 2 hours";

/// Shown when the document carries no house rules of its own.
pub const DEFAULT_RULES: [&str; 5] = [
    "No smoking inside the premises",
    "Guests allowed in common areas only",
    "Main gate closes at 11:00 PM",
    "Keep noise down after 10:00 PM",
    "Monthly rent due by the 5th",
];

/// City-centre fallback when the document has no geocoordinates.
pub const FALLBACK_COORDINATES: Coordinates = Coordinates {
    lat: 12.9716,
    lng: 77.5946,
};

#[derive(Debug, Clone, PartialEq)]
pub struct AmenityView {
    pub label: String,
    pub icon: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewView {
    /// 1-based position in the document's review list, not a stable id.
    pub index: usize,
    pub user_name: String,
    pub rating: f64,
    pub comment: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoomTypeView {
    pub label: String,
    pub price: i64,
    pub available: u32,
}

/// Display-ready projection of a listing. Rebuilt from scratch on every
/// fetch; never stored.
#[derive(Debug, Clone)]
pub struct ListingView {
    pub id: String,
    pub name: String,
    pub location: String,
    pub price: i64,
    pub description: String,
    pub gender: String,
    pub address: String,
    pub city: String,

    pub amenities: Vec<AmenityView>,
    pub images: Vec<String>,
    pub rating: f64,
    pub reviews: Vec<ReviewView>,
    pub room_types: Vec<RoomTypeView>,

    pub rules: Vec<String>,
    pub nearby_places: Vec<String>,
    pub coordinates: Coordinates,

    pub owner_id: String,
    pub owner_name: String,
    pub owner_contact: String,
    pub response_time: String,
    pub member_since: String,
}

/// Resolve an amenity label to its icon. Unknown labels fall back to the
/// table's first entry so the view never renders an icon-less amenity.
pub fn amenity_icon(label: &str) -> &'static str {
    AMENITY_ICONS
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, icon)| *icon)
        .unwrap_or(AMENITY_ICONS[0].1)
}

fn keep_or_placeholder(image: &str) -> String {
    if image.starts_with("http") || image.starts_with('/') {
        image.to_string()
    } else {
        PLACEHOLDER_IMAGE.to_string()
    }
}

fn format_review(index: usize, review: &Review) -> ReviewView {
    let date = review
        .created_at
        .map(|d| d.format("%d %b %Y").to_string())
        .unwrap_or_else(|| "recently".to_string());

    ReviewView {
        index: index + 1,
        user_name: review.user_name.clone(),
        rating: review.rating,
        comment: review.comment.clone(),
        date,
    }
}

/// Build the view model for the detail page.
pub fn format_listing(listing: &Listing) -> ListingView {
    let amenities = listing
        .amenities
        .iter()
        .map(|label| AmenityView {
            label: label.clone(),
            icon: amenity_icon(label),
        })
        .collect();

    let mut images: Vec<String> = listing
        .images
        .iter()
        .map(|img| keep_or_placeholder(img))
        .collect();
    if images.is_empty() {
        images.push(PLACEHOLDER_IMAGE.to_string());
    }

    let reviews = listing
        .reviews
        .iter()
        .enumerate()
        .map(|(i, r)| format_review(i, r))
        .collect();

    // The data model carries a single room type per listing, so the pricing
    // table always has exactly one entry.
    let room_types = vec![RoomTypeView {
        label: if listing.room_type.is_empty() {
            "Standard".to_string()
        } else {
            listing.room_type.clone()
        },
        price: listing.price,
        available: 2,
    }];

    let rules = listing
        .rules
        .clone()
        .unwrap_or_else(|| DEFAULT_RULES.iter().map(|r| r.to_string()).collect());

    let nearby_places = listing
        .nearby_places
        .clone()
        .unwrap_or_else(|| default_nearby_places(&listing.city));

    let member_since = listing
        .created_at
        .map(|d| d.format("%B %Y").to_string())
        .unwrap_or_else(|| "recently".to_string());

    ListingView {
        id: listing.id.clone(),
        name: listing.name.clone(),
        location: listing.location.clone(),
        price: listing.price,
        description: listing.description.clone(),
        gender: listing.gender.clone(),
        address: listing.address.clone(),
        city: listing.city.clone(),

        amenities,
        images,
        rating: if listing.rating == 0.0 {
            DEFAULT_RATING
        } else {
            listing.rating
        },
        reviews,
        room_types,

        rules,
        nearby_places,
        coordinates: listing.coordinates.unwrap_or(FALLBACK_COORDINATES),

        owner_id: listing.owner_id.clone(),
        owner_name: if listing.owner_name.is_empty() {
            DEFAULT_OWNER_NAME.to_string()
        } else {
            listing.owner_name.clone()
        },
        owner_contact: if listing.owner_contact.is_empty() {
            DEFAULT_OWNER_CONTACT.to_string()
        } else {
            listing.owner_contact.clone()
        },
        response_time: OWNER_RESPONSE_TIME.to_string(),
        member_since,
    }
}

fn default_nearby_places(city: &str) -> Vec<String> {
    vec![
        format!("{city} Metro Station - 1.2 km"),
        format!("{city} Central Market - 800 m"),
        format!("{city} City Hospital - 2.1 km"),
        format!("{city} Bus Stand - 1.5 km"),
    ]
}
