// src/domain/fixtures.rs
//
// Static listing documents. Development mode uses them two ways: to seed an
// empty database at startup, and as the fallback dataset when a detail-page
// fetch fails. Production never touches this module.

use chrono::TimeZone;
use chrono::Utc;

use crate::domain::listing::{Coordinates, Listing, Review};

/// Complete fixture set, ordered; the fallback path addresses entries by
/// 1-based numeric key.
pub fn fixture_listings() -> Vec<Listing> {
    vec![
        Listing {
            id: "64f1a2b3c4d5e6f7a8b9c0d1".to_string(),
            name: "Green Nest PG".to_string(),
            location: "Koramangala 4th Block, Bengaluru".to_string(),
            price: 8500,
            description: "Quiet paying-guest stay close to the tech parks. \
                          Home-cooked meals twice a day and a shared terrace."
                .to_string(),
            amenities: vec![
                "WiFi".to_string(),
                "Food".to_string(),
                "Laundry".to_string(),
                "Power Backup".to_string(),
            ],
            gender: "Unisex".to_string(),
            room_type: "Double Sharing".to_string(),
            address: "12, 80 Feet Road, Koramangala 4th Block".to_string(),
            city: "Bengaluru".to_string(),
            images: vec![
                "https://images.example.com/pg/green-nest/front.jpg".to_string(),
                "https://images.example.com/pg/green-nest/room.jpg".to_string(),
                "/static/img/pg-placeholder.svg".to_string(),
            ],
            rating: 4.3,
            reviews: vec![
                Review {
                    user_id: "u1001".to_string(),
                    user_name: "Asha".to_string(),
                    rating: 5.0,
                    comment: "Clean rooms and the food is genuinely good.".to_string(),
                    created_at: Some(Utc.with_ymd_and_hms(2024, 2, 18, 10, 0, 0).unwrap()),
                },
                Review {
                    user_id: "u1002".to_string(),
                    user_name: "Rahul".to_string(),
                    rating: 4.0,
                    comment: "WiFi drops in the evening but otherwise solid.".to_string(),
                    created_at: Some(Utc.with_ymd_and_hms(2024, 5, 2, 19, 30, 0).unwrap()),
                },
            ],
            owner_id: "own-301".to_string(),
            owner_name: "Mrs. Lakshmi Rao".to_string(),
            owner_contact: "+91 98450 12345".to_string(),
            created_at: Some(Utc.with_ymd_and_hms(2023, 3, 12, 9, 30, 0).unwrap()),
            updated_at: Some(Utc.with_ymd_and_hms(2024, 5, 2, 19, 30, 0).unwrap()),
            rules: Some(vec![
                "No smoking inside the premises".to_string(),
                "Visitors allowed until 8:00 PM".to_string(),
                "Main gate closes at 11:00 PM".to_string(),
            ]),
            nearby_places: Some(vec![
                "Forum Mall - 1.1 km".to_string(),
                "Koramangala Bus Depot - 600 m".to_string(),
                "St. John's Hospital - 1.8 km".to_string(),
            ]),
            coordinates: Some(Coordinates {
                lat: 12.9352,
                lng: 77.6245,
            }),
        },
        Listing {
            id: "64f1a2b3c4d5e6f7a8b9c0d2".to_string(),
            name: "Sunrise Comforts".to_string(),
            location: "Hinjewadi Phase 1, Pune".to_string(),
            price: 7000,
            description: "Budget-friendly PG for working professionals, five \
                          minutes from the IT park shuttle stop."
                .to_string(),
            amenities: vec![
                "WiFi".to_string(),
                "AC".to_string(),
                "Parking".to_string(),
                "Housekeeping".to_string(),
                "Chess Room".to_string(), // unmapped on purpose
            ],
            gender: "Male".to_string(),
            room_type: "Triple Sharing".to_string(),
            address: "Plot 45, Shivaji Chowk, Hinjewadi".to_string(),
            city: "Pune".to_string(),
            images: vec!["relative/path/broken.jpg".to_string()],
            rating: 0.0,
            reviews: vec![],
            owner_id: "own-302".to_string(),
            owner_name: String::new(),
            owner_contact: String::new(),
            created_at: Some(Utc.with_ymd_and_hms(2023, 11, 1, 8, 0, 0).unwrap()),
            updated_at: None,
            rules: None,
            nearby_places: None,
            coordinates: None,
        },
        Listing {
            id: "64f1a2b3c4d5e6f7a8b9c0d3".to_string(),
            name: "Lakeview Ladies PG".to_string(),
            location: "Madhapur, Hyderabad".to_string(),
            price: 9500,
            description: "Ladies-only accommodation overlooking Durgam \
                          Cheruvu with 24x7 security."
                .to_string(),
            amenities: vec![
                "WiFi".to_string(),
                "Food".to_string(),
                "Security".to_string(),
                "Gym".to_string(),
                "TV".to_string(),
            ],
            gender: "Female".to_string(),
            room_type: "Single".to_string(),
            address: "8-2-293, Road No. 36, Madhapur".to_string(),
            city: "Hyderabad".to_string(),
            images: vec![
                "https://images.example.com/pg/lakeview/tower.jpg".to_string(),
            ],
            rating: 4.7,
            reviews: vec![Review {
                user_id: "u1003".to_string(),
                user_name: "Meera".to_string(),
                rating: 4.7,
                comment: "Feels safe and the gym is a real one.".to_string(),
                created_at: Some(Utc.with_ymd_and_hms(2024, 6, 20, 7, 45, 0).unwrap()),
            }],
            owner_id: "own-303".to_string(),
            owner_name: "Mr. K. Srinivas".to_string(),
            owner_contact: "+91 90000 22233".to_string(),
            created_at: Some(Utc.with_ymd_and_hms(2022, 7, 4, 12, 0, 0).unwrap()),
            updated_at: Some(Utc.with_ymd_and_hms(2024, 6, 20, 7, 45, 0).unwrap()),
            rules: None,
            nearby_places: None,
            coordinates: Some(Coordinates {
                lat: 17.4483,
                lng: 78.3915,
            }),
        },
    ]
}

/// Fallback lookup keyed by a numeric parse of the requested id ("1" maps to
/// the first fixture). Non-numeric or out-of-range keys yield nothing.
pub fn fixture_by_numeric_id(id: &str) -> Option<Listing> {
    let n: usize = id.trim().parse().ok()?;
    if n == 0 {
        return None;
    }
    fixture_listings().into_iter().nth(n - 1)
}
