pub mod fixtures;
pub mod ids;
pub mod listing;
pub mod view_model;

pub use ids::is_valid_listing_id;
pub use view_model::format_listing;
