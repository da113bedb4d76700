pub mod errors;
pub mod html;
pub mod json;

pub use errors::{error_to_response, json_error_response, ResultResp};
pub use html::{asset_response, html_fragment_response, html_response};
pub use json::json_response;
