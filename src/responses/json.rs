// responses/json.rs
use crate::errors::ServerError;
use crate::responses::errors::no_cache;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};

/// JSON response with downstream caching disabled. `body` is already-encoded
/// JSON text; the point-lookup endpoint passes the stored document through
/// untouched.
pub fn json_response(status: u16, body: String) -> ResultResp {
    let resp = no_cache(ResponseBuilder::new().status(status))
        .header("Content-Type", mime::APPLICATION_JSON.as_ref())
        .body(Body::from(body))
        .map_err(|_| ServerError::InternalError)?;

    Ok(resp)
}
