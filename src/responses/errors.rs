use crate::errors::ServerError;
use astra::{Body, Response, ResponseBuilder};

pub type ResultResp = Result<Response, ServerError>;

/// Stamp the header set that disables caching at every layer between us and
/// the browser.
pub fn no_cache(builder: ResponseBuilder) -> ResponseBuilder {
    builder
        .header("Cache-Control", "no-cache, no-store, must-revalidate")
        .header("Pragma", "no-cache")
        .header("Expires", "0")
}

/// Convert a ServerError into an HTML error page (page routes).
pub fn error_to_response(err: ServerError) -> Response {
    match err {
        ServerError::NotFound => html_error_response(404, "Not Found"),
        ServerError::BadRequest(msg) => html_error_response(400, &msg),
        ServerError::DbError(msg) => html_error_response(500, &msg),
        ServerError::InternalError => html_error_response(500, "Internal Server Error"),
    }
}

/// Convert a ServerError into the API's `{"error": ...}` body. Fixed
/// messages only; internal detail stays on the server.
pub fn json_error_response(err: &ServerError) -> Response {
    let (status, message) = match err {
        ServerError::NotFound => (404, "PG not found"),
        ServerError::BadRequest(_) => (400, "Invalid PG ID format"),
        ServerError::DbError(_) => (500, "Database connection failed"),
        ServerError::InternalError => (500, "Failed to fetch PG details"),
    };

    let body = serde_json::json!({ "error": message }).to_string();

    no_cache(ResponseBuilder::new().status(status))
        .header("Content-Type", mime::APPLICATION_JSON.as_ref())
        .body(Body::from(body))
        .unwrap_or_else(|_| Response::new(Body::from("{\"error\":\"Internal Server Error\"}")))
}

/// Build an HTML error page
pub fn html_error_response(status: u16, message: &str) -> Response {
    let html = format!(
        "<!DOCTYPE html>
        <html lang=\"en\">
        <head><meta charset=\"utf-8\"><title>Error {status}</title></head>
        <body>
            <h1>Error {status}</h1>
            <p>{message}</p>
            <p><a href=\"/\">Back to all PGs</a></p>
        </body>
        </html>"
    );

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(html))
        .unwrap()
}
