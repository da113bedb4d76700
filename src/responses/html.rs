use crate::responses::errors::no_cache;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use maud::Markup;

/// Full page response. Detail pages are fetched fresh every time, so every
/// HTML response carries the no-cache set too.
pub fn html_response(markup: Markup) -> ResultResp {
    let body = markup.into_string();

    let resp = no_cache(ResponseBuilder::new().status(200))
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(body))
        .unwrap();

    Ok(resp)
}

/// htmx fragment: same headers, but semantically a partial swap target.
pub fn html_fragment_response(markup: Markup) -> ResultResp {
    html_response(markup)
}

/// Embedded static asset (stylesheet, placeholder image). These are the one
/// thing we do let the browser cache.
pub fn asset_response(content_type: &str, body: &str) -> ResultResp {
    let resp = ResponseBuilder::new()
        .status(200)
        .header("Content-Type", content_type)
        .header("Cache-Control", "public, max-age=3600")
        .body(Body::from(body.to_string()))
        .unwrap();

    Ok(resp)
}
