// src/tests/router_tests/page_tests.rs

use crate::config::Mode;
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, make_request, make_seeded_db};
use http::Method;

const SEEDED_ID: &str = "64f1a2b3c4d5e6f7a8b9c0d1";

#[test]
fn index_lists_every_seeded_pg() {
    let db = make_seeded_db("page_index");

    let req = make_request(Method::GET, "/", None, None);
    let mut resp = handle(req, &db, Mode::Production).unwrap();

    assert_eq!(resp.status(), 200);
    let body = body_string(&mut resp);
    assert!(body.contains("Green Nest PG"));
    assert!(body.contains("Sunrise Comforts"));
    assert!(body.contains("Lakeview Ladies PG"));
}

#[test]
fn detail_page_renders_full_view() {
    let db = make_seeded_db("page_detail");

    let req = make_request(Method::GET, &format!("/pg/{SEEDED_ID}"), None, None);
    let mut resp = handle(req, &db, Mode::Production).unwrap();

    assert_eq!(resp.status(), 200);
    let body = body_string(&mut resp);

    assert!(body.contains("Green Nest PG"));
    assert!(body.contains("8500"));
    assert!(body.contains("Mrs. Lakshmi Rao"));
    assert!(body.contains("WiFi"));
    assert!(body.contains("Visitors allowed until 8:00 PM"));
    // Reviews carry their 1-based display index.
    assert!(body.contains("1. Asha"));
    assert!(body.contains("2. Rahul"));
    // Exactly one room type row, availability hardcoded at 2.
    assert!(body.contains("Double Sharing"));
    assert!(body.contains("2 beds"));
    assert!(body.contains("openstreetmap.org"));
}

#[test]
fn detail_page_applies_formatter_defaults() {
    let db = make_seeded_db("page_defaults");

    // Fixture #2 has no owner name, a broken image ref and a zero rating.
    let req = make_request(
        Method::GET,
        "/pg/64f1a2b3c4d5e6f7a8b9c0d2",
        None,
        None,
    );
    let mut resp = handle(req, &db, Mode::Production).unwrap();

    let body = body_string(&mut resp);
    assert!(body.contains("Property Owner"));
    assert!(body.contains("/static/img/pg-placeholder.svg"));
    assert!(!body.contains("relative/path/broken.jpg"));
    assert!(body.contains("4.0")); // defaulted rating
    assert!(body.contains("Pune Metro Station - 1.2 km"));
    assert!(body.contains("No smoking inside the premises"));
}

#[test]
fn failed_load_shows_error_panel_with_back_action() {
    let db = make_seeded_db("page_error");

    let req = make_request(
        Method::GET,
        "/pg/000000000000000000000000",
        None,
        None,
    );
    let mut resp = handle(req, &db, Mode::Production).unwrap();

    assert_eq!(resp.status(), 200);
    let body = body_string(&mut resp);
    assert!(body.contains("Failed to load PG details"));
    assert!(body.contains("href=\"/\""));
    assert!(!body.contains("Green Nest PG"));
}

#[test]
fn development_mode_falls_back_to_fixtures() {
    let db = make_seeded_db("page_fallback");

    // "2" is not a store id, so the lookup fails; in development the
    // fixture dataset answers by numeric key instead.
    let req = make_request(Method::GET, "/pg/2", None, None);
    let mut resp = handle(req, &db, Mode::Development).unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains("Sunrise Comforts"));

    // Production mode keeps the failure.
    let req = make_request(Method::GET, "/pg/2", None, None);
    let mut resp = handle(req, &db, Mode::Production).unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains("Failed to load PG details"));
    assert!(!body.contains("Sunrise Comforts"));
}

#[test]
fn gallery_fragment_selects_requested_image() {
    let db = make_seeded_db("page_gallery");

    let req = make_request(
        Method::GET,
        &format!("/pg/{SEEDED_ID}/gallery?img=1"),
        None,
        None,
    );
    let mut resp = handle(req, &db, Mode::Production).unwrap();

    assert_eq!(resp.status(), 200);
    let body = body_string(&mut resp);
    assert!(body.contains("id=\"gallery\""));
    assert!(body.contains("green-nest/room.jpg"));
    assert!(body.contains("img=2")); // next link wraps forward
    assert!(body.contains("img=0")); // prev link wraps back
}

#[test]
fn unknown_routes_are_not_found() {
    let db = make_seeded_db("page_404");

    let req = make_request(Method::GET, "/definitely/not/here", None, None);
    match handle(req, &db, Mode::Production) {
        Err(ServerError::NotFound) => {}
        Err(other) => panic!("expected NotFound, got {other}"),
        Ok(_) => panic!("expected NotFound, got a response"),
    }
}

#[test]
fn stylesheet_is_served() {
    let db = make_seeded_db("page_css");

    let req = make_request(Method::GET, "/static/main.css", None, None);
    let mut resp = handle(req, &db, Mode::Production).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers().get("Content-Type").unwrap(), "text/css");
    assert!(body_string(&mut resp).contains(".gallery"));
}
