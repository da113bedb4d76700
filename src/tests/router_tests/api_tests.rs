// src/tests/router_tests/api_tests.rs

use crate::config::Mode;
use crate::db::connection::Database;
use crate::router::handle;
use crate::tests::utils::{body_string, make_db, make_request, make_seeded_db};
use http::Method;

const SEEDED_ID: &str = "64f1a2b3c4d5e6f7a8b9c0d1";

#[test]
fn known_id_returns_raw_document() {
    let db = make_seeded_db("api_hit");

    let req = make_request(Method::GET, &format!("/api/pg/{SEEDED_ID}"), None, None);
    let mut resp = handle(req, &db, Mode::Production).unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "application/json"
    );

    let body: serde_json::Value = serde_json::from_str(&body_string(&mut resp)).unwrap();
    assert_eq!(body["id"], SEEDED_ID);
    assert_eq!(body["name"], "Green Nest PG");
    assert_eq!(body["price"], 8500);
    // Raw document, not the view model: no icons, no synthetic room types.
    assert!(body.get("roomTypes").is_none());
}

#[test]
fn responses_disable_caching() {
    let db = make_seeded_db("api_nocache");

    let req = make_request(Method::GET, &format!("/api/pg/{SEEDED_ID}"), None, None);
    let resp = handle(req, &db, Mode::Production).unwrap();

    assert_eq!(
        resp.headers().get("Cache-Control").unwrap(),
        "no-cache, no-store, must-revalidate"
    );
    assert_eq!(resp.headers().get("Pragma").unwrap(), "no-cache");
    assert_eq!(resp.headers().get("Expires").unwrap(), "0");
}

#[test]
fn valid_but_absent_id_is_404() {
    let db = make_seeded_db("api_missing");

    let req = make_request(
        Method::GET,
        "/api/pg/000000000000000000000000",
        None,
        None,
    );
    let mut resp = handle(req, &db, Mode::Production).unwrap();

    assert_eq!(resp.status(), 404);
    let body: serde_json::Value = serde_json::from_str(&body_string(&mut resp)).unwrap();
    assert_eq!(body["error"], "PG not found");
}

#[test]
fn malformed_id_is_400() {
    let db = make_seeded_db("api_badid");

    for bad in ["not-a-valid-id", "1234", "64f1a2b3c4d5e6f7a8b9c0dg"] {
        let req = make_request(Method::GET, &format!("/api/pg/{bad}"), None, None);
        let mut resp = handle(req, &db, Mode::Production).unwrap();

        assert_eq!(resp.status(), 400, "id {bad:?} should be rejected");
        let body: serde_json::Value = serde_json::from_str(&body_string(&mut resp)).unwrap();
        assert_eq!(body["error"], "Invalid PG ID format");
    }
}

#[test]
fn connection_failure_is_500_even_for_bad_ids() {
    // A database file inside a directory that does not exist cannot be
    // opened, which is the closest stand-in for an unreachable store.
    let db = Database::new("/nonexistent-pg-finder-dir/pg.sqlite3");

    for id in [SEEDED_ID, "not-a-valid-id"] {
        let req = make_request(Method::GET, &format!("/api/pg/{id}"), None, None);
        let mut resp = handle(req, &db, Mode::Production).unwrap();

        assert_eq!(resp.status(), 500);
        let body: serde_json::Value = serde_json::from_str(&body_string(&mut resp)).unwrap();
        assert_eq!(body["error"], "Database connection failed");
    }
}

#[test]
fn empty_id_segment_is_400() {
    let db = make_db("api_empty");

    let req = make_request(Method::GET, "/api/pg/", None, None);
    let resp = handle(req, &db, Mode::Production).unwrap();
    assert_eq!(resp.status(), 400);
}
