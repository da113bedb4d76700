// src/tests/router_tests/action_tests.rs

use crate::config::Mode;
use crate::router::handle;
use crate::tests::utils::{body_string, make_request, make_seeded_db, make_session};
use http::Method;

const SEEDED_ID: &str = "64f1a2b3c4d5e6f7a8b9c0d1";

#[test]
fn gated_actions_require_sign_in() {
    let db = make_seeded_db("action_guest");

    for action in ["save", "book", "contact", "review"] {
        let req = make_request(
            Method::POST,
            &format!("/pg/{SEEDED_ID}/{action}"),
            None,
            Some("review=hi"),
        );
        let mut resp = handle(req, &db, Mode::Production).unwrap();

        assert_eq!(resp.status(), 200);
        let body = body_string(&mut resp);
        assert!(
            body.contains("Sign in required"),
            "{action} should show the auth modal"
        );
        assert!(!body.contains("toast"));
    }
}

#[test]
fn save_toggles_on_and_toasts() {
    let db = make_seeded_db("action_save");
    let token = make_session(&db, "guest@example.com");

    let req = make_request(
        Method::POST,
        &format!("/pg/{SEEDED_ID}/save"),
        Some(&token),
        None,
    );
    let mut resp = handle(req, &db, Mode::Production).unwrap();

    let body = body_string(&mut resp);
    assert!(body.contains("Saved to your favourites"));
    assert!(body.contains("toast-success"));
    assert!(!body.contains("Sign in required"));
}

#[test]
fn book_now_shows_booking_toast() {
    let db = make_seeded_db("action_book");
    let token = make_session(&db, "booker@example.com");

    let req = make_request(
        Method::POST,
        &format!("/pg/{SEEDED_ID}/book"),
        Some(&token),
        None,
    );
    let mut resp = handle(req, &db, Mode::Production).unwrap();

    let body = body_string(&mut resp);
    assert!(body.contains("Review your booking below"));
}

#[test]
fn contact_owner_reveals_contact() {
    let db = make_seeded_db("action_contact");
    let token = make_session(&db, "renter@example.com");

    let req = make_request(
        Method::POST,
        &format!("/pg/{SEEDED_ID}/contact"),
        Some(&token),
        None,
    );
    let mut resp = handle(req, &db, Mode::Production).unwrap();

    let body = body_string(&mut resp);
    assert!(body.contains("+91 98450 12345"));
}

#[test]
fn review_submission_wants_text() {
    let db = make_seeded_db("action_review");
    let token = make_session(&db, "reviewer@example.com");

    // Blank review is rejected.
    let req = make_request(
        Method::POST,
        &format!("/pg/{SEEDED_ID}/review"),
        Some(&token),
        Some("review=++"),
    );
    let mut resp = handle(req, &db, Mode::Production).unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains("Please write a review first"));
    assert!(body.contains("toast-error"));

    // A real one goes through.
    let req = make_request(
        Method::POST,
        &format!("/pg/{SEEDED_ID}/review"),
        Some(&token),
        Some("review=Great+stay%2C+clean+rooms"),
    );
    let mut resp = handle(req, &db, Mode::Production).unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains("Review submitted"));
    assert!(body.contains("toast-success"));
}

#[test]
fn expired_or_bogus_session_counts_as_signed_out() {
    let db = make_seeded_db("action_badsession");

    let req = make_request(
        Method::POST,
        &format!("/pg/{SEEDED_ID}/save"),
        Some("not-a-real-token"),
        None,
    );
    let mut resp = handle(req, &db, Mode::Production).unwrap();
    assert!(body_string(&mut resp).contains("Sign in required"));
}

#[test]
fn actions_on_missing_listings_are_not_found() {
    let db = make_seeded_db("action_missing");
    let token = make_session(&db, "ghost@example.com");

    let req = make_request(
        Method::POST,
        "/pg/000000000000000000000000/save",
        Some(&token),
        None,
    );
    assert!(handle(req, &db, Mode::Production).is_err());
}
