use crate::auth::sessions::create_session;
use crate::db::connection::{init_db, Database};
use crate::db::listings::upsert_listing;
use crate::db::users::get_or_create_user;
use crate::domain::fixtures::fixture_listings;
use crate::errors::ServerError;
use astra::{Body, Request};
use http::Method;
use std::io::Read;
use std::time::{SystemTime, UNIX_EPOCH};

/// Fresh throwaway DB initialized from the production schema.
pub fn make_db(label: &str) -> Database {
    let path = std::env::temp_dir().join(format!(
        "pg_finder_{label}_{}.sqlite",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    let db = Database::new(path);
    init_db(&db, "sql/schema.sql").expect("Failed to initialize DB");
    db
}

/// Same, but pre-loaded with the fixture listings.
pub fn make_seeded_db(label: &str) -> Database {
    let db = make_db(label);
    db.with_conn(|conn| {
        for listing in fixture_listings() {
            upsert_listing(conn, &listing)?;
        }
        Ok(())
    })
    .expect("Failed to seed fixtures");
    db
}

pub fn now_unix() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs() as i64
}

/// Mint a user + session and return the raw session token.
pub fn make_session(db: &Database, email: &str) -> String {
    db.with_conn(|conn| {
        let user_id = get_or_create_user(conn, email, now_unix())?;
        let token = create_session(conn, user_id, now_unix())?;
        Ok::<_, ServerError>(token)
    })
    .expect("Failed to create session")
}

/// Build a request for the router. `session` adds the auth cookie, `form`
/// adds an urlencoded body.
pub fn make_request(
    method: Method,
    uri: &str,
    session: Option<&str>,
    form: Option<&str>,
) -> Request {
    let body = match form {
        Some(text) => Body::from(text.to_string()),
        None => Body::empty(),
    };

    let mut req = Request::new(body);
    *req.method_mut() = method;
    *req.uri_mut() = uri.parse().unwrap();

    if let Some(token) = session {
        req.headers_mut().insert(
            "Cookie",
            format!("session={token}").parse().unwrap(),
        );
    }
    if form.is_some() {
        req.headers_mut().insert(
            "Content-Type",
            "application/x-www-form-urlencoded".parse().unwrap(),
        );
    }

    req
}

/// Drain a response body to a string.
pub fn body_string(resp: &mut astra::Response) -> String {
    let mut bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut bytes)
        .expect("Failed to read body");
    String::from_utf8(bytes).expect("Body was not UTF-8")
}
