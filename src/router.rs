use crate::auth::sessions::{load_user_from_session, session_token_from_cookie};
use crate::config::Mode;
use crate::controller::{DetailController, ToastBuffer};
use crate::db::listings;
use crate::db::Database;
use crate::domain::ids::is_valid_listing_id;
use crate::errors::ServerError;
use crate::responses::{
    asset_response, html_fragment_response, html_response, json_error_response, json_response,
};
use crate::responses::ResultResp;
use crate::sources::{DbSource, FixtureSource, ListingSource};
use crate::templates;
use crate::templates::components::gallery;
use astra::Request;
use maud::html;
use std::time::{SystemTime, UNIX_EPOCH};

pub fn handle(mut req: Request, db: &Database, mode: Mode) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => home(db, &req),
        ("GET", "/login") => html_response(templates::pages::login_page()),

        ("GET", "/static/main.css") => {
            asset_response(mime::TEXT_CSS.as_ref(), include_str!("../static/main.css"))
        }
        ("GET", "/static/img/pg-placeholder.svg") => asset_response(
            mime::IMAGE_SVG.as_ref(),
            include_str!("../static/img/pg-placeholder.svg"),
        ),

        ("GET", p) if p.starts_with("/api/pg/") => {
            let id = &p["/api/pg/".len()..];
            api_get_pg(db, id)
        }

        ("GET", p) if p.starts_with("/pg/") => {
            let rest = &p["/pg/".len()..];
            let segments: Vec<&str> = rest.split('/').collect();
            match segments.as_slice() {
                [id] => detail(db, mode, &req, id),
                [id, "gallery"] => gallery_fragment(db, mode, &req, id),
                _ => Err(ServerError::NotFound),
            }
        }

        ("POST", p) if p.starts_with("/pg/") => {
            let rest = &p["/pg/".len()..];
            let segments: Vec<&str> = rest.split('/').collect();
            match segments.as_slice() {
                [id, action] => {
                    let id = id.to_string();
                    let action = action.to_string();
                    detail_action(db, mode, &mut req, &id, &action)
                }
                _ => Err(ServerError::NotFound),
            }
        }

        _ => Err(ServerError::NotFound),
    }
}

// ---------- API ----------

/// GET /api/pg/{id}: the point-lookup endpoint. Every outcome, success or
/// not, leaves here as a JSON response with caching disabled; internal
/// failure detail never reaches the caller.
fn api_get_pg(db: &Database, id: &str) -> ResultResp {
    match fetch_listing_doc(db, id) {
        Ok(doc) => json_response(200, doc),
        Err(err) => Ok(json_error_response(&err)),
    }
}

fn fetch_listing_doc(db: &Database, id: &str) -> Result<String, ServerError> {
    // Connection first: an unreachable store is a 500 no matter what the
    // id looks like.
    db.with_conn(|_conn| Ok(()))?;

    if !is_valid_listing_id(id) {
        return Err(ServerError::BadRequest("Invalid PG ID format".into()));
    }

    listings::find_doc_by_id(db, id)?.ok_or(ServerError::NotFound)
}

// ---------- Pages ----------

fn home(db: &Database, req: &Request) -> ResultResp {
    let is_auth = is_authenticated(db, req);
    let summaries = listings::list_summaries(db)?;
    html_response(templates::pages::home_page(&summaries, is_auth))
}

fn build_controller<'a>(
    db_source: &'a DbSource,
    fixtures: &'a FixtureSource,
    mode: Mode,
    is_auth: bool,
) -> DetailController<'a> {
    let fallback: Option<&dyn ListingSource> = match mode {
        Mode::Development => Some(fixtures),
        Mode::Production => None,
    };
    DetailController::new(db_source, fallback, is_auth)
}

fn detail(db: &Database, mode: Mode, req: &Request, id: &str) -> ResultResp {
    let is_auth = is_authenticated(db, req);
    let db_source = DbSource::new(db.clone());
    let fixtures = FixtureSource;

    let mut controller = build_controller(&db_source, &fixtures, mode, is_auth);
    controller.load(id);

    if let Some(img) = parse_query(req).get("img").and_then(|v| v.parse().ok()) {
        controller.select_image(img);
    }

    html_response(templates::pages::detail_page(&controller, is_auth))
}

fn gallery_fragment(db: &Database, mode: Mode, req: &Request, id: &str) -> ResultResp {
    let is_auth = is_authenticated(db, req);
    let db_source = DbSource::new(db.clone());
    let fixtures = FixtureSource;

    let mut controller = build_controller(&db_source, &fixtures, mode, is_auth);
    controller.load(id);

    if let Some(img) = parse_query(req).get("img").and_then(|v| v.parse().ok()) {
        controller.select_image(img);
    }

    match &controller.data {
        Some(view) => {
            html_fragment_response(gallery(&view.id, &view.images, controller.current_image_index))
        }
        None => Err(ServerError::NotFound),
    }
}

/// POST /pg/{id}/{save|book|contact|review}: the gated in-page actions.
/// Signed out, every one of them answers with the auth-required modal and
/// changes nothing; signed in, with the action's toast fragment.
fn detail_action(
    db: &Database,
    mode: Mode,
    req: &mut Request,
    id: &str,
    action: &str,
) -> ResultResp {
    let is_auth = is_authenticated(db, req);
    let db_source = DbSource::new(db.clone());
    let fixtures = FixtureSource;

    let mut controller = build_controller(&db_source, &fixtures, mode, is_auth);
    controller.load(id);
    if controller.data.is_none() {
        return Err(ServerError::NotFound);
    }

    let mut toasts = ToastBuffer::default();
    match action {
        "save" => controller.toggle_save(&mut toasts),
        "book" => controller.book_now(&mut toasts),
        "contact" => controller.contact_owner(&mut toasts),
        "review" => {
            let form = parse_form(req);
            controller.set_review_text(form.get("review").map(String::as_str).unwrap_or(""));
            controller.submit_review(&mut toasts);
        }
        _ => return Err(ServerError::NotFound),
    }

    if controller.show_auth_modal {
        return html_fragment_response(templates::auth_modal());
    }

    let view = match &controller.data {
        Some(view) => view,
        None => return Err(ServerError::NotFound),
    };
    html_fragment_response(html! {
        @for (message, kind) in &toasts.toasts {
            (templates::toast(message, *kind))
        }
        @if controller.show_booking_form {
            (crate::templates::components::booking_panel(view))
        }
    })
}

// ---------- Request helpers ----------

/// Resolve the session cookie to the auth flag. Any session-layer hiccup
/// counts as signed out rather than failing the page.
fn is_authenticated(db: &Database, req: &Request) -> bool {
    let token = match req
        .headers()
        .get("Cookie")
        .and_then(|v| v.to_str().ok())
        .and_then(session_token_from_cookie)
    {
        Some(t) => t.to_string(),
        None => return false,
    };

    let now = now_unix();
    db.with_conn(|conn| load_user_from_session(conn, &token, now))
        .ok()
        .flatten()
        .is_some()
}

fn now_unix() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

fn parse_query(req: &Request) -> std::collections::HashMap<String, String> {
    req.uri()
        .query()
        .map(parse_urlencoded)
        .unwrap_or_default()
}

/// Read and parse an `application/x-www-form-urlencoded` body.
fn parse_form(req: &mut Request) -> std::collections::HashMap<String, String> {
    use std::io::Read;

    let mut bytes = Vec::new();
    if req.body_mut().reader().read_to_end(&mut bytes).is_err() {
        return Default::default();
    }
    match String::from_utf8(bytes) {
        Ok(text) => parse_urlencoded(&text),
        Err(_) => Default::default(),
    }
}

fn parse_urlencoded(input: &str) -> std::collections::HashMap<String, String> {
    let mut map = std::collections::HashMap::new();
    for pair in input.split('&') {
        let mut parts = pair.splitn(2, '=');
        if let (Some(k), Some(v)) = (parts.next(), parts.next()) {
            map.insert(urldecode(k), urldecode(v));
        }
    }
    map
}

fn urldecode(input: &str) -> String {
    let mut out = Vec::with_capacity(input.len());
    let bytes = input.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' => {
                let hex = bytes.get(i + 1..i + 3);
                match hex.and_then(|h| std::str::from_utf8(h).ok()) {
                    Some(h) => match u8::from_str_radix(h, 16) {
                        Ok(b) => {
                            out.push(b);
                            i += 3;
                        }
                        Err(_) => {
                            out.push(b'%');
                            i += 1;
                        }
                    },
                    None => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}
