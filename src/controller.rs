// src/controller.rs
//
// State behind the detail page. One controller is built per request with its
// collaborators passed in explicitly (data source, auth flag, notifier), so
// router code stays thin and the whole thing is drivable from tests.

use crate::domain::format_listing;
use crate::domain::view_model::ListingView;
use crate::errors::ServerError;
use crate::sources::ListingSource;

/// Fixed user-facing message for any failed fetch; callers never learn
/// whether it was a 400, 404 or 500.
pub const FETCH_FAILED_MSG: &str = "Failed to load PG details";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Error,
}

/// Transient user-facing notification sink.
pub trait Notifier {
    fn notify(&mut self, message: &str, kind: ToastKind);
}

/// Collects toasts so the router can render them as fragments.
#[derive(Default)]
pub struct ToastBuffer {
    pub toasts: Vec<(String, ToastKind)>,
}

impl Notifier for ToastBuffer {
    fn notify(&mut self, message: &str, kind: ToastKind) {
        self.toasts.push((message.to_string(), kind));
    }
}

pub struct DetailController<'a> {
    source: &'a dyn ListingSource,
    fallback: Option<&'a dyn ListingSource>,
    is_authenticated: bool,

    pub loading: bool,
    pub error: Option<&'static str>,
    pub data: Option<ListingView>,

    pub current_image_index: usize,
    pub saved: bool,
    pub show_auth_modal: bool,
    pub show_booking_form: bool,
    pub review_text: String,
}

impl<'a> DetailController<'a> {
    /// `fallback` is the development-mode fixture source; production passes
    /// `None` and failed fetches stay failed.
    pub fn new(
        source: &'a dyn ListingSource,
        fallback: Option<&'a dyn ListingSource>,
        is_authenticated: bool,
    ) -> Self {
        Self {
            source,
            fallback,
            is_authenticated,
            loading: true,
            error: None,
            data: None,
            current_image_index: 0,
            saved: false,
            show_auth_modal: false,
            show_booking_form: false,
            review_text: String::new(),
        }
    }

    /// One fetch cycle for the given id. Replaces any prior view model
    /// wholesale; there is no retry and no partial state.
    pub fn load(&mut self, id: &str) {
        self.loading = true;
        self.error = None;

        match self.source.fetch(id) {
            Ok(record) => {
                self.data = Some(format_listing(&record));
            }
            Err(err) => {
                self.error = Some(FETCH_FAILED_MSG);
                if let ServerError::DbError(msg) = &err {
                    eprintln!("detail fetch failed for {id}: {msg}");
                }
                if let Some(fallback) = self.fallback {
                    if let Ok(record) = fallback.fetch(id) {
                        self.data = Some(format_listing(&record));
                    }
                }
            }
        }

        self.loading = false;
    }

    fn image_count(&self) -> usize {
        // The formatter guarantees at least one image on any loaded view.
        self.data.as_ref().map(|d| d.images.len()).unwrap_or(1)
    }

    pub fn next_image(&mut self) {
        self.current_image_index = (self.current_image_index + 1) % self.image_count();
    }

    pub fn prev_image(&mut self) {
        let count = self.image_count();
        self.current_image_index = (self.current_image_index + count - 1) % count;
    }

    pub fn select_image(&mut self, index: usize) {
        if index < self.image_count() {
            self.current_image_index = index;
        }
    }

    /// Gate shared by every action that needs a signed-in user: when the
    /// auth flag is off, the auth-required modal opens and nothing else
    /// happens.
    fn require_auth(&mut self) -> bool {
        if !self.is_authenticated {
            self.show_auth_modal = true;
            return false;
        }
        true
    }

    pub fn toggle_save(&mut self, notifier: &mut dyn Notifier) {
        if !self.require_auth() {
            return;
        }
        self.saved = !self.saved;
        if self.saved {
            notifier.notify("Saved to your favourites", ToastKind::Success);
        } else {
            notifier.notify("Removed from your favourites", ToastKind::Info);
        }
    }

    pub fn book_now(&mut self, notifier: &mut dyn Notifier) {
        if !self.require_auth() {
            return;
        }
        self.show_booking_form = true;
        notifier.notify("Review your booking below", ToastKind::Info);
    }

    pub fn contact_owner(&mut self, notifier: &mut dyn Notifier) {
        if !self.require_auth() {
            return;
        }
        let contact = self
            .data
            .as_ref()
            .map(|d| d.owner_contact.clone())
            .unwrap_or_default();
        notifier.notify(&format!("Owner contact: {contact}"), ToastKind::Success);
    }

    pub fn set_review_text(&mut self, text: &str) {
        self.review_text = text.to_string();
    }

    pub fn submit_review(&mut self, notifier: &mut dyn Notifier) {
        if !self.require_auth() {
            return;
        }
        if self.review_text.trim().is_empty() {
            notifier.notify("Please write a review first", ToastKind::Error);
            return;
        }
        notifier.notify("Review submitted", ToastKind::Success);
        self.review_text.clear();
    }
}
