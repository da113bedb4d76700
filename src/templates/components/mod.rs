use maud::{html, Markup};

pub mod gallery;

pub use gallery::gallery;

use crate::controller::ToastKind;
use crate::domain::view_model::ListingView;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        section class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

/// Transient notification bubble, swapped into the page's #feedback slot.
pub fn toast(message: &str, kind: ToastKind) -> Markup {
    let class = match kind {
        ToastKind::Success => "toast toast-success",
        ToastKind::Info => "toast toast-info",
        ToastKind::Error => "toast toast-error",
    };
    html! {
        div class=(class) role="status" { (message) }
    }
}

/// Shown instead of a toast when a gated action is hit signed out.
pub fn auth_modal() -> Markup {
    html! {
        div class="modal-backdrop" {
            div class="modal" {
                h3 { "Sign in required" }
                p { "Please sign in to book, save or contact owners." }
                div class="modal-actions" {
                    button
                        class="btn btn-secondary"
                        onclick="this.closest('.modal-backdrop').remove()"
                    { "Not now" }
                    a href="/login" class="btn btn-primary" { "Sign in" }
                }
            }
        }
    }
}

pub fn rating_badge(rating: f64) -> Markup {
    html! {
        span class="rating-badge" { "\u{2605} " (format!("{rating:.1}")) }
    }
}

/// Booking summary shown once "Book Now" has been accepted. The actual
/// payment hand-off belongs to the payments provider, not to this page.
pub fn booking_panel(view: &ListingView) -> Markup {
    let room = &view.room_types[0];
    html! {
        div class="booking-panel" {
            h4 { "Booking summary" }
            p { (view.name) " \u{00B7} " (room.label) }
            p { "First month: " strong { "\u{20B9}" (room.price) } }
            p class="empty-note" { "Payment is handled by the payments provider after confirmation." }
        }
    }
}
