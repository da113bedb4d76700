// templates/pages/login.rs

use crate::templates::components::card;
use crate::templates::desktop_layout;
use maud::{html, Markup};

/// Placeholder sign-in page. Sessions are issued by the account service;
/// this page only tells the user where to go.
pub fn login_page() -> Markup {
    desktop_layout(
        "Sign in",
        false,
        html! {
            main class="container center" {
                (card("Sign in", html! {
                    p { "Sign-in for PG Finder is handled by the account service." }
                    p { "Once signed in there, come back and your session is picked up automatically." }
                    a class="btn btn-primary" href="/" { "Back to all PGs" }
                }))
            }
        },
    )
}
