// templates/pages/home.rs

use crate::domain::listing::ListingSummary;
use crate::domain::view_model::PLACEHOLDER_IMAGE;
use crate::templates::components::rating_badge;
use crate::templates::desktop_layout;
use maud::{html, Markup};

/// The listing index: one card per PG, each linking to its detail page.
/// Also the "go back" target whenever a detail page fails to load.
pub fn home_page(summaries: &[ListingSummary], is_authenticated: bool) -> Markup {
    desktop_layout(
        "All PGs",
        is_authenticated,
        html! {
            main class="container" {
                h1 { "Find your next PG" }

                @if summaries.is_empty() {
                    p class="empty-note" { "No PGs listed yet. Check back soon." }
                }

                div class="card-grid" {
                    @for s in summaries {
                        a class="pg-card" href=(format!("/pg/{}", s.id)) {
                            img src=(s.cover_image.as_deref().unwrap_or(PLACEHOLDER_IMAGE))
                                alt=(s.name);
                            div class="pg-card-body" {
                                h3 { (s.name) }
                                p class="pg-card-city" { (s.city) }
                                p class="pg-card-meta" {
                                    span class="price" { "\u{20B9}" (s.price) "/mo" }
                                    " \u{00B7} " (s.room_type)
                                }
                                (rating_badge(s.rating))
                            }
                        }
                    }
                }
            }
        },
    )
}
