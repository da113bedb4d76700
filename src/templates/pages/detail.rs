// templates/pages/detail.rs

use crate::controller::DetailController;
use crate::domain::view_model::ListingView;
use crate::templates::components::{booking_panel, card, gallery};
use crate::templates::desktop_layout;
use maud::{html, Markup};

/// The detail page renders exactly one of the controller's terminal states:
/// spinner, error panel, or the full view. A view model produced by the
/// development fallback still counts as the full view.
pub fn detail_page(c: &DetailController, is_authenticated: bool) -> Markup {
    if c.loading {
        return desktop_layout("Loading", is_authenticated, loading_panel());
    }

    match &c.data {
        Some(view) => desktop_layout(&view.name, is_authenticated, full_view(view, c)),
        None => desktop_layout("Something went wrong", is_authenticated, error_panel()),
    }
}

fn loading_panel() -> Markup {
    html! {
        main class="container center" {
            div class="spinner" {}
            p { "Loading PG details..." }
        }
    }
}

fn error_panel() -> Markup {
    html! {
        main class="container center" {
            h1 { "Failed to load PG details" }
            p { "The listing could not be loaded right now." }
            a class="btn btn-primary" href="/" { "Back to all PGs" }
        }
    }
}

fn full_view(view: &ListingView, c: &DetailController) -> Markup {
    html! {
        main class="container detail" {
            div id="feedback" {}

            header class="detail-header" {
                div {
                    h1 { (view.name) }
                    p class="detail-location" { "\u{1F4CD} " (view.location) }
                }
                div class="detail-header-actions" {
                    span class="rating-badge" { "\u{2605} " (format!("{:.1}", view.rating)) }
                    button
                        class=(if c.saved { "btn btn-saved" } else { "btn btn-save" })
                        hx-post=(format!("/pg/{}/save", view.id))
                        hx-target="#feedback"
                        hx-swap="innerHTML"
                    {
                        @if c.saved { "\u{2665} Saved" } @else { "\u{2661} Save" }
                    }
                }
            }

            (gallery(&view.id, &view.images, c.current_image_index))

            div class="detail-columns" {
                div class="detail-main" {
                    (card("About this PG", html! {
                        p { (view.description) }
                        p class="detail-tags" {
                            span class="tag" { (view.gender) }
                            span class="tag" { (view.room_types[0].label) }
                        }
                    }))

                    (card("Amenities", html! {
                        ul class="amenities" {
                            @for amenity in &view.amenities {
                                li {
                                    span class="amenity-icon" { (amenity.icon) }
                                    " " (amenity.label)
                                }
                            }
                        }
                    }))

                    (card("Room & pricing", html! {
                        table class="pricing" {
                            thead {
                                tr { th { "Room type" } th { "Rent / month" } th { "Available" } }
                            }
                            tbody {
                                @for room in &view.room_types {
                                    tr {
                                        td { (room.label) }
                                        td { "\u{20B9}" (room.price) }
                                        td { (room.available) " beds" }
                                    }
                                }
                            }
                        }
                        button
                            class="btn btn-primary"
                            hx-post=(format!("/pg/{}/book", view.id))
                            hx-target="#feedback"
                            hx-swap="innerHTML"
                        { "Book Now" }
                        @if c.show_booking_form {
                            (booking_panel(view))
                        }
                    }))

                    (card("House rules", html! {
                        ul {
                            @for rule in &view.rules {
                                li { (rule) }
                            }
                        }
                    }))

                    (card("Reviews", html! {
                        @if view.reviews.is_empty() {
                            p class="empty-note" { "No reviews yet." }
                        }
                        @for review in &view.reviews {
                            div class="review" {
                                p class="review-head" {
                                    strong { (review.index) ". " (review.user_name) }
                                    " \u{2605} " (format!("{:.1}", review.rating))
                                    span class="review-date" { " \u{00B7} " (review.date) }
                                }
                                p { (review.comment) }
                            }
                        }
                        form
                            hx-post=(format!("/pg/{}/review", view.id))
                            hx-target="#feedback"
                            hx-swap="innerHTML"
                        {
                            textarea name="review" rows="3"
                                placeholder="Share your experience..." { (c.review_text) }
                            button type="submit" class="btn btn-secondary" { "Submit review" }
                        }
                    }))
                }

                aside class="detail-side" {
                    (card("Location", html! {
                        p { (view.address) ", " (view.city) }
                        iframe
                            class="map-embed"
                            title=(view.name)
                            src=(map_embed_url(view.coordinates.lat, view.coordinates.lng))
                            loading="lazy" {}
                        h4 { "Nearby" }
                        ul {
                            @for place in &view.nearby_places {
                                li { (place) }
                            }
                        }
                    }))

                    (card("Owner", html! {
                        p class="owner-name" { (view.owner_name) }
                        p { "Responds " (view.response_time) }
                        p { "Member since " (view.member_since) }
                        button
                            class="btn btn-secondary"
                            hx-post=(format!("/pg/{}/contact", view.id))
                            hx-target="#feedback"
                            hx-swap="innerHTML"
                        { "Contact owner" }
                    }))
                }
            }
        }
    }
}

fn map_embed_url(lat: f64, lng: f64) -> String {
    let d = 0.01;
    format!(
        "https://www.openstreetmap.org/export/embed.html?bbox={:.4}%2C{:.4}%2C{:.4}%2C{:.4}&layer=mapnik&marker={:.4}%2C{:.4}",
        lng - d,
        lat - d,
        lng + d,
        lat + d,
        lat,
        lng
    )
}
