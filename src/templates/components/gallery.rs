use maud::{html, Markup};

/// Image carousel fragment. Prev/next/thumbnail controls re-request this
/// fragment with a different index, so the whole thing swaps in place.
pub fn gallery(listing_id: &str, images: &[String], index: usize) -> Markup {
    let count = images.len();
    let index = if index < count { index } else { 0 };
    let prev = (index + count - 1) % count;
    let next = (index + 1) % count;

    html! {
        div id="gallery" class="gallery" {
            div class="gallery-main" {
                img src=(images[index]) alt="PG photo";
                @if count > 1 {
                    button
                        class="gallery-nav gallery-prev"
                        hx-get=(format!("/pg/{listing_id}/gallery?img={prev}"))
                        hx-target="#gallery"
                        hx-swap="outerHTML"
                    { "\u{2039}" }
                    button
                        class="gallery-nav gallery-next"
                        hx-get=(format!("/pg/{listing_id}/gallery?img={next}"))
                        hx-target="#gallery"
                        hx-swap="outerHTML"
                    { "\u{203A}" }
                }
            }
            @if count > 1 {
                div class="gallery-thumbs" {
                    @for (i, img) in images.iter().enumerate() {
                        button
                            class=(if i == index { "thumb thumb-active" } else { "thumb" })
                            hx-get=(format!("/pg/{listing_id}/gallery?img={i}"))
                            hx-target="#gallery"
                            hx-swap="outerHTML"
                        {
                            img src=(img) alt=(format!("photo {}", i + 1));
                        }
                    }
                }
            }
        }
    }
}
