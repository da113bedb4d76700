use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, is_authenticated: bool, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - PG Finder" }
                link rel="stylesheet" href="/static/main.css";
                script src="https://unpkg.com/htmx.org@1.9.12" defer {}
            }
            body {
                header class="site-header" {
                    a href="/" class="brand" {
                        span class="brand-mark" { "\u{1F3E0}" }
                        " PG Finder"
                    }
                    nav {
                        ul {
                            li { a href="/" { "All PGs" } }
                        }
                    }
                    @if is_authenticated {
                        span class="signed-in" { "Signed in" }
                    } @else {
                        span class="signed-out" { "Browsing as guest" }
                    }
                }
                (content)
            }
        }
    }
}
