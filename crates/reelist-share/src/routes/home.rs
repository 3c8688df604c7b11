//! Landing page explaining what this service is for.

use axum::extract::State;
use axum::response::IntoResponse;
use maud::{DOCTYPE, PreEscaped, html};

use crate::render::components::PAGE_CSS;
use crate::state::AppState;

/// Render the landing page.
pub async fn home_page(State(state): State<AppState>) -> impl IntoResponse {
    let site_name = &state.config.site_name;

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (site_name) " — Shared Playlists" }
                meta name="description" content="Resolves shared playlist links into previews and redirects.";
                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                main {
                    h1 class="home-title" { (site_name) }
                    p class="home-tagline" {
                        "Shared playlist links live here. Open one and you'll be "
                        "taken straight to the playlist."
                    }
                    p class="home-example" {
                        (state.config.base_url) "/s/" span { "{code}" }
                    }
                }
            }
        }
    }
}
