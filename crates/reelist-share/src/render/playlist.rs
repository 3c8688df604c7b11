//! Playlist preview document renderer.
//!
//! Renders the page served to automated preview agents. Must produce a
//! complete, well-formed document for any input, including tokens that
//! failed to decode: a generic card is always better than an error page,
//! because share links get truncated by chat clients in the wild.

use maud::{Markup, PreEscaped, html};
use reelist_core::{DEFAULT_NAME, PlaylistSummary};

use super::components::{SocialCard, image_mime, is_safe_url, page_shell, truncate};
use crate::classify;
use crate::config::Config;

/// Meta description used when a token failed to decode.
const FALLBACK_DESCRIPTION: &str = "A playlist of hand-picked videos, shared with you.";

/// Maximum length of the meta description.
const DESCRIPTION_MAX: usize = 200;

/// Render the preview document for a decoded summary (or the generic
/// fallback when decoding failed).
pub fn render(summary: Option<&PlaylistSummary>, canonical_url: &str, config: &Config) -> Markup {
    let title = summary.map_or(DEFAULT_NAME, |s| s.name.as_str());

    let description = match summary {
        Some(s) if !s.description.is_empty() => truncate(&s.description, DESCRIPTION_MAX),
        Some(s) => format!("{} videos · {}", s.item_count, s.category),
        None => FALLBACK_DESCRIPTION.to_string(),
    };

    let image_url = summary
        .map(|s| s.thumbnail.as_str())
        .filter(|thumb| !thumb.is_empty())
        .map(|thumb| resolve_image_url(thumb, &config.base_url))
        .unwrap_or_else(|| format!("{}{}", config.base_url, config.default_image_path));

    let card = SocialCard {
        title,
        description: &description,
        image_url: &image_url,
        image_type: image_mime(&image_url),
        canonical_url,
    };

    // Some preview agents execute script. Re-check the runtime identity
    // against the same signature list and bounce real browsers into the
    // application. The canonical URL is percent-encoded, so it is safe
    // inside a quoted literal.
    let redirect_script = format!(
        "var bots=/{pattern}/i;if(!bots.test(navigator.userAgent)){{window.location.replace(\"{url}\");}}",
        pattern = classify::client_pattern(),
        url = canonical_url,
    );

    let body = html! {
        p class="share-fallback" {
            "View this playlist on " (config.site_name) ": "
            a href=(canonical_url) { (canonical_url) }
        }
        script { (PreEscaped(redirect_script)) }
    };

    page_shell(&card, &config.site_name, body)
}

/// Resolve a payload thumbnail reference to an image URL.
///
/// Absolute http(s) URLs are used as-is; anything else is treated as a
/// path on the application origin.
fn resolve_image_url(thumb: &str, base_url: &str) -> String {
    if is_safe_url(thumb) {
        thumb.to_string()
    } else {
        format!("{}/{}", base_url, thumb.trim_start_matches('/'))
    }
}
