//! Shared HTML components for the share resolver's pages.

use maud::{Markup, PreEscaped, html};

/// Inline CSS for the preview and landing pages.
pub const PAGE_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
:root{--bg:#fafafa;--fg:#111;--fg2:#555;--accent:#e11d48}
body{font-family:Inter,-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;line-height:1.6;color:var(--fg);background:var(--bg);min-height:100vh;display:flex;flex-direction:column;align-items:center;justify-content:center;padding:1.5rem 1rem;text-align:center}
main{max-width:560px;width:100%}
a{color:var(--accent);text-decoration:none;word-break:break-all}
a:hover{text-decoration:underline}
.share-fallback{color:var(--fg2);font-size:.95rem}
.home-title{font-size:2.5rem;font-weight:800;letter-spacing:-.03em}
.home-tagline{color:var(--fg2);margin-top:.5rem}
.home-example{font-family:ui-monospace,Menlo,monospace;font-size:.85rem;color:var(--fg2);margin-top:1.5rem}
@media(prefers-color-scheme:dark){
:root{--bg:#0a0a0f;--fg:#e5e5e5;--fg2:#a0a0a0;--accent:#fb7185}
}
"#;

/// Standard Open Graph card dimensions, advertised for every preview image.
pub const OG_IMAGE_WIDTH: u32 = 1200;

/// See [`OG_IMAGE_WIDTH`].
pub const OG_IMAGE_HEIGHT: u32 = 630;

/// Social metadata for a preview page.
pub struct SocialCard<'a> {
    /// Page and card title.
    pub title: &'a str,
    /// Meta and card description.
    pub description: &'a str,
    /// Preview image URL.
    pub image_url: &'a str,
    /// MIME type advertised for the preview image.
    pub image_type: &'a str,
    /// Canonical URL the card points at.
    pub canonical_url: &'a str,
}

/// Render the full preview document shell: `<head>` with the robots
/// directive and the complete social tag set, body supplied by the caller.
pub fn page_shell(card: &SocialCard<'_>, site_name: &str, body_content: Markup) -> Markup {
    html! {
        (maud::DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (card.title) }
                meta name="description" content=(card.description);
                meta name="robots" content="noindex";

                // Open Graph
                meta property="og:type" content="website";
                meta property="og:title" content=(card.title);
                meta property="og:description" content=(card.description);
                meta property="og:image" content=(card.image_url);
                meta property="og:image:type" content=(card.image_type);
                meta property="og:image:width" content=(OG_IMAGE_WIDTH);
                meta property="og:image:height" content=(OG_IMAGE_HEIGHT);
                @if card.image_url.starts_with("https://") {
                    meta property="og:image:secure_url" content=(card.image_url);
                }
                meta property="og:url" content=(card.canonical_url);
                meta property="og:site_name" content=(site_name);
                meta property="og:locale" content="en_US";

                // Twitter Card
                meta name="twitter:card" content="summary_large_image";
                meta name="twitter:title" content=(card.title);
                meta name="twitter:description" content=(card.description);
                meta name="twitter:image" content=(card.image_url);

                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                main { (body_content) }
            }
        }
    }
}

/// Check if a URL is safe to use in `src` or `href` attributes.
pub fn is_safe_url(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}

/// Guess the MIME type of an image from its URL extension.
///
/// Thumbnails in the wild are overwhelmingly JPEG, so that is the default.
pub fn image_mime(url: &str) -> &'static str {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    if path.ends_with(".png") {
        "image/png"
    } else if path.ends_with(".webp") {
        "image/webp"
    } else if path.ends_with(".gif") {
        "image/gif"
    } else {
        "image/jpeg"
    }
}

/// Truncate a string to a maximum length, appending "..." if truncated.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let mut end = max_len;
        while !s.is_char_boundary(end) && end > 0 {
            end -= 1;
        }
        format!("{}...", &s[..end])
    }
}
