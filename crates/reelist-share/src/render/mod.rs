//! HTML rendering for share previews.
//!
//! All rendering uses [maud](https://maud.lambda.xyz/) for compile-time
//! HTML generation with automatic XSS protection (all dynamic values are
//! escaped). The preview document is deliberately minimal: preview agents
//! read the `<head>`, humans that land here get bounced to the
//! application by the inline script or the fallback link.

pub mod components;
pub mod playlist;
