//! Reelist Share - edge resolver for playlist share links.
//!
//! A lightweight HTTP server that turns opaque share tokens into either a
//! redirect into the application (human browsers) or a server-rendered
//! HTML document with social-preview metadata (automated preview agents).
//!
//! # Architecture
//!
//! - **Decode**: `reelist-core` inflates and validates the token; failures
//!   degrade to a generic preview, never to an error page
//! - **Classify**: case-insensitive User-Agent substring match against a
//!   maintained signature list
//! - **Compose**: 307 to the canonical application route, or a maud-rendered
//!   preview document with Open Graph tags (compile-time templates,
//!   automatic escaping)
//! - **Policy**: every response is no-store, varies on User-Agent, and is
//!   excluded from search indexes
//!
//! # URL Pattern
//!
//! ```text
//! GET /s/{code}
//! GET /s?code={code}
//! ```
//!
//! The path token wins when both are present. A request with no token at
//! all is the only client-visible error (400); everything else resolves to
//! one of the two terminal states.

pub mod classify;
pub mod config;
pub mod error;
pub mod policy;
pub mod render;
pub mod routes;
pub mod state;

pub use config::Config;
pub use routes::router;
pub use state::AppState;
