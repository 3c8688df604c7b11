//! Requester classification.
//!
//! Automated preview agents are detected by a case-insensitive substring
//! match against a maintained signature list. The list is configuration,
//! not an algorithm: adding a bot signature must never require touching
//! the response state machine. Signatures stay lowercase and free of
//! regex metacharacters so the same list can be re-emitted verbatim as
//! the client-side double-check pattern in preview documents.

/// Known automated preview agents: search-engine crawlers, social
/// link-unfurlers, and chat-platform preview fetchers.
///
/// Matched as substrings, not anchored. Keep entries specific enough that
/// no ordinary browser User-Agent contains one.
pub const PREVIEW_AGENT_SIGNATURES: &[&str] = &[
    "googlebot",
    "bingbot",
    "yandex",
    "baiduspider",
    "duckduckbot",
    "slurp",
    "facebookexternalhit",
    "facebot",
    "twitterbot",
    "linkedinbot",
    "pinterestbot",
    "slackbot",
    "telegrambot",
    "discordbot",
    "whatsapp",
    "skypeuripreview",
    "embedly",
    "vkshare",
    "redditbot",
    "applebot",
];

/// Classify a User-Agent string.
///
/// Absent or empty headers classify as human: a missing identity gets the
/// redirect, never a preview document.
pub fn is_preview_agent(user_agent: Option<&str>) -> bool {
    let Some(ua) = user_agent else {
        return false;
    };
    if ua.is_empty() {
        return false;
    }

    let ua = ua.to_ascii_lowercase();
    PREVIEW_AGENT_SIGNATURES.iter().any(|sig| ua.contains(sig))
}

/// The signature list as a JavaScript-regex alternation.
///
/// Embedded in preview documents so agents that execute script can be
/// re-checked at runtime against the same list the server used.
pub fn client_pattern() -> String {
    PREVIEW_AGENT_SIGNATURES.join("|")
}
