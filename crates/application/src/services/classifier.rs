//! Maps reputation service pages onto a [`SecurityStatus`].
//!
//! Both services are classified by marker phrases in the returned page. The
//! markers are controlled by the third parties, so these are heuristics over
//! their current wording rather than a parsed API.

use repwatch_domain::{ReputationService, SecurityStatus};

pub const GOOGLE_SAFE_MARKER: &str = "No unsafe content found";
pub const GOOGLE_UNSAFE_MARKER: &str = "Unsafe content found";
pub const SPAMHAUS_SAFE_MARKER: &str = "is not listed";

pub fn classify(service: ReputationService, body: &str) -> SecurityStatus {
    match service {
        ReputationService::Google => classify_google(body),
        ReputationService::Spamhaus => classify_spamhaus(body),
    }
}

/// SAFE / UNSAFE when a marker is present, UNKNOWN otherwise (typically a
/// script-rendered page that shipped without either phrase).
///
/// Markers are looked for in the raw body first and then in the page's
/// visible text, so a phrase broken up by inline tags still counts.
pub fn classify_google(body: &str) -> SecurityStatus {
    if body.contains(GOOGLE_SAFE_MARKER) {
        return SecurityStatus::Safe;
    }
    if body.contains(GOOGLE_UNSAFE_MARKER) {
        return SecurityStatus::Unsafe;
    }

    let text = visible_text(body);
    if text.contains(GOOGLE_SAFE_MARKER) {
        SecurityStatus::Safe
    } else if text.contains(GOOGLE_UNSAFE_MARKER) {
        SecurityStatus::Unsafe
    } else {
        SecurityStatus::Unknown
    }
}

/// Binary: anything that does not say "is not listed" counts as listed.
pub fn classify_spamhaus(body: &str) -> SecurityStatus {
    if body.contains(SPAMHAUS_SAFE_MARKER) {
        SecurityStatus::Safe
    } else {
        SecurityStatus::Unsafe
    }
}

/// Text content of an HTML document: tags dropped, a handful of common
/// entities decoded, whitespace runs collapsed to one space.
pub fn visible_text(html: &str) -> String {
    let mut raw = String::with_capacity(html.len());
    let mut in_tag = false;
    let mut chars = html.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '<' if !in_tag && chars.peek().is_some_and(|&n| opens_tag(n)) => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => raw.push(c),
            _ => {}
        }
    }

    let decoded = raw
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&");

    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// A `<` only starts markup when followed by a tag name, `/` or `!`.
fn opens_tag(next: char) -> bool {
    next.is_ascii_alphabetic() || next == '/' || next == '!'
}
