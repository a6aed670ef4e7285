//! Minimal content negotiation against a single supported media type.

use axum::http::{HeaderMap, HeaderName};

/// The only media type the gateway reads and writes.
pub const APPLICATION_JSON: &str = "application/json";

/// Returns whether the `name` header allows `expected` (a `type/subtype`).
///
/// An absent header places no constraint. Otherwise every occurrence is split
/// on `,`, parameters after `;` (such as `q` weights) are dropped, and a range
/// matches when it is `expected`, `type/*` or `*/*`. Matching is ASCII
/// case-insensitive. Values that are not valid UTF-8 never match.
pub fn accepts(headers: &HeaderMap, name: HeaderName, expected: &str) -> bool {
    let mut values = headers.get_all(name).iter().peekable();
    if values.peek().is_none() {
        return true;
    }

    let any_subtype = expected
        .split_once('/')
        .map(|(media_type, _)| format!("{media_type}/*"));

    values
        .filter_map(|value| value.to_str().ok())
        .flat_map(media_ranges)
        .any(|range| {
            range.eq_ignore_ascii_case(expected)
                || range == "*/*"
                || any_subtype
                    .as_deref()
                    .is_some_and(|wildcard| range.eq_ignore_ascii_case(wildcard))
        })
}

fn media_ranges(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',')
        .map(|value| value.split(';').next().unwrap_or_default().trim())
}
