//! Parser for the HTTP `Link` response header.
//!
//! GitHub paginates list endpoints by advertising related pages in a `Link`
//! header, e.g. `<https://...?page=2>; rel="next", <https://...?page=5>;
//! rel="last"`. Only the relation names and URLs matter here.

use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

fn segment_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"(?i)^\s*<([^>]+)>\s*;\s*rel\s*="([^"]*)""#).unwrap())
}

/// Parse a raw `Link` header value into a map from lowercased relation name
/// to URL. Segments that do not match `<URL>; rel="REL"` are ignored, and an
/// empty input yields an empty map.
pub fn parse_link_header(value: &str) -> HashMap<String, String> {
    let mut links = HashMap::new();

    for segment in value.split(',') {
        if let Some(caps) = segment_re().captures(segment) {
            links.insert(caps[2].to_lowercase(), caps[1].to_string());
        }
    }

    links
}
