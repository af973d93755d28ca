//! Tag normalization and version-aware ordering.

use crate::types::Grouping;
use std::cmp::Ordering;

/// Normalize a raw release tag into its aggregation key.
///
/// Prerelease/build metadata (everything from the first `-` or `+`) is
/// stripped unconditionally. Grouping then truncates trailing dot-separated
/// components: one for `minor`, two for `major`. Tags with fewer components
/// than the truncation count collapse to a partial or empty string, which is
/// kept as-is.
pub fn normalize_tag(tag: &str, group: Grouping) -> String {
    let stripped = match tag.find(['-', '+']) {
        Some(idx) => &tag[..idx],
        None => tag,
    };

    let mut normalized = stripped.to_string();

    if group != Grouping::None {
        normalized = drop_last_component(&normalized);
    }
    if group == Grouping::Major {
        normalized = drop_last_component(&normalized);
    }

    normalized
}

fn drop_last_component(tag: &str) -> String {
    let mut parts: Vec<&str> = tag.split('.').collect();
    parts.pop();
    parts.join(".")
}

/// Compare two normalized tags component-wise. Components that both parse as
/// integers compare numerically (so `1.10` sorts after `1.9`), anything else
/// compares lexically; a strict prefix sorts first.
pub fn compare_tags(a: &str, b: &str) -> Ordering {
    let mut left = a.split('.');
    let mut right = b.split('.');

    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                let ord = match (x.parse::<u64>(), y.parse::<u64>()) {
                    (Ok(xn), Ok(yn)) => xn.cmp(&yn),
                    _ => x.cmp(y),
                };
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}
