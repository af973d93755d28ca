use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::Deserialize;

/// One release as returned by the GitHub releases listing.
///
/// Decoding fails if `tag_name`, `created_at`, or `assets` is missing, so a
/// malformed listing surfaces as a decode error instead of a later crash.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Release {
    pub tag_name: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub prerelease: bool,
    pub assets: Vec<ReleaseAsset>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ReleaseAsset {
    pub name: String,
    pub content_type: String,
    #[serde(default)]
    pub download_count: u64,
}

/// Per-tag aggregation result. `date` is the earliest `created_at` among the
/// releases that normalized to this tag; `downloads` is the running sum over
/// their matched assets.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateEntry {
    pub tag: String,
    pub date: DateTime<Utc>,
    pub downloads: u64,
}

/// How raw tags are bucketed before aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Grouping {
    /// Group by major version
    Major,
    /// Group by major.minor version
    Minor,
    /// One bucket per tag
    None,
}

/// Which release assets count towards the download totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MatchMode {
    /// Checksum files (names containing `sha<digits>sum`)
    Sha,
    /// Assets with an `application/*` content type
    Binary,
    /// Every asset
    All,
}
