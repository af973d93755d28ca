//! Folds release pages into per-tag download totals.

use crate::report::DownloadReport;
use crate::types::{AggregateEntry, Grouping, MatchMode, Release, ReleaseAsset};
use crate::version::{compare_tags, normalize_tag};
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

fn sha_sum_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"sha\d+sum").unwrap())
}

#[derive(Debug, Clone, Copy)]
pub struct AggregateOptions {
    pub include_prereleases: bool,
    pub group: Grouping,
    pub match_mode: MatchMode,
}

fn asset_matches(mode: MatchMode, asset: &ReleaseAsset) -> bool {
    match mode {
        MatchMode::All => true,
        MatchMode::Binary => asset.content_type.starts_with("application/"),
        MatchMode::Sha => sha_sum_re().is_match(&asset.name),
    }
}

/// Accumulator for the pagination walk. Pages are folded in one release at a
/// time; `into_report` produces the sorted final view.
#[derive(Debug, Default)]
pub struct DownloadAggregate {
    entries: HashMap<String, AggregateEntry>,
    matched_files: HashMap<String, u64>,
}

impl DownloadAggregate {
    pub fn fold_release(&mut self, release: &Release, opts: &AggregateOptions) {
        // The tag check is deliberately independent of the prerelease flag:
        // plenty of repos tag prereleases like `1.2.3-rc1` without setting it.
        if !opts.include_prereleases && (release.prerelease || release.tag_name.contains('-')) {
            tracing::debug!("Skipping prerelease {}", release.tag_name);
            return;
        }

        let tag = normalize_tag(&release.tag_name, opts.group);

        let entry = self
            .entries
            .entry(tag)
            .or_insert_with_key(|key| AggregateEntry {
                tag: key.clone(),
                date: release.created_at,
                downloads: 0,
            });

        // Keep the oldest release date for the bucket
        if release.created_at < entry.date {
            entry.date = release.created_at;
        }

        for asset in &release.assets {
            if asset_matches(opts.match_mode, asset) {
                *self.matched_files.entry(asset.name.clone()).or_insert(0) +=
                    asset.download_count;
                entry.downloads += asset.download_count;
            }
        }
    }

    pub fn into_report(self) -> DownloadReport {
        let mut entries: Vec<AggregateEntry> = self.entries.into_values().collect();
        entries.sort_by(|a, b| compare_tags(&a.tag, &b.tag));

        let mut matched_files: Vec<(String, u64)> = self.matched_files.into_iter().collect();
        matched_files.sort_by(|a, b| a.0.cmp(&b.0));

        DownloadReport {
            entries,
            matched_files,
        }
    }
}
