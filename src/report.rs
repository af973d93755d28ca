//! Rendering of the aggregated download report.

use crate::types::AggregateEntry;
use std::io::{self, Write};

/// Final, sorted view of the aggregation: version-ordered per-tag entries
/// plus the per-filename counts behind `--debug`.
#[derive(Debug, Default, PartialEq)]
pub struct DownloadReport {
    pub entries: Vec<AggregateEntry>,
    pub matched_files: Vec<(String, u64)>,
}

/// Padded plain-text rows: tag, downloads, release date (time of day
/// dropped). Column widths come from the widest entry.
pub fn write_plain<W: Write>(out: &mut W, report: &DownloadReport) -> io::Result<()> {
    let tag_width = report
        .entries
        .iter()
        .map(|e| e.tag.len())
        .max()
        .unwrap_or(0);
    let count_width = report
        .entries
        .iter()
        .map(|e| e.downloads.to_string().len())
        .max()
        .unwrap_or(0);

    for entry in &report.entries {
        writeln!(
            out,
            "{:<tag_width$} {:>count_width$} {}",
            entry.tag,
            entry.downloads,
            entry.date.format("%Y-%m-%d"),
        )?;
    }

    Ok(())
}

/// CSV rows with a header; timestamps keep the time of day, rendered with a
/// space instead of the `T` separator.
pub fn write_csv<W: Write>(out: &mut W, report: &DownloadReport) -> io::Result<()> {
    writeln!(out, "Tag,Downloads,Released")?;
    for entry in &report.entries {
        writeln!(
            out,
            "\"{}\",{},{}",
            entry.tag,
            entry.downloads,
            entry.date.format("%Y-%m-%d %H:%M:%S"),
        )?;
    }
    Ok(())
}

/// Per-filename counts for every asset that passed the match filter.
pub fn write_matched_files<W: Write>(out: &mut W, report: &DownloadReport) -> io::Result<()> {
    writeln!(out, "\nMatched files:")?;
    for (name, count) in &report.matched_files {
        writeln!(out, " {count:>8} {name}")?;
    }
    Ok(())
}
