// SPDX-FileCopyrightText: 2026 Augury Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Listing generator.
//!
//! Renders the merged collection as a Markdown table for human readers.
//! Hidden records are excluded here only; they stay in the master index.
//! Download counts are looked up directly in the statistics mapping rather
//! than read from the record, so an absent entry renders as `n/a` while the
//! stored `DownloadCount` defaults to 0.

use std::path::Path;

use chrono::{DateTime, FixedOffset};
use tracing::info;

use augury_core::{AuguryError, DownloadStats};

use crate::merge::MergedManifest;

/// File name of the listing document inside the dist directory.
pub const LISTING_FILE_NAME: &str = "README.md";

const HEADER: [&str; 10] = [
    "# Augury Plugins",
    "",
    "## Legend",
    "",
    "⚠️ = Testing/very experimental plugin. May cause crashes and other inconveniences.",
    "",
    "## Plugin List",
    "",
    "| Name | Version | Author | Description | Downloads |",
    "|:-----|:-------:|:------:|:------------|----------:|",
];

/// Dates in the listing are rendered in fixed UTC+9.
fn listing_timezone() -> FixedOffset {
    FixedOffset::east_opt(9 * 3600).expect("UTC+9 is a valid fixed offset")
}

/// Render the listing document for all non-hidden records.
///
/// Records are expected in master-index order (sorted by `InternalName`).
pub fn render_listing(records: &[MergedManifest], stats: &DownloadStats) -> String {
    let tz = listing_timezone();
    let mut lines: Vec<String> = HEADER.iter().map(|s| s.to_string()).collect();

    for record in records {
        if record.is_hide() {
            continue;
        }
        lines.push(render_row(record, stats, &tz));
    }

    lines.join("\n")
}

fn render_row(record: &MergedManifest, stats: &DownloadStats, tz: &FixedOffset) -> String {
    let manifest = &record.manifest;
    let name = format!("[{}]({})", manifest.name, manifest.repo_url);

    // A bolded stable link only renders when a distinct stable release
    // exists, which is exactly when the two links differ.
    let stable_version = if record.download_link_install != record.download_link_testing {
        format!(
            "**[{}]({})**",
            manifest.assembly_version, record.download_link_install
        )
    } else {
        "-".to_string()
    };
    let testing_version = match &record.testing_assembly_version {
        Some(version) => format!("⚠️ [{version}]({})", record.download_link_testing),
        None => "-".to_string(),
    };
    let last_updated = DateTime::from_timestamp(record.last_updated, 0)
        .map(|t| t.with_timezone(tz).format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string());
    let version = format!("{stable_version} / {testing_version} ({last_updated})");

    let tags = manifest
        .category_tags
        .iter()
        .flatten()
        .chain(manifest.tags.iter().flatten())
        .map(|tag| format!("**\\#{tag}**"))
        .collect::<Vec<_>>()
        .join(" ");
    let description = format!(
        "{}<br>{}<br>{tags}",
        manifest.punchline.as_deref().unwrap_or("-"),
        manifest.description.as_deref().unwrap_or("-"),
    );

    let downloads = stats
        .count(record.internal_name())
        .map(|n| n.to_string())
        .unwrap_or_else(|| "n/a".to_string());

    format!(
        "| {name} | {version} | {} | {description} | {downloads} |",
        manifest.author
    )
}

/// Render the listing and overwrite the document file in full.
pub fn write_listing(
    path: &Path,
    records: &[MergedManifest],
    stats: &DownloadStats,
) -> Result<(), AuguryError> {
    let body = render_listing(records, stats);
    std::fs::write(path, body).map_err(|e| AuguryError::Output {
        path: path.to_path_buf(),
        source: Box::new(e),
    })?;
    info!(path = %path.display(), "listing document written");
    Ok(())
}
