// SPDX-FileCopyrightText: 2026 Augury Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Channel archive reader.
//!
//! Walks a channel's output tree (`dist/<channel>`), opens each plugin's
//! `latest.zip`, and parses the packaged manifest entry named after the
//! plugin directory. Directories without an archive are skipped; a corrupt
//! archive or malformed manifest aborts the run, since that indicates an
//! upstream packaging defect that must not be masked.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use tracing::debug;
use walkdir::WalkDir;

use augury_core::{AuguryError, Channel, ChannelManifests, Manifest};

/// File name of the packaged archive inside each plugin directory.
pub const ARCHIVE_NAME: &str = "latest.zip";

/// Path of a plugin's packaged archive for one channel.
pub fn channel_archive_path(dist_dir: &Path, channel: Channel, internal_name: &str) -> PathBuf {
    dist_dir
        .join(channel.to_string())
        .join(internal_name)
        .join(ARCHIVE_NAME)
}

/// Scan one channel's tree and return its manifest set, keyed by
/// `InternalName`.
///
/// A missing channel root yields an empty set, matching the walk semantics
/// of the upstream layout (a channel that has never published is simply
/// empty, not an error).
pub fn read_channel(dist_dir: &Path, channel: Channel) -> Result<ChannelManifests, AuguryError> {
    let root = dist_dir.join(channel.to_string());
    let mut manifests = ChannelManifests::new();

    for entry in WalkDir::new(&root).into_iter().filter_map(Result::ok) {
        if !entry.file_type().is_dir() {
            continue;
        }

        let archive_path = entry.path().join(ARCHIVE_NAME);
        if !archive_path.is_file() {
            continue;
        }

        let plugin_dir = entry.file_name().to_string_lossy();
        let manifest = read_manifest(&archive_path, &plugin_dir)?;
        debug!(
            channel = %channel,
            plugin = %manifest.internal_name,
            version = %manifest.assembly_version,
            "manifest extracted"
        );
        manifests.insert(manifest.internal_name.clone(), manifest);
    }

    Ok(manifests)
}

/// Open a packaged archive and parse the manifest entry `<plugin>.json`.
fn read_manifest(archive_path: &Path, plugin_dir: &str) -> Result<Manifest, AuguryError> {
    let file = File::open(archive_path).map_err(|e| AuguryError::Archive {
        path: archive_path.to_path_buf(),
        source: Box::new(e),
    })?;
    let mut archive = zip::ZipArchive::new(file).map_err(|e| AuguryError::Archive {
        path: archive_path.to_path_buf(),
        source: Box::new(e),
    })?;

    let entry_name = format!("{plugin_dir}.json");
    let entry = archive.by_name(&entry_name).map_err(|e| AuguryError::Archive {
        path: archive_path.to_path_buf(),
        source: Box::new(e),
    })?;

    serde_json::from_reader(entry).map_err(|e| AuguryError::Manifest {
        path: archive_path.to_path_buf(),
        message: format!("{entry_name}: {e}"),
    })
}

/// Whole-second modification time of a file, or `0` when it does not exist.
///
/// The zero default only matters for max-comparison across channels; a
/// plugin discovered via at least one channel always has one real mtime.
pub fn archive_mtime(path: &Path) -> i64 {
    let Ok(modified) = std::fs::metadata(path).and_then(|m| m.modified()) else {
        return 0;
    };
    modified
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
