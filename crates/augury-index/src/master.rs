// SPDX-FileCopyrightText: 2026 Augury Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Master index writer.
//!
//! The master index is the canonical machine-readable artifact consumed by
//! plugin-installer clients. Output must be byte-deterministic: records
//! sorted by `InternalName`, keys sorted within each record, 2-space
//! indentation.

use std::path::Path;

use tracing::info;

use augury_core::AuguryError;

use crate::merge::MergedManifest;

/// File name of the master index inside the dist directory.
pub const MASTER_FILE_NAME: &str = "pluginmaster.json";

/// Serialize the merged records as the canonical sorted JSON document.
///
/// Serialization goes through `serde_json::Value`, whose default map is a
/// `BTreeMap`; that is what sorts keys within each record.
pub fn render_master(records: &mut [MergedManifest]) -> Result<String, AuguryError> {
    records.sort_by(|a, b| a.internal_name().cmp(b.internal_name()));

    let value = serde_json::to_value(&*records)
        .map_err(|e| AuguryError::Internal(format!("master index serialization: {e}")))?;
    serde_json::to_string_pretty(&value)
        .map_err(|e| AuguryError::Internal(format!("master index serialization: {e}")))
}

/// Sort the records and overwrite the master index file.
pub fn write_master(path: &Path, records: &mut [MergedManifest]) -> Result<(), AuguryError> {
    let body = render_master(records)?;
    std::fs::write(path, body).map_err(|e| AuguryError::Output {
        path: path.to_path_buf(),
        source: Box::new(e),
    })?;
    info!(path = %path.display(), plugins = records.len(), "master index written");
    Ok(())
}
