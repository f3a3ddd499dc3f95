// SPDX-FileCopyrightText: 2026 Augury Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared across the Augury workspace.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// A release channel of the plugin distribution repository.
///
/// The `Display` form matches the on-disk directory name and the channel
/// segment of generated download links.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Stable,
    Testing,
}

/// Packaged plugin manifest, as found inside a channel archive.
///
/// Manifests are produced by the plugin build process; this system reads a
/// handful of known fields and carries everything else through untouched.
/// Unknown fields land in `extra` via `flatten` so the master index preserves
/// the full upstream record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Manifest {
    /// Unique plugin identifier; keys the channel manifest sets.
    pub internal_name: String,

    /// Display name shown in the listing document.
    pub name: String,

    /// Plugin author, rendered verbatim in the listing.
    pub author: String,

    /// Upstream repository URL used as the name link target.
    pub repo_url: String,

    /// Version identifier of this packaged release.
    pub assembly_version: String,

    /// One-line tagline; absent keys stay absent in the serialized record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub punchline: Option<String>,

    /// Longer description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Category tags assigned by the repository.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_tags: Option<Vec<String>>,

    /// Free-form tags assigned by the plugin author.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Hide flag; hidden plugins stay in the master index but are dropped
    /// from the listing document. `None` means the packaged manifest did not
    /// carry the flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_hide: Option<bool>,

    /// All remaining upstream fields, preserved verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Mapping from plugin identifier to its manifest, for one channel.
pub type ChannelManifests = BTreeMap<String, Manifest>;

/// Download counts fetched from the statistics endpoint.
///
/// The endpoint maps plugin identifiers to counts but may also carry
/// per-version breakdowns; entries are stored as raw JSON values and only
/// plain numeric counts are readable through [`DownloadStats::count`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DownloadStats(pub BTreeMap<String, serde_json::Value>);

impl DownloadStats {
    /// Returns the download count for a plugin, if the entry is a plain
    /// non-negative integer.
    pub fn count(&self, internal_name: &str) -> Option<u64> {
        self.0.get(internal_name).and_then(serde_json::Value::as_u64)
    }

    /// Number of entries in the statistics response.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no statistics are available (fetch failed or empty body).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, u64)> for DownloadStats {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k, serde_json::Value::from(v)))
                .collect(),
        )
    }
}
