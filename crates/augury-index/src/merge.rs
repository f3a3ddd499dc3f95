// SPDX-FileCopyrightText: 2026 Augury Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Merge engine.
//!
//! Combines the stable and testing channel manifest sets into one record per
//! plugin. The merge is a full replacement, not a field-level union: when a
//! testing manifest exists, its content is the base and stable-only fields
//! are NOT backfilled. Stable only contributes the reported
//! `AssemblyVersion`, the hide-flag fallback, and the install link.

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use augury_archive::{archive_mtime, channel_archive_path};
use augury_core::{Channel, ChannelManifests, DownloadStats, Manifest};

use crate::link::LinkBuilder;

/// One plugin's merged record in the master index.
///
/// Serializes as the base manifest's fields (with `IsHide` and
/// `AssemblyVersion` rewritten by the merge) plus the computed fields.
/// `TestingAssemblyVersion` is always present, `null` when no testing
/// release exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MergedManifest {
    #[serde(flatten)]
    pub manifest: Manifest,

    pub testing_assembly_version: Option<String>,
    pub is_testing_exclusive: bool,
    pub download_count: u64,
    pub last_updated: i64,
    pub download_link_install: String,
    pub download_link_testing: String,
}

impl MergedManifest {
    pub fn internal_name(&self) -> &str {
        &self.manifest.internal_name
    }

    /// Resolved hide flag; the merge always sets it.
    pub fn is_hide(&self) -> bool {
        self.manifest.is_hide.unwrap_or(false)
    }
}

/// Produce one merged record per plugin in the union of both channel sets.
///
/// Ordering of the result is unspecified; the master writer imposes the
/// final sort.
pub fn merge_manifests(
    dist_dir: &Path,
    links: &LinkBuilder,
    stable: &ChannelManifests,
    testing: &ChannelManifests,
    stats: &DownloadStats,
) -> Vec<MergedManifest> {
    let keys: BTreeSet<&str> = stable
        .keys()
        .chain(testing.keys())
        .map(String::as_str)
        .collect();

    let mut records = Vec::with_capacity(keys.len());
    for key in keys {
        let stable_manifest = stable.get(key);
        let testing_manifest = testing.get(key);
        let Some(base) = testing_manifest.or(stable_manifest) else {
            // Unreachable: the key came from one of the two sets.
            continue;
        };

        records.push(merge_one(
            dist_dir,
            links,
            key,
            base,
            stable_manifest,
            testing_manifest,
            stats,
        ));
    }

    records
}

fn merge_one(
    dist_dir: &Path,
    links: &LinkBuilder,
    key: &str,
    base: &Manifest,
    stable: Option<&Manifest>,
    testing: Option<&Manifest>,
    stats: &DownloadStats,
) -> MergedManifest {
    let mut manifest = base.clone();

    // Hide flag: testing's when it carries one, else stable's, else false.
    manifest.is_hide = Some(
        testing
            .and_then(|m| m.is_hide)
            .or_else(|| stable.and_then(|m| m.is_hide))
            .unwrap_or(false),
    );

    // The reported version is always the stable release when one exists;
    // a testing-only plugin reports its testing version here too.
    manifest.assembly_version = stable.unwrap_or(base).assembly_version.clone();

    let stable_mtime = archive_mtime(&channel_archive_path(dist_dir, Channel::Stable, key));
    let testing_mtime = archive_mtime(&channel_archive_path(dist_dir, Channel::Testing, key));

    let install_channel = if stable.is_some() {
        Channel::Stable
    } else {
        Channel::Testing
    };
    let testing_channel = if testing.is_some() {
        Channel::Testing
    } else {
        Channel::Stable
    };

    MergedManifest {
        manifest,
        testing_assembly_version: testing.map(|m| m.assembly_version.clone()),
        is_testing_exclusive: stable.is_none() && testing.is_some(),
        download_count: stats.count(key).unwrap_or(0),
        last_updated: stable_mtime.max(testing_mtime),
        download_link_install: links.channel_link(install_channel, key),
        download_link_testing: links.channel_link(testing_channel, key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest(name: &str, version: &str) -> Manifest {
        serde_json::from_value(serde_json::json!({
            "InternalName": name,
            "Name": name,
            "Author": "tester",
            "RepoUrl": format!("https://example.com/{name}"),
            "AssemblyVersion": version
        }))
        .unwrap()
    }

    fn set_of(manifests: Vec<Manifest>) -> ChannelManifests {
        manifests
            .into_iter()
            .map(|m| (m.internal_name.clone(), m))
            .collect()
    }

    fn links() -> LinkBuilder {
        LinkBuilder::new("dl.example.net", None)
    }

    fn touch_archive(dist: &Path, channel: Channel, plugin: &str) {
        let path = channel_archive_path(dist, channel, plugin);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, b"zip").unwrap();
    }

    #[test]
    fn union_of_both_channels_yields_one_record_each() {
        let tmp = tempfile::tempdir().unwrap();
        let stable = set_of(vec![manifest("OnlyStable", "1.0"), manifest("Both", "1.0")]);
        let testing = set_of(vec![manifest("OnlyTesting", "0.9"), manifest("Both", "1.1")]);

        let records = merge_manifests(
            tmp.path(),
            &links(),
            &stable,
            &testing,
            &DownloadStats::default(),
        );

        let mut names: Vec<&str> = records.iter().map(|r| r.internal_name()).collect();
        names.sort_unstable();
        assert_eq!(names, vec!["Both", "OnlyStable", "OnlyTesting"]);
    }

    #[test]
    fn testing_replaces_stable_without_field_backfill() {
        let tmp = tempfile::tempdir().unwrap();
        let mut stable_m = manifest("PluginA", "1.0");
        stable_m.punchline = Some("stable punchline".to_string());
        let testing_m = manifest("PluginA", "1.1");

        let records = merge_manifests(
            tmp.path(),
            &links(),
            &set_of(vec![stable_m]),
            &set_of(vec![testing_m]),
            &DownloadStats::default(),
        );

        let record = &records[0];
        // The base is the testing manifest wholesale; the stable-only
        // punchline must NOT leak into the merged record.
        assert_eq!(record.manifest.punchline, None);
        // Stable still supplies the reported version.
        assert_eq!(record.manifest.assembly_version, "1.0");
        assert_eq!(record.testing_assembly_version.as_deref(), Some("1.1"));
        assert!(!record.is_testing_exclusive);
        assert_eq!(
            record.download_link_install,
            "https://dl.example.net/stable/PluginA"
        );
        assert_eq!(
            record.download_link_testing,
            "https://dl.example.net/testing/PluginA"
        );
    }

    #[test]
    fn testing_only_plugin_is_testing_exclusive() {
        let tmp = tempfile::tempdir().unwrap();
        let records = merge_manifests(
            tmp.path(),
            &links(),
            &ChannelManifests::new(),
            &set_of(vec![manifest("Fresh", "0.1")]),
            &DownloadStats::default(),
        );

        let record = &records[0];
        assert!(record.is_testing_exclusive);
        // With no stable release, both version and links fall back to testing.
        assert_eq!(record.manifest.assembly_version, "0.1");
        assert_eq!(record.testing_assembly_version.as_deref(), Some("0.1"));
        assert_eq!(record.download_link_install, record.download_link_testing);
        assert!(record.download_link_install.contains("/testing/"));
    }

    #[test]
    fn stable_only_plugin_has_null_testing_version_and_equal_links() {
        let tmp = tempfile::tempdir().unwrap();
        let records = merge_manifests(
            tmp.path(),
            &links(),
            &set_of(vec![manifest("Old", "2.0")]),
            &ChannelManifests::new(),
            &DownloadStats::default(),
        );

        let record = &records[0];
        assert!(!record.is_testing_exclusive);
        assert_eq!(record.testing_assembly_version, None);
        assert_eq!(record.download_link_install, record.download_link_testing);
        assert!(record.download_link_install.contains("/stable/"));
    }

    #[test]
    fn hide_flag_falls_back_from_testing_to_stable() {
        let tmp = tempfile::tempdir().unwrap();
        let mut stable_m = manifest("Hidden", "1.0");
        stable_m.is_hide = Some(true);
        // Testing manifest exists but does not carry the flag; stable's
        // flag still applies.
        let testing_m = manifest("Hidden", "1.1");

        let records = merge_manifests(
            tmp.path(),
            &links(),
            &set_of(vec![stable_m]),
            &set_of(vec![testing_m]),
            &DownloadStats::default(),
        );
        assert!(records[0].is_hide());

        // And testing's explicit flag wins over stable's.
        let mut stable_m = manifest("Shown", "1.0");
        stable_m.is_hide = Some(true);
        let mut testing_m = manifest("Shown", "1.1");
        testing_m.is_hide = Some(false);

        let records = merge_manifests(
            tmp.path(),
            &links(),
            &set_of(vec![stable_m]),
            &set_of(vec![testing_m]),
            &DownloadStats::default(),
        );
        assert!(!records[0].is_hide());
    }

    #[test]
    fn hide_flag_defaults_to_false() {
        let tmp = tempfile::tempdir().unwrap();
        let records = merge_manifests(
            tmp.path(),
            &links(),
            &set_of(vec![manifest("Plain", "1.0")]),
            &ChannelManifests::new(),
            &DownloadStats::default(),
        );
        assert_eq!(records[0].manifest.is_hide, Some(false));
        assert!(!records[0].is_hide());
    }

    #[test]
    fn download_count_defaults_to_zero() {
        let tmp = tempfile::tempdir().unwrap();
        let stats: DownloadStats = [("Counted".to_string(), 55u64)].into_iter().collect();
        let records = merge_manifests(
            tmp.path(),
            &links(),
            &set_of(vec![manifest("Counted", "1.0"), manifest("Uncounted", "1.0")]),
            &ChannelManifests::new(),
            &stats,
        );

        let by_name = |name: &str| records.iter().find(|r| r.internal_name() == name).unwrap();
        assert_eq!(by_name("Counted").download_count, 55);
        assert_eq!(by_name("Uncounted").download_count, 0);
    }

    #[test]
    fn last_updated_is_max_of_channel_mtimes() {
        let tmp = tempfile::tempdir().unwrap();
        touch_archive(tmp.path(), Channel::Stable, "Timed");
        let stable_mtime =
            archive_mtime(&channel_archive_path(tmp.path(), Channel::Stable, "Timed"));

        // Only the stable archive exists; testing contributes 0 and loses
        // the max comparison.
        let records = merge_manifests(
            tmp.path(),
            &links(),
            &set_of(vec![manifest("Timed", "1.0")]),
            &ChannelManifests::new(),
            &DownloadStats::default(),
        );
        assert_eq!(records[0].last_updated, stable_mtime);
        assert!(records[0].last_updated > 0);
    }

    #[test]
    fn source_tag_is_appended_to_links() {
        let tmp = tempfile::tempdir().unwrap();
        let links = LinkBuilder::new("dl.example.net", Some("repo"));
        let records = merge_manifests(
            tmp.path(),
            &links,
            &set_of(vec![manifest("Tagged", "1.0")]),
            &ChannelManifests::new(),
            &DownloadStats::default(),
        );
        assert_eq!(
            records[0].download_link_install,
            "https://dl.example.net/stable/Tagged?source=repo"
        );
    }

    #[test]
    fn merged_record_serializes_computed_fields() {
        let tmp = tempfile::tempdir().unwrap();
        let records = merge_manifests(
            tmp.path(),
            &links(),
            &set_of(vec![manifest("Wire", "1.0")]),
            &ChannelManifests::new(),
            &DownloadStats::default(),
        );

        let value = serde_json::to_value(&records[0]).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj["InternalName"], "Wire");
        assert_eq!(obj["AssemblyVersion"], "1.0");
        // Always serialized, null when no testing release exists.
        assert_eq!(obj["TestingAssemblyVersion"], serde_json::Value::Null);
        assert_eq!(obj["IsHide"], false);
        assert_eq!(obj["IsTestingExclusive"], false);
        assert_eq!(obj["DownloadCount"], 0);
        assert_eq!(obj["LastUpdated"], 0);
        assert_eq!(obj["DownloadLinkInstall"], "https://dl.example.net/stable/Wire");
        assert_eq!(obj["DownloadLinkTesting"], "https://dl.example.net/stable/Wire");
    }
}
