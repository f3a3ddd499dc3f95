// SPDX-FileCopyrightText: 2026 Augury Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Merge engine and artifact writers for the Augury plugin repository
//! generator.
//!
//! Consumes the two channel manifest sets and the download statistics,
//! produces the merged master index (`pluginmaster.json`) and the Markdown
//! listing document (`README.md`).

pub mod link;
pub mod listing;
pub mod master;
pub mod merge;

pub use link::LinkBuilder;
pub use listing::{LISTING_FILE_NAME, render_listing, write_listing};
pub use master::{MASTER_FILE_NAME, render_master, write_master};
pub use merge::{MergedManifest, merge_manifests};
