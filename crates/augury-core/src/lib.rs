// SPDX-FileCopyrightText: 2026 Augury Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Augury plugin repository generator.
//!
//! This crate provides the shared data model (channels, packaged plugin
//! manifests, download statistics) and the workspace error type used by the
//! archive reader, statistics fetcher, and index builder.

pub mod error;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::AuguryError;
pub use types::{Channel, ChannelManifests, DownloadStats, Manifest};
