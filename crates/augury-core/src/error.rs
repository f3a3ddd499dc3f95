// SPDX-FileCopyrightText: 2026 Augury Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Augury plugin repository generator.

use std::path::PathBuf;

use thiserror::Error;

/// The primary error type used across all Augury crates.
#[derive(Debug, Error)]
pub enum AuguryError {
    /// Configuration errors (invalid TOML, unknown fields, bad values).
    #[error("configuration error: {0}")]
    Config(String),

    /// Packaged archive errors (unreadable zip, missing manifest entry).
    #[error("archive error at {path}: {source}")]
    Archive {
        path: PathBuf,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Manifest content errors (malformed JSON, missing required fields).
    #[error("manifest error at {path}: {message}")]
    Manifest { path: PathBuf, message: String },

    /// Statistics endpoint errors. Always degraded to empty stats by the
    /// fetcher; surfaces only in logs.
    #[error("statistics error: {message}")]
    Stats {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Output artifact write errors.
    #[error("failed to write {path}: {source}")]
    Output {
        path: PathBuf,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
