// SPDX-FileCopyrightText: 2026 Augury Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model for the Augury generator.
//!
//! Uses `#[serde(deny_unknown_fields)]` to reject unrecognized config keys at
//! startup rather than silently ignoring typos.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level Augury configuration.
///
/// Loaded from TOML files with environment variable overrides; every field
/// has a compiled default so the generator runs with no config file at all.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AuguryConfig {
    /// Hostname serving both the statistics endpoint and download links.
    #[serde(default = "default_provider")]
    pub provider: String,

    /// Client-identifying string sent as the `User-Agent` header.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Optional tag appended to download links as `?source=<tag>`.
    #[serde(default)]
    pub source: Option<String>,

    /// Root of the channel output trees and the generated artifacts.
    #[serde(default = "default_dist_dir")]
    pub dist_dir: PathBuf,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AuguryConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            user_agent: default_user_agent(),
            source: None,
            dist_dir: default_dist_dir(),
            log_level: default_log_level(),
        }
    }
}

fn default_provider() -> String {
    "dl.horoscope.dev".to_string()
}

fn default_user_agent() -> String {
    "Augury (+https://github.com/augury-dev/augury)".to_string()
}

fn default_dist_dir() -> PathBuf {
    PathBuf::from("dist")
}

fn default_log_level() -> String {
    "info".to_string()
}
