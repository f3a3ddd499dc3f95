// SPDX-FileCopyrightText: 2026 Augury Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Merge order: compiled defaults, `~/.config/augury/augury.toml`,
//! `./augury.toml`, then `AUGURY_*` environment variables.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::AuguryConfig;

/// Load configuration from the standard hierarchy with env var overrides.
///
/// Later layers override earlier ones:
/// 1. Compiled defaults
/// 2. `~/.config/augury/augury.toml` (user XDG config)
/// 3. `./augury.toml` (local directory)
/// 4. `AUGURY_*` environment variables
pub fn load_config() -> Result<AuguryConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(AuguryConfig::default()))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("augury/augury.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("augury.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no file lookup, no env).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<AuguryConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(AuguryConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<AuguryConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(AuguryConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Environment variable provider. The config is a flat table, so the default
/// underscore handling is unambiguous (`AUGURY_USER_AGENT` -> `user_agent`).
fn env_provider() -> Env {
    Env::prefixed("AUGURY_")
}
