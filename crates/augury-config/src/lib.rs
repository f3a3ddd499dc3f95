// SPDX-FileCopyrightText: 2026 Augury Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for the Augury plugin repository generator.
//!
//! Provides TOML configuration parsing with strict validation
//! (`deny_unknown_fields`), XDG file lookup, and environment variable
//! overrides via the `AUGURY_` prefix.
//!
//! # Usage
//!
//! ```no_run
//! use augury_config::load_and_validate;
//!
//! let config = load_and_validate().expect("config errors");
//! println!("provider: {}", config.provider);
//! ```

pub mod loader;
pub mod model;

pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::AuguryConfig;

use augury_core::AuguryError;

/// Load configuration from the standard hierarchy and validate it.
pub fn load_and_validate() -> Result<AuguryConfig, AuguryError> {
    let config = loader::load_config().map_err(|e| AuguryError::Config(e.to_string()))?;
    validate(&config)?;
    tracing::debug!(
        provider = %config.provider,
        dist_dir = %config.dist_dir.display(),
        source = config.source.as_deref().unwrap_or(""),
        "configuration loaded"
    );
    Ok(config)
}

/// Load configuration from a TOML string and validate it.
///
/// Useful for testing and explicit configuration.
pub fn load_and_validate_str(toml_content: &str) -> Result<AuguryConfig, AuguryError> {
    let config =
        loader::load_config_from_str(toml_content).map_err(|e| AuguryError::Config(e.to_string()))?;
    validate(&config)?;
    Ok(config)
}

/// Post-deserialization validation.
///
/// Rejects values that would produce broken download links or a malformed
/// statistics URL rather than letting them surface as garbage artifacts.
pub fn validate(config: &AuguryConfig) -> Result<(), AuguryError> {
    if config.provider.trim().is_empty() {
        return Err(AuguryError::Config(
            "provider must not be empty".to_string(),
        ));
    }
    if config.provider.contains('/') || config.provider.contains(' ') {
        return Err(AuguryError::Config(format!(
            "provider must be a bare hostname, got {:?}",
            config.provider
        )));
    }
    if config.user_agent.trim().is_empty() {
        return Err(AuguryError::Config(
            "user_agent must not be empty".to_string(),
        ));
    }
    if let Some(source) = &config.source {
        if source.is_empty() || source.chars().any(|c| "?&#= ".contains(c)) {
            return Err(AuguryError::Config(format!(
                "source tag must be a plain query value, got {source:?}"
            )));
        }
    }
    Ok(())
}
