// SPDX-FileCopyrightText: 2026 Augury Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Download link construction.

use augury_core::Channel;

/// Builds per-channel download links for a configured provider.
///
/// Links have the form `https://<provider>/<channel>/<plugin>` with an
/// optional `?source=<tag>` suffix when a source tag is configured.
#[derive(Debug, Clone)]
pub struct LinkBuilder {
    provider: String,
    query: String,
}

impl LinkBuilder {
    pub fn new(provider: &str, source: Option<&str>) -> Self {
        Self {
            provider: provider.to_string(),
            query: source.map(|s| format!("?source={s}")).unwrap_or_default(),
        }
    }

    /// Download link for one plugin on one channel.
    pub fn channel_link(&self, channel: Channel, internal_name: &str) -> String {
        format!(
            "https://{}/{channel}/{internal_name}{}",
            self.provider, self.query
        )
    }
}
