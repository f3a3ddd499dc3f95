// SPDX-FileCopyrightText: 2026 Augury Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `augury generate` command implementation.
//!
//! Runs the full pipeline sequentially: scan both channel trees, fetch
//! download statistics, merge, then overwrite both artifacts. Each run is a
//! fresh computation with no in-process caching; either both artifacts are
//! regenerated or the run aborts before writing them.

use tracing::info;

use augury_archive::read_channel;
use augury_config::AuguryConfig;
use augury_core::{AuguryError, Channel};
use augury_index::{
    LISTING_FILE_NAME, LinkBuilder, MASTER_FILE_NAME, merge_manifests, write_listing,
    write_master,
};
use augury_stats::StatsClient;

/// Runs the `augury generate` command.
pub async fn run_generate(config: &AuguryConfig) -> Result<(), AuguryError> {
    let dist = config.dist_dir.as_path();

    let stable = read_channel(dist, Channel::Stable)?;
    let testing = read_channel(dist, Channel::Testing)?;
    info!(
        stable = stable.len(),
        testing = testing.len(),
        dist = %dist.display(),
        "channel manifests loaded"
    );

    let stats = StatsClient::new(&config.provider, &config.user_agent)?
        .fetch()
        .await;

    let links = LinkBuilder::new(&config.provider, config.source.as_deref());
    let mut records = merge_manifests(dist, &links, &stable, &testing, &stats);

    write_master(&dist.join(MASTER_FILE_NAME), &mut records)?;
    write_listing(&dist.join(LISTING_FILE_NAME), &records, &stats)?;

    info!(plugins = records.len(), "artifacts generated");
    Ok(())
}
