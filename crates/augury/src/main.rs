// SPDX-FileCopyrightText: 2026 Augury Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Augury - plugin repository master-index generator.
//!
//! Reads packaged plugin manifests from the stable and testing channel
//! trees, merges them with remote download statistics, and writes the
//! master index and the Markdown listing document.

use augury::generate;
use clap::{Parser, Subcommand};
use tracing::error;

/// Augury - plugin repository master-index generator.
#[derive(Parser, Debug)]
#[command(name = "augury", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Regenerate the master index and listing document (the default).
    Generate,
    /// Print the resolved configuration as TOML.
    Config,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match augury_config::load_and_validate() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("augury: {e}");
            std::process::exit(1);
        }
    };

    init_tracing(&config.log_level);

    let result = match cli.command.unwrap_or(Commands::Generate) {
        Commands::Generate => generate::run_generate(&config).await,
        Commands::Config => match toml::to_string_pretty(&config) {
            Ok(rendered) => {
                print!("{rendered}");
                Ok(())
            }
            Err(e) => Err(augury_core::AuguryError::Internal(format!(
                "failed to render config: {e}"
            ))),
        },
    };

    if let Err(e) = result {
        error!(error = %e, "run failed");
        eprintln!("augury: {e}");
        std::process::exit(1);
    }
}

fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "augury={log_level},augury_archive={log_level},augury_stats={log_level},augury_index={log_level},warn"
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
