// SPDX-FileCopyrightText: 2026 Faqdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Faqdesk - customer FAQ assistant with human-agent handoff.
//!
//! This is the binary entry point for the Faqdesk server.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod import;
mod serve;

/// Faqdesk - customer FAQ assistant with human-agent handoff.
#[derive(Parser, Debug)]
#[command(name = "faqdesk", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the Faqdesk HTTP server.
    Serve,
    /// Import FAQ entries from a JSON file into the corpus.
    ImportFaqs {
        /// Path to a JSON array of {question, answer, keywords, category}.
        file: PathBuf,
    },
    /// Print the resolved configuration.
    Config,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match faqdesk_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            faqdesk_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Some(Commands::Serve) => serve::run(config).await,
        Some(Commands::ImportFaqs { file }) => import::run(&config, &file).await,
        Some(Commands::Config) => {
            match toml::to_string_pretty(&config) {
                Ok(rendered) => {
                    println!("{rendered}");
                    Ok(())
                }
                Err(e) => Err(faqdesk_core::FaqdeskError::Internal(format!(
                    "failed to render config: {e}"
                ))),
            }
        }
        None => {
            println!("faqdesk: use --help for available commands");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("faqdesk: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    #[test]
    #[cfg(not(target_env = "msvc"))]
    fn jemalloc_is_active() {
        // Verify jemalloc is the global allocator by advancing the epoch.
        // Only jemalloc supports this -- the system allocator would fail.
        use tikv_jemalloc_ctl::{epoch, stats};
        epoch::advance().unwrap();
        let allocated = stats::allocated::read().unwrap();
        assert!(allocated > 0, "jemalloc should report non-zero allocation");
    }

    #[test]
    fn binary_loads_config_defaults() {
        let config = faqdesk_config::load_and_validate_str("")
            .expect("default config should be valid");
        assert_eq!(config.agent.name, "faqdesk");
        assert_eq!(config.matcher.accept_threshold, 0.7);
    }
}
