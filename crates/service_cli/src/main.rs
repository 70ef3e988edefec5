//! prng CLI - Raw Generator Output for Statistical Testing
//!
//! Streams the output of the `prng_core` generators to stdout so that
//! external test suites (dieharder, PractRand, TestU01) can consume it.
//!
//! # Commands
//!
//! - `prng stream <NAME> <MEBIBYTES> [SEED]` - Write raw bytes to stdout
//! - `prng list` - List the available generators
//!
//! Logs go to stderr; stdout carries only generator output.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod generator;

pub use error::{CliError, Result};

use config::{CliArgs, LogLevel};

/// Pseudorandom bit generator byte streamer
#[derive(Parser)]
#[command(name = "prng")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Stream generator output as raw bytes to stdout
    Stream {
        /// Generator name (see `prng list`)
        name: String,

        /// Amount of output in mebibytes
        mebibytes: u64,

        /// Seed, decimal or 0x-prefixed hexadecimal
        #[arg(value_parser = parse_seed_arg)]
        seed: Option<u64>,

        /// Words generated per output block
        #[arg(short, long)]
        block_size: Option<usize>,
    },

    /// List available generators
    List,
}

impl Cli {
    fn config_args(&self) -> CliArgs {
        let (seed, block_size) = match &self.command {
            Commands::Stream {
                seed, block_size, ..
            } => (*seed, *block_size),
            Commands::List => (None, None),
        };
        CliArgs {
            config_file: self.config.clone(),
            seed,
            block_size,
            log_level: self.log_level.clone(),
            verbose: self.verbose,
        }
    }
}

fn parse_seed_arg(s: &str) -> std::result::Result<u64, String> {
    config::parse_seed(s).map_err(|e| e.to_string())
}

fn init_tracing(log_level: LogLevel) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level.as_filter_str())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match config::build_config(&cli.config_args()) {
        Ok(config) => config,
        Err(e) => {
            init_tracing(LogLevel::default());
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(config.log_level);
    debug!(?config, "Configuration loaded");

    let result = match cli.command {
        Commands::Stream {
            name, mebibytes, ..
        } => commands::stream::run(&name, mebibytes, &config),
        Commands::List => commands::list::run(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
