//! Error types for the prng CLI.

use thiserror::Error;

use crate::config::ConfigError;

/// CLI error.
#[derive(Debug, Error)]
pub enum CliError {
    /// Generator name not in the registry.
    #[error("unknown rng '{name}' (available: {available})")]
    UnknownGenerator {
        /// Name as given on the command line.
        name: String,
        /// Comma-separated list of registered names.
        available: String,
    },

    /// Invalid command-line argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration could not be loaded or failed validation.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Writing the output stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the CLI.
pub type Result<T> = std::result::Result<T, CliError>;
