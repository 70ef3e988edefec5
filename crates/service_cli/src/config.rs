//! Stream configuration management
//!
//! Handles loading configuration from environment variables, TOML files, and CLI arguments.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Seed used when none is configured.
pub const DEFAULT_SEED: u64 = 1_234_567_890;

/// Number of 64-bit words generated per output block.
pub const DEFAULT_BLOCK_SIZE: usize = 1024;

/// Largest accepted block size in words (8 MiB of output per block).
pub const MAX_BLOCK_SIZE: usize = 1 << 20;

/// Environment variable overriding the seed.
pub const ENV_SEED: &str = "PRNG_SEED";

/// Environment variable overriding the block size.
pub const ENV_BLOCK_SIZE: &str = "PRNG_BLOCK_SIZE";

/// Environment variable overriding the log level.
pub const ENV_LOG_LEVEL: &str = "PRNG_LOG_LEVEL";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid block size: {0}. Must be between 1 and 1048576 words")]
    InvalidBlockSize(usize),

    #[error("Invalid block size: '{0}'. Must be a positive integer")]
    MalformedBlockSize(String),

    #[error("Invalid seed: {0}. Must be a decimal or 0x-prefixed hexadecimal u64")]
    InvalidSeed(String),

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Parses a seed given in decimal or `0x`-prefixed hexadecimal.
pub fn parse_seed(s: &str) -> Result<u64, ConfigError> {
    let trimmed = s.trim();
    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => trimmed.parse(),
    };
    parsed.map_err(|_| ConfigError::InvalidSeed(s.to_string()))
}

/// Stream configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StreamConfig {
    /// Seed for the selected generator
    pub seed: u64,
    /// Words generated per output block
    pub block_size: usize,
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            block_size: DEFAULT_BLOCK_SIZE,
            log_level: LogLevel::Info,
        }
    }
}

impl StreamConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        let config: StreamConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Override fields whose environment variable is set.
    ///
    /// `lookup` maps a variable name to its value; [`build_config`] passes
    /// the process environment.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(seed) = lookup(ENV_SEED) {
            self.seed = parse_seed(&seed)?;
        }

        if let Some(block_size) = lookup(ENV_BLOCK_SIZE) {
            self.block_size = block_size
                .trim()
                .parse()
                .map_err(|_| ConfigError::MalformedBlockSize(block_size.clone()))?;
        }

        if let Some(log_level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&log_level)?;
        }

        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.block_size == 0 || self.block_size > MAX_BLOCK_SIZE {
            return Err(ConfigError::InvalidBlockSize(self.block_size));
        }

        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(seed) = cli.seed {
            self.seed = seed;
        }
        if let Some(block_size) = cli.block_size {
            self.block_size = block_size;
        }
        if let Some(log_level) = &cli.log_level {
            self.log_level = LogLevel::from_str(log_level)?;
        }
        if cli.verbose && self.log_level != LogLevel::Trace {
            self.log_level = LogLevel::Debug;
        }
        Ok(())
    }
}

/// CLI arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Seed override
    pub seed: Option<u64>,
    /// Block size override
    pub block_size: Option<usize>,
    /// Log level override
    pub log_level: Option<String>,
    /// Raise the log level to debug
    pub verbose: bool,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<StreamConfig, ConfigError> {
    build_config_with(cli, |name| std::env::var(name).ok())
}

/// [`build_config`] with an explicit environment lookup.
pub fn build_config_with<F>(cli: &CliArgs, lookup: F) -> Result<StreamConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &cli.config_file {
        Some(path) => StreamConfig::from_file(path)?,
        None => StreamConfig::default(),
    };

    config.apply_env(lookup)?;
    config.merge_with_cli(cli)?;
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    fn write_temp_config(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "prng_cli_{}_{}.toml",
            name,
            std::process::id()
        ));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_default_config() {
        let config = StreamConfig::default();
        assert_eq!(config.seed, 1234567890);
        assert_eq!(config.block_size, 1024);
        assert_eq!(config.log_level, LogLevel::Info);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Info").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::from_str("WARN").unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::from_str("error").unwrap(), LogLevel::Error);

        assert!(LogLevel::from_str("invalid").is_err());
    }

    #[test]
    fn test_parse_seed() {
        assert_eq!(parse_seed("123").unwrap(), 123);
        assert_eq!(parse_seed(" 0 ").unwrap(), 0);
        assert_eq!(parse_seed("0xff").unwrap(), 255);
        assert_eq!(parse_seed("0XFF").unwrap(), 255);
        assert_eq!(parse_seed("18446744073709551615").unwrap(), u64::MAX);

        assert!(parse_seed("").is_err());
        assert!(parse_seed("-1").is_err());
        assert!(parse_seed("18446744073709551616").is_err());
        assert!(parse_seed("0xzz").is_err());
    }

    #[test]
    fn test_zero_block_size_rejected() {
        let config = StreamConfig {
            block_size: 0,
            ..StreamConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidBlockSize(0))
        ));
    }

    #[test]
    fn test_oversized_block_size_rejected() {
        let at_limit = StreamConfig {
            block_size: MAX_BLOCK_SIZE,
            ..StreamConfig::default()
        };
        assert!(at_limit.validate().is_ok());

        for block_size in [MAX_BLOCK_SIZE + 1, usize::MAX / 4, usize::MAX] {
            let cli = CliArgs {
                block_size: Some(block_size),
                ..CliArgs::default()
            };
            assert!(matches!(
                build_config_with(&cli, env(&[])),
                Err(ConfigError::InvalidBlockSize(n)) if n == block_size
            ));
        }

        let huge = (MAX_BLOCK_SIZE + 1).to_string();
        assert!(matches!(
            build_config_with(&CliArgs::default(), env(&[(ENV_BLOCK_SIZE, huge.as_str())])),
            Err(ConfigError::InvalidBlockSize(_))
        ));
    }

    #[test]
    fn test_malformed_block_size_reports_input() {
        let err = build_config_with(&CliArgs::default(), env(&[(ENV_BLOCK_SIZE, "abc")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::MalformedBlockSize(ref raw) if raw == "abc"));
        assert!(err.to_string().contains("'abc'"));
    }

    #[test]
    fn test_env_overrides_defaults() {
        let config = build_config_with(
            &CliArgs::default(),
            env(&[
                (ENV_SEED, "0x10"),
                (ENV_BLOCK_SIZE, "64"),
                (ENV_LOG_LEVEL, "warn"),
            ]),
        )
        .unwrap();
        assert_eq!(config.seed, 16);
        assert_eq!(config.block_size, 64);
        assert_eq!(config.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_invalid_env_values_rejected() {
        assert!(matches!(
            build_config_with(&CliArgs::default(), env(&[(ENV_SEED, "abc")])),
            Err(ConfigError::InvalidSeed(_))
        ));
        assert!(matches!(
            build_config_with(&CliArgs::default(), env(&[(ENV_BLOCK_SIZE, "0")])),
            Err(ConfigError::InvalidBlockSize(0))
        ));
        assert!(matches!(
            build_config_with(&CliArgs::default(), env(&[(ENV_LOG_LEVEL, "loud")])),
            Err(ConfigError::InvalidLogLevel(_))
        ));
    }

    #[test]
    fn test_cli_overrides_env() {
        let cli = CliArgs {
            seed: Some(7),
            log_level: Some("error".to_string()),
            ..CliArgs::default()
        };
        let config =
            build_config_with(&cli, env(&[(ENV_SEED, "99"), (ENV_LOG_LEVEL, "trace")])).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.log_level, LogLevel::Error);
    }

    #[test]
    fn test_verbose_raises_log_level() {
        let cli = CliArgs {
            verbose: true,
            ..CliArgs::default()
        };
        let config = build_config_with(&cli, env(&[])).unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_file_then_env_then_cli() {
        let path = write_temp_config(
            "precedence",
            "seed = 5\nblock_size = 256\nlog_level = \"debug\"\n",
        );

        let cli = CliArgs {
            config_file: Some(path.clone()),
            ..CliArgs::default()
        };
        let from_file = build_config_with(&cli, env(&[])).unwrap();
        assert_eq!(from_file.seed, 5);
        assert_eq!(from_file.block_size, 256);
        assert_eq!(from_file.log_level, LogLevel::Debug);

        let with_env = build_config_with(&cli, env(&[(ENV_SEED, "6")])).unwrap();
        assert_eq!(with_env.seed, 6);
        assert_eq!(with_env.block_size, 256);

        let cli = CliArgs {
            block_size: Some(8),
            ..cli
        };
        let with_cli = build_config_with(&cli, env(&[(ENV_SEED, "6")])).unwrap();
        assert_eq!(with_cli.seed, 6);
        assert_eq!(with_cli.block_size, 8);

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let path = write_temp_config("partial", "seed = 42\n");
        let config = StreamConfig::from_file(&path).unwrap();
        assert_eq!(config.seed, 42);
        assert_eq!(config.block_size, DEFAULT_BLOCK_SIZE);
        assert_eq!(config.log_level, LogLevel::Info);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_missing_or_malformed_file() {
        let missing = std::env::temp_dir().join("prng_cli_definitely_missing.toml");
        assert!(matches!(
            StreamConfig::from_file(&missing),
            Err(ConfigError::FileError(_))
        ));

        let path = write_temp_config("malformed", "seed = \"not a number\"\n");
        assert!(matches!(
            StreamConfig::from_file(&path),
            Err(ConfigError::FileError(_))
        ));
        std::fs::remove_file(path).unwrap();
    }
}
