//! Configuration for the calculator service.
//!
//! Values come from command-line flags, falling back to environment
//! variables (a `.env` file is loaded first by the binary).

use std::net::SocketAddr;

use clap::Parser;
use secrecy::{ExposeSecret, SecretString};

use crate::error::ConfigError;

/// Command-line arguments.
#[derive(Parser, Debug, Clone)]
#[command(name = "calculator-api")]
#[command(about = "Arithmetic HTTP service with a persistent calculation history")]
pub struct Cli {
    /// Address to bind the server to
    #[arg(long, env = "CALCULATOR_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// PostgreSQL connection URL
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Maximum number of pooled database connections
    #[arg(long, env = "DATABASE_POOL_SIZE", default_value_t = 10)]
    pub pool_size: usize,

    /// Keep calculations in memory instead of PostgreSQL
    #[arg(long, env = "CALCULATOR_IN_MEMORY")]
    pub in_memory: bool,

    /// Log output format ("pretty" or "json")
    #[arg(long, env = "LOG_FORMAT", default_value = "pretty")]
    pub log_format: String,
}

/// Main configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub http: HttpConfig,
    /// `None` when running with the in-memory store.
    pub database: Option<DatabaseConfig>,
    pub log_format: LogFormat,
}

impl Config {
    /// Validate parsed arguments into a configuration.
    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        let database = if cli.in_memory {
            None
        } else {
            let url = cli
                .database_url
                .filter(|url| !url.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingRequired {
                    key: "DATABASE_URL".to_string(),
                    hint: "Set DATABASE_URL or pass --in-memory".to_string(),
                })?;
            Some(DatabaseConfig::new(url, cli.pool_size)?)
        };

        Ok(Self {
            http: HttpConfig {
                host: cli.host,
                port: cli.port,
            },
            database,
            log_format: cli.log_format.parse()?,
        })
    }
}

/// HTTP listener configuration.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,
}

impl HttpConfig {
    pub fn addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| ConfigError::InvalidValue {
                key: "CALCULATOR_HOST".to_string(),
                message: format!("{}", e),
            })
    }
}

/// Database configuration.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    url: SecretString,
    pub pool_size: usize,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>, pool_size: usize) -> Result<Self, ConfigError> {
        if pool_size == 0 {
            return Err(ConfigError::InvalidValue {
                key: "DATABASE_POOL_SIZE".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        Ok(Self {
            url: SecretString::from(url.into()),
            pool_size,
        })
    }

    /// Get the database URL (exposes the secret).
    pub fn url(&self) -> &str {
        self.url.expose_secret()
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(ConfigError::InvalidValue {
                key: "LOG_FORMAT".to_string(),
                message: format!("expected 'pretty' or 'json', got '{}'", s),
            }),
        }
    }
}
