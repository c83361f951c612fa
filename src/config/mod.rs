//! Configuration management

use crate::types::DiffdError;
use clap::Parser;
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Default listen address when neither CLI nor config file sets one
pub const DEFAULT_LISTEN: SocketAddr =
    SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 3145);

/// Default cap on submission body size (2 MiB)
pub const DEFAULT_MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Command line interface for diffd
#[derive(Debug, Parser)]
#[command(
    name = "diffd",
    about = "Binary diff service - pair up submissions, diff on demand",
    version
)]
pub struct Cli {
    /// Address to listen on, e.g. `127.0.0.1:3145`
    #[arg(short, long, value_name = "ADDR")]
    pub listen: Option<SocketAddr>,

    /// Optional TOML configuration file; CLI flags take precedence
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Maximum accepted request body size in bytes
    #[arg(long, value_name = "BYTES")]
    pub max_body_bytes: Option<usize>,
}

/// Global configuration for diffd
#[derive(Debug, Clone)]
pub struct Config {
    /// Socket address the service listens on
    pub listen: SocketAddr,

    /// Maximum accepted request body size in bytes
    pub max_body_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen: DEFAULT_LISTEN,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

/// Subset of [`Config`] loadable from a TOML file
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    listen: Option<SocketAddr>,
    max_body_bytes: Option<usize>,
}

impl TryFrom<Cli> for Config {
    type Error = DiffdError;

    /// Merge CLI flags over config-file values over built-in defaults
    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let file = match &cli.config {
            Some(path) => {
                let raw = std::fs::read_to_string(path)?;
                toml::from_str::<FileConfig>(&raw).map_err(|err| {
                    DiffdError::Config(format!("invalid config file {:?}: {}", path, err))
                })?
            }
            None => FileConfig::default(),
        };

        let defaults = Config::default();
        let config = Config {
            listen: cli.listen.or(file.listen).unwrap_or(defaults.listen),
            max_body_bytes: cli
                .max_body_bytes
                .or(file.max_body_bytes)
                .unwrap_or(defaults.max_body_bytes),
        };

        config.validate()?;
        Ok(config)
    }
}

impl Config {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), DiffdError> {
        if self.max_body_bytes == 0 {
            return Err(DiffdError::Config(
                "max_body_bytes must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn cli(listen: Option<SocketAddr>, config: Option<PathBuf>) -> Cli {
        Cli {
            listen,
            config,
            max_body_bytes: None,
        }
    }

    #[test]
    fn test_defaults_without_flags_or_file() {
        let config = Config::try_from(cli(None, None)).unwrap();

        assert_eq!(config.listen, DEFAULT_LISTEN);
        assert_eq!(config.max_body_bytes, DEFAULT_MAX_BODY_BYTES);
    }

    #[test]
    fn test_cli_listen_overrides_default() {
        let addr: SocketAddr = "0.0.0.0:9000".parse().unwrap();
        let config = Config::try_from(cli(Some(addr), None)).unwrap();

        assert_eq!(config.listen, addr);
    }

    #[test]
    fn test_file_values_fill_unset_flags() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "listen = \"127.0.0.1:4000\"").unwrap();
        writeln!(file, "max_body_bytes = 1024").unwrap();
        file.flush().unwrap();

        let config = Config::try_from(cli(None, Some(file.path().to_path_buf()))).unwrap();

        assert_eq!(config.listen, "127.0.0.1:4000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.max_body_bytes, 1024);
    }

    #[test]
    fn test_cli_flags_take_precedence_over_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "listen = \"127.0.0.1:4000\"").unwrap();
        file.flush().unwrap();

        let addr: SocketAddr = "127.0.0.1:5000".parse().unwrap();
        let config = Config::try_from(cli(Some(addr), Some(file.path().to_path_buf()))).unwrap();

        assert_eq!(config.listen, addr);
    }

    #[test]
    fn test_unreadable_config_file_is_an_error() {
        let result = Config::try_from(cli(None, Some(PathBuf::from("/nonexistent/diffd.toml"))));

        assert!(result.is_err());
    }

    #[test]
    fn test_malformed_config_file_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "listen = not-a-toml-value").unwrap();
        file.flush().unwrap();

        let result = Config::try_from(cli(None, Some(file.path().to_path_buf())));

        assert!(result.is_err());
        assert!(result.unwrap_err().is_config_error());
    }

    #[test]
    fn test_zero_body_limit_rejected() {
        let config = Config {
            max_body_bytes: 0,
            ..Config::default()
        };

        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().is_config_error());
    }
}
