//! CLI definitions for statuswatch.

use std::path::PathBuf;

use clap::Parser;

use statuswatch_config::{Config, ConfigError, ConfigLoader};

/// statuswatch CLI.
#[derive(Debug, Parser)]
#[command(name = "statuswatch")]
#[command(about = "GitHub status monitor served as MCP tools over stdio")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path (default: ~/.statuswatch/config.toml)
    #[arg(short, long, env = "STATUSWATCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the status summary URL
    #[arg(long, env = "STATUSWATCH_STATUS_URL")]
    pub status_url: Option<String>,

    /// Override the log level filter
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Cli {
    /// Load the configuration and apply command-line overrides.
    ///
    /// An explicit `--config` must exist; the default path falls back to
    /// built-in defaults when absent.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => ConfigLoader::load(path)?,
            None => ConfigLoader::load_or_default(&ConfigLoader::default_path())?,
        };

        if let Some(url) = &self.status_url {
            config.monitor.status_url = url.clone();
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("statuswatch").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_parse_flags() {
        let cli = parse(&[
            "--config",
            "/tmp/sw.toml",
            "--status-url",
            "http://localhost:1/summary.json",
            "--log-level",
            "debug",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/sw.toml")));
        assert_eq!(cli.status_url.as_deref(), Some("http://localhost:1/summary.json"));
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_load_config_with_overrides() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[monitor]\ndefault_interval_secs = 120\n\n[logging]\nlevel = \"warn\""
        )
        .unwrap();

        let cli = Cli {
            config: Some(file.path().to_path_buf()),
            status_url: Some("http://127.0.0.1:8080/summary.json".to_string()),
            log_level: Some("trace".to_string()),
        };
        let config = cli.load_config().unwrap();

        assert_eq!(config.monitor.default_interval_secs, 120);
        assert_eq!(config.monitor.status_url, "http://127.0.0.1:8080/summary.json");
        assert_eq!(config.logging.level, "trace");
    }

    #[test]
    fn test_explicit_missing_config_fails() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli {
            config: Some(dir.path().join("absent.toml")),
            status_url: None,
            log_level: None,
        };
        assert!(matches!(cli.load_config(), Err(ConfigError::NotFound(_))));
    }
}
