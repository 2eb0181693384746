use std::{io, path::{Path, PathBuf}, time::Duration};

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::paths;

#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("read config {path} failed")]
	Read {
		path:   PathBuf,
		#[source]
		source: io::Error,
	},
	#[error("parse config {path} failed")]
	Parse {
		path:   PathBuf,
		#[source]
		source: toml::de::Error,
	},
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	/// How often the window is compared against the last drawn frame.
	pub poll_interval_ms:  u64,
	/// Longest wait for a key before an idle tick.
	pub input_wait_ms:     u64,
	/// Wait for each continuation byte of an arrow key sequence.
	pub escape_timeout_ms: u64,
	pub command_capacity:  usize,
	pub log_filter:        String,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			poll_interval_ms:  100,
			input_wait_ms:     50,
			escape_timeout_ms: 1,
			command_capacity:  255,
			log_filter:        "info".to_string(),
		}
	}
}

impl Config {
	pub const FILE_NAME: &'static str = "config.toml";

	/// Loads `explicit` when given, else the per-user config file if present,
	/// else the defaults.
	pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
		if let Some(path) = explicit {
			return Self::from_file(path);
		}
		let default_path = paths::user_config_dir().join(Self::FILE_NAME);
		if default_path.is_file() { Self::from_file(&default_path) } else { Ok(Self::default()) }
	}

	pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
		let text =
			std::fs::read_to_string(path).map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
		let config = Self::parse(&text).map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?;
		info!("loaded config from {}", path.display());
		Ok(config)
	}

	pub fn parse(text: &str) -> Result<Self, toml::de::Error> { toml::from_str(text) }

	pub fn poll_interval(&self) -> Duration { Duration::from_millis(self.poll_interval_ms) }

	pub fn input_wait(&self) -> Duration { Duration::from_millis(self.input_wait_ms) }

	pub fn escape_timeout(&self) -> Duration { Duration::from_millis(self.escape_timeout_ms) }
}

#[cfg(test)]
mod tests {
	use std::time::Duration;

	use super::{Config, ConfigError};

	#[test]
	fn empty_file_yields_defaults() {
		let config = Config::parse("").expect("empty config should parse");
		assert_eq!(config, Config::default());
		assert_eq!(config.poll_interval(), Duration::from_millis(100));
		assert_eq!(config.input_wait(), Duration::from_millis(50));
		assert_eq!(config.escape_timeout(), Duration::from_millis(1));
	}

	#[test]
	fn partial_file_overrides_only_given_keys() {
		let config = Config::parse("poll_interval_ms = 250\nlog_filter = \"mapvi=debug\"\n")
			.expect("partial config should parse");
		assert_eq!(config.poll_interval_ms, 250);
		assert_eq!(config.log_filter, "mapvi=debug");
		assert_eq!(config.command_capacity, 255);
	}

	#[test]
	fn unknown_keys_are_rejected() {
		assert!(Config::parse("refresh = 3\n").is_err());
	}

	#[test]
	fn explicit_missing_file_is_an_error() {
		let dir = tempfile::tempdir().expect("temp dir should be created");
		let missing = dir.path().join("nope.toml");
		assert!(matches!(Config::load(Some(&missing)), Err(ConfigError::Read { .. })));
	}

	#[test]
	fn explicit_file_is_parsed() {
		let dir = tempfile::tempdir().expect("temp dir should be created");
		let path = dir.path().join("mapvi.toml");
		std::fs::write(&path, "input_wait_ms = 20\n").expect("config should be written");
		let config = Config::load(Some(&path)).expect("config should load");
		assert_eq!(config.input_wait_ms, 20);
	}
}
