//! Console configuration stored in the data directory.

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Default API origin when nothing is configured. The web console used a
/// relative `/api`; a terminal client needs the origin spelled out.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

pub const CONFIG_FILE_NAME: &str = "console.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleConfig {
	/// Base URL of the admin API.
	pub api_url: String,
}

impl Default for ConsoleConfig {
	fn default() -> Self {
		Self {
			api_url: DEFAULT_API_URL.to_owned(),
		}
	}
}

impl ConsoleConfig {
	pub fn config_path(data_dir: &Path) -> PathBuf {
		data_dir.join(CONFIG_FILE_NAME)
	}

	/// Load the console config, creating a default one on first use.
	pub fn load(data_dir: &Path) -> Result<Self> {
		let path = Self::config_path(data_dir);

		if path.exists() {
			let json = std::fs::read_to_string(&path)?;
			Ok(serde_json::from_str(&json)?)
		} else {
			let config = Self::default();
			config.save(data_dir)?;
			Ok(config)
		}
	}

	pub fn save(&self, data_dir: &Path) -> Result<()> {
		std::fs::create_dir_all(data_dir)?;

		let path = Self::config_path(data_dir);
		std::fs::write(&path, serde_json::to_string_pretty(self)?)?;
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn first_load_writes_the_default_config() {
		let dir = tempfile::tempdir().unwrap();

		let config = ConsoleConfig::load(dir.path()).unwrap();
		assert_eq!(config.api_url, DEFAULT_API_URL);
		assert!(ConsoleConfig::config_path(dir.path()).exists());
	}

	#[test]
	fn saved_api_url_round_trips() {
		let dir = tempfile::tempdir().unwrap();

		let mut config = ConsoleConfig::load(dir.path()).unwrap();
		config.api_url = "https://admin.example.com/api".to_owned();
		config.save(dir.path()).unwrap();

		let reopened = ConsoleConfig::load(dir.path()).unwrap();
		assert_eq!(reopened.api_url, "https://admin.example.com/api");
	}
}
