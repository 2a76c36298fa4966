use std::path::Path;

use anyhow::{bail, Result};
use clap::Subcommand;

use crate::config::ConsoleConfig;

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
	/// Show all configuration
	Show,
	/// Get a configuration value
	Get {
		/// Configuration key (e.g., "api_url")
		key: String,
	},
	/// Set a configuration value
	Set {
		key: String,
		value: String,
	},
}

pub fn run(data_dir: &Path, cmd: ConfigCmd) -> Result<()> {
	let mut config = ConsoleConfig::load(data_dir)?;

	match cmd {
		ConfigCmd::Show => {
			println!("api_url = {}", config.api_url);
			println!();
			println!(
				"Config file: {}",
				ConsoleConfig::config_path(data_dir).display()
			);
		}
		ConfigCmd::Get { key } => match key.as_str() {
			"api_url" => println!("{}", config.api_url),
			_ => bail!("unknown config key: {key}"),
		},
		ConfigCmd::Set { key, value } => match key.as_str() {
			"api_url" => {
				config.api_url = value.clone();
				config.save(data_dir)?;
				println!("Set api_url = {value}");
			}
			_ => bail!("unknown config key: {key}"),
		},
	}

	Ok(())
}
