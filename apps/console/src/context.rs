use anyhow::Result;
use clap::ValueEnum;
use kl_admin_api::RequestConfig;
use kl_session::SessionStore;
use serde::Serialize;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
	Human,
	Json,
}

/// Everything a command needs: the request config carrying the current
/// token, the persisted session store and the output format.
pub struct Context {
	pub config: RequestConfig,
	pub store: SessionStore,
	pub format: OutputFormat,
}

impl Context {
	pub fn new(api_url: &str, store: SessionStore, format: OutputFormat) -> Self {
		let mut config = RequestConfig::new(api_url);
		config.set_token(store.token().map(ToOwned::to_owned));

		Self {
			config,
			store,
			format,
		}
	}

	/// Print a value in the selected output format: the closure renders the
	/// human form, Json mode pretty-prints the value itself.
	pub fn print<T: Serialize>(&self, value: &T, human: impl FnOnce(&T)) -> Result<()> {
		match self.format {
			OutputFormat::Human => human(value),
			OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
		}

		Ok(())
	}
}
