//! Typed client for the Keyline admin REST API.

pub mod auth;
pub mod devices;
pub mod envelope;
pub mod images;
pub mod permissions;
pub mod reg_codes;
mod request;
pub mod roles;
pub mod users;

use reqwest::header;
use serde::{Deserialize, Serialize};

pub use envelope::Envelope;

/// Everything a single request needs: transport, API origin and the current
/// session token. Built by the caller and passed into each operation, so the
/// credential dependency stays visible instead of living in ambient storage.
pub struct RequestConfig {
	pub client: reqwest::Client,
	pub base_url: String,
	pub token: Option<String>,
}

impl RequestConfig {
	pub fn new(base_url: impl Into<String>) -> Self {
		let mut base_url = base_url.into();
		while base_url.ends_with('/') {
			base_url.pop();
		}

		Self {
			client: reqwest::Client::new(),
			base_url,
			token: None,
		}
	}

	pub fn with_token(mut self, token: impl Into<String>) -> Self {
		self.token = Some(token.into());
		self
	}

	pub fn set_token(&mut self, token: Option<String>) {
		self.token = token;
	}
}

pub trait WithAuth {
	fn with_auth(self, token: &str) -> Self;
}

impl WithAuth for reqwest::RequestBuilder {
	fn with_auth(self, token: &str) -> Self {
		self.header(header::AUTHORIZATION, format!("Bearer {token}"))
	}
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("request failed: {0}")]
	Transport(#[from] reqwest::Error),

	#[error("failed to decode response body: {0}")]
	Decode(#[from] serde_json::Error),

	#[error("{message}")]
	Api { code: u16, message: String },

	#[error("login failed: no token received")]
	MissingToken,

	#[error("response envelope had no payload")]
	EmptyData,
}

/// List payload shared by every paginated endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paging<T> {
	pub list: Vec<T>,
	pub page: u64,
	pub total: u64,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn base_url_trailing_slashes_are_stripped() {
		let config = RequestConfig::new("http://localhost:8080/api/");
		assert_eq!(config.base_url, "http://localhost:8080/api");
	}

	#[test]
	fn with_auth_sets_bearer_header() {
		let client = reqwest::Client::new();
		let request = client
			.get("http://localhost/user/info")
			.with_auth("secret")
			.build()
			.unwrap();

		let authorization = request.headers().get(header::AUTHORIZATION).unwrap();
		assert_eq!(authorization.to_str().unwrap(), "Bearer secret");
	}
}
