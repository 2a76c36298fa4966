//! Login, registration and current-user operations.

use serde::{Deserialize, Serialize};

use crate::{request, Error, RequestConfig};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthPayload {
	pub username: String,
	pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
	pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
	pub id: i32,
	pub username: String,
	pub role: String,
}

pub use login::exec as login;
pub mod login {
	use super::*;

	pub async fn exec(config: &RequestConfig, payload: &AuthPayload) -> Result<AuthResponse, Error> {
		let response: AuthResponse = request::post(config, "/login", payload).await?;

		if response.token.is_empty() {
			return Err(Error::MissingToken);
		}

		Ok(response)
	}
}

pub use register::exec as register;
pub mod register {
	use super::*;

	pub async fn exec(config: &RequestConfig, payload: &AuthPayload) -> Result<AuthResponse, Error> {
		let response: AuthResponse = request::post(config, "/register", payload).await?;

		if response.token.is_empty() {
			return Err(Error::MissingToken);
		}

		Ok(response)
	}
}

pub use logout::exec as logout;
pub mod logout {
	use super::*;

	pub async fn exec(config: &RequestConfig) -> Result<(), Error> {
		request::post_empty(config, "/logout").await
	}
}

pub use me::exec as me;
pub mod me {
	use super::*;

	pub async fn exec(config: &RequestConfig) -> Result<CurrentUser, Error> {
		request::get_plain(config, "/user/info").await
	}
}
