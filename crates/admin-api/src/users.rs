//! CRUD operations for the `/admin/users` endpoints.

use serde::{Deserialize, Serialize};

use crate::{request, Error, Paging, RequestConfig};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
	pub id: i32,
	pub username: String,
	pub balance: String,
	pub inviter_id: Option<i32>,
	pub invite_count: i32,
	pub invite_rebate_total: i64,
	pub role_id: i32,
	pub role_name: String,
	pub created_at: String,
}

pub use list::exec as list;
pub mod list {
	use super::*;

	#[derive(Debug, Clone, Serialize)]
	pub struct Params {
		pub page: u64,
		pub page_size: u64,
		#[serde(skip_serializing_if = "Option::is_none")]
		pub username: Option<String>,
	}

	impl Default for Params {
		fn default() -> Self {
			Self {
				page: 1,
				page_size: 20,
				username: None,
			}
		}
	}

	pub async fn exec(config: &RequestConfig, params: &Params) -> Result<Paging<UserInfo>, Error> {
		request::get(config, "/admin/users/list", params).await
	}
}

pub use create::exec as create;
pub mod create {
	use super::*;

	#[derive(Debug, Clone, Serialize)]
	pub struct Input {
		pub username: String,
		pub password: String,
		#[serde(skip_serializing_if = "Option::is_none")]
		pub role_id: Option<i32>,
	}

	pub async fn exec(config: &RequestConfig, input: &Input) -> Result<UserInfo, Error> {
		request::post(config, "/admin/users", input).await
	}
}

pub use update::exec as update;
pub mod update {
	use super::*;

	#[derive(Debug, Clone, Default, Serialize)]
	pub struct Input {
		#[serde(skip_serializing_if = "Option::is_none")]
		pub username: Option<String>,
		#[serde(skip_serializing_if = "Option::is_none")]
		pub password: Option<String>,
		#[serde(skip_serializing_if = "Option::is_none")]
		pub role_id: Option<i32>,
		#[serde(skip_serializing_if = "Option::is_none")]
		pub balance: Option<i64>,
	}

	pub async fn exec(config: &RequestConfig, id: i32, input: &Input) -> Result<UserInfo, Error> {
		request::put(config, &format!("/admin/users/{id}"), input).await
	}
}

pub use delete::exec as delete;
pub mod delete {
	use super::*;

	pub async fn exec(config: &RequestConfig, id: i32) -> Result<(), Error> {
		request::delete(config, &format!("/admin/users/{id}")).await
	}
}
