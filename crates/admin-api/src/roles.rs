//! CRUD operations for the `/admin/roles` endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{request, Error, Paging, RequestConfig};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleInfo {
	pub id: i32,
	pub name: String,
	pub remark: Option<String>,
	pub created_at: Option<DateTime<Utc>>,
}

pub use list::exec as list;
pub mod list {
	use super::*;

	#[derive(Debug, Clone, Serialize)]
	pub struct Params {
		pub page: u64,
		pub page_size: u64,
		#[serde(skip_serializing_if = "Option::is_none")]
		pub id: Option<i32>,
		#[serde(skip_serializing_if = "Option::is_none")]
		pub name: Option<String>,
	}

	impl Default for Params {
		fn default() -> Self {
			Self {
				page: 1,
				page_size: 20,
				id: None,
				name: None,
			}
		}
	}

	pub async fn exec(config: &RequestConfig, params: &Params) -> Result<Paging<RoleInfo>, Error> {
		request::get(config, "/admin/roles/list", params).await
	}
}

pub use create::exec as create;
pub mod create {
	use super::*;

	#[derive(Debug, Clone, Serialize)]
	pub struct Input {
		pub name: String,
		#[serde(skip_serializing_if = "Option::is_none")]
		pub remark: Option<String>,
	}

	pub async fn exec(config: &RequestConfig, input: &Input) -> Result<RoleInfo, Error> {
		request::post(config, "/admin/roles", input).await
	}
}

pub use update::exec as update;
pub mod update {
	use super::*;

	#[derive(Debug, Clone, Default, Serialize)]
	pub struct Input {
		#[serde(skip_serializing_if = "Option::is_none")]
		pub name: Option<String>,
	}

	pub async fn exec(config: &RequestConfig, id: i32, input: &Input) -> Result<RoleInfo, Error> {
		request::put(config, &format!("/admin/roles/{id}"), input).await
	}
}

pub use delete::exec as delete;
pub mod delete {
	use super::*;

	pub async fn exec(config: &RequestConfig, id: i32) -> Result<(), Error> {
		request::delete(config, &format!("/admin/roles/{id}")).await
	}
}
