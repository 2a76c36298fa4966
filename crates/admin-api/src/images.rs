//! CRUD operations for the `/admin/images` endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{request, Error, Paging, RequestConfig};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageInfo {
	pub id: i32,
	pub name: String,
	pub object_key: String,
	pub url: String,
	pub path: String,
	pub tags: Option<Vec<String>>,
	pub status: i16,
	pub remark: Option<String>,
	pub created_at: Option<DateTime<Utc>>,
	pub updated_at: Option<DateTime<Utc>>,
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
		#[serde(skip_serializing_if = "Option::is_none")]
		pub object_key: Option<String>,
		#[serde(skip_serializing_if = "Option::is_none")]
		pub status: Option<i16>,
	}

	impl Default for Params {
		fn default() -> Self {
			Self {
				page: 1,
				page_size: 20,
				id: None,
				name: None,
				object_key: None,
				status: None,
			}
		}
	}

	pub async fn exec(config: &RequestConfig, params: &Params) -> Result<Paging<ImageInfo>, Error> {
		request::get(config, "/admin/images/list", params).await
	}
}

pub use create::exec as create;
pub mod create {
	use super::*;

	#[derive(Debug, Clone, Serialize)]
	pub struct Input {
		pub name: String,
		pub object_key: String,
		pub url: String,
		pub path: String,
		#[serde(skip_serializing_if = "Option::is_none")]
		pub tags: Option<Vec<String>>,
		pub status: i16,
		#[serde(skip_serializing_if = "Option::is_none")]
		pub remark: Option<String>,
	}

	pub async fn exec(config: &RequestConfig, input: &Input) -> Result<ImageInfo, Error> {
		request::post(config, "/admin/images", input).await
	}
}

pub use update::exec as update;
pub mod update {
	use super::*;

	#[derive(Debug, Clone, Default, Serialize)]
	pub struct Input {
		#[serde(skip_serializing_if = "Option::is_none")]
		pub name: Option<String>,
		#[serde(skip_serializing_if = "Option::is_none")]
		pub object_key: Option<String>,
		#[serde(skip_serializing_if = "Option::is_none")]
		pub url: Option<String>,
		#[serde(skip_serializing_if = "Option::is_none")]
		pub path: Option<String>,
		#[serde(skip_serializing_if = "Option::is_none")]
		pub tags: Option<Vec<String>>,
		#[serde(skip_serializing_if = "Option::is_none")]
		pub status: Option<i16>,
		#[serde(skip_serializing_if = "Option::is_none")]
		pub remark: Option<String>,
	}

	pub async fn exec(config: &RequestConfig, id: i32, input: &Input) -> Result<ImageInfo, Error> {
		request::put(config, &format!("/admin/images/{id}"), input).await
	}
}

pub use delete::exec as delete;
pub mod delete {
	use super::*;

	pub async fn exec(config: &RequestConfig, id: i32) -> Result<(), Error> {
		request::delete(config, &format!("/admin/images/{id}")).await
	}
}
