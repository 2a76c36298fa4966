//! Registration-code management: the license keys that bind apps to devices.
//!
//! `code_type` 0 is time-limited (valid for `valid_days` after binding),
//! 1 is count-limited (`total_count` activations, `use_count` consumed).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{request, Error, Paging, RequestConfig};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegCodeInfo {
	pub id: i32,
	pub code: String,
	pub app_id: i32,
	pub bind_device_info: Option<serde_json::Value>,
	pub valid_days: i32,
	pub max_devices: i32,
	pub status: i16,
	pub binding_time: Option<DateTime<Utc>>,
	pub code_type: i16,
	pub expire_time: Option<DateTime<Utc>>,
	pub total_count: Option<i32>,
	pub use_count: i32,
	pub device_id: Option<String>,
	pub created_at: DateTime<Utc>,
	pub updated_at: DateTime<Utc>,
	pub app_name: Option<String>,
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
		pub code: Option<String>,
		#[serde(skip_serializing_if = "Option::is_none")]
		pub app_id: Option<i32>,
		#[serde(skip_serializing_if = "Option::is_none")]
		pub status: Option<i16>,
		#[serde(skip_serializing_if = "Option::is_none")]
		pub code_type: Option<i16>,
	}

	impl Default for Params {
		fn default() -> Self {
			Self {
				page: 1,
				page_size: 20,
				id: None,
				code: None,
				app_id: None,
				status: None,
				code_type: None,
			}
		}
	}

	pub async fn exec(
		config: &RequestConfig,
		params: &Params,
	) -> Result<Paging<RegCodeInfo>, Error> {
		request::get(config, "/admin/reg_codes/list", params).await
	}
}

pub use create::exec as create;
pub mod create {
	use super::*;

	#[derive(Debug, Clone, Serialize)]
	pub struct Input {
		pub code: String,
		pub app_id: i32,
		#[serde(skip_serializing_if = "Option::is_none")]
		pub bind_device_info: Option<serde_json::Value>,
		pub valid_days: i32,
		pub max_devices: i32,
		pub status: i16,
		pub code_type: i16,
		#[serde(skip_serializing_if = "Option::is_none")]
		pub expire_time: Option<DateTime<Utc>>,
		#[serde(skip_serializing_if = "Option::is_none")]
		pub total_count: Option<i32>,
	}

	pub async fn exec(config: &RequestConfig, input: &Input) -> Result<RegCodeInfo, Error> {
		request::post(config, "/admin/reg_codes", input).await
	}
}

pub use batch_create::exec as batch_create;
pub mod batch_create {
	use super::*;

	#[derive(Debug, Clone, Serialize)]
	pub struct Input {
		pub app_id: i32,
		pub quantity: u32,
		pub code_type: i16,
		#[serde(skip_serializing_if = "Option::is_none")]
		pub valid_days: Option<i32>,
		#[serde(skip_serializing_if = "Option::is_none")]
		pub total_count: Option<i32>,
	}

	pub async fn exec(config: &RequestConfig, input: &Input) -> Result<Vec<RegCodeInfo>, Error> {
		request::post(config, "/admin/reg_codes/batch", input).await
	}
}

pub use update::exec as update;
pub mod update {
	use super::*;

	#[derive(Debug, Clone, Default, Serialize)]
	pub struct Input {
		#[serde(skip_serializing_if = "Option::is_none")]
		pub code: Option<String>,
		#[serde(skip_serializing_if = "Option::is_none")]
		pub app_id: Option<i32>,
		#[serde(skip_serializing_if = "Option::is_none")]
		pub bind_device_info: Option<serde_json::Value>,
		#[serde(skip_serializing_if = "Option::is_none")]
		pub valid_days: Option<i32>,
		#[serde(skip_serializing_if = "Option::is_none")]
		pub max_devices: Option<i32>,
		#[serde(skip_serializing_if = "Option::is_none")]
		pub status: Option<i16>,
		#[serde(skip_serializing_if = "Option::is_none")]
		pub binding_time: Option<DateTime<Utc>>,
		#[serde(skip_serializing_if = "Option::is_none")]
		pub code_type: Option<i16>,
		#[serde(skip_serializing_if = "Option::is_none")]
		pub expire_time: Option<DateTime<Utc>>,
		#[serde(skip_serializing_if = "Option::is_none")]
		pub total_count: Option<i32>,
		#[serde(skip_serializing_if = "Option::is_none")]
		pub use_count: Option<i32>,
		#[serde(skip_serializing_if = "Option::is_none")]
		pub device_id: Option<String>,
	}

	pub async fn exec(config: &RequestConfig, id: i32, input: &Input) -> Result<RegCodeInfo, Error> {
		request::put(config, &format!("/admin/reg_codes/{id}"), input).await
	}
}

pub use delete::exec as delete;
pub mod delete {
	use super::*;

	pub async fn exec(config: &RequestConfig, id: i32) -> Result<(), Error> {
		request::delete(config, &format!("/admin/reg_codes/{id}")).await
	}
}
