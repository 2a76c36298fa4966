//! Read-only listing of devices bound to licensed apps.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{request, Error, Paging, RequestConfig};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceInfo {
	pub id: i32,
	pub app_id: i32,
	pub app_name: String,
	pub device_id: String,
	pub device_info: Option<serde_json::Value>,
	pub bind_time: Option<DateTime<Utc>>,
	pub expire_time: Option<DateTime<Utc>>,
}

pub use list::exec as list;
pub mod list {
	use super::*;

	#[derive(Debug, Clone, Serialize)]
	pub struct Params {
		pub page: u64,
		pub page_size: u64,
		#[serde(skip_serializing_if = "Option::is_none")]
		pub app_id: Option<i32>,
		#[serde(skip_serializing_if = "Option::is_none")]
		pub device_id: Option<String>,
	}

	impl Default for Params {
		fn default() -> Self {
			Self {
				page: 1,
				page_size: 20,
				app_id: None,
				device_id: None,
			}
		}
	}

	pub async fn exec(config: &RequestConfig, params: &Params) -> Result<Paging<DeviceInfo>, Error> {
		request::get(config, "/admin/devices/list", params).await
	}
}
