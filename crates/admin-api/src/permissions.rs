//! Access-control operations: policies, user/role links and permission
//! checks against the `/admin/permissions` endpoints.

use serde::{Deserialize, Serialize};

use crate::{request, Error, RequestConfig};

/// One policy rule: `subject` may perform `action` on `object`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
	pub subject: String,
	pub object: String,
	pub action: String,
}

/// A user-to-role assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleLink {
	pub user: String,
	pub role: String,
}

pub use policies::exec as policies;
pub mod policies {
	use super::*;

	pub async fn exec(config: &RequestConfig) -> Result<Vec<Policy>, Error> {
		request::get_plain(config, "/admin/permissions/policies").await
	}
}

pub use add_policy::exec as add_policy;
pub mod add_policy {
	use super::*;

	pub async fn exec(config: &RequestConfig, policy: &Policy) -> Result<bool, Error> {
		request::post(config, "/admin/permissions/policies", policy).await
	}
}

pub use remove_policy::exec as remove_policy;
pub mod remove_policy {
	use super::*;

	pub async fn exec(config: &RequestConfig, policy: &Policy) -> Result<bool, Error> {
		request::delete_json(config, "/admin/permissions/policies", policy).await
	}
}

pub use role_links::exec as role_links;
pub mod role_links {
	use super::*;

	pub async fn exec(config: &RequestConfig) -> Result<Vec<RoleLink>, Error> {
		request::get_plain(config, "/admin/permissions/roles").await
	}
}

pub use grant_role::exec as grant_role;
pub mod grant_role {
	use super::*;

	pub async fn exec(config: &RequestConfig, link: &RoleLink) -> Result<bool, Error> {
		request::post(config, "/admin/permissions/roles", link).await
	}
}

pub use revoke_role::exec as revoke_role;
pub mod revoke_role {
	use super::*;

	pub async fn exec(config: &RequestConfig, link: &RoleLink) -> Result<bool, Error> {
		request::delete_json(config, "/admin/permissions/roles", link).await
	}
}

pub use user_roles::exec as user_roles;
pub mod user_roles {
	use super::*;

	pub async fn exec(config: &RequestConfig, user_id: i32) -> Result<Vec<String>, Error> {
		request::get_plain(config, &format!("/admin/permissions/users/{user_id}/roles")).await
	}
}

pub use role_users::exec as role_users;
pub mod role_users {
	use super::*;

	pub async fn exec(config: &RequestConfig, role: &str) -> Result<Vec<String>, Error> {
		request::get_plain(config, &format!("/admin/permissions/roles/{role}/users")).await
	}
}

pub use check::exec as check;
pub mod check {
	use super::*;

	#[derive(Debug, Clone, Serialize)]
	pub struct Input {
		pub user_id: i32,
		pub resource: String,
		pub action: String,
	}

	pub async fn exec(config: &RequestConfig, input: &Input) -> Result<bool, Error> {
		request::post(config, "/admin/permissions/check", input).await
	}
}

pub use reload::exec as reload;
pub mod reload {
	use super::*;

	/// Re-read the policy store on the server after out-of-band edits.
	pub async fn exec(config: &RequestConfig) -> Result<(), Error> {
		request::post_empty(config, "/admin/permissions/reload").await
	}
}
