use anyhow::Result;
use clap::Subcommand;
use kl_admin_api::permissions::{self, Policy, RoleLink};

use crate::context::Context;

#[derive(Subcommand, Debug)]
pub enum PermissionCmd {
	/// List policy rules
	Policies,
	/// Add a policy rule
	AddPolicy {
		subject: String,
		object: String,
		action: String,
	},
	/// Remove a policy rule
	RemovePolicy {
		subject: String,
		object: String,
		action: String,
	},
	/// List user-to-role links
	Links,
	/// Grant a role to a user
	Grant { user: String, role: String },
	/// Revoke a role from a user
	Revoke { user: String, role: String },
	/// List the roles held by a user
	UserRoles { user_id: i32 },
	/// List the users holding a role
	RoleUsers { role: String },
	/// Check whether a user may perform an action on a resource
	Check {
		user_id: i32,
		resource: String,
		action: String,
	},
	/// Reload the policy store on the server
	Reload,
}

pub async fn run(ctx: &Context, cmd: PermissionCmd) -> Result<()> {
	match cmd {
		PermissionCmd::Policies => {
			let policies = permissions::policies(&ctx.config).await?;

			ctx.print(&policies, |policies| {
				if policies.is_empty() {
					println!("No policies found");
					return;
				}
				for p in policies {
					println!("- {} may {} {}", p.subject, p.action, p.object);
				}
			})?;
		}
		PermissionCmd::AddPolicy {
			subject,
			object,
			action,
		} => {
			let policy = Policy {
				subject,
				object,
				action,
			};
			let added = permissions::add_policy(&ctx.config, &policy).await?;
			println!("{}", if added { "Policy added" } else { "Policy already present" });
		}
		PermissionCmd::RemovePolicy {
			subject,
			object,
			action,
		} => {
			let policy = Policy {
				subject,
				object,
				action,
			};
			let removed = permissions::remove_policy(&ctx.config, &policy).await?;
			println!("{}", if removed { "Policy removed" } else { "Policy not found" });
		}
		PermissionCmd::Links => {
			let links = permissions::role_links(&ctx.config).await?;

			ctx.print(&links, |links| {
				if links.is_empty() {
					println!("No role links found");
					return;
				}
				for link in links {
					println!("- {} has {}", link.user, link.role);
				}
			})?;
		}
		PermissionCmd::Grant { user, role } => {
			let link = RoleLink { user, role };
			let granted = permissions::grant_role(&ctx.config, &link).await?;
			println!("{}", if granted { "Role granted" } else { "Role already granted" });
		}
		PermissionCmd::Revoke { user, role } => {
			let link = RoleLink { user, role };
			let revoked = permissions::revoke_role(&ctx.config, &link).await?;
			println!("{}", if revoked { "Role revoked" } else { "Role link not found" });
		}
		PermissionCmd::UserRoles { user_id } => {
			let roles = permissions::user_roles(&ctx.config, user_id).await?;

			ctx.print(&roles, |roles| {
				if roles.is_empty() {
					println!("User {user_id} holds no roles");
					return;
				}
				for role in roles {
					println!("- {role}");
				}
			})?;
		}
		PermissionCmd::RoleUsers { role } => {
			let users = permissions::role_users(&ctx.config, &role).await?;

			ctx.print(&users, |users| {
				if users.is_empty() {
					println!("No users hold {role}");
					return;
				}
				for user in users {
					println!("- {user}");
				}
			})?;
		}
		PermissionCmd::Check {
			user_id,
			resource,
			action,
		} => {
			let input = permissions::check::Input {
				user_id,
				resource,
				action,
			};
			let allowed = permissions::check(&ctx.config, &input).await?;
			println!("{}", if allowed { "allowed" } else { "denied" });
		}
		PermissionCmd::Reload => {
			permissions::reload(&ctx.config).await?;
			println!("Policies reloaded");
		}
	}

	Ok(())
}
