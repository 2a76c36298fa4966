use anyhow::Result;
use clap::{Args, Subcommand};
use kl_admin_api::roles;

use crate::context::Context;

#[derive(Subcommand, Debug)]
pub enum RoleCmd {
	/// List roles
	List(ListArgs),
	/// Create a role
	Create {
		name: String,
		#[arg(long)]
		remark: Option<String>,
	},
	/// Rename a role
	Update {
		id: i32,
		#[arg(long)]
		name: Option<String>,
	},
	/// Delete a role
	Delete { id: i32 },
}

#[derive(Args, Debug)]
pub struct ListArgs {
	#[arg(long, default_value_t = 1)]
	pub page: u64,
	#[arg(long, default_value_t = 20)]
	pub page_size: u64,
	#[arg(long)]
	pub id: Option<i32>,
	#[arg(long)]
	pub name: Option<String>,
}

pub async fn run(ctx: &Context, cmd: RoleCmd) -> Result<()> {
	match cmd {
		RoleCmd::List(args) => {
			let params = roles::list::Params {
				page: args.page,
				page_size: args.page_size,
				id: args.id,
				name: args.name,
			};
			let paging = roles::list(&ctx.config, &params).await?;

			ctx.print(&paging, |paging| {
				if paging.list.is_empty() {
					println!("No roles found");
					return;
				}
				for role in &paging.list {
					match &role.remark {
						Some(remark) => println!("- {} {} ({remark})", role.id, role.name),
						None => println!("- {} {}", role.id, role.name),
					}
				}
				println!("page {} ({} total)", paging.page, paging.total);
			})?;
		}
		RoleCmd::Create { name, remark } => {
			let input = roles::create::Input { name, remark };
			let role = roles::create(&ctx.config, &input).await?;

			ctx.print(&role, |role| {
				println!("Created role {} with id {}", role.name, role.id);
			})?;
		}
		RoleCmd::Update { id, name } => {
			let input = roles::update::Input { name };
			let role = roles::update(&ctx.config, id, &input).await?;

			ctx.print(&role, |role| {
				println!("Updated role {} ({})", role.id, role.name);
			})?;
		}
		RoleCmd::Delete { id } => {
			roles::delete(&ctx.config, id).await?;
			println!("Deleted role {id}");
		}
	}

	Ok(())
}
