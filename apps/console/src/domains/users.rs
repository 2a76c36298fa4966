use anyhow::Result;
use clap::{Args, Subcommand};
use kl_admin_api::users;

use crate::context::Context;

#[derive(Subcommand, Debug)]
pub enum UserCmd {
	/// List users
	List(ListArgs),
	/// Create a user
	Create {
		username: String,
		password: String,
		#[arg(long)]
		role_id: Option<i32>,
	},
	/// Update a user
	Update(UpdateArgs),
	/// Delete a user
	Delete { id: i32 },
}

#[derive(Args, Debug)]
pub struct ListArgs {
	#[arg(long, default_value_t = 1)]
	pub page: u64,
	#[arg(long, default_value_t = 20)]
	pub page_size: u64,
	/// Filter by username
	#[arg(long)]
	pub username: Option<String>,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
	pub id: i32,
	#[arg(long)]
	pub username: Option<String>,
	#[arg(long)]
	pub password: Option<String>,
	#[arg(long)]
	pub role_id: Option<i32>,
	#[arg(long)]
	pub balance: Option<i64>,
}

pub async fn run(ctx: &Context, cmd: UserCmd) -> Result<()> {
	match cmd {
		UserCmd::List(args) => {
			let params = users::list::Params {
				page: args.page,
				page_size: args.page_size,
				username: args.username,
			};
			let paging = users::list(&ctx.config, &params).await?;

			ctx.print(&paging, |paging| {
				if paging.list.is_empty() {
					println!("No users found");
					return;
				}
				for user in &paging.list {
					println!(
						"- {} {} (role {}, balance {})",
						user.id, user.username, user.role_name, user.balance
					);
				}
				println!("page {} ({} total)", paging.page, paging.total);
			})?;
		}
		UserCmd::Create {
			username,
			password,
			role_id,
		} => {
			let input = users::create::Input {
				username,
				password,
				role_id,
			};
			let user = users::create(&ctx.config, &input).await?;

			ctx.print(&user, |user| {
				println!("Created user {} with id {}", user.username, user.id);
			})?;
		}
		UserCmd::Update(args) => {
			let input = users::update::Input {
				username: args.username,
				password: args.password,
				role_id: args.role_id,
				balance: args.balance,
			};
			let user = users::update(&ctx.config, args.id, &input).await?;

			ctx.print(&user, |user| {
				println!("Updated user {} ({})", user.id, user.username);
			})?;
		}
		UserCmd::Delete { id } => {
			users::delete(&ctx.config, id).await?;
			println!("Deleted user {id}");
		}
	}

	Ok(())
}
