use anyhow::Result;
use clap::{Args, Subcommand};
use kl_admin_api::reg_codes;

use crate::context::Context;

#[derive(Subcommand, Debug)]
pub enum RegCodeCmd {
	/// List registration codes
	List(ListArgs),
	/// Create a single registration code
	Create(CreateArgs),
	/// Generate a batch of registration codes
	Batch(BatchArgs),
	/// Update a registration code
	Update(UpdateArgs),
	/// Delete a registration code
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
	pub code: Option<String>,
	#[arg(long)]
	pub app_id: Option<i32>,
	#[arg(long)]
	pub status: Option<i16>,
	/// 0 = time-limited, 1 = count-limited
	#[arg(long)]
	pub code_type: Option<i16>,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
	pub code: String,
	#[arg(long)]
	pub app_id: i32,
	/// 0 = time-limited, 1 = count-limited
	#[arg(long, default_value_t = 0)]
	pub code_type: i16,
	#[arg(long, default_value_t = 365)]
	pub valid_days: i32,
	#[arg(long, default_value_t = 1)]
	pub max_devices: i32,
	#[arg(long, default_value_t = 1)]
	pub status: i16,
	/// Number of activations for count-limited codes
	#[arg(long)]
	pub total_count: Option<i32>,
}

#[derive(Args, Debug)]
pub struct BatchArgs {
	#[arg(long)]
	pub app_id: i32,
	#[arg(long)]
	pub quantity: u32,
	/// 0 = time-limited, 1 = count-limited
	#[arg(long, default_value_t = 0)]
	pub code_type: i16,
	#[arg(long)]
	pub valid_days: Option<i32>,
	#[arg(long)]
	pub total_count: Option<i32>,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
	pub id: i32,
	#[arg(long)]
	pub code: Option<String>,
	#[arg(long)]
	pub app_id: Option<i32>,
	#[arg(long)]
	pub valid_days: Option<i32>,
	#[arg(long)]
	pub max_devices: Option<i32>,
	#[arg(long)]
	pub status: Option<i16>,
	#[arg(long)]
	pub code_type: Option<i16>,
	#[arg(long)]
	pub total_count: Option<i32>,
	#[arg(long)]
	pub use_count: Option<i32>,
	#[arg(long)]
	pub device_id: Option<String>,
}

pub async fn run(ctx: &Context, cmd: RegCodeCmd) -> Result<()> {
	match cmd {
		RegCodeCmd::List(args) => {
			let params = reg_codes::list::Params {
				page: args.page,
				page_size: args.page_size,
				id: args.id,
				code: args.code,
				app_id: args.app_id,
				status: args.status,
				code_type: args.code_type,
			};
			let paging = reg_codes::list(&ctx.config, &params).await?;

			ctx.print(&paging, |paging| {
				if paging.list.is_empty() {
					println!("No registration codes found");
					return;
				}
				for rc in &paging.list {
					let app = rc.app_name.as_deref().unwrap_or("?");
					println!(
						"- {} {} (app {app}, status {}, used {}/{})",
						rc.id,
						rc.code,
						rc.status,
						rc.use_count,
						rc.total_count
							.map(|n| n.to_string())
							.unwrap_or_else(|| "∞".to_owned()),
					);
				}
				println!("page {} ({} total)", paging.page, paging.total);
			})?;
		}
		RegCodeCmd::Create(args) => {
			let input = reg_codes::create::Input {
				code: args.code,
				app_id: args.app_id,
				bind_device_info: None,
				valid_days: args.valid_days,
				max_devices: args.max_devices,
				status: args.status,
				code_type: args.code_type,
				expire_time: None,
				total_count: args.total_count,
			};
			let rc = reg_codes::create(&ctx.config, &input).await?;

			ctx.print(&rc, |rc| {
				println!("Created registration code {} with id {}", rc.code, rc.id);
			})?;
		}
		RegCodeCmd::Batch(args) => {
			let input = reg_codes::batch_create::Input {
				app_id: args.app_id,
				quantity: args.quantity,
				code_type: args.code_type,
				valid_days: args.valid_days,
				total_count: args.total_count,
			};
			let codes = reg_codes::batch_create(&ctx.config, &input).await?;

			ctx.print(&codes, |codes| {
				println!("Generated {} registration codes:", codes.len());
				for rc in codes {
					println!("- {}", rc.code);
				}
			})?;
		}
		RegCodeCmd::Update(args) => {
			let input = reg_codes::update::Input {
				code: args.code,
				app_id: args.app_id,
				valid_days: args.valid_days,
				max_devices: args.max_devices,
				status: args.status,
				code_type: args.code_type,
				total_count: args.total_count,
				use_count: args.use_count,
				device_id: args.device_id,
				..Default::default()
			};
			let rc = reg_codes::update(&ctx.config, args.id, &input).await?;

			ctx.print(&rc, |rc| {
				println!("Updated registration code {} ({})", rc.id, rc.code);
			})?;
		}
		RegCodeCmd::Delete { id } => {
			reg_codes::delete(&ctx.config, id).await?;
			println!("Deleted registration code {id}");
		}
	}

	Ok(())
}
