use anyhow::Result;
use clap::{Args, Subcommand};
use kl_admin_api::devices;

use crate::context::Context;

#[derive(Subcommand, Debug)]
pub enum DeviceCmd {
	/// List devices bound to licensed apps
	List(ListArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
	#[arg(long, default_value_t = 1)]
	pub page: u64,
	#[arg(long, default_value_t = 20)]
	pub page_size: u64,
	/// Filter by app
	#[arg(long)]
	pub app_id: Option<i32>,
	/// Filter by device identifier
	#[arg(long)]
	pub device_id: Option<String>,
}

pub async fn run(ctx: &Context, cmd: DeviceCmd) -> Result<()> {
	match cmd {
		DeviceCmd::List(args) => {
			let params = devices::list::Params {
				page: args.page,
				page_size: args.page_size,
				app_id: args.app_id,
				device_id: args.device_id,
			};
			let paging = devices::list(&ctx.config, &params).await?;

			ctx.print(&paging, |paging| {
				if paging.list.is_empty() {
					println!("No devices found");
					return;
				}
				for device in &paging.list {
					let expires = device
						.expire_time
						.map(|t| t.to_rfc3339())
						.unwrap_or_else(|| "never".to_owned());
					println!(
						"- {} {} (app {}, expires {expires})",
						device.id, device.device_id, device.app_name
					);
				}
				println!("page {} ({} total)", paging.page, paging.total);
			})?;
		}
	}

	Ok(())
}
