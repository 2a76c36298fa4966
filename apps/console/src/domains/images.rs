use anyhow::Result;
use clap::{Args, Subcommand};
use kl_admin_api::images;

use crate::context::Context;

#[derive(Subcommand, Debug)]
pub enum ImageCmd {
	/// List images
	List(ListArgs),
	/// Register an image
	Create(CreateArgs),
	/// Update an image record
	Update(UpdateArgs),
	/// Delete an image
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
	#[arg(long)]
	pub object_key: Option<String>,
	#[arg(long)]
	pub status: Option<i16>,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
	pub name: String,
	#[arg(long)]
	pub object_key: String,
	#[arg(long)]
	pub url: String,
	#[arg(long)]
	pub path: String,
	/// Repeat for multiple tags
	#[arg(long)]
	pub tag: Vec<String>,
	#[arg(long, default_value_t = 1)]
	pub status: i16,
	#[arg(long)]
	pub remark: Option<String>,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
	pub id: i32,
	#[arg(long)]
	pub name: Option<String>,
	#[arg(long)]
	pub object_key: Option<String>,
	#[arg(long)]
	pub url: Option<String>,
	#[arg(long)]
	pub path: Option<String>,
	/// Repeat for multiple tags; replaces the existing set
	#[arg(long)]
	pub tag: Vec<String>,
	#[arg(long)]
	pub status: Option<i16>,
	#[arg(long)]
	pub remark: Option<String>,
}

pub async fn run(ctx: &Context, cmd: ImageCmd) -> Result<()> {
	match cmd {
		ImageCmd::List(args) => {
			let params = images::list::Params {
				page: args.page,
				page_size: args.page_size,
				id: args.id,
				name: args.name,
				object_key: args.object_key,
				status: args.status,
			};
			let paging = images::list(&ctx.config, &params).await?;

			ctx.print(&paging, |paging| {
				if paging.list.is_empty() {
					println!("No images found");
					return;
				}
				for image in &paging.list {
					println!("- {} {} ({})", image.id, image.name, image.url);
				}
				println!("page {} ({} total)", paging.page, paging.total);
			})?;
		}
		ImageCmd::Create(args) => {
			let input = images::create::Input {
				name: args.name,
				object_key: args.object_key,
				url: args.url,
				path: args.path,
				tags: if args.tag.is_empty() {
					None
				} else {
					Some(args.tag)
				},
				status: args.status,
				remark: args.remark,
			};
			let image = images::create(&ctx.config, &input).await?;

			ctx.print(&image, |image| {
				println!("Created image {} with id {}", image.name, image.id);
			})?;
		}
		ImageCmd::Update(args) => {
			let input = images::update::Input {
				name: args.name,
				object_key: args.object_key,
				url: args.url,
				path: args.path,
				tags: if args.tag.is_empty() {
					None
				} else {
					Some(args.tag)
				},
				status: args.status,
				remark: args.remark,
			};
			let image = images::update(&ctx.config, args.id, &input).await?;

			ctx.print(&image, |image| {
				println!("Updated image {} ({})", image.id, image.name);
			})?;
		}
		ImageCmd::Delete { id } => {
			images::delete(&ctx.config, id).await?;
			println!("Deleted image {id}");
		}
	}

	Ok(())
}
