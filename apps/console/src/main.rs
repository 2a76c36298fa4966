use anyhow::{anyhow, bail, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod config;
mod context;
mod domains;
mod routes;

use config::ConsoleConfig;
use context::{Context, OutputFormat};
use domains::{
	auth::AuthCmd, config::ConfigCmd, devices::DeviceCmd, images::ImageCmd, locale::LocaleCmd,
	permissions::PermissionCmd, reg_codes::RegCodeCmd, roles::RoleCmd, users::UserCmd,
};
use routes::{Navigation, Screen};

#[derive(Parser, Debug)]
#[command(name = "keyline", about = "Keyline admin console")]
struct Cli {
	/// Path to the console data directory
	#[arg(long)]
	data_dir: Option<std::path::PathBuf>,

	/// Base URL of the admin API
	#[arg(long, env = "KEYLINE_API_URL")]
	api_url: Option<String>,

	/// Output format
	#[arg(long, value_enum, default_value = "human")]
	format: OutputFormat,

	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// Session and account commands
	#[command(subcommand)]
	Auth(AuthCmd),
	/// User administration
	#[command(subcommand)]
	Users(UserCmd),
	/// Role administration
	#[command(subcommand)]
	Roles(RoleCmd),
	/// Policy and role-link administration
	#[command(subcommand)]
	Permissions(PermissionCmd),
	/// Devices bound to licensed apps
	#[command(subcommand)]
	Devices(DeviceCmd),
	/// Image library administration
	#[command(subcommand)]
	Images(ImageCmd),
	/// Registration-code administration
	#[command(subcommand)]
	RegCodes(RegCodeCmd),
	/// Show or change the console locale
	#[command(subcommand)]
	Locale(LocaleCmd),
	/// Show or change console configuration
	#[command(subcommand)]
	Config(ConfigCmd),
}

impl Commands {
	/// The screen a command navigates to, for the route guard. Logging out
	/// and the locale preference sit outside the routed surface.
	fn screen(&self) -> Option<Screen> {
		match self {
			Commands::Auth(AuthCmd::Login { .. }) => Some(Screen::Login),
			Commands::Auth(AuthCmd::Register { .. }) => Some(Screen::Register),
			Commands::Auth(AuthCmd::Whoami) => Some(Screen::Dashboard),
			Commands::Auth(AuthCmd::Logout) => None,
			Commands::Users(_) => Some(Screen::Users),
			Commands::Roles(_) => Some(Screen::Roles),
			Commands::Permissions(_) => Some(Screen::Permissions),
			Commands::Devices(_) => Some(Screen::Devices),
			Commands::Images(_) => Some(Screen::Images),
			Commands::RegCodes(_) => Some(Screen::RegCodes),
			Commands::Locale(_) => None,
			Commands::Config(_) => None,
		}
	}
}

fn default_data_dir() -> Result<std::path::PathBuf> {
	directories::ProjectDirs::from("com", "Keyline", "keyline")
		.map(|dirs| dirs.data_dir().to_path_buf())
		.ok_or_else(|| anyhow!("unable to determine a data directory; pass --data-dir"))
}

#[tokio::main]
async fn main() -> Result<()> {
	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
		)
		.init();

	let cli = Cli::parse();

	let data_dir = match cli.data_dir {
		Some(dir) => dir,
		None => default_data_dir()?,
	};

	let console_config = ConsoleConfig::load(&data_dir)?;
	let api_url = cli.api_url.unwrap_or(console_config.api_url);

	let store = kl_session::SessionStore::load(&data_dir)?;
	let mut ctx = Context::new(&api_url, store, cli.format);

	if let Some(screen) = cli.command.screen() {
		if let Navigation::RedirectToLogin = routes::resolve(screen, ctx.store.is_authenticated())
		{
			bail!("not authenticated: run `keyline auth login <username> <password>` first");
		}
	}

	match cli.command {
		Commands::Auth(cmd) => domains::auth::run(&mut ctx, cmd).await,
		Commands::Users(cmd) => domains::users::run(&ctx, cmd).await,
		Commands::Roles(cmd) => domains::roles::run(&ctx, cmd).await,
		Commands::Permissions(cmd) => domains::permissions::run(&ctx, cmd).await,
		Commands::Devices(cmd) => domains::devices::run(&ctx, cmd).await,
		Commands::Images(cmd) => domains::images::run(&ctx, cmd).await,
		Commands::RegCodes(cmd) => domains::reg_codes::run(&ctx, cmd).await,
		Commands::Locale(cmd) => domains::locale::run(&mut ctx, cmd),
		Commands::Config(cmd) => domains::config::run(&data_dir, cmd),
	}
}
