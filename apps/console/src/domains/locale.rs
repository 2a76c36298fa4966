use anyhow::Result;
use clap::Subcommand;
use kl_session::Locale;

use crate::context::Context;

#[derive(Subcommand, Debug)]
pub enum LocaleCmd {
	/// Show the current locale
	Get,
	/// Set the locale ("en" or "zh-cn")
	Set { locale: Locale },
}

pub fn run(ctx: &mut Context, cmd: LocaleCmd) -> Result<()> {
	match cmd {
		LocaleCmd::Get => println!("{}", ctx.store.locale()),
		LocaleCmd::Set { locale } => {
			ctx.store.set_locale(locale)?;
			println!("Locale set to {locale}");
		}
	}

	Ok(())
}
