use std::fmt::Write;

use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use livesearch::app_dirs;
use livesearch::logging::LOG_ENV;

/// Version banner listing where settings and log filters are read from.
pub(super) fn long_version() -> &'static str {
	let config_file = match app_dirs::get_config_dir() {
		Ok(path) => path.join("config.toml").display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};

	let mut banner = format!("livesearch {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(banner);
	let _ = writeln!(banner, "user config: {config_file}");
	let _ = writeln!(banner, "local config: ./.livesearch.toml, ./livesearch.toml");
	let _ = writeln!(banner, "environment: LIVESEARCH__<SECTION>__<KEY>");
	let _ = writeln!(banner, "log filter: {LOG_ENV}");

	Box::leak(banner.into_boxed_str())
}

/// Help colours: headings stand out, flags and placeholders are tinted.
pub(super) fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Magenta.on_default().effects(Effects::BOLD | Effects::UNDERLINE))
		.usage(AnsiColor::Magenta.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Blue.on_default().effects(Effects::BOLD))
		.placeholder(AnsiColor::BrightBlack.on_default())
		.error(AnsiColor::Red.on_default().effects(Effects::BOLD))
}
