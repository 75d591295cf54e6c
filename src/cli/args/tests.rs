use clap::{CommandFactory, FromArgMatches, Parser};

use super::{CliArgs, ClickArg, OutputFormat};

#[test]
fn command_definition_is_valid() {
	CliArgs::command().debug_assert();
}

#[test]
fn parse_cli_accepts_default_arguments() {
	let command = CliArgs::command();
	let mut matches = command.get_matches_from(vec!["livesearch"]);
	let parsed = CliArgs::from_arg_matches_mut(&mut matches).expect("parses");
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert_eq!(parsed.width, 60);
	assert_eq!(parsed.click(), None);
}

#[test]
fn click_flags_map_to_click_arg() {
	let cli = CliArgs::parse_from(["livesearch", "--click-product", "LMP-1"]);
	assert_eq!(cli.click(), Some(ClickArg::Product("LMP-1".into())));

	let cli = CliArgs::parse_from(["livesearch", "--click-suggestion", "lamp shade"]);
	assert_eq!(cli.click(), Some(ClickArg::Suggestion("lamp shade".into())));

	let cli = CliArgs::parse_from(["livesearch", "--click-view-all"]);
	assert_eq!(cli.click(), Some(ClickArg::ViewAll));
}

#[test]
fn click_flags_conflict() {
	let result = CliArgs::try_parse_from([
		"livesearch",
		"--click-product",
		"a",
		"--click-suggestion",
		"b",
	]);
	assert!(result.is_err());
}

#[test]
fn active_accepts_boolish_values() {
	let cli = CliArgs::parse_from(["livesearch", "--active", "off", "-o", "json"]);
	assert_eq!(cli.active, Some(false));
	assert_eq!(cli.output, OutputFormat::Json);
}

#[test]
fn long_version_lists_setting_locations() {
	let banner = super::styles::long_version();
	assert!(banner.starts_with(concat!("livesearch ", env!("CARGO_PKG_VERSION"))));
	assert!(banner.contains("config.toml"));
	assert!(banner.contains("LIVESEARCH__<SECTION>__<KEY>"));
	assert!(banner.contains("log filter: LIVESEARCH_LOG"));
}
