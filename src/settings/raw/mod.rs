use anyhow::{Error, Result};
use serde::Deserialize;
use std::env;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod labels;
mod popover;

use labels::LabelsSection;
use popover::PopoverSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	popover: PopoverSection,
	labels: LabelsSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.popover.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			page_size: detect_source(
				cli.page_size.is_some(),
				self.popover.page_size.is_some(),
				"LIVESEARCH__POPOVER__PAGE_SIZE",
				"--page-size",
				"popover.page_size",
			),
			min_query_length: detect_source(
				cli.min_query_length.is_some(),
				self.popover.min_query_length.is_some(),
				"LIVESEARCH__POPOVER__MIN_QUERY_LENGTH",
				"--min-query-length",
				"popover.min_query_length",
			),
		};

		let labels = self.labels.finalize();
		let config = self.popover.finalize(labels);

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
