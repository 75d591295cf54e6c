use anyhow::{Context, Result};

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::build_config;
use crate::cli::CliArgs;

/// Resolve the popover settings: config files and `LIVESEARCH__*` variables
/// first, command-line flags on top, then validation.
pub(crate) fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let mut raw: RawConfig = build_config(cli)?
		.try_deserialize()
		.context("configuration does not match the [popover] and [labels] sections")?;
	raw.apply_cli_overrides(cli);

	let resolved = raw.resolve(cli)?;
	tracing::debug!(
		page_size = resolved.render.page_size,
		min_query_length = resolved.min_query_length,
		active = resolved.active,
		custom_route = resolved.route_template.is_some(),
		"popover settings resolved"
	);
	Ok(resolved)
}
