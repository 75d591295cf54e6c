use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	let counts = [
		(
			"popover.page_size",
			config.render.page_size,
			sources.source_for_page_size(),
		),
		(
			"popover.min_query_length",
			config.min_query_length,
			sources.source_for_min_query_length(),
		),
	];

	for (key, value, origin) in counts {
		if value < MINIMUM_COUNT {
			return Err(ConfigError::BelowMinimum {
				key,
				value,
				minimum: MINIMUM_COUNT,
				origin,
			});
		}
	}

	Ok(())
}

const MINIMUM_COUNT: usize = 1;
