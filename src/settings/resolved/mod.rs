use livesearch::RenderConfig;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedConfig {
	pub(crate) render: RenderConfig,
	pub(crate) min_query_length: usize,
	pub(crate) active: bool,
	pub(crate) route_template: Option<String>,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub(crate) fn print_summary(&self) {
		summary::print_summary(self);
	}
}
