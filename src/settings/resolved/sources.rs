use std::fmt;

#[derive(Debug, Clone)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Where the validated settings came from, for error reporting.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) page_size: Option<SettingSource>,
	pub(crate) min_query_length: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for_page_size(&self) -> SettingSource {
		self.page_size
			.clone()
			.unwrap_or(SettingSource::ConfigKey("popover.page_size"))
	}

	pub(crate) fn source_for_min_query_length(&self) -> SettingSource {
		self.min_query_length
			.clone()
			.unwrap_or(SettingSource::ConfigKey("popover.min_query_length"))
	}
}
