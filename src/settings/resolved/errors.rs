use thiserror::Error;

use super::SettingSource;

/// A popover setting that resolved to a value the renderer cannot work with.
#[derive(Debug, Error)]
pub(crate) enum ConfigError {
	#[error("{key} must be at least {minimum}, got {value} from {origin}")]
	BelowMinimum {
		key: &'static str,
		value: usize,
		minimum: usize,
		origin: SettingSource,
	},
}

impl ConfigError {
	/// Dotted configuration key of the offending setting.
	pub(crate) fn key(&self) -> &'static str {
		match self {
			Self::BelowMinimum { key, .. } => *key,
		}
	}
}
