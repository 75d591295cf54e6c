//! Resolve the configuration directory for `livesearch`.
//!
//! An environment override wins over the platform location provided by the
//! `directories` crate.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const QUALIFIER: &str = "io";
const ORGANIZATION: &str = "livesearch";
const APPLICATION: &str = "livesearch";

const CONFIG_DIR_ENV: &str = "LIVESEARCH_CONFIG_DIR";

fn project_dirs() -> Result<ProjectDirs> {
	ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
		.ok_or_else(|| anyhow!("unable to determine project directories for livesearch"))
}

/// Resolve an override directory from an environment variable.
///
/// An empty string is treated the same as an unset value.
fn dir_from_env(name: &str) -> Option<PathBuf> {
	let value = env::var_os(name)?;
	if value.is_empty() {
		None
	} else {
		Some(PathBuf::from(value))
	}
}

/// Return the directory holding the user's `config.toml`.
pub fn get_config_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(CONFIG_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.config_local_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn unset_variable_is_not_an_override() {
		assert_eq!(dir_from_env("LIVESEARCH_TEST_SURELY_UNSET_DIR"), None);
	}
}
