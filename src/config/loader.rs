use crate::config::parser::parse_config_file;
use crate::config::types::{CONFIG_FILE_NAME, Config, LoadedConfig};
use crate::error::Result;
use std::path::Path;

/// Load the effective configuration for a project.
///
/// Lookup order:
/// 1. `explicit`, when given; it must exist
/// 2. `<root>/.province-migrate.toml`, when present
/// 3. Built-in defaults
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<LoadedConfig> {
	if let Some(path) = explicit {
		return Ok(LoadedConfig {
			config: parse_config_file(path)?,
			path: Some(path.to_path_buf()),
		});
	}

	let config_path = root.join(CONFIG_FILE_NAME);
	if config_path.exists() {
		tracing::debug!(path = %config_path.display(), "loading project config");
		return Ok(LoadedConfig {
			config: parse_config_file(&config_path)?,
			path: Some(config_path),
		});
	}

	Ok(LoadedConfig {
		config: Config::default(),
		path: None,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::MigrateError;
	use std::fs;
	use std::path::PathBuf;

	#[test]
	fn test_defaults_without_config_file() {
		let temp_dir = tempfile::tempdir().unwrap();
		let loaded = load_config(temp_dir.path(), None).unwrap();

		assert!(loaded.path.is_none());
		assert_eq!(loaded.config.files.len(), 4);
	}

	#[test]
	fn test_project_config_discovered_in_root() {
		let temp_dir = tempfile::tempdir().unwrap();
		let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
		fs::write(&config_path, r#"files = ["App.tsx"]"#).unwrap();

		let loaded = load_config(temp_dir.path(), None).unwrap();

		assert_eq!(loaded.path, Some(config_path));
		assert_eq!(loaded.config.files, vec![PathBuf::from("App.tsx")]);
	}

	#[test]
	fn test_explicit_config_wins() {
		let temp_dir = tempfile::tempdir().unwrap();
		fs::write(temp_dir.path().join(CONFIG_FILE_NAME), r#"files = ["A.tsx"]"#).unwrap();
		let explicit = temp_dir.path().join("other.toml");
		fs::write(&explicit, r#"files = ["B.tsx"]"#).unwrap();

		let loaded = load_config(temp_dir.path(), Some(explicit.as_path())).unwrap();

		assert_eq!(loaded.config.files, vec![PathBuf::from("B.tsx")]);
	}

	#[test]
	fn test_missing_explicit_config_is_error() {
		let temp_dir = tempfile::tempdir().unwrap();
		let missing = temp_dir.path().join("missing.toml");

		assert!(matches!(
			load_config(temp_dir.path(), Some(missing.as_path())),
			Err(MigrateError::ConfigReadError { .. })
		));
	}
}
