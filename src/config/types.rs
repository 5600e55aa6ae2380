use crate::error::{MigrateError, Result};
use crate::rules::DEFAULT_IMPORT_PATH;
use serde::Deserialize;
use std::path::PathBuf;

/// Screens migrated when no config file overrides the list, relative to the project root.
pub const DEFAULT_TARGETS: [&str; 4] = [
	"src/screens/main/ProfileScreen/EditProfileScreen.tsx",
	"src/screens/main/DistributionSystemScreen/DistributionSystemScreen.tsx",
	"src/screens/auth/SignupScreen/DealerSignupScreen.tsx",
	"src/screens/main/WarrantyReportScreen/WarrantyReportScreen.tsx",
];

/// Config file looked up in the project root.
pub const CONFIG_FILE_NAME: &str = ".province-migrate.toml";

/// Top-level configuration from a `.province-migrate.toml` file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
	/// Files to migrate, in processing order. Relative to the project root.
	#[serde(default = "default_files")]
	pub files: Vec<PathBuf>,

	/// Module specifier used in the inserted `ProvinceSelector` import.
	#[serde(default = "default_import_path")]
	pub import_path: String,

	/// Substitutions run after the built-in rules, in declaration order.
	#[serde(default)]
	pub extra_rules: Vec<ExtraRule>,
}

/// A user-supplied substitution rule.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtraRule {
	/// Name shown in reports and logs.
	pub name: String,

	/// Sed-like substitution: "s#pattern#replacement#flags".
	pub substitution: String,
}

/// A configuration with the file it was loaded from, if any.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
	/// The parsed configuration.
	pub config: Config,

	/// The path this config was loaded from; `None` for built-in defaults.
	pub path: Option<PathBuf>,
}

fn default_files() -> Vec<PathBuf> {
	DEFAULT_TARGETS.iter().map(PathBuf::from).collect()
}

fn default_import_path() -> String {
	DEFAULT_IMPORT_PATH.to_string()
}

impl Default for Config {
	fn default() -> Self {
		Config {
			files: default_files(),
			import_path: default_import_path(),
			extra_rules: Vec::new(),
		}
	}
}

impl Config {
	/// Validate target paths, the import path and extra rule names.
	pub fn validate(&self) -> Result<()> {
		if let Some(path) = self.files.iter().find(|path| path.is_absolute()) {
			return Err(MigrateError::AbsoluteTarget { path: path.clone() });
		}

		if self.import_path.trim().is_empty() {
			return Err(MigrateError::EmptyImportPath);
		}

		if let Some(index) = self
			.extra_rules
			.iter()
			.position(|rule| rule.name.trim().is_empty())
		{
			return Err(MigrateError::UnnamedRule { index: index + 1 });
		}

		Ok(())
	}
}
