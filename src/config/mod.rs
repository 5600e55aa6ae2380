//! Configuration loading and parsing for province-migrate.
//!
//! This module handles:
//! - TOML config file parsing and validation
//! - Project config discovery
//! - Built-in defaults (target list, import path)

pub mod loader;
pub mod parser;
pub mod types;

pub use loader::load_config;
pub use parser::{parse_config_file, parse_config_str};
pub use types::{CONFIG_FILE_NAME, Config, DEFAULT_TARGETS, ExtraRule, LoadedConfig};
