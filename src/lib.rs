//! province-migrate - codemod replacing hand-written province selectors with
//! the shared `ProvinceSelector` component.
//!
//! This library provides the core functionality, including:
//! - Sed-like substitution rules and the built-in migration rule set
//! - An ordered, stateless rewrite pipeline
//! - A fail-fast batch runner with per-file outcomes
//! - Optional TOML configuration
//!
//! # Example
//!
//! ```no_run
//! use province_migrate::batch::{BatchRunner, report};
//! use province_migrate::config::load_config;
//! use province_migrate::pipeline::Pipeline;
//! use std::path::Path;
//!
//! let root = Path::new(".");
//! let loaded = load_config(root, None).unwrap();
//! let pipeline = Pipeline::from_config(&loaded.config).unwrap();
//!
//! let batch = BatchRunner::new(&pipeline, root).run(&loaded.config.files, |outcome| {
//!     println!("{}", report::status_line(outcome));
//! });
//! assert!(batch.is_success());
//! ```

pub mod batch;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod rules;

pub use error::{MigrateError, Result};
