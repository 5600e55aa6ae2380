//! Rewrite rules for province-migrate.
//!
//! This module handles:
//! - Sed-like substitutions (`s#pattern#replacement#flags`)
//! - Rule kinds: substitution, marker-keyed insertion, import-list pruning
//! - The built-in province selector rule set

pub mod builtin;
pub mod rewriter;
pub mod rule;

pub use builtin::{DEFAULT_IMPORT_PATH, MARKER_IMPORT, province_selector_rules};
pub use rewriter::Substitution;
pub use rule::{ImportPrune, Insertion, Rule, RuleKind};
