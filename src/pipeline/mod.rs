//! The ordered rewrite pipeline.
//!
//! A [`Pipeline`] threads one buffer through its rules in order: the output of
//! rule *i* is the input of rule *i + 1*. It holds no state between buffers.

use crate::config::Config;
use crate::error::Result;
use crate::rules::{Rule, RuleKind, Substitution, province_selector_rules};

/// Fixed, ordered composition of rewrite rules.
#[derive(Debug, Clone)]
pub struct Pipeline {
	rules: Vec<Rule>,
}

/// Result of running a buffer through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
	/// The rewritten buffer.
	pub text: String,

	/// Names of the rules that changed the buffer, in application order.
	pub fired: Vec<String>,
}

impl Pipeline {
	pub fn new(rules: Vec<Rule>) -> Self {
		Pipeline { rules }
	}

	/// The built-in province selector migration.
	pub fn province_selector(import_path: &str) -> Result<Self> {
		Ok(Pipeline::new(province_selector_rules(import_path)?))
	}

	/// Built-in rules followed by the config's extra rules.
	pub fn from_config(config: &Config) -> Result<Self> {
		let mut rules = province_selector_rules(&config.import_path)?;
		for extra in &config.extra_rules {
			let sub = Substitution::parse(&extra.substitution)?;
			rules.push(Rule::new(extra.name.clone(), RuleKind::Substitute(sub)));
		}
		Ok(Pipeline::new(rules))
	}

	pub fn rules(&self) -> &[Rule] {
		&self.rules
	}

	/// Apply every rule in order.
	pub fn apply(&self, buffer: &str) -> String {
		self.rewrite(buffer).text
	}

	/// Apply every rule in order, recording which ones changed the buffer.
	///
	/// Rules see `\n` line endings. A buffer containing `\r\n` is normalised
	/// first and written back with `\r\n` endings; a buffer no rule changes is
	/// returned byte for byte.
	pub fn rewrite(&self, buffer: &str) -> Rewrite {
		let crlf = buffer.contains("\r\n");
		let mut text = if crlf {
			buffer.replace("\r\n", "\n")
		} else {
			buffer.to_string()
		};
		let mut fired = Vec::new();

		for rule in &self.rules {
			let next = rule.apply(&text);
			if next != text {
				tracing::trace!(
					rule = rule.name(),
					before = text.len(),
					after = next.len(),
					"rule rewrote buffer"
				);
				fired.push(rule.name().to_string());
				text = next;
			}
		}

		if fired.is_empty() {
			text = buffer.to_string();
		} else if crlf {
			text = text.replace('\n', "\r\n");
		}

		Rewrite { text, fired }
	}
}
