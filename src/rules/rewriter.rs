use crate::error::{MigrateError, Result};
use regex::{Regex, RegexBuilder};

/// Parsed substitution command (sed-like syntax).
#[derive(Debug, Clone)]
pub struct Substitution {
	/// The pattern to match.
	pub pattern: Regex,

	/// The replacement template. Empty means the match is deleted.
	pub replacement: String,

	/// Whether to replace all occurrences (global flag).
	pub global: bool,
}

impl Substitution {
	/// Parse a substitution string in sed-like format: `s/pattern/replacement/flags`.
	///
	/// Any character may follow the `s` as the delimiter; `\<delimiter>` escapes it.
	/// Supported flags:
	/// - `g`: replace every occurrence instead of the first
	/// - `s`: `.` also matches `\n`, letting a match span lines
	/// - `m`: `^` and `$` match at line boundaries
	/// - `i`: case-insensitive matching
	pub fn parse(input: &str) -> Result<Self> {
		let mut chars = input.chars();

		// Must start with 's'
		if chars.next() != Some('s') {
			return Err(invalid(input, "substitution must start with 's'"));
		}

		// Get the delimiter (character after 's')
		let Some(delimiter) = chars.next() else {
			return Err(invalid(input, "substitution too short"));
		};

		let parts = split_by_delimiter(chars.as_str(), delimiter);

		if parts.len() < 2 {
			return Err(invalid(
				input,
				"substitution must have pattern and replacement",
			));
		}
		if parts.len() > 3 {
			return Err(invalid(input, "unescaped delimiter after flags"));
		}

		let pattern_str = &parts[0];
		let replacement = parts[1].clone();
		let flags = parts.get(2).map(String::as_str).unwrap_or("");

		let mut global = false;
		let mut builder = RegexBuilder::new(pattern_str);
		for flag in flags.chars() {
			match flag {
				'g' => global = true,
				's' => {
					builder.dot_matches_new_line(true);
				}
				'm' => {
					builder.multi_line(true);
				}
				'i' => {
					builder.case_insensitive(true);
				}
				other => return Err(invalid(input, &format!("unknown flag '{other}'"))),
			}
		}

		let pattern = builder
			.build()
			.map_err(|source| MigrateError::InvalidRegex {
				pattern: pattern_str.to_string(),
				source,
			})?;

		Ok(Substitution {
			pattern,
			replacement,
			global,
		})
	}

	/// Apply this substitution to a string.
	pub fn apply(&self, input: &str) -> String {
		if self.global {
			self.pattern
				.replace_all(input, self.replacement.as_str())
				.into_owned()
		} else {
			self.pattern
				.replace(input, self.replacement.as_str())
				.into_owned()
		}
	}

	/// True when the substitution removes what it matches.
	pub fn is_deletion(&self) -> bool {
		self.replacement.is_empty()
	}
}

fn invalid(input: &str, reason: &str) -> MigrateError {
	MigrateError::InvalidSubstitution {
		input: input.to_string(),
		reason: reason.to_string(),
	}
}

/// Split a string by a delimiter, respecting backslash escapes.
fn split_by_delimiter(input: &str, delimiter: char) -> Vec<String> {
	let mut parts = Vec::new();
	let mut current = String::new();
	let mut chars = input.chars().peekable();
	let mut escape_next = false;

	while let Some(c) = chars.next() {
		if escape_next {
			current.push(c);
			escape_next = false;
		} else if c == '\\' {
			// Check if we're escaping the delimiter
			if chars.peek() == Some(&delimiter) {
				escape_next = true;
			} else {
				current.push(c);
			}
		} else if c == delimiter {
			parts.push(current);
			current = String::new();
		} else {
			current.push(c);
		}
	}

	// Add the last part
	parts.push(current);

	parts
}
