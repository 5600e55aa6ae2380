use crate::rules::rewriter::Substitution;
use regex::{Captures, Regex};

/// A named rewrite rule, one stage of the pipeline.
#[derive(Debug, Clone)]
pub struct Rule {
	name: String,
	kind: RuleKind,
}

/// How a rule rewrites a buffer.
#[derive(Debug, Clone)]
pub enum RuleKind {
	/// Regex substitution; an empty replacement deletes the match.
	Substitute(Substitution),

	/// Insert text after the last anchor match unless a marker is present.
	InsertAfterLast(Insertion),

	/// Strip identifiers from matched import lists, then tidy separators.
	Prune(ImportPrune),
}

impl Rule {
	pub fn new(name: impl Into<String>, kind: RuleKind) -> Self {
		Rule {
			name: name.into(),
			kind,
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn kind(&self) -> &RuleKind {
		&self.kind
	}

	/// Apply this rule to a buffer. A rule that finds nothing returns the input unchanged.
	pub fn apply(&self, buffer: &str) -> String {
		match &self.kind {
			RuleKind::Substitute(sub) => sub.apply(buffer),
			RuleKind::InsertAfterLast(insertion) => insertion.apply(buffer),
			RuleKind::Prune(prune) => prune.apply(buffer),
		}
	}
}

/// Additive insertion keyed on a marker substring.
#[derive(Debug, Clone)]
pub struct Insertion {
	/// Statement shape the text is inserted after (last match wins).
	pub anchor: Regex,

	/// Presence of this substring means the text was already inserted.
	pub marker: String,

	/// Text to insert. Must contain `marker`.
	pub text: String,
}

impl Insertion {
	pub fn apply(&self, buffer: &str) -> String {
		if buffer.contains(&self.marker) {
			return buffer.to_string();
		}

		let Some(last) = self.anchor.find_iter(buffer).last() else {
			return buffer.to_string();
		};

		let (head, tail) = buffer.split_at(last.end());
		let mut out = String::with_capacity(buffer.len() + self.text.len());
		out.push_str(head);
		out.push_str(&self.text);
		out.push_str(tail);
		out
	}
}

/// Edits confined to the brace list of matching import statements.
#[derive(Debug, Clone)]
pub struct ImportPrune {
	/// Group 1 is the statement head kept verbatim, group 2 the `{ ... }` list.
	pub scope: Regex,

	/// A list is only edited when one of these matches inside it.
	pub targets: Vec<Regex>,

	/// Edits applied in order to the list text.
	pub edits: Vec<Substitution>,

	/// Separator tidying, run only on lists the edits changed.
	pub cleanup: Vec<Substitution>,
}

impl ImportPrune {
	pub fn apply(&self, buffer: &str) -> String {
		self.scope
			.replace_all(buffer, |caps: &Captures| {
				let list = &caps[2];
				if !self.targets.iter().any(|target| target.is_match(list)) {
					return caps[0].to_string();
				}
				let pruned = fold_edits(&self.edits, list.to_string());
				if pruned == list {
					return caps[0].to_string();
				}
				format!("{}{}", &caps[1], fold_edits(&self.cleanup, pruned))
			})
			.into_owned()
	}
}

fn fold_edits(edits: &[Substitution], text: String) -> String {
	edits.iter().fold(text, |acc, edit| edit.apply(&acc))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn insertion() -> Insertion {
		Insertion {
			anchor: Regex::new(r"import .*;\n").unwrap(),
			marker: "import Extra".to_string(),
			text: "import Extra from './Extra';\n".to_string(),
		}
	}

	#[test]
	fn test_insertion_after_last_anchor() {
		let input = "import A from './A';\nimport B from './B';\n\nrun();\n";
		assert_eq!(
			insertion().apply(input),
			"import A from './A';\nimport B from './B';\nimport Extra from './Extra';\n\nrun();\n"
		);
	}

	#[test]
	fn test_insertion_skipped_when_marker_present() {
		let input = "import A from './A';\nimport Extra from './Extra';\n";
		assert_eq!(insertion().apply(input), input);
	}

	#[test]
	fn test_insertion_without_anchor_is_noop() {
		let input = "const x = 1;\n";
		assert_eq!(insertion().apply(input), input);
	}

	#[test]
	fn test_prune_leaves_untargeted_lists_alone() {
		let prune = ImportPrune {
			scope: Regex::new(r"(import\s+)(\{[^}]*\})").unwrap(),
			targets: vec![Regex::new(r"\bGone\b").unwrap()],
			edits: vec![Substitution::parse(r"s/\s*\bGone\b\s*,//g").unwrap()],
			cleanup: vec![Substitution::parse(r"s/,(\s*)\}/$1}/g").unwrap()],
		};
		let input = "import { Kept, } from 'a';\nimport { Gone, Kept, } from 'b';\n";
		assert_eq!(
			prune.apply(input),
			"import { Kept, } from 'a';\nimport { Kept } from 'b';\n"
		);
	}

	#[test]
	fn test_prune_skips_cleanup_when_edits_find_nothing() {
		let prune = ImportPrune {
			scope: Regex::new(r"(import\s+)(\{[^}]*\})").unwrap(),
			targets: vec![Regex::new(r"\bGone\b").unwrap()],
			edits: vec![Substitution::parse(r"s/\{\s*\bGone\b\s*,\s*/{ /g").unwrap()],
			cleanup: vec![Substitution::parse(r"s/,(\s*)\}/$1}/g").unwrap()],
		};
		let input = "import { Kept, Gone as Other, } from 'a';\n";
		assert_eq!(prune.apply(input), input);
	}

	#[test]
	fn test_rule_dispatches_by_kind() {
		let rule = Rule::new(
			"rename",
			RuleKind::Substitute(Substitution::parse("s/a/b/g").unwrap()),
		);
		assert_eq!(rule.name(), "rename");
		assert_eq!(rule.apply("aa"), "bb");
	}
}
