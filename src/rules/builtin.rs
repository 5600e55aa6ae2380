//! The province selector migration rule set.
//!
//! Rules run in the order [`province_selector_rules`] returns them. Each one is a
//! textual best-effort rewrite: a rule whose pattern is absent leaves the buffer
//! untouched, and every rule is a no-op on its own output.

use crate::error::{MigrateError, Result};
use crate::rules::rewriter::Substitution;
use crate::rules::rule::{ImportPrune, Insertion, Rule, RuleKind};
use regex::Regex;

/// Substring whose presence means a file already imports the shared component.
pub const MARKER_IMPORT: &str = "import ProvinceSelector";

/// Module path of the shared component, relative to the screen files.
pub const DEFAULT_IMPORT_PATH: &str = "../../../components/ProvinceSelector";

/// One-line import from a parent directory.
const RELATIVE_IMPORT: &str = r#"import.*from\s+['"]\.\./.*?['"];?\n"#;

/// Named-import statement: head in group 1, brace list in group 2.
const IMPORT_LIST: &str = r"(import\s+(?:type\s+)?(?:[\w$]+\s*,\s*)?)(\{[^}]*\})";

/// Imports only the inline dialog needed.
const PRUNED_IMPORTS: [&str; 2] = ["Modal", "Pressable"];

const LIST_CLEANUP: [&str; 3] = [
	// doubled separator
	r"s#,\s*,#,#g",
	// separator right after the opening brace
	r"s#\{\s*,#{#g",
	// separator right before the closing brace
	r"s#,(\s*)\}#${1}}#g",
];

const DELETIONS: [(&str, &str); 8] = [
	("interface-removal", r"s#interface Province \{[^}]+\}\n*##g"),
	(
		"typed-list-removal",
		r"s#const provinces:\s*Province\[\]\s*=\s*\[[^\]]+\];?\n*##gs",
	),
	(
		"constant-list-removal",
		r"s#const PROVINCES\s*=\s*\[[^\]]+\];?\n*##gs",
	),
	(
		"modal-state-removal",
		r"s#^[ \t]*const \[showProvinceModal,[ \t]*setShowProvinceModal\][ \t]*=[ \t]*useState.*?;?\n##gm",
	),
	(
		"search-state-removal",
		r"s#^[ \t]*const \[provinceSearchKeyword,[ \t]*setProvinceSearchKeyword\][ \t]*=[ \t]*useState.*?;?\n##gm",
	),
	(
		"derived-value-removal",
		r"s#^[ \t]*const filteredProvinces[ \t]*=[ \t]*provinces\.filter.*?;?\n##gm",
	),
	(
		"dialog-removal",
		r"s#[ \t]*<Modal[^>]*visible=\{showProvinceModal\}.*?</Modal>[ \t]*\n?##gs",
	),
	(
		"dialog-marker-removal",
		r"s#[ \t]*(?:\{\s*)?/\*\s*Province Selection Modal\s*\*/(?:\s*\})?.*?</Modal>[ \t]*\n?##gs",
	),
];

/// Build the ordered province selector rule set.
///
/// `import_path` is the module specifier written into the inserted import.
pub fn province_selector_rules(import_path: &str) -> Result<Vec<Rule>> {
	let mut rules = vec![import_insertion(import_path)?, import_pruning()?];

	for (name, expr) in DELETIONS {
		rules.push(Rule::new(
			name,
			RuleKind::Substitute(Substitution::parse(expr)?),
		));
	}

	Ok(rules)
}

fn import_insertion(import_path: &str) -> Result<Rule> {
	let insertion = Insertion {
		anchor: compile_regex(RELATIVE_IMPORT)?,
		marker: MARKER_IMPORT.to_string(),
		text: format!("{MARKER_IMPORT} from '{import_path}';\n"),
	};
	Ok(Rule::new(
		"import-insertion",
		RuleKind::InsertAfterLast(insertion),
	))
}

fn import_pruning() -> Result<Rule> {
	let mut targets = Vec::new();
	let mut edits = Vec::new();

	// Each edit needs a separator or brace on both sides of the name, so
	// `Modal as RNModal` and `X as Modal` entries are left as they are.
	for name in PRUNED_IMPORTS {
		targets.push(compile_regex(&format!(r"\b{name}\b"))?);
		// on its own line, with its trailing separator, as the last entry, as the only entry
		edits.push(Substitution::parse(&format!(
			r"s#^[ \t]*\b{name}\b[ \t]*,?[ \t]*\n##gm"
		))?);
		edits.push(Substitution::parse(&format!(
			r"s#([{{,]\s*)\b{name}\b\s*,\s*#${{1}}#g"
		))?);
		edits.push(Substitution::parse(&format!(
			r"s#,\s*\b{name}\b(\s*\}})#${{1}}#g"
		))?);
		edits.push(Substitution::parse(&format!(
			r"s#\{{\s*\b{name}\b(\s*)\}}#{{${{1}}}}#g"
		))?);
	}
	let cleanup = LIST_CLEANUP
		.iter()
		.map(|expr| Substitution::parse(expr))
		.collect::<Result<Vec<_>>>()?;

	let prune = ImportPrune {
		scope: compile_regex(IMPORT_LIST)?,
		targets,
		edits,
		cleanup,
	};
	Ok(Rule::new("import-pruning", RuleKind::Prune(prune)))
}

/// Compile a regex pattern string.
fn compile_regex(pattern: &str) -> Result<Regex> {
	Regex::new(pattern).map_err(|source| MigrateError::InvalidRegex {
		pattern: pattern.to_string(),
		source,
	})
}
