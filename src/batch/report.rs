use crate::batch::{BatchReport, FileOutcome, FileStatus};
use crate::error::error_chain;

/// Lines printed for every file that was loaded and processed.
pub fn progress_lines(outcome: &FileOutcome) -> [String; 2] {
	[
		format!("Processed: {}", outcome.path.display()),
		format!("Changes made: {}", outcome.changed),
	]
}

/// Final per-file marker line.
pub fn status_line(outcome: &FileOutcome) -> String {
	let path = outcome.path.display();
	match outcome.status() {
		FileStatus::Updated => format!("✓ Updated: {path}"),
		FileStatus::WouldUpdate => format!("~ Would update: {path}"),
		FileStatus::NoChange => format!("- No changes: {path}"),
		FileStatus::Error => match &outcome.failure {
			Some(failure) => format!("✗ Error processing {path}: {}", error_chain(failure)),
			None => format!("✗ Error processing {path}"),
		},
	}
}

/// One-line summary of a completed batch; `None` after an abort.
pub fn summary_line(report: &BatchReport, dry_run: bool) -> Option<String> {
	if !report.is_success() {
		return None;
	}
	let verb = if dry_run { "would change" } else { "updated" };
	Some(format!(
		"{} of {} files {verb}",
		report.changed_count(),
		report.outcomes.len()
	))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::MigrateError;
	use std::path::PathBuf;

	fn outcome(changed: bool, written: bool) -> FileOutcome {
		FileOutcome {
			path: PathBuf::from("src/Screen.tsx"),
			changed,
			written,
			fired: Vec::new(),
			failure: None,
		}
	}

	#[test]
	fn test_progress_lines() {
		assert_eq!(
			progress_lines(&outcome(true, true)),
			["Processed: src/Screen.tsx", "Changes made: true"]
		);
	}

	#[test]
	fn test_status_markers() {
		assert_eq!(status_line(&outcome(true, true)), "✓ Updated: src/Screen.tsx");
		assert_eq!(
			status_line(&outcome(true, false)),
			"~ Would update: src/Screen.tsx"
		);
		assert_eq!(
			status_line(&outcome(false, false)),
			"- No changes: src/Screen.tsx"
		);
	}

	#[test]
	fn test_error_line_names_path_and_cause() {
		let failed = FileOutcome {
			failure: Some(MigrateError::ReadFailed {
				path: PathBuf::from("src/Screen.tsx"),
				source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
			}),
			..outcome(false, false)
		};
		assert_eq!(
			status_line(&failed),
			"✗ Error processing src/Screen.tsx: Failed to read src/Screen.tsx: not found"
		);
	}

	#[test]
	fn test_no_summary_after_abort() {
		let report = BatchReport {
			outcomes: vec![outcome(true, true), outcome(false, false)],
			aborted: None,
		};
		assert_eq!(
			summary_line(&report, false).as_deref(),
			Some("1 of 2 files updated")
		);

		let aborted = BatchReport {
			outcomes: vec![outcome(true, true)],
			aborted: Some(outcome(false, false)),
		};
		assert!(summary_line(&aborted, false).is_none());
	}
}
