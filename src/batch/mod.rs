//! Batch processing of target files.
//!
//! This module handles:
//! - Loading each target, running the pipeline, and writing back on change
//! - Fail-fast abort on the first unreadable or unwritable file
//! - Per-file outcomes and console status lines

pub mod report;

use crate::error::{MigrateError, Result};
use crate::pipeline::Pipeline;
use std::path::{Path, PathBuf};

/// Result of processing one file. Never mutated after creation.
#[derive(Debug)]
pub struct FileOutcome {
	/// Target path as given, relative to the project root.
	pub path: PathBuf,

	/// Whether the rewritten content differs from what was loaded.
	pub changed: bool,

	/// Whether the new content was written to disk.
	pub written: bool,

	/// Rules that changed the buffer, in application order.
	pub fired: Vec<String>,

	/// Why the file could not be processed.
	pub failure: Option<MigrateError>,
}

/// Per-file marker shown in console output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
	Updated,
	WouldUpdate,
	NoChange,
	Error,
}

impl FileOutcome {
	fn failed(path: &Path, failure: MigrateError) -> Self {
		FileOutcome {
			path: path.to_path_buf(),
			changed: false,
			written: false,
			fired: Vec::new(),
			failure: Some(failure),
		}
	}

	pub fn status(&self) -> FileStatus {
		match (&self.failure, self.changed, self.written) {
			(Some(_), _, _) => FileStatus::Error,
			(None, true, true) => FileStatus::Updated,
			(None, true, false) => FileStatus::WouldUpdate,
			(None, false, _) => FileStatus::NoChange,
		}
	}
}

/// Outcomes of a batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
	/// Files processed successfully, in list order.
	pub outcomes: Vec<FileOutcome>,

	/// The file that stopped the batch, if any. Later paths were not touched.
	pub aborted: Option<FileOutcome>,
}

impl BatchReport {
	pub fn is_success(&self) -> bool {
		self.aborted.is_none()
	}

	pub fn changed_count(&self) -> usize {
		self.outcomes.iter().filter(|o| o.changed).count()
	}
}

/// Runs the pipeline over a list of files, one at a time.
#[derive(Debug)]
pub struct BatchRunner<'a> {
	pipeline: &'a Pipeline,
	root: PathBuf,
	dry_run: bool,
}

impl<'a> BatchRunner<'a> {
	pub fn new(pipeline: &'a Pipeline, root: impl Into<PathBuf>) -> Self {
		BatchRunner {
			pipeline,
			root: root.into(),
			dry_run: false,
		}
	}

	/// Compute outcomes without writing any file.
	pub fn dry_run(mut self, dry_run: bool) -> Self {
		self.dry_run = dry_run;
		self
	}

	/// Process `paths` in order, calling `on_file` with each outcome as soon as it is known.
	///
	/// Stops at the first file that cannot be read or written; files already
	/// rewritten keep their new content.
	pub fn run<F>(&self, paths: &[PathBuf], mut on_file: F) -> BatchReport
	where
		F: FnMut(&FileOutcome),
	{
		let mut report = BatchReport::default();

		for path in paths {
			match self.process_file(path) {
				Ok(outcome) => {
					on_file(&outcome);
					report.outcomes.push(outcome);
				}
				Err(failure) => {
					tracing::debug!(path = %path.display(), "aborting batch");
					let outcome = FileOutcome::failed(path, failure);
					on_file(&outcome);
					report.aborted = Some(outcome);
					break;
				}
			}
		}

		report
	}

	fn process_file(&self, path: &Path) -> Result<FileOutcome> {
		let full_path = self.root.join(path);
		tracing::debug!(path = %full_path.display(), "loading");

		let original =
			std::fs::read_to_string(&full_path).map_err(|source| MigrateError::ReadFailed {
				path: path.to_path_buf(),
				source,
			})?;

		let rewrite = self.pipeline.rewrite(&original);
		let changed = rewrite.text != original;
		let written = changed && !self.dry_run;

		if written {
			write_atomic(&full_path, &rewrite.text).map_err(|source| {
				MigrateError::WriteFailed {
					path: path.to_path_buf(),
					source,
				}
			})?;
			tracing::info!(path = %path.display(), rules = rewrite.fired.len(), "rewrote file");
		}

		Ok(FileOutcome {
			path: path.to_path_buf(),
			changed,
			written,
			fired: rewrite.fired,
			failure: None,
		})
	}
}

/// Write to `<file>.tmp` beside the target, then rename over it.
fn write_atomic(path: &Path, content: &str) -> std::io::Result<()> {
	let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
	tmp_name.push(".tmp");
	let tmp = path.with_file_name(tmp_name);

	std::fs::write(&tmp, content)?;
	std::fs::rename(&tmp, path).inspect_err(|_| {
		let _ = std::fs::remove_file(&tmp);
	})
}
