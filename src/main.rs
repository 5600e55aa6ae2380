use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use province_migrate::batch::report::{progress_lines, status_line, summary_line};
use province_migrate::batch::{BatchRunner, FileOutcome, FileStatus};
use province_migrate::config::load_config;
use province_migrate::pipeline::Pipeline;
use province_migrate::rules::RuleKind;

#[derive(Parser)]
#[command(name = "province-migrate")]
#[command(
	author,
	version,
	about = "Replace hand-written province selectors with the shared ProvinceSelector component"
)]
struct Cli {
	/// Project root the target paths are relative to
	#[arg(long, value_name = "DIR", default_value = ".")]
	root: PathBuf,

	/// Config file to use instead of <root>/.province-migrate.toml
	#[arg(long, value_name = "FILE")]
	config: Option<PathBuf>,

	/// Report what would change without writing any file
	#[arg(long)]
	dry_run: bool,

	/// Print the ordered rule set and exit
	#[arg(long)]
	list_rules: bool,

	/// Increase log verbosity (-v info, -vv debug, -vvv trace)
	#[arg(short, long, action = clap::ArgAction::Count)]
	verbose: u8,
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();
	init_logging(cli.verbose);

	let loaded = load_config(&cli.root, cli.config.as_deref())
		.context("Failed to load configuration")?;
	if let Some(ref path) = loaded.path {
		tracing::info!(path = %path.display(), "using config file");
	}

	let pipeline = Pipeline::from_config(&loaded.config).context("Failed to compile rules")?;

	if cli.list_rules {
		return handle_list_rules(&pipeline);
	}

	let runner = BatchRunner::new(&pipeline, &cli.root).dry_run(cli.dry_run);
	let report = runner.run(&loaded.config.files, print_outcome);

	if !report.is_success() {
		return Ok(ExitCode::FAILURE);
	}

	if let Some(summary) = summary_line(&report, cli.dry_run) {
		println!("{}", summary);
	}
	Ok(ExitCode::SUCCESS)
}

fn init_logging(verbose: u8) {
	let default_level = match verbose {
		0 => "warn",
		1 => "info",
		2 => "debug",
		_ => "trace",
	};
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.init();
}

fn print_outcome(outcome: &FileOutcome) {
	if outcome.status() == FileStatus::Error {
		eprintln!("{}", status_line(outcome));
		return;
	}

	for line in progress_lines(outcome) {
		println!("{}", line);
	}
	if !outcome.fired.is_empty() {
		tracing::debug!(path = %outcome.path.display(), rules = ?outcome.fired, "rules applied");
	}
	println!("{}", status_line(outcome));
}

fn handle_list_rules(pipeline: &Pipeline) -> Result<ExitCode> {
	for (i, rule) in pipeline.rules().iter().enumerate() {
		let action = match rule.kind() {
			RuleKind::Substitute(sub) if sub.is_deletion() => "delete",
			RuleKind::Substitute(_) => "substitute",
			RuleKind::InsertAfterLast(_) => "insert",
			RuleKind::Prune(_) => "prune",
		};
		println!("{:>2}. {} ({})", i + 1, rule.name(), action);
	}
	Ok(ExitCode::SUCCESS)
}
