//! Curate - near-duplicate photo curation
//!
//! A command-line tool that groups visually similar photos using precomputed
//! embeddings and recommends one photo per group.

use anyhow::Result;
use clap::Parser;

use curate::cli::{Cli, Command};
use curate::config::{self, CurationConfig};
use curate::{commands, ui};

fn main() {
	let cli = Cli::parse();
	ui::Log::set_verbose(cli.verbose);

	if let Err(e) = dispatch(cli.command) {
		ui::error(&format!("{:#}", e));
		std::process::exit(1);
	}
}

fn dispatch(command: Command) -> Result<()> {
	match command {
		Command::Run {
			input,
			recursive,
			threshold,
			preview,
			export,
		} => {
			let config = resolve_config(threshold)?;
			commands::run::run(&input, recursive, config, preview, export.as_deref())
		}
		Command::Duplicates {
			input,
			recursive,
			threshold,
			limit,
			export,
		} => {
			let config = resolve_config(threshold)?;
			commands::duplicates::run(&input, recursive, config, limit, export.as_deref())
		}
		Command::Clean {
			directory,
			recursive,
			auto_confirm,
		} => commands::clean::run(&directory, recursive, auto_confirm),
	}
}

fn resolve_config(threshold: Option<f32>) -> Result<CurationConfig> {
	if let Some(t) = threshold {
		config::set_similarity_threshold(t);
	}
	Ok(CurationConfig::resolve()?)
}
