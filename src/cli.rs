use clap::builder::styling::{AnsiColor, Color, Style, Styles};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use crate::config::parse_threshold;

fn threshold_arg(s: &str) -> Result<f32, String> {
	parse_threshold(s).ok_or_else(|| format!("threshold must be a number between 0.0 and 1.0, got '{}'", s))
}

fn styles() -> Styles {
	let blue = Some(Color::Ansi(AnsiColor::Blue));
	Styles::styled()
		.header(Style::new().bold().fg_color(blue))
		.usage(Style::new().bold().fg_color(blue))
		.literal(Style::new().fg_color(blue))
		.placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))))
		.valid(Style::new().fg_color(blue))
		.invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))))
}

#[derive(Parser, Debug)]
#[command(
	name = "curate",
	author,
	version,
	about = "Reduce a photo collection to one photo per group of near-duplicates",
	styles = styles(),
	after_help = format!(
		"{title}
  {curate} {run}         {run_args}        {run_desc}
  {curate} {run}         {file_args}  {file_desc}
  {curate} {duplicates}  {dup_args}    {dup_desc}
  {curate} {clean}       {clean_args}          {clean_desc}",
		title = "Examples:".bright_blue().bold(),
		curate = "curate".bright_blue(),
		run = "run".yellow(),
		run_args = "-d ./trip/ -r",
		run_desc = "Curate photos recursively".dimmed(),
		file_args = "-d vecs.json -t 0.9",
		file_desc = "Curate records from a file".dimmed(),
		duplicates = "duplicates".yellow(),
		dup_args = "-d ./trip/ -e -",
		dup_desc = "Print duplicate pairs as JSON".dimmed(),
		clean = "clean".yellow(),
		clean_args = "-d ./trip/",
		clean_desc = "Remove stale sidecars".dimmed(),
	),
)]
pub struct Cli {
	/// Enable verbose debug output
	#[arg(short = 'v', long = "verbose", global = true)]
	pub verbose: bool,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Group near-duplicates and recommend one photo per group
	Run {
		/// Photo directory with .curate sidecars, or a .json/.msgpack record file
		#[arg(short = 'd', long = "dir", default_value = ".")]
		input: PathBuf,

		/// Scan directories recursively
		#[arg(short = 'r', long = "recursive")]
		recursive: bool,

		/// Similarity above which two photos are duplicates (0.0-1.0) [default: 0.85]
		#[arg(short = 't', long = "similarity-threshold", alias = "similarity_threshold", value_parser = threshold_arg)]
		threshold: Option<f32>,

		/// Number of duplicate pairs and cluster members to show
		#[arg(short = 'n', long = "preview", default_value_t = crate::config::DEFAULT_PREVIEW)]
		preview: usize,

		/// Export the full report as JSON ("-" for stdout)
		#[arg(short = 'e', long = "export", value_name = "PATH")]
		export: Option<PathBuf>,
	},

	/// List near-duplicate pairs
	Duplicates {
		/// Photo directory with .curate sidecars, or a .json/.msgpack record file
		#[arg(short = 'd', long = "dir", default_value = ".")]
		input: PathBuf,

		/// Scan directories recursively
		#[arg(short = 'r', long = "recursive")]
		recursive: bool,

		/// Similarity above which two photos are duplicates (0.0-1.0) [default: 0.85]
		#[arg(short = 't', long = "similarity-threshold", alias = "similarity_threshold", value_parser = threshold_arg)]
		threshold: Option<f32>,

		/// Maximum number of pairs to show
		#[arg(short = 'n', long = "limit", default_value_t = 20)]
		limit: usize,

		/// Export all pairs as JSON ("-" for stdout)
		#[arg(short = 'e', long = "export", value_name = "PATH")]
		export: Option<PathBuf>,
	},

	/// Delete sidecars whose photo was removed or modified
	Clean {
		/// Photo directory
		#[arg(short = 'd', long = "dir", default_value = ".")]
		directory: PathBuf,

		/// Scan directories recursively
		#[arg(short = 'r', long = "recursive")]
		recursive: bool,

		/// Delete without asking
		#[arg(short = 'y', long = "yes")]
		auto_confirm: bool,
	},
}

#[cfg(test)]
mod tests {
	use super::*;
	use clap::CommandFactory;

	#[test]
	fn cli_definition_is_consistent() {
		Cli::command().debug_assert();
	}

	#[test]
	fn threshold_accepts_both_spellings() {
		for flag in ["--similarity-threshold", "--similarity_threshold", "-t"] {
			let cli = Cli::try_parse_from(["curate", "run", flag, "0.9"]).unwrap();
			match cli.command {
				Command::Run { threshold, .. } => assert_eq!(threshold, Some(0.9)),
				other => panic!("unexpected command {:?}", other),
			}
		}
	}

	#[test]
	fn run_has_no_cache_bypass_flag() {
		assert!(Cli::try_parse_from(["curate", "run", "--force"]).is_err());
	}

	#[test]
	fn threshold_out_of_range_is_refused() {
		assert!(Cli::try_parse_from(["curate", "duplicates", "-t", "1.2"]).is_err());
	}
}
