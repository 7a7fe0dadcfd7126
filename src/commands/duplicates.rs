//! Duplicates command - list near-duplicate pairs

use std::path::Path;

use anyhow::Result;
use colored::*;
use serde::Serialize;

use crate::config::CurationConfig;
use crate::core::DuplicatePair;
use crate::processing::{build_matrix, find_duplicate_pairs};
use crate::storage::{self, report};
use crate::ui;

#[derive(Debug, Serialize)]
struct DuplicateExport<'a> {
	similarity_threshold: f32,
	total_photos: usize,
	duplicate_pairs: &'a [DuplicatePair],
}

pub fn run(
	input: &Path,
	recursive: bool,
	config: CurationConfig,
	limit: usize,
	export: Option<&Path>,
) -> Result<()> {
	ui::info(&format!("Loading embeddings from {}", ui::path_link(input, 40)));

	let loaded = storage::load_input(input, recursive)?;
	if !super::run::check_loaded(&loaded) && export.is_none() {
		return Ok(());
	}

	let (identifiers, embeddings): (Vec<String>, Vec<_>) = loaded
		.records
		.into_iter()
		.map(|r| (r.identifier, r.embedding))
		.unzip();

	let matrix = build_matrix(&embeddings)?;
	let pairs = find_duplicate_pairs(&matrix, &identifiers, config.similarity_threshold)?;

	if let Some(export_path) = export {
		let data = DuplicateExport {
			similarity_threshold: config.similarity_threshold,
			total_photos: identifiers.len(),
			duplicate_pairs: &pairs,
		};
		return report::export_json(&data, export_path);
	}

	if pairs.is_empty() {
		ui::success(&format!(
			"No duplicates above {:.2} among {} photos",
			config.similarity_threshold,
			identifiers.len()
		));
		return Ok(());
	}

	ui::header("Duplicate Pairs");
	for (i, pair) in pairs.iter().take(limit).enumerate() {
		eprintln!(
			"{} {} <-> {} {}",
			format!("{:3}.", i + 1).bright_blue().bold(),
			ui::path_link(Path::new(&pair.identifier1), 50).bright_white(),
			ui::path_link(Path::new(&pair.identifier2), 50).bright_white(),
			ui::similarity(pair.similarity, config.similarity_threshold)
		);
	}
	if pairs.len() > limit {
		eprintln!("  {}", format!("... and {} more pairs", pairs.len() - limit).dimmed());
	}

	eprintln!();
	ui::success(&format!("Found {} duplicate pairs", pairs.len()));
	Ok(())
}
