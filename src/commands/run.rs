//! Run command - group near-duplicates and recommend one photo per group

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use colored::*;

use crate::config::CurationConfig;
use crate::core::CurationReport;
use crate::processing;
use crate::storage::{self, report, LoadedEmbeddings};
use crate::ui;

pub fn run(
	input: &Path,
	recursive: bool,
	config: CurationConfig,
	preview: usize,
	export: Option<&Path>,
) -> Result<()> {
	let start = Instant::now();

	ui::debug(&format!(
		"Starting curation: input={}, recursive={}, threshold={}",
		input.display(),
		recursive,
		config.similarity_threshold
	));
	ui::info(&format!("Loading embeddings from {}", ui::path_link(input, 40)));

	let loaded = storage::load_input(input, recursive)?;
	// Exports are written even when nothing was loaded
	if !check_loaded(&loaded) && export.is_none() {
		return Ok(());
	}

	let curation = processing::curate(&loaded.records, config.similarity_threshold)?;
	let report = curation.into_report(config, loaded.total, start.elapsed().as_secs_f32());
	if input.is_dir() && !report.photos.is_empty() {
		let saved = report::save(input, &report)?;
		ui::debug(&format!("Saved report to {}", saved.display()));
	}

	log_cluster_stats(&report);

	if let Some(export_path) = export {
		return report::export_json(&report, export_path);
	}

	print_summary(&report, preview);
	Ok(())
}

/// Report discovery counts; false when there is nothing to curate
pub(crate) fn check_loaded(loaded: &LoadedEmbeddings) -> bool {
	if loaded.total == 0 {
		ui::warn("No embeddings found. Extract embeddings for the photos first");
		return false;
	}
	if loaded.failed > 0 {
		ui::warn(&format!("{} sidecars could not be read (--verbose for details)", loaded.failed));
	}
	if loaded.stale > 0 {
		ui::warn(&format!(
			"Ignored {} outdated sidecars for edited photos. Run 'curate clean' to remove them",
			loaded.stale
		));
	}
	if loaded.records.is_empty() {
		ui::error("No valid embeddings could be loaded");
		return false;
	}

	ui::success(&format!("Loaded {} embeddings", loaded.records.len()));
	if let Some(first) = loaded.records.first() {
		ui::debug(&format!("Embedding dimension: {}D", first.embedding.dim()));
	}
	true
}

fn log_cluster_stats(report: &CurationReport) {
	let sizes: Vec<usize> = report.duplicate_clusters().map(|c| c.len()).collect();
	if sizes.is_empty() {
		return;
	}

	let avg_size = sizes.iter().sum::<usize>() as f32 / sizes.len() as f32;
	let max_size = sizes.iter().max().unwrap_or(&0);
	ui::debug(&format!(
		"{} duplicate groups: max={}, avg={:.1}",
		sizes.len(),
		max_size,
		avg_size
	));
}

fn print_summary(report: &CurationReport, preview: usize) {
	let threshold = report.config.similarity_threshold;

	ui::header("Curation Results");
	eprintln!("  {} {}", "Photos found:".bright_blue(), report.total_photos);
	eprintln!("  {} {}", "Processed:".bright_blue(), report.processed_photos);
	eprintln!(
		"  {} {:.2}s ({:.1}ms/photo)",
		"Duration:".bright_blue(),
		report.processing_time_seconds,
		report.avg_time_per_photo * 1000.0
	);
	eprintln!("  {} {}", "Clusters:".bright_blue(), report.clusters.len());
	eprintln!("  {} {}", "Duplicate pairs:".bright_blue(), report.duplicate_pairs.len());
	eprintln!("  {} {}", "Recommended:".bright_blue(), report.recommended_photos.len());

	if !report.duplicate_pairs.is_empty() {
		eprintln!("\n{}", "Duplicate pairs".bright_white());
		for pair in report.duplicate_pairs.iter().take(preview) {
			eprintln!(
				"  {} <-> {} (similarity: {})",
				ui::path_link(Path::new(&pair.identifier1), 40),
				ui::path_link(Path::new(&pair.identifier2), 40),
				ui::similarity(pair.similarity, threshold)
			);
		}
		if report.duplicate_pairs.len() > preview {
			eprintln!(
				"  {}",
				format!("... and {} more pairs", report.duplicate_pairs.len() - preview).dimmed()
			);
		}
	}

	for cluster in report.duplicate_clusters() {
		eprintln!(
			"\n{} {} ({} photos, {:.1}% cohesion)",
			"Cluster".bright_white(),
			cluster.id.to_string().bright_cyan(),
			cluster.len(),
			cluster.cohesion * 100.0
		);
		eprintln!(
			"  {}: {}",
			"Keep".dimmed(),
			ui::path_link(Path::new(&cluster.representative), 60).bright_white()
		);
		for (i, member) in cluster.identifiers.iter().skip(1).take(preview).enumerate() {
			eprintln!("  {} {}", format!("[{}]", i + 1).dimmed(), ui::path_link(Path::new(member), 60));
		}
		if cluster.len() - 1 > preview {
			eprintln!("  {}", format!("... and {} more", cluster.len() - 1 - preview).dimmed());
		}
	}

	eprintln!();
	ui::success(&format!(
		"Reduction: {} -> {} photos",
		report.total_photos,
		report.recommended_photos.len()
	));
	ui::info(&format!("Space saved: {:.1}%", report.reduction_percent()));
}
