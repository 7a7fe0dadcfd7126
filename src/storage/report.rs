//! Curation report persistence and export

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{REPORT_FILE, SIDECAR_DIR};
use crate::core::CurationReport;

pub fn path(dir: &Path) -> PathBuf {
	dir.join(SIDECAR_DIR).join(REPORT_FILE)
}

/// Save the report under `<dir>/.curate/`
pub fn save(dir: &Path, report: &CurationReport) -> Result<PathBuf> {
	let report_path = path(dir);
	if let Some(parent) = report_path.parent() {
		fs::create_dir_all(parent).context("Failed to create .curate directory")?;
	}

	let bytes = rmp_serde::to_vec(report).context("Failed to serialize report")?;
	fs::write(&report_path, bytes).context("Failed to write report")?;
	Ok(report_path)
}

/// Write pretty JSON to a file, or to stdout for `-`
pub fn export_json<T: serde::Serialize>(value: &T, export_path: &Path) -> Result<()> {
	let json = serde_json::to_string_pretty(value)?;

	if export_path.to_str() == Some("-") || export_path.as_os_str().is_empty() {
		println!("{}", json);
	} else {
		fs::write(export_path, json)
			.with_context(|| format!("Failed to write {}", export_path.display()))?;
		crate::ui::success(&format!("Exported to {}", export_path.display()));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::CurationConfig;

	fn sample() -> CurationReport {
		CurationReport {
			version: "0.0.0".into(),
			timestamp: "2026-01-01T00:00:00+00:00".into(),
			config: CurationConfig::default(),
			total_photos: 1,
			processed_photos: 1,
			photos: vec!["a.jpg".into()],
			similarity_matrix: vec![vec![1.0]],
			duplicate_pairs: Vec::new(),
			clusters: Vec::new(),
			recommended_photos: vec!["a.jpg".into()],
			processing_time_seconds: 0.1,
			avg_time_per_photo: 0.1,
		}
	}

	#[test]
	fn saved_report_is_msgpack_under_sidecar_dir() {
		let dir = tempfile::tempdir().unwrap();
		let saved_to = save(dir.path(), &sample()).unwrap();
		assert_eq!(saved_to, dir.path().join(".curate").join("curation.msgpack"));

		let loaded: CurationReport = rmp_serde::from_slice(&fs::read(&saved_to).unwrap()).unwrap();
		assert_eq!(loaded.photos, vec!["a.jpg"]);
		assert_eq!(loaded.similarity_matrix, vec![vec![1.0]]);
	}

	#[test]
	fn export_writes_pretty_json() {
		let dir = tempfile::tempdir().unwrap();
		let out = dir.path().join("report.json");
		export_json(&sample(), &out).unwrap();

		let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
		assert_eq!(value["recommended_photos"][0], "a.jpg");
		let threshold = value["config"]["similarity_threshold"].as_f64().unwrap();
		assert!((threshold - 0.85).abs() < 1e-6);
	}
}
