//! Embedding record files handed over by an external extractor

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

use super::index::{self, LoadedEmbeddings};
use crate::core::EmbeddingRecord;

/// Load an ordered record list from a `.json` or `.msgpack` file
pub fn load_file(path: &Path) -> Result<Vec<EmbeddingRecord>> {
	let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;

	let ext = path
		.extension()
		.and_then(|e| e.to_str())
		.map(|e| e.to_ascii_lowercase());

	match ext.as_deref() {
		Some("json") => serde_json::from_slice(&bytes).context("Failed to parse embedding records"),
		Some("msgpack") | Some("mp") => {
			rmp_serde::from_slice(&bytes).context("Failed to decode embedding records")
		}
		_ => bail!(
			"Unsupported embedding file {} (expected .json or .msgpack)",
			path.display()
		),
	}
}

/// Load embeddings from a sidecar directory or a record file
pub fn load_input(path: &Path, recursive: bool) -> Result<LoadedEmbeddings> {
	if path.is_dir() {
		return Ok(index::load_all(path, recursive));
	}

	let records = load_file(path)?;
	Ok(LoadedEmbeddings {
		total: records.len(),
		failed: 0,
		stale: 0,
		records,
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	const RECORDS: &str = r#"[
		{"identifier": "b.jpg", "embedding": [0.0, 1.0]},
		{"identifier": "a.jpg", "embedding": [1.0, 0.0]}
	]"#;

	#[test]
	fn json_records_keep_their_order() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("embeddings.json");
		fs::write(&path, RECORDS).unwrap();

		let loaded = load_input(&path, false).unwrap();
		assert_eq!(loaded.total, 2);
		assert_eq!(loaded.records[0].identifier, "b.jpg");
		assert_eq!(loaded.records[1].embedding.as_slice(), &[1.0, 0.0]);
	}

	#[test]
	fn msgpack_records_are_accepted() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("embeddings.msgpack");
		let records = vec![EmbeddingRecord::new("x.png", vec![0.5, 0.5])];
		fs::write(&path, rmp_serde::to_vec(&records).unwrap()).unwrap();

		assert_eq!(load_file(&path).unwrap(), records);
	}

	#[test]
	fn unknown_extensions_are_refused() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("embeddings.csv");
		fs::write(&path, "a.jpg,1.0,0.0").unwrap();
		assert!(load_file(&path).is_err());
	}

	#[test]
	fn missing_file_is_an_error() {
		assert!(load_input(Path::new("/no/such/embeddings.json"), false).is_err());
	}
}
