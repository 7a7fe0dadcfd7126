//! Sidecar file format and I/O
//!
//! The extractor leaves one sidecar per photo in a `.curate` directory next
//! to it, named after the photo's content hash.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::{Embedding, FileHash};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sidecar {
	version: String,
	filename: String,
	hash: String,
	embedding: Vec<f32>,
}

impl Sidecar {
	pub fn embedding(&self) -> Embedding {
		Embedding::raw(self.embedding.clone())
	}

	pub fn filename(&self) -> &str {
		&self.filename
	}

	pub fn hash(&self) -> FileHash {
		FileHash::from_hex(&self.hash)
	}

	/// Version of the extractor that wrote this sidecar
	pub fn version(&self) -> &str {
		&self.version
	}
}

/// Load sidecar from disk
pub fn load(sidecar_path: &Path) -> Result<Sidecar> {
	let bytes = fs::read(sidecar_path).context("Failed to read sidecar")?;
	rmp_serde::from_slice(&bytes).context("Failed to deserialize sidecar")
}

// Writing is the extractor's job; tests need it to lay out fixtures
#[cfg(test)]
impl Sidecar {
	pub fn new(filename: String, hash: FileHash, embedding: Embedding) -> Self {
		Self {
			version: env!("CARGO_PKG_VERSION").to_string(),
			filename,
			hash: hash.as_str().to_string(),
			embedding: embedding.as_slice().to_vec(),
		}
	}
}

/// Save sidecar next to the photos in `media_dir`
#[cfg(test)]
pub fn save(sidecar: &Sidecar, media_dir: &Path) -> Result<std::path::PathBuf> {
	let sidecar_path = build_path(media_dir, &sidecar.hash());

	if let Some(parent) = sidecar_path.parent() {
		fs::create_dir_all(parent).context("Failed to create .curate directory")?;
	}

	let bytes = rmp_serde::to_vec(sidecar).context("Failed to serialize sidecar")?;
	fs::write(&sidecar_path, bytes).context("Failed to write sidecar")?;

	Ok(sidecar_path)
}

/// Build sidecar path from hash
#[cfg(test)]
pub fn build_path(media_dir: &Path, hash: &FileHash) -> std::path::PathBuf {
	use crate::config::{SIDECAR_DIR, SIDECAR_EXT};
	media_dir.join(SIDECAR_DIR).join(format!("{}.{}", hash.as_str(), SIDECAR_EXT))
}
