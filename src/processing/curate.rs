//! End-to-end curation of an ordered embedding collection

use crate::config::CurationConfig;
use crate::core::error::{check_threshold, Result};
use crate::core::{Cluster, CurationReport, DuplicatePair, Embedding, EmbeddingRecord, SimilarityMatrix};

use super::cluster::cluster;
use super::duplicates::find_duplicate_pairs;
use super::representatives::select_representatives;
use super::similarity::build_matrix;

/// Everything derived from one embedding collection at one threshold
#[derive(Debug, Clone, PartialEq)]
pub struct Curation {
	pub identifiers: Vec<String>,
	pub matrix: SimilarityMatrix,
	pub duplicate_pairs: Vec<DuplicatePair>,
	pub clusters: Vec<Cluster>,
	pub recommended: Vec<String>,
}

impl Curation {
	pub fn len(&self) -> usize {
		self.identifiers.len()
	}

	pub fn is_empty(&self) -> bool {
		self.identifiers.is_empty()
	}

	/// Package the result with run metadata.
	///
	/// `total_photos` counts every photo discovered, including those whose
	/// embedding could not be loaded.
	pub fn into_report(
		self,
		config: CurationConfig,
		total_photos: usize,
		processing_time_seconds: f32,
	) -> CurationReport {
		let processed_photos = self.len();
		let avg_time_per_photo = if processed_photos > 0 {
			processing_time_seconds / processed_photos as f32
		} else {
			0.0
		};

		CurationReport {
			version: env!("CARGO_PKG_VERSION").to_string(),
			timestamp: chrono::Utc::now().to_rfc3339(),
			config,
			total_photos,
			processed_photos,
			similarity_matrix: self.matrix.to_rows(),
			photos: self.identifiers,
			duplicate_pairs: self.duplicate_pairs,
			clusters: self.clusters,
			recommended_photos: self.recommended,
			processing_time_seconds,
			avg_time_per_photo,
		}
	}
}

/// Validates the input, builds the matrix once and derives pairs, clusters
/// and the recommended set from it.
///
/// An empty collection is not an error and yields an empty curation.
pub fn curate(records: &[EmbeddingRecord], threshold: f32) -> Result<Curation> {
	check_threshold(threshold)?;

	let (identifiers, embeddings): (Vec<String>, Vec<Embedding>) = records
		.iter()
		.map(|r| (r.identifier.clone(), r.embedding.clone()))
		.unzip();

	let matrix = build_matrix(&embeddings)?;
	let duplicate_pairs = find_duplicate_pairs(&matrix, &identifiers, threshold)?;
	let clusters = cluster(&matrix, &identifiers, threshold)?;
	let recommended = select_representatives(&clusters);

	Ok(Curation {
		identifiers,
		matrix,
		duplicate_pairs,
		clusters,
		recommended,
	})
}
