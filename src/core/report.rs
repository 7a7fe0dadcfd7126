//! Persisted and exported curation results

use serde::{Deserialize, Serialize};

use super::{Cluster, DuplicatePair};
use crate::config::CurationConfig;

/// Complete curation result for one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurationReport {
	/// Curate version that produced this
	pub version: String,
	/// When curation was performed
	pub timestamp: String,
	pub config: CurationConfig,
	/// Photos discovered, including ones without a usable embedding
	pub total_photos: usize,
	/// Photos that reached the similarity core
	pub processed_photos: usize,
	/// Processed photo identifiers; row/column order of the matrix
	pub photos: Vec<String>,
	pub similarity_matrix: Vec<Vec<f32>>,
	pub duplicate_pairs: Vec<DuplicatePair>,
	pub clusters: Vec<Cluster>,
	pub recommended_photos: Vec<String>,
	pub processing_time_seconds: f32,
	pub avg_time_per_photo: f32,
}

impl CurationReport {
	/// Share of discovered photos left out of the recommended set
	pub fn reduction_percent(&self) -> f32 {
		if self.total_photos == 0 {
			0.0
		} else {
			(1.0 - self.recommended_photos.len() as f32 / self.total_photos as f32) * 100.0
		}
	}

	pub fn duplicate_clusters(&self) -> impl Iterator<Item = &Cluster> {
		self.clusters.iter().filter(|c| !c.is_singleton())
	}
}
