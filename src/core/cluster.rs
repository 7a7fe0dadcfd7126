//! Duplicate pairs and near-duplicate clusters

use serde::{Deserialize, Serialize};

/// Two photos whose similarity is strictly above the threshold (`index1 < index2`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DuplicatePair {
	pub identifier1: String,
	pub identifier2: String,
	pub similarity: f32,
	pub index1: usize,
	pub index2: usize,
}

/// A group of near-duplicate photos anchored on its seed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
	/// Position in discovery order
	pub id: usize,
	/// Member indices in order of discovery; the first is the seed
	pub indices: Vec<usize>,
	pub identifiers: Vec<String>,
	/// Identifier of the seed, kept as the curated photo
	pub representative: String,
	/// Mean pairwise similarity between members (1.0 for singletons)
	pub cohesion: f32,
}

impl Cluster {
	pub fn seed(&self) -> usize {
		self.indices[0]
	}

	pub fn len(&self) -> usize {
		self.indices.len()
	}

	pub fn is_empty(&self) -> bool {
		self.indices.is_empty()
	}

	pub fn is_singleton(&self) -> bool {
		self.indices.len() == 1
	}
}
