//! Embedding vectors and the cosine similarity metric

use serde::{Deserialize, Serialize};

use super::error::{CurateError, Result};

/// Visual embedding of one photo as produced by the extractor.
///
/// Extractors usually emit unit-length vectors, but nothing here relies on
/// it: norms are always recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Embedding(Vec<f32>);

impl Embedding {
	/// Wrap extractor output as-is
	pub fn raw(data: Vec<f32>) -> Self {
		Self(data)
	}

	pub fn as_slice(&self) -> &[f32] {
		&self.0
	}

	pub fn dim(&self) -> usize {
		self.0.len()
	}

	/// Euclidean (L2) norm
	pub fn norm(&self) -> f32 {
		norm(&self.0) as f32
	}

	pub fn is_finite(&self) -> bool {
		self.0.iter().all(|x| x.is_finite())
	}

	/// Cosine similarity in [-1.0, 1.0], or 0.0 when either vector has zero norm
	pub fn similarity(&self, other: &Self) -> Result<f32> {
		similarity(&self.0, &other.0)
	}
}

/// One photo as handed over by the extractor: its identifier and embedding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingRecord {
	pub identifier: String,
	pub embedding: Embedding,
}

impl EmbeddingRecord {
	pub fn new(identifier: impl Into<String>, embedding: impl Into<Embedding>) -> Self {
		Self {
			identifier: identifier.into(),
			embedding: embedding.into(),
		}
	}
}

impl From<Vec<f32>> for Embedding {
	fn from(data: Vec<f32>) -> Self {
		Self::raw(data)
	}
}

/// Cosine similarity between two equal-length vectors.
///
/// Zero-norm input yields 0.0 instead of dividing by zero.
pub fn similarity(u: &[f32], v: &[f32]) -> Result<f32> {
	if u.len() != v.len() {
		return Err(CurateError::IncomparableEmbeddings {
			left: u.len(),
			right: v.len(),
		});
	}
	Ok(cosine(u, v, norm(u), norm(v)))
}

/// Cosine similarity with both norms already known. Lengths must match.
///
/// Sums run in f64 so that any finite f32 input stays finite and nonzero
/// vectors keep a nonzero norm.
pub(crate) fn cosine(u: &[f32], v: &[f32], norm_u: f64, norm_v: f64) -> f32 {
	if norm_u == 0.0 || norm_v == 0.0 {
		return 0.0;
	}
	(dot(u, v) / (norm_u * norm_v)).clamp(-1.0, 1.0) as f32
}

pub(crate) fn norm(v: &[f32]) -> f64 {
	v.iter().map(|&x| f64::from(x) * f64::from(x)).sum::<f64>().sqrt()
}

fn dot(u: &[f32], v: &[f32]) -> f64 {
	u.iter().zip(v.iter()).map(|(&a, &b)| f64::from(a) * f64::from(b)).sum()
}
