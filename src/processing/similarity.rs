//! Pairwise similarity matrix construction

use ndarray::Array2;
use rayon::prelude::*;

use crate::core::embedding::{cosine, norm};
use crate::core::error::{CurateError, Result};
use crate::core::{Embedding, SimilarityMatrix};

/// Check that all embeddings share one nonzero dimension and hold finite values.
///
/// Returns that dimension, or 0 for an empty collection.
pub fn validate_embeddings(embeddings: &[Embedding]) -> Result<usize> {
	let Some(first) = embeddings.first() else {
		return Ok(0);
	};
	let dim = first.dim();

	for (index, embedding) in embeddings.iter().enumerate() {
		if embedding.dim() != dim {
			return Err(CurateError::DimensionMismatch {
				index,
				expected: dim,
				found: embedding.dim(),
			});
		}
		if dim == 0 {
			return Err(CurateError::EmptyEmbedding { index });
		}
		if !embedding.is_finite() {
			return Err(CurateError::NonFiniteEmbedding { index });
		}
	}

	Ok(dim)
}

/// Computes the full N×N cosine similarity matrix.
///
/// Only the upper triangle is evaluated; rows are spread over the rayon pool
/// and mirrored into the lower triangle afterwards, so the result does not
/// depend on scheduling.
pub fn build_matrix(embeddings: &[Embedding]) -> Result<SimilarityMatrix> {
	let dim = validate_embeddings(embeddings)?;
	let n = embeddings.len();
	if n == 0 {
		return Ok(SimilarityMatrix::empty());
	}

	crate::ui::debug(&format!("Building {}x{} similarity matrix ({}D)", n, n, dim));

	let norms: Vec<f64> = embeddings.par_iter().map(|e| norm(e.as_slice())).collect();

	// rows[i][k] holds M[i][i + k]
	let rows: Vec<Vec<f32>> = (0..n)
		.into_par_iter()
		.map(|i| {
			let diagonal = if norms[i] == 0.0 { 0.0 } else { 1.0 };
			std::iter::once(diagonal)
				.chain((i + 1..n).map(|j| {
					cosine(embeddings[i].as_slice(), embeddings[j].as_slice(), norms[i], norms[j])
				}))
				.collect()
		})
		.collect();

	let mut values = Array2::<f32>::zeros((n, n));
	for (i, row) in rows.into_iter().enumerate() {
		for (k, sim) in row.into_iter().enumerate() {
			let j = i + k;
			values[[i, j]] = sim;
			values[[j, i]] = sim;
		}
	}

	Ok(SimilarityMatrix::from_array(values))
}
