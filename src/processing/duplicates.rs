//! Near-duplicate pair extraction

use crate::core::error::{check_threshold, CurateError, Result};
use crate::core::{DuplicatePair, SimilarityMatrix};

/// Every pair `(i, j)` with `i < j` whose similarity is strictly above `threshold`.
///
/// Pairs come out in ascending `i`, then ascending `j`. A photo may take part
/// in several pairs.
pub fn find_duplicate_pairs(
	matrix: &SimilarityMatrix,
	identifiers: &[String],
	threshold: f32,
) -> Result<Vec<DuplicatePair>> {
	check_threshold(threshold)?;
	check_identifiers(matrix, identifiers)?;

	let n = matrix.len();
	let mut pairs = Vec::new();

	for i in 0..n {
		for j in (i + 1)..n {
			let similarity = matrix.get(i, j);
			if similarity > threshold {
				pairs.push(DuplicatePair {
					identifier1: identifiers[i].clone(),
					identifier2: identifiers[j].clone(),
					similarity,
					index1: i,
					index2: j,
				});
			}
		}
	}

	Ok(pairs)
}

pub(crate) fn check_identifiers(matrix: &SimilarityMatrix, identifiers: &[String]) -> Result<()> {
	if identifiers.len() == matrix.len() {
		Ok(())
	} else {
		Err(CurateError::IdentifierCountMismatch {
			identifiers: identifiers.len(),
			size: matrix.len(),
		})
	}
}
