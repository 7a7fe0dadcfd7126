//! Dense symmetric similarity matrix

use ndarray::Array2;

/// N×N pairwise similarities for an ordered photo collection.
///
/// Always symmetric. The diagonal is 1.0 for photos with a nonzero
/// embedding norm and 0.0 otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix(Array2<f32>);

impl SimilarityMatrix {
	pub(crate) fn from_array(values: Array2<f32>) -> Self {
		debug_assert_eq!(values.nrows(), values.ncols());
		Self(values)
	}

	pub fn empty() -> Self {
		Self(Array2::zeros((0, 0)))
	}

	/// Number of photos (rows)
	pub fn len(&self) -> usize {
		self.0.nrows()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Similarity between photos `i` and `j`. Panics when out of range.
	pub fn get(&self, i: usize, j: usize) -> f32 {
		self.0[[i, j]]
	}

	/// Row-major nested copy, used for reports
	pub fn to_rows(&self) -> Vec<Vec<f32>> {
		self.0.outer_iter().map(|row| row.to_vec()).collect()
	}
}
