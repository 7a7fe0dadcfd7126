//! Input rejection errors for the similarity core

use thiserror::Error;

/// Broad category of a core failure.
///
/// The core is a pure function of its input, so every failure is a rejection
/// of that input before any computation starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
	InvalidInput,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurateError {
	#[error("embedding {index} has dimension {found}, expected {expected}")]
	DimensionMismatch {
		index: usize,
		expected: usize,
		found: usize,
	},

	#[error("embeddings of dimension {left} and {right} cannot be compared")]
	IncomparableEmbeddings { left: usize, right: usize },

	#[error("embedding {index} is empty")]
	EmptyEmbedding { index: usize },

	#[error("embedding {index} contains a non-finite value")]
	NonFiniteEmbedding { index: usize },

	#[error("similarity threshold must be finite, got {0}")]
	InvalidThreshold(f32),

	#[error("{identifiers} identifiers given for a {size}x{size} similarity matrix")]
	IdentifierCountMismatch { identifiers: usize, size: usize },
}

impl CurateError {
	pub fn kind(&self) -> ErrorKind {
		ErrorKind::InvalidInput
	}
}

pub type Result<T> = std::result::Result<T, CurateError>;

/// Rejects thresholds that would make every comparison meaningless.
pub fn check_threshold(threshold: f32) -> Result<()> {
	if threshold.is_finite() {
		Ok(())
	} else {
		Err(CurateError::InvalidThreshold(threshold))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn finite_thresholds_are_accepted() {
		assert!(check_threshold(0.85).is_ok());
		assert!(check_threshold(0.0).is_ok());
		assert!(check_threshold(-0.5).is_ok());
	}

	#[test]
	fn non_finite_thresholds_are_rejected() {
		for t in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
			let err = check_threshold(t).unwrap_err();
			assert_eq!(err.kind(), ErrorKind::InvalidInput);
		}
	}

	#[test]
	fn messages_name_the_offending_embedding() {
		let err = CurateError::DimensionMismatch {
			index: 3,
			expected: 512,
			found: 511,
		};
		assert_eq!(err.to_string(), "embedding 3 has dimension 511, expected 512");
	}
}
