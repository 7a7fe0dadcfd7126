//! Application configuration and constants

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::core::error::{check_threshold, CurateError};

static CUSTOM_THRESHOLD: OnceLock<f32> = OnceLock::new();

// === Similarity ===
pub const DEFAULT_SIMILARITY_THRESHOLD: f32 = 0.85;
pub const THRESHOLD_ENV: &str = "CURATE_SIMILARITY_THRESHOLD";

// === Storage ===
pub const SIDECAR_DIR: &str = ".curate";
pub const SIDECAR_EXT: &str = "msgpack";
pub const REPORT_FILE: &str = "curation.msgpack";

// === Output ===
pub const DEFAULT_PREVIEW: usize = 5;

pub fn set_similarity_threshold(threshold: f32) {
	let _ = CUSTOM_THRESHOLD.set(threshold);
}

/// Threshold for this run (CLI override, then CURATE_SIMILARITY_THRESHOLD, then default)
pub fn similarity_threshold() -> f32 {
	if let Some(custom) = CUSTOM_THRESHOLD.get() {
		return *custom;
	}

	if let Ok(value) = std::env::var(THRESHOLD_ENV) {
		match parse_threshold(&value) {
			Some(threshold) => {
				crate::ui::debug(&format!("Using {}: {}", THRESHOLD_ENV, threshold));
				return threshold;
			}
			None => crate::ui::warn(&format!(
				"Ignoring {}={:?}, expected a number between 0.0 and 1.0",
				THRESHOLD_ENV, value
			)),
		}
	}

	DEFAULT_SIMILARITY_THRESHOLD
}

/// Parse a threshold in [0.0, 1.0]
pub fn parse_threshold(s: &str) -> Option<f32> {
	let value: f32 = s.trim().parse().ok()?;
	(0.0..=1.0).contains(&value).then_some(value)
}

/// Settings applied identically to duplicate detection and clustering
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurationConfig {
	pub similarity_threshold: f32,
}

impl Default for CurationConfig {
	fn default() -> Self {
		Self {
			similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
		}
	}
}

impl CurationConfig {
	pub fn with_threshold(similarity_threshold: f32) -> Result<Self, CurateError> {
		check_threshold(similarity_threshold)?;
		Ok(Self { similarity_threshold })
	}

	/// Configuration resolved from CLI override, environment and defaults
	pub fn resolve() -> Result<Self, CurateError> {
		Self::with_threshold(similarity_threshold())
	}
}
