//! # Curate Library
//!
//! Near-duplicate photo curation over precomputed visual embeddings.
//! Builds a cosine similarity matrix, lists duplicate pairs, groups photos
//! with a seed-anchored greedy sweep and keeps one photo per group.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod processing;
pub mod storage;
pub mod ui;

pub use crate::core::{Cluster, CurateError, DuplicatePair, Embedding, EmbeddingRecord, SimilarityMatrix};
pub use processing::{curate, Curation};
