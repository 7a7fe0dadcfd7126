//! Core domain types

pub mod cluster;
pub mod embedding;
pub mod error;
pub mod hash;
pub mod matrix;
pub mod report;

pub use cluster::{Cluster, DuplicatePair};
pub use embedding::{similarity, Embedding, EmbeddingRecord};
pub use error::{CurateError, ErrorKind};
pub use hash::FileHash;
pub use matrix::SimilarityMatrix;
pub use report::CurationReport;
