//! Embedding sources and report storage

pub mod index;
pub mod records;
pub mod report;
pub mod sidecar;

pub use index::{find_orphans, load_all, scan, LoadedEmbeddings, Orphan, OrphanReason};
pub use records::{load_file, load_input};
pub use sidecar::{load, Sidecar};
