//! Similarity core: matrix, duplicate pairs, clusters and representatives

pub mod cluster;
pub mod curate;
pub mod duplicates;
pub mod representatives;
pub mod similarity;

pub use cluster::cluster;
pub use curate::{curate, Curation};
pub use duplicates::find_duplicate_pairs;
pub use representatives::select_representatives;
pub use similarity::build_matrix;
