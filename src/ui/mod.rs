//! # User Interface
//!
//! Colored terminal output with clickable file links.

pub mod log;

pub use log::{debug, error, header, info, path_link, similarity, success, warn, Log};
