//! # Command Implementations
//!
//! Each submodule handles one CLI command (run, duplicates, clean).

pub mod clean;
pub mod duplicates;
pub mod run;
