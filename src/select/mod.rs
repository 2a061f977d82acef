// src/select/mod.rs

//! File selection.
//!
//! - [`pattern`] compiles the user filter into a single [`Filter`].
//! - [`walker`] produces the candidate paths, either by recursing into a
//!   directory or by reading a list file.

pub mod pattern;
pub mod walker;

pub use pattern::{filter_to_pattern, Filter};
pub use walker::{collect_candidates, collect_directory, parse_path_list, read_path_list};
