// src/config/mod.rs

//! Configuration for a filerun invocation.
//!
//! Responsibilities:
//! - Define the optional TOML-backed config file and the resolved,
//!   immutable run configuration (`model.rs`).
//! - Load the config file from disk (`loader.rs`).
//! - Merge CLI flags over the file, compile the filter and resolve the
//!   input source (`resolve.rs`).

pub mod loader;
pub mod model;
pub mod resolve;

pub use loader::{default_config_path, load_from_path, load_optional};
pub use model::{CommandSpec, FileConfig, InputSource, RunConfig};
pub use resolve::resolve;
