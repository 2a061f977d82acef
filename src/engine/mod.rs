// src/engine/mod.rs

//! Per-file decision making.
//!
//! - [`staleness`] decides whether a matched file needs its command run.
//! - [`processor`] ties filter, staleness, substitution and launching
//!   together for one file at a time.

pub mod processor;
pub mod staleness;

pub use processor::{FileOutcome, FileProcessor, RunSummary};
pub use staleness::{check_staleness, must_run, Staleness};
