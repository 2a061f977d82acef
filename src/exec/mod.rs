// src/exec/mod.rs

//! Process launching.
//!
//! - [`argument`] quotes and joins argument strings, and splits a joined
//!   command line back apart where the OS needs separate arguments.
//! - [`backend`] provides the `Launcher` trait and the `RealLauncher` used
//!   in production, which tests can replace with a fake implementation.

pub mod argument;
pub mod backend;

pub use argument::{encode_argument, join_arguments, split_command_line};
pub use backend::{Invocation, Launcher, RealLauncher};
