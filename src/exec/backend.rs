// src/exec/backend.rs

//! Pluggable launcher abstraction.
//!
//! The file processor talks to a [`Launcher`] instead of spawning processes
//! itself. Production uses [`RealLauncher`]; tests provide a fake that
//! records every [`Invocation`] without starting anything.

use std::fmt;
use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;

use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::errors::Result;

/// One launch request: a program and its already encoded command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// The file this invocation was produced for.
    pub source: PathBuf,
    pub program: String,
    /// Encoded arguments joined with single spaces.
    pub args: String,
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.args.is_empty() {
            write!(f, "{}", self.program)
        } else {
            write!(f, "{} {}", self.program, self.args)
        }
    }
}

/// Trait abstracting how invocations are started.
pub trait Launcher: Send {
    /// Start the program described by `invocation`.
    ///
    /// Failing to start the program is not an error of the run: the real
    /// implementation logs it and returns `Ok(())`.
    fn launch(
        &mut self,
        invocation: Invocation,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>>;
}

/// Launcher that spawns OS processes through `tokio::process`.
///
/// By default the child is left running and never awaited. With
/// `wait = true` each child is awaited and its exit status logged before
/// `launch` returns.
#[derive(Debug, Clone, Default)]
pub struct RealLauncher {
    wait: bool,
}

impl RealLauncher {
    pub fn new(wait: bool) -> Self {
        Self { wait }
    }
}

impl Launcher for RealLauncher {
    fn launch(
        &mut self,
        invocation: Invocation,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        let wait = self.wait;

        Box::pin(async move {
            let mut cmd = build_command(&invocation);

            let mut child = match cmd.spawn() {
                Ok(child) => child,
                Err(err) => {
                    warn!(
                        path = %invocation.source.display(),
                        program = %invocation.program,
                        error = %err,
                        "failed to start program"
                    );
                    return Ok(());
                }
            };

            info!(
                path = %invocation.source.display(),
                program = %invocation.program,
                pid = child.id(),
                "launched"
            );

            if !wait {
                return Ok(());
            }

            match child.wait().await {
                Ok(status) if status.success() => {
                    debug!(path = %invocation.source.display(), "program exited successfully");
                }
                Ok(status) => {
                    warn!(
                        path = %invocation.source.display(),
                        program = %invocation.program,
                        exit_code = status.code().unwrap_or(-1),
                        "program exited with failure"
                    );
                }
                Err(err) => {
                    warn!(
                        path = %invocation.source.display(),
                        error = %err,
                        "waiting for program failed"
                    );
                }
            }

            Ok(())
        })
    }
}

/// Build the OS command for an invocation.
///
/// On Windows the joined argument string is handed over as the raw command
/// line tail. Elsewhere it is split back into separate arguments.
#[cfg(windows)]
fn build_command(invocation: &Invocation) -> Command {
    let mut cmd = Command::new(&invocation.program);
    if !invocation.args.is_empty() {
        cmd.raw_arg(&invocation.args);
    }
    cmd
}

#[cfg(not(windows))]
fn build_command(invocation: &Invocation) -> Command {
    let mut cmd = Command::new(&invocation.program);
    cmd.args(super::argument::split_command_line(&invocation.args));
    cmd
}
