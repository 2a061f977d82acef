#![cfg(unix)]

use std::error::Error;
use std::path::PathBuf;

use filerun::exec::{join_arguments, Invocation, Launcher, RealLauncher};
use filerun_test_utils::init_tracing;

type TestResult = Result<(), Box<dyn Error>>;

fn invocation(program: &str, args: &[&str]) -> Invocation {
    Invocation {
        source: PathBuf::from("input.txt"),
        program: program.to_string(),
        args: join_arguments(args),
    }
}

#[tokio::test]
async fn waiting_launcher_runs_program_to_completion() -> TestResult {
    init_tracing();

    let dir = tempfile::tempdir()?;
    let out = dir.path().join("out file.txt");
    let script = format!("printf done > '{}'", out.display());

    let mut launcher = RealLauncher::new(true);
    launcher.launch(invocation("sh", &["-c", &script])).await?;

    assert_eq!(std::fs::read_to_string(&out)?, "done");
    Ok(())
}

#[tokio::test]
async fn failing_program_does_not_fail_the_run() -> TestResult {
    init_tracing();

    let mut launcher = RealLauncher::new(true);
    launcher.launch(invocation("sh", &["-c", "exit 3"])).await?;
    Ok(())
}

#[tokio::test]
async fn missing_program_is_logged_not_returned() -> TestResult {
    init_tracing();

    let mut launcher = RealLauncher::new(false);
    launcher
        .launch(invocation("/definitely/not/a/program", &["x"]))
        .await?;
    Ok(())
}
