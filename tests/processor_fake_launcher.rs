use std::error::Error;
use std::future::Future;
use std::path::Path;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime};

use filerun::engine::{FileOutcome, FileProcessor, RunSummary};
use filerun::exec::{Invocation, Launcher};
use filerun::fs::mock::MockFileSystem;
use filerun::run_with;
use filerun::types::Separator;
use filerun_test_utils::builders::RunConfigBuilder;
use filerun_test_utils::fake_launcher::FakeLauncher;
use filerun_test_utils::init_tracing;
use filerun_test_utils::shared_buffer::SharedBuffer;

type TestResult = Result<(), Box<dyn Error>>;

fn at(secs: u64) -> SystemTime {
    SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000 + secs)
}

/// Records what had been echoed at the moment each launch happened.
#[derive(Clone)]
struct EchoSnapshotLauncher {
    echo: SharedBuffer,
    seen: Arc<Mutex<Vec<String>>>,
}

impl EchoSnapshotLauncher {
    fn new(echo: SharedBuffer) -> Self {
        Self {
            echo,
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

impl Launcher for EchoSnapshotLauncher {
    fn launch(
        &mut self,
        _invocation: Invocation,
    ) -> Pin<Box<dyn Future<Output = filerun::errors::Result<()>> + Send + '_>> {
        let snapshot = self.echo.contents();
        let seen = Arc::clone(&self.seen);

        Box::pin(async move {
            seen.lock().unwrap().push(snapshot);
            Ok(())
        })
    }
}

#[tokio::test]
async fn rejected_file_is_a_complete_no_op() -> TestResult {
    init_tracing();

    let fs = MockFileSystem::new();
    fs.add_file("notes/a.md", "# a");
    let cfg = RunConfigBuilder::new()
        .filter("*.txt")
        .check("$D\\$N.html")
        .program("pandoc")
        .arg("$P")
        .build();

    let launcher = FakeLauncher::new();
    let mut processor = FileProcessor::new(&cfg, &fs, launcher.clone());

    let outcome = processor.process(Path::new("notes/a.md")).await?;

    assert_eq!(outcome, FileOutcome::Filtered);
    assert_eq!(fs.lookups(), 0, "filtered file must not be stat'ed");
    assert!(launcher.invocations().is_empty());
    Ok(())
}

#[tokio::test]
async fn matching_file_is_launched_with_substituted_arguments() -> TestResult {
    init_tracing();

    let fs = MockFileSystem::new();
    let cfg = RunConfigBuilder::new()
        .program("pandoc")
        .arg("$P")
        .arg("-o")
        .arg("$D\\$N.html")
        .build();

    let launcher = FakeLauncher::new();
    let mut processor = FileProcessor::new(&cfg, &fs, launcher.clone());

    let outcome = processor.process(Path::new("my docs/a b.md")).await?;
    assert_eq!(outcome, FileOutcome::Launched);

    let invocations = launcher.invocations();
    assert_eq!(invocations.len(), 1);
    assert_eq!(invocations[0].program, "pandoc");
    assert_eq!(
        invocations[0].args,
        "\"my docs\\a b.md\" -o \"my docs\\a b.html\""
    );
    assert_eq!(invocations[0].source, Path::new("my docs/a b.md"));
    Ok(())
}

#[tokio::test]
async fn program_is_never_substituted() -> TestResult {
    let fs = MockFileSystem::new();
    let cfg = RunConfigBuilder::new().program("tools/$N").arg("$F").build();

    let launcher = FakeLauncher::new();
    let mut processor = FileProcessor::new(&cfg, &fs, launcher.clone());
    processor.process(Path::new("x/y.txt")).await?;

    assert_eq!(launcher.lines(), vec!["tools/$N y.txt"]);
    Ok(())
}

#[tokio::test]
async fn empty_template_becomes_quoted_empty_argument() -> TestResult {
    let fs = MockFileSystem::new();
    let cfg = RunConfigBuilder::new().program("tool").arg("").arg("$E").build();

    let launcher = FakeLauncher::new();
    let mut processor = FileProcessor::new(&cfg, &fs, launcher.clone());
    processor.process(Path::new("Makefile")).await?;

    assert_eq!(launcher.lines(), vec!["tool \"\" \"\""]);
    Ok(())
}

#[tokio::test]
async fn up_to_date_file_is_skipped() -> TestResult {
    let fs = MockFileSystem::new();
    fs.add_file_with_mtime("src/a.md", "# a", at(10));
    fs.add_file_with_mtime("out/a.html", "", at(10));
    fs.add_file_with_mtime("src/b.md", "# b", at(20));
    fs.add_file_with_mtime("out/b.html", "", at(10));

    let cfg = RunConfigBuilder::new()
        .separator(Separator::Slash)
        .check("out/$N.html")
        .program("render")
        .arg("$P")
        .build();

    let launcher = FakeLauncher::new();
    let mut processor = FileProcessor::new(&cfg, &fs, launcher.clone());

    assert_eq!(processor.process(Path::new("src/a.md")).await?, FileOutcome::UpToDate);
    assert_eq!(processor.process(Path::new("src/b.md")).await?, FileOutcome::Launched);
    assert_eq!(launcher.lines(), vec!["render src/b.md"]);
    Ok(())
}

#[tokio::test]
async fn dry_run_does_not_launch() -> TestResult {
    let fs = MockFileSystem::new();
    let cfg = RunConfigBuilder::new().dry_run(true).arg("$P").build();

    let echo = SharedBuffer::new();
    let launcher = FakeLauncher::new();
    let mut processor =
        FileProcessor::new(&cfg, &fs, launcher.clone()).with_echo(echo.clone());

    assert_eq!(processor.process(Path::new("a.txt")).await?, FileOutcome::DryRun);
    assert!(launcher.invocations().is_empty());
    assert_eq!(echo.contents(), "echo a.txt\n");
    Ok(())
}

#[tokio::test]
async fn verbose_line_is_echoed_before_launch() -> TestResult {
    let fs = MockFileSystem::new();
    let cfg = RunConfigBuilder::new()
        .verbose(true)
        .program("convert")
        .arg("$F")
        .arg("out dir\\$N.png")
        .build();

    let echo = SharedBuffer::new();
    let launcher = EchoSnapshotLauncher::new(echo.clone());
    let mut processor =
        FileProcessor::new(&cfg, &fs, launcher.clone()).with_echo(echo.clone());

    assert_eq!(processor.process(Path::new("d/a.svg")).await?, FileOutcome::Launched);

    let expected = "convert a.svg \"out dir\\a.png\"\n";
    assert_eq!(echo.contents(), expected);
    assert_eq!(launcher.seen(), vec![expected.to_string()]);
    Ok(())
}

#[tokio::test]
async fn quiet_mode_echoes_nothing() -> TestResult {
    let fs = MockFileSystem::new();
    let cfg = RunConfigBuilder::new().arg("$F").build();

    let echo = SharedBuffer::new();
    let launcher = FakeLauncher::new();
    let mut processor =
        FileProcessor::new(&cfg, &fs, launcher.clone()).with_echo(echo.clone());

    processor.process(Path::new("d/a.txt")).await?;

    assert_eq!(echo.contents(), "");
    assert_eq!(launcher.lines(), vec!["echo a.txt"]);
    Ok(())
}

#[tokio::test]
async fn list_run_filters_and_launches_in_order() -> TestResult {
    init_tracing();

    let fs = MockFileSystem::new();
    fs.add_file(
        "list.txt",
        "src/a.md\r\nsrc/b.txt\n\n  src/c.MD  \r",
    );

    let cfg = RunConfigBuilder::new()
        .list("list.txt")
        .filter("*.md")
        .program("pandoc")
        .arg("$P")
        .arg("-o")
        .arg("$R\\$N.html")
        .build();

    let launcher = FakeLauncher::new();
    let summary = run_with(&cfg, &fs, launcher.clone()).await?;

    assert_eq!(
        summary,
        RunSummary {
            visited: 3,
            filtered: 1,
            up_to_date: 0,
            launched: 2,
            dry_run: 0,
        }
    );
    assert_eq!(
        launcher.lines(),
        vec![
            "pandoc src\\a.md -o src\\a.html",
            "pandoc src\\c.MD -o src\\c.html",
        ]
    );
    Ok(())
}

#[tokio::test]
async fn directory_run_computes_relative_dirs_from_root() -> TestResult {
    init_tracing();

    let fs = MockFileSystem::new();
    fs.add_file("site/index.md", "");
    fs.add_file("site/blog/post.md", "");
    fs.add_file("site/blog/image.png", "");

    let cfg = RunConfigBuilder::new()
        .directory("site")
        .filter("*.md")
        .separator(Separator::Slash)
        .program("build")
        .arg("$R")
        .arg("$F")
        .build();

    let launcher = FakeLauncher::new();
    let summary = run_with(&cfg, &fs, launcher.clone()).await?;

    assert_eq!(summary.visited, 3);
    assert_eq!(summary.launched, 2);
    assert_eq!(
        launcher.lines(),
        vec!["build /blog post.md", "build . index.md"]
    );
    Ok(())
}
