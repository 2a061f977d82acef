use std::error::Error;
use std::path::{Path, PathBuf};

use filerun::config::InputSource;
use filerun::fs::mock::MockFileSystem;
use filerun::select::{collect_candidates, collect_directory, parse_path_list};

type TestResult = Result<(), Box<dyn Error>>;

fn as_strings(paths: &[PathBuf]) -> Vec<String> {
    paths
        .iter()
        .map(|p| p.to_string_lossy().replace('\\', "/"))
        .collect()
}

#[test]
fn subdirectories_are_walked_before_local_files() -> TestResult {
    let fs = MockFileSystem::new();
    fs.add_file("root/b.txt", "b");
    fs.add_file("root/a.txt", "a");
    fs.add_file("root/sub/z.txt", "z");
    fs.add_file("root/sub/deeper/y.txt", "y");
    fs.add_file("root/other/x.txt", "x");

    let files = collect_directory(&fs, Path::new("root"))?;

    assert_eq!(
        as_strings(&files),
        vec![
            "root/other/x.txt",
            "root/sub/deeper/y.txt",
            "root/sub/z.txt",
            "root/a.txt",
            "root/b.txt",
        ]
    );
    Ok(())
}

#[test]
fn empty_directories_contribute_nothing() -> TestResult {
    let fs = MockFileSystem::new();
    fs.add_dir("root/empty/nested");
    fs.add_file("root/only.txt", "");

    let files = collect_directory(&fs, Path::new("root"))?;
    assert_eq!(as_strings(&files), vec!["root/only.txt"]);
    Ok(())
}

#[test]
fn symlink_loop_is_not_followed() -> TestResult {
    let fs = MockFileSystem::new();
    fs.add_file("root/a.txt", "a");
    fs.add_symlink("root/loop", "root");

    let files = collect_directory(&fs, Path::new("root"))?;
    assert_eq!(as_strings(&files), vec!["root/a.txt"]);
    Ok(())
}

#[test]
fn only_regular_files_become_candidates() -> TestResult {
    let fs = MockFileSystem::new();
    fs.add_file("root/a.txt", "a");
    fs.add_file("elsewhere/b.txt", "b");
    fs.add_symlink("root/b-link.txt", "elsewhere/b.txt");
    fs.add_symlink("root/dangling", "root/nowhere");

    let files = collect_directory(&fs, Path::new("root"))?;
    assert_eq!(as_strings(&files), vec!["root/a.txt", "root/b-link.txt"]);
    Ok(())
}

#[cfg(unix)]
#[test]
fn real_symlink_loop_terminates() -> TestResult {
    use filerun::fs::RealFileSystem;

    let dir = tempfile::tempdir()?;
    std::fs::write(dir.path().join("a.txt"), "a")?;
    std::os::unix::fs::symlink(dir.path(), dir.path().join("loop"))?;
    std::os::unix::fs::symlink(dir.path().join("nowhere"), dir.path().join("dangling"))?;

    let files = collect_directory(&RealFileSystem, dir.path())?;
    assert_eq!(files, vec![dir.path().join("a.txt")]);
    Ok(())
}

#[test]
fn missing_root_is_an_error() {
    let fs = MockFileSystem::new();
    assert!(collect_directory(&fs, Path::new("missing")).is_err());
}

#[test]
fn path_list_handles_every_line_ending() {
    let contents = "a.txt\r\nb.txt\rc.txt\n\n   \r\n  d e.txt  \n";
    let paths = parse_path_list(contents);

    assert_eq!(
        paths,
        vec![
            PathBuf::from("a.txt"),
            PathBuf::from("b.txt"),
            PathBuf::from("c.txt"),
            PathBuf::from("d e.txt"),
        ]
    );
}

#[test]
fn empty_list_yields_no_paths() {
    assert!(parse_path_list("").is_empty());
    assert!(parse_path_list("\r\n\n\r").is_empty());
}

#[test]
fn list_source_keeps_file_order() -> TestResult {
    let fs = MockFileSystem::new();
    fs.add_file("list.txt", "z/last.md\na/first.md\nm/middle.md\n");

    let paths = collect_candidates(&fs, &InputSource::List(PathBuf::from("list.txt")))?;
    assert_eq!(
        as_strings(&paths),
        vec!["z/last.md", "a/first.md", "m/middle.md"]
    );
    Ok(())
}

#[test]
fn unreadable_list_is_an_error() {
    let fs = MockFileSystem::new();
    let result = collect_candidates(&fs, &InputSource::List(PathBuf::from("absent.txt")));
    assert!(result.is_err());
}
