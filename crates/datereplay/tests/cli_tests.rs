//! CLI integration tests.
//!
//! These tests exercise the CLI commands end-to-end.

use chrono::{TimeZone, Utc};
use datereplay_core::times::{apply_times, read_times};
use datereplay_core::TimestampPair;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Build a command for the datereplay binary, isolated from any user config.
fn datereplay(cwd: &Path) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_datereplay"));
    command
        .current_dir(cwd)
        .env("XDG_CONFIG_HOME", cwd.join(".config"))
        .env_remove("DATEREPLAY_CONFIG_CONTENT")
        .env_remove("RUST_LOG");
    command
}

fn run(cwd: &Path, args: &[&str]) -> Output {
    datereplay(cwd)
        .args(args)
        .output()
        .expect("Failed to execute command")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Create `rel` under `dir` with a fixed modified time in `year`.
fn dated_file(dir: &Path, rel: &str, year: i32) {
    let path = dir.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, rel).unwrap();
    let time = Utc.with_ymd_and_hms(year, 3, 4, 5, 6, 7).unwrap();
    apply_times(&path, &TimestampPair::new(time, time)).unwrap();
}

fn plain_file(dir: &Path, rel: &str) {
    let path = dir.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, rel).unwrap();
}

fn modified_year(path: &Path) -> String {
    read_times(path).unwrap().modified.format("%Y").to_string()
}

#[test]
fn test_version_command() {
    let temp = TempDir::new().unwrap();
    let output = run(temp.path(), &["version"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("datereplay"));
}

#[test]
fn test_help_command() {
    let temp = TempDir::new().unwrap();
    let output = run(temp.path(), &["--help"]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("collect"));
    assert!(text.contains("replay"));
}

#[test]
fn test_collect_writes_snapshot() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("photos");
    dated_file(&source, "a.jpg", 2001);
    dated_file(&source, "trip/b.jpg", 2002);
    let out = temp.path().join("photos.txt");

    let output = run(
        temp.path(),
        &[
            "collect",
            source.to_str().unwrap(),
            "--recursive",
            "--out",
            out.to_str().unwrap(),
        ],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let text = stdout(&output);
    assert!(text.contains("Collection: photos"));
    assert!(text.contains("Collected:  2"));
    assert!(text.contains("Saved 2 items"));

    let saved = fs::read_to_string(&out).unwrap();
    assert!(saved.contains("a.jpg\t"));
    assert!(saved.contains("trip/b.jpg\t"));
    assert!(saved.contains("2002-03-04T05:06:07Z"));
}

#[test]
fn test_collect_then_replay_onto_copy() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("original");
    dated_file(&source, "a.jpg", 2001);
    dated_file(&source, "trip/b.jpg", 2002);
    let copy = temp.path().join("copy");
    plain_file(&copy, "a.jpg");
    plain_file(&copy, "trip/b.jpg");
    plain_file(&copy, "new.jpg");
    let snapshot = temp.path().join("dates.txt");

    let collected = run(
        temp.path(),
        &[
            "collect",
            source.to_str().unwrap(),
            "-r",
            "-o",
            snapshot.to_str().unwrap(),
        ],
    );
    assert!(collected.status.success(), "stderr: {}", stderr(&collected));

    let replayed = run(
        temp.path(),
        &[
            "replay",
            copy.to_str().unwrap(),
            "-r",
            "--in",
            snapshot.to_str().unwrap(),
        ],
    );
    assert!(replayed.status.success(), "stderr: {}", stderr(&replayed));
    assert!(stdout(&replayed).contains("Replayed:   2"));

    assert_eq!(modified_year(&copy.join("a.jpg")), "2001");
    assert_eq!(modified_year(&copy.join("trip/b.jpg")), "2002");
}

#[test]
fn test_replay_with_pattern() {
    let temp = TempDir::new().unwrap();
    let snapshot = temp.path().join("dates.txt");
    fs::write(
        &snapshot,
        "a/b.jpg\t1999-01-01T00:00:00Z\t2000-01-01T00:00:00Z\n",
    )
    .unwrap();
    let target = temp.path().join("target");
    plain_file(&target, "a/b.jpeg");

    let output = run(
        temp.path(),
        &[
            "replay",
            target.to_str().unwrap(),
            "--recursive",
            "--in",
            snapshot.to_str().unwrap(),
            "--pattern",
            r"\.jpeg$",
            "--replace",
            ".jpg",
        ],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Replayed:   1"));
    assert_eq!(modified_year(&target.join("a/b.jpeg")), "2000");
}

#[test]
fn test_replay_dry_run_json() {
    let temp = TempDir::new().unwrap();
    let snapshot = temp.path().join("dates.txt");
    fs::write(&snapshot, "x.txt\t1999-01-01T00:00:00Z\t2000-01-01T00:00:00Z\n").unwrap();
    let target = temp.path().join("target");
    plain_file(&target, "x.txt");
    let before = modified_year(&target.join("x.txt"));

    let output = run(
        temp.path(),
        &[
            "replay",
            target.to_str().unwrap(),
            "--in",
            snapshot.to_str().unwrap(),
            "--dry-run",
            "--json",
        ],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["report"]["replayed"], 1);
    assert_eq!(value["dry_run"], true);
    assert_eq!(modified_year(&target.join("x.txt")), before);
}

#[cfg(unix)]
#[test]
fn test_replay_continue_on_error_exits_with_failure() {
    use std::os::unix::fs::{MetadataExt, PermissionsExt};

    let temp = TempDir::new().unwrap();
    if fs::metadata(temp.path()).unwrap().uid() == 0 {
        return;
    }
    let snapshot = temp.path().join("dates.txt");
    fs::write(
        &snapshot,
        "locked/y.txt\t1999-01-01T00:00:00Z\t2000-01-01T00:00:00Z\n\
         x.txt\t1999-01-01T00:00:00Z\t2000-01-01T00:00:00Z\n",
    )
    .unwrap();
    let target = temp.path().join("target");
    plain_file(&target, "x.txt");
    plain_file(&target, "locked/y.txt");
    let locked = target.join("locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o400)).unwrap();

    let output = run(
        temp.path(),
        &[
            "replay",
            target.to_str().unwrap(),
            "-r",
            "--in",
            snapshot.to_str().unwrap(),
            "--continue-on-error",
        ],
    );
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o700)).unwrap();

    assert!(!output.status.success());
    let errors = stderr(&output);
    assert!(errors.contains("Failed: "));
    assert!(errors.contains("1 of 2 matched files could not be updated"));
    assert!(stdout(&output).contains("Replayed:   1"));
    assert_eq!(modified_year(&target.join("x.txt")), "2000");
}

#[test]
fn test_replay_empty_snapshot_fails() {
    let temp = TempDir::new().unwrap();
    let snapshot = temp.path().join("empty.txt");
    fs::write(&snapshot, "").unwrap();

    let output = run(
        temp.path(),
        &["replay", temp.path().to_str().unwrap(), "--in", snapshot.to_str().unwrap()],
    );
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Empty collection"));
}

#[test]
fn test_replay_malformed_snapshot_fails() {
    let temp = TempDir::new().unwrap();
    let snapshot = temp.path().join("bad.txt");
    fs::write(&snapshot, "x.txt\tnot a date\n").unwrap();

    let output = run(
        temp.path(),
        &["replay", temp.path().to_str().unwrap(), "--in", snapshot.to_str().unwrap()],
    );
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Open file error"));
}

#[test]
fn test_collect_missing_directory_fails() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("missing");
    let out = temp.path().join("out.txt");

    let output = run(
        temp.path(),
        &["collect", missing.to_str().unwrap(), "--out", out.to_str().unwrap()],
    );
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Directory error"));
    assert!(!out.exists());
}

#[test]
fn test_show_lists_entries() {
    let temp = TempDir::new().unwrap();
    let snapshot = temp.path().join("dates.txt");
    fs::write(
        &snapshot,
        "x.txt\t2021-01-01T00:00:00Z\t2021-01-02T00:00:00Z\n\
         y.txt\t2021-01-03T00:00:00Z\t2021-01-04T00:00:00Z\n",
    )
    .unwrap();

    let output = run(temp.path(), &["show", "--in", snapshot.to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let text = stdout(&output);
    assert!(text.contains("x.txt  created 2021-01-01T00:00:00Z  modified 2021-01-02T00:00:00Z"));
    assert!(text.contains("2 entries"));
}

#[test]
fn test_rewrite_preview() {
    let temp = TempDir::new().unwrap();
    let output = run(
        temp.path(),
        &["rewrite", "a/b.jpg", "--pattern", r"\.jpg$", "--replace", ".jpeg"],
    );

    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "a/b.jpeg");
}

#[test]
fn test_project_config_enables_recursion() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("datereplay.json"), r#"{ "recursive": true }"#).unwrap();
    let source = temp.path().join("src");
    dated_file(&source, "top.txt", 2001);
    dated_file(&source, "nested/deep.txt", 2002);
    let out = temp.path().join("out.txt");

    let output = run(
        temp.path(),
        &["collect", source.to_str().unwrap(), "--out", out.to_str().unwrap()],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Collected:  2"));
}

#[test]
fn test_config_command() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("datereplay.json"), r#"{ "pattern": "x" }"#).unwrap();

    let output = run(temp.path(), &["config"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Configuration sources"));
    assert!(text.contains("\"pattern\": \"x\""));
}
