use serde_json::Value;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

const RUN_LABEL: &str = "2020-12-02 00-20-00";

struct TempDirGuard {
    path: PathBuf,
}

impl TempDirGuard {
    fn new(prefix: &str) -> Self {
        let unique = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after unix epoch")
            .as_nanos();
        let path = std::env::temp_dir().join(format!(
            "gridstats-cli-{prefix}-{}-{unique}",
            std::process::id()
        ));
        fs::create_dir_all(&path).expect("temp dir should be created");
        Self { path }
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDirGuard {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

fn run_gridstats<I, S>(args: I) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = env!("CARGO_BIN_EXE_gridstats");
    Command::new(bin)
        .args(args)
        .output()
        .expect("gridstats command should execute")
}

fn assert_success(output: &Output) {
    if !output.status.success() {
        panic!(
            "command failed with status {:?}\nstdout:\n{}\nstderr:\n{}",
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        );
    }
}

fn assert_failure(output: &Output) {
    if output.status.success() {
        panic!(
            "command unexpectedly succeeded\nstdout:\n{}\nstderr:\n{}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        );
    }
}

fn stdout_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn parse_json_stdout(output: &Output) -> Value {
    serde_json::from_slice::<Value>(&output.stdout).unwrap_or_else(|e| {
        panic!(
            "expected valid JSON stdout, got error: {e}\nstdout:\n{}",
            String::from_utf8_lossy(&output.stdout)
        )
    })
}

fn write_doc(root: &Path, kind: &str, racer_id: i64, body: &str) {
    let dir = root.join(RUN_LABEL).join(kind);
    fs::create_dir_all(&dir).expect("document dir should be created");
    fs::write(dir.join(format!("{racer_id}.json")), body).expect("document should be written");
}

fn existing_summary(racer_id: i64) -> String {
    format!(
        r##"{{
            "user": {{"id": {racer_id}, "login": "driver{racer_id}"}},
            "car": {{"car": 1, "color": "#777777"}},
            "is_online": false,
            "level": 1,
            "title": "Новичок",
            "blocked": 0
        }}"##
    )
}

fn existing_index_data(racer_id: i64) -> String {
    format!(
        r#"{{
            "ok": 1,
            "bio": {{"userId": {racer_id}, "text": ""}},
            "stats": {{
                "registered": {{"sec": 1607554944, "usec": 0}},
                "achievesCnt": 0,
                "totalNumRaces": 0,
                "bestSpeed": null,
                "ratingLevel": 1,
                "friendsCnt": 0,
                "vocsCnt": 0,
                "carsCnt": 1
            }}
        }}"#
    )
}

const NOT_FOUND: &str = r#"{"err": "invalid user id"}"#;

fn write_sample_run(root: &Path) {
    write_doc(root, "summary", 100, &existing_summary(100));
    write_doc(root, "index-data", 100, &existing_index_data(100));
    write_doc(root, "summary", 101, NOT_FOUND);
    write_doc(root, "index-data", 101, NOT_FOUND);
}

#[test]
fn import_reports_counts() {
    let dir = TempDirGuard::new("import");
    write_sample_run(dir.path());

    let output = run_gridstats([
        OsStr::new("import"),
        dir.path().as_os_str(),
        OsStr::new("100"),
        OsStr::new("101"),
        OsStr::new("--run"),
        OsStr::new(RUN_LABEL),
    ]);
    assert_success(&output);

    let text = stdout_text(&output);
    assert!(text.contains("racer ids handled: 2"), "stdout:\n{text}");
    assert!(text.contains("existing racers: 1"), "stdout:\n{text}");
    assert!(text.contains("confirmed non-existent: 1"), "stdout:\n{text}");
}

#[test]
fn import_reports_counts_as_json() {
    let dir = TempDirGuard::new("import-json");
    write_sample_run(dir.path());

    let output = run_gridstats([
        OsStr::new("import"),
        dir.path().as_os_str(),
        OsStr::new("100"),
        OsStr::new("101"),
        OsStr::new("--run"),
        OsStr::new(RUN_LABEL),
        OsStr::new("--json"),
    ]);
    assert_success(&output);

    let value = parse_json_stdout(&output);
    assert_eq!(value["handled"], 2);
    assert_eq!(value["existing"], 1);
    assert_eq!(value["missing"], 1);
    assert_eq!(value["run"], RUN_LABEL);
}

#[test]
fn import_aborts_on_conflicting_error_states() {
    let dir = TempDirGuard::new("conflict");
    // Summary reports an error while index data succeeds: unmodeled.
    write_doc(dir.path(), "summary", 100, NOT_FOUND);
    write_doc(dir.path(), "index-data", 100, &existing_index_data(100));

    let output = run_gridstats([
        OsStr::new("import"),
        dir.path().as_os_str(),
        OsStr::new("100"),
        OsStr::new("100"),
        OsStr::new("--run"),
        OsStr::new(RUN_LABEL),
    ]);
    assert_failure(&output);
    let stderr = stderr_text(&output);
    assert!(stderr.contains("error:"), "stderr:\n{stderr}");
    assert!(stderr.contains("summary"), "stderr:\n{stderr}");
}

#[test]
fn import_aborts_on_missing_document() {
    let dir = TempDirGuard::new("missing-doc");
    write_doc(dir.path(), "summary", 100, &existing_summary(100));
    // No index-data file for 100.

    let output = run_gridstats([
        OsStr::new("import"),
        dir.path().as_os_str(),
        OsStr::new("100"),
        OsStr::new("100"),
        OsStr::new("--run"),
        OsStr::new(RUN_LABEL),
    ]);
    assert_failure(&output);
}

#[test]
fn import_rejects_malformed_run_label() {
    let dir = TempDirGuard::new("bad-label");

    let output = run_gridstats([
        OsStr::new("import"),
        dir.path().as_os_str(),
        OsStr::new("100"),
        OsStr::new("101"),
        OsStr::new("--run"),
        OsStr::new("yesterday"),
    ]);
    assert_failure(&output);
    assert!(stderr_text(&output).contains("invalid run label"));
}

#[test]
fn import_rejects_reversed_range() {
    let dir = TempDirGuard::new("reversed");
    write_sample_run(dir.path());

    let output = run_gridstats([
        OsStr::new("import"),
        dir.path().as_os_str(),
        OsStr::new("101"),
        OsStr::new("100"),
        OsStr::new("--run"),
        OsStr::new(RUN_LABEL),
    ]);
    assert_failure(&output);
}

#[test]
fn show_prints_existing_record_as_json() {
    let dir = TempDirGuard::new("show-json");
    write_sample_run(dir.path());

    let output = run_gridstats([
        OsStr::new("show"),
        dir.path().as_os_str(),
        OsStr::new("100"),
        OsStr::new("--run"),
        OsStr::new(RUN_LABEL),
        OsStr::new("--json"),
    ]);
    assert_success(&output);

    let value = parse_json_stdout(&output);
    assert_eq!(value["racer_id"], 100);
    assert_eq!(value["profile"]["login"], "driver100");
    assert_eq!(value["profile"]["rank"], "novice");
    let stats = &value["profile"]["stats"];
    assert_eq!(stats["total_races"], 0);
    // No races in the base mode: the key must be absent, not zero.
    assert!(stats.get("best_speed").is_none());
}

#[test]
fn show_prints_missing_record() {
    let dir = TempDirGuard::new("show-missing");
    write_sample_run(dir.path());

    let output = run_gridstats([
        OsStr::new("show"),
        dir.path().as_os_str(),
        OsStr::new("101"),
        OsStr::new("--run"),
        OsStr::new(RUN_LABEL),
    ]);
    assert_success(&output);
    assert!(stdout_text(&output).contains("does not exist"));
}
