use std::process::Command;

use tempfile::TempDir;

const TESTS_JSON: &str = r#"{
    "name": "checkout",
    "status": "fail",
    "started_at": "2024-03-01T10:00:00Z",
    "ended_at": "2024-03-01T10:00:09Z",
    "log_column_count": 3,
    "logs": [
        {"timestamp": "2024-03-01T10:00:01Z", "log_status": "fail", "details": "card declined\nretry"}
    ],
    "children": [
        {"name": "add item", "status": "pass", "started_at": "2024-03-01T10:00:00Z",
         "ended_at": "2024-03-01T10:00:03Z", "log_column_count": 4}
    ]
}"#;

fn verdict() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_verdict"));
    for var in [
        "VERDICT_DATE_TIME_FORMAT",
        "VERDICT_TIME_FORMAT",
        "VERDICT_ICON_PREFIX",
        "VERDICT_REPORT_TITLE",
    ] {
        command.env_remove(var);
    }
    command
}

#[test]
fn test_render_to_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("run.json");
    let output = dir.path().join("report.html");
    std::fs::write(&input, TESTS_JSON).unwrap();

    let status = verdict()
        .current_dir(dir.path())
        .args(["render", "--title", "Nightly"])
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .status()
        .unwrap();
    assert!(status.success());

    let html = std::fs::read_to_string(&output).unwrap();
    assert!(html.contains("<title>Nightly</title>"));
    assert!(html.contains("card declined<br>retry"));
    assert!(html.contains("node-1x"));
    assert!(html.contains("has-children"));
}

#[test]
fn test_render_rejects_unsupported_columns() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("run.json");
    std::fs::write(&input, TESTS_JSON.replace("\"log_column_count\": 4", "\"log_column_count\": 6"))
        .unwrap();

    let output = verdict()
        .current_dir(dir.path())
        .arg("render")
        .arg(&input)
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unsupported log column count 6"));
}

#[test]
fn test_render_rejects_log_without_status() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("run.json");
    std::fs::write(&input, TESTS_JSON.replace("\"log_status\": \"fail\", ", "")).unwrap();

    let output = verdict()
        .current_dir(dir.path())
        .arg("render")
        .arg(&input)
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing field `log_status`"), "{stderr}");
}

#[test]
fn test_config_prints_defaults() {
    let output = verdict().arg("config").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[format]"));
    assert!(stdout.contains("date_time_format"));
}
