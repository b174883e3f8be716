use assert_cmd::Command;
use serde_json::Value;
use std::fs;

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_missing_input_uses_sample_text() {
    let dir = tempfile::tempdir().unwrap();

    let output = Command::cargo_bin("regex-extractor")
        .unwrap()
        .current_dir(dir.path())
        .arg("--quiet")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("'input.txt' not found. Using default sample text."));
    assert!(stdout.contains("EMAILS: 3 found (0 rejected)"));
    assert!(stdout.contains("Total valid items: 18"));
    assert!(stdout.contains("Total rejected items: 2"));
}

#[test]
fn test_json_output_for_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    fs::write(&path, "Ping jane@corp.io at 9:45 AM #standup #42\n").unwrap();

    let output = Command::cargo_bin("regex-extractor")
        .unwrap()
        .arg(&path)
        .args(["--json", "--quiet"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let doc: Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(doc["summary"]["total_valid"], 3);
    assert_eq!(doc["summary"]["total_rejected"], 1);
    assert_eq!(doc["categories"][0]["items"][0], "jane@corp.io");
    assert_eq!(doc["categories"][3]["items"][0], "9:45 AM");
}

#[test]
fn test_output_file_and_parallel_mode() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("notes.txt");
    let report = dir.path().join("report.json");
    fs::write(&input, "call 555-987-6543 or see https://example.org/x\n").unwrap();

    let output = Command::cargo_bin("regex-extractor")
        .unwrap()
        .arg(&input)
        .args(["--parallel", "--quiet", "--output"])
        .arg(&report)
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(stdout_of(&output).contains("PHONE NUMBERS: 1 found (0 rejected)"));

    let doc: Value = serde_json::from_str(&fs::read_to_string(&report).unwrap()).unwrap();
    assert_eq!(doc["categories"][1]["items"][0], "https://example.org/x");
    assert_eq!(doc["categories"][2]["items"][0], "555-987-6543");
}

#[test]
fn test_unreadable_input_fails() {
    let dir = tempfile::tempdir().unwrap();

    let output = Command::cargo_bin("regex-extractor")
        .unwrap()
        .arg(dir.path())
        .arg("--quiet")
        .output()
        .unwrap();

    assert!(!output.status.success());
}

#[test]
fn test_json_extractor_writes_findings() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("log.txt");
    let findings = dir.path().join("findings.json");
    fs::write(&input, "a@b.io 10:00\nnothing\n#tag #tag\nlate@x.org\n").unwrap();

    let output = Command::cargo_bin("json_extractor")
        .unwrap()
        .arg(&input)
        .args(["--limit", "3", "--output"])
        .arg(&findings)
        .output()
        .unwrap();

    assert!(output.status.success());
    let doc: Value = serde_json::from_str(&fs::read_to_string(&findings).unwrap()).unwrap();
    let entries = doc.as_array().unwrap();
    assert_eq!(entries.len(), 4);
    assert_eq!(entries[0]["line"], 1);
    assert_eq!(entries[0]["type"], "email");
    assert_eq!(entries[1]["type"], "time");
    assert_eq!(entries[1]["value"], "10:00");
    assert_eq!(entries[3]["line"], 3);
    assert_eq!(entries[3]["value"], "#tag");
}

#[test]
fn test_category_filter() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("notes.txt");
    fs::write(&input, "a@b.io at 9:00 #go #7\n").unwrap();

    let output = Command::cargo_bin("regex-extractor")
        .unwrap()
        .arg(&input)
        .args(["--quiet", "--json", "--categories", "hashtag,EMAIL"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let doc: Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    let categories = doc["categories"].as_array().unwrap();
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0]["category"], "email");
    assert_eq!(categories[1]["category"], "hashtag");
    assert_eq!(categories[1]["rejected"], 1);
    assert_eq!(doc["summary"]["total_valid"], 2);
}

#[test]
fn test_unknown_category_is_rejected() {
    let output = Command::cargo_bin("regex-extractor")
        .unwrap()
        .args(["--quiet", "--categories", "ip"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown category 'ip'"));
}
