use std::fs;

use assert_cmd::Command;
use tempfile::TempDir;

#[test]
fn score_prints_summary() {
    let mut cmd = Command::cargo_bin("corepex").unwrap();
    cmd.args([
        "score",
        "--margins",
        "positive",
        "--lvsi",
        "positive",
        "--pe-type",
        "total",
        "--lymphadenectomy",
        "no",
        "--timing",
        "naive",
    ]);
    let output = cmd.assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).unwrap();
    assert!(stdout.contains("DFS Score: 100 -> Group 4 (very high risk)"));
    assert!(stdout.contains("5-year DFS: 8.0% (95% CI 0.0\u{2013}15.4)"));
    assert!(stdout.contains("OS Score: 64 -> Group 3 (high risk)"));
}

#[test]
fn score_writes_requested_files() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("out");
    let mut cmd = Command::cargo_bin("corepex").unwrap();
    cmd.args([
        "score",
        "--margins",
        "negative",
        "--lvsi",
        "negative",
        "--pe-type",
        "anterior",
        "--lymphadenectomy",
        "yes",
        "--timing",
        "naive",
        "--json",
        "--html",
        "--charts",
        "--out",
    ])
    .arg(&out);
    cmd.assert().success();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.join("corepex.json")).unwrap()).unwrap();
    assert_eq!(json["endpoints"][1]["score"], 0);
    assert_eq!(json["endpoints"][1]["estimate"]["value"], 54.3);
    assert!(json["charts"].is_object());
    assert!(out.join("corepex.html").exists());
    assert!(!out.join("corepex.tsv").exists());
}

#[test]
fn missing_field_fails() {
    let mut cmd = Command::cargo_bin("corepex").unwrap();
    cmd.args(["score", "--margins", "positive"]);
    let output = cmd.assert().failure().get_output().stderr.clone();
    let stderr = String::from_utf8(output).unwrap();
    assert!(stderr.contains("missing clinical input"));
}

#[test]
fn record_file_and_overlay() {
    let tmp = TempDir::new().unwrap();
    let record = tmp.path().join("record.json");
    fs::write(
        &record,
        r#"{"margins":"negative","lvsi":"negative","pe_type":"anterior","lymphadenectomy":"yes","timing":"naive"}"#,
    )
    .unwrap();
    let estimates = tmp.path().join("est.tsv");
    fs::write(&estimates, "os\t1\t60.0\t50.0\t70.0\n").unwrap();

    let mut cmd = Command::cargo_bin("corepex").unwrap();
    cmd.arg("score")
        .arg("--record")
        .arg(&record)
        .arg("--estimates")
        .arg(&estimates);
    let output = cmd.assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).unwrap();
    assert!(stdout.contains("5-year OS: 60.0% (95% CI 50.0\u{2013}70.0)"));
    assert!(stdout.contains("warnings:"));
}

#[test]
fn validate_and_show_estimates() {
    let tmp = TempDir::new().unwrap();
    let good = tmp.path().join("good.tsv");
    fs::write(&good, "dfs\t4\t9.0\t0.0\t16.0\n").unwrap();
    let bad = tmp.path().join("bad.tsv");
    fs::write(&bad, "dfs\t4\t9.0\t10.0\t16.0\n").unwrap();

    let mut cmd = Command::cargo_bin("corepex").unwrap();
    cmd.arg("validate").arg("--estimates").arg(&good);
    let output = cmd.assert().success().get_output().stdout.clone();
    assert!(String::from_utf8(output).unwrap().contains("corepex validate ok"));

    let mut cmd = Command::cargo_bin("corepex").unwrap();
    cmd.arg("validate").arg("--estimates").arg(&bad);
    cmd.assert().failure();

    let mut cmd = Command::cargo_bin("corepex").unwrap();
    cmd.args(["estimates", "show"]);
    let output = cmd.assert().success().get_output().stdout.clone();
    assert!(String::from_utf8(output).unwrap().contains("dfs\t4\t8.0\t0.0\t15.4"));
}
