use std::fs;
use std::process::Command;

use serde_json::Value;
use tempfile::tempdir;

fn braid_sim() -> Command {
    Command::new(env!("CARGO_BIN_EXE_braid-sim"))
}

#[test]
fn model_writes_export_and_manifest() {
    let dir = tempdir().unwrap();
    let output = braid_sim()
        .args([
            "model",
            "--word",
            "1,-2,3",
            "--braidreps",
            "4",
            "--msteps",
            "25",
            "--seed",
            "2024",
            "--format",
            "txt",
            "--out",
        ])
        .arg(dir.path())
        .output()
        .expect("run braid-sim model");
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let report: Value = serde_json::from_slice(&output.stdout).expect("json report");
    assert_eq!(report["braidreps"], 4);
    assert!(report["aggregate_hash"].as_str().is_some());

    let text = fs::read_to_string(dir.path().join("braidreps_and_Logs.txt")).unwrap();
    assert_eq!(text.lines().take_while(|line| !line.is_empty()).count(), 4);
    let manifest: Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("manifest.json")).unwrap())
            .unwrap();
    assert_eq!(manifest["master_seed"], 2024);
    assert_eq!(manifest["aggregate_hash"], report["aggregate_hash"]);
}

#[test]
fn model_reads_yaml_config() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("run.yaml");
    fs::write(
        &config_path,
        "initial_word: [2, 1]\nnum_braidreps: 2\nmsteps: 10\noutput:\n  format: json\n",
    )
    .unwrap();
    let out = dir.path().join("run");
    let status = braid_sim()
        .arg("model")
        .arg("--config")
        .arg(&config_path)
        .arg("--out")
        .arg(&out)
        .status()
        .expect("run braid-sim model");
    assert!(status.success());

    let aggregate: Value =
        serde_json::from_str(&fs::read_to_string(out.join("braidreps_and_Logs.json")).unwrap())
            .unwrap();
    assert_eq!(aggregate["braidreps"].as_array().map(Vec::len), Some(2));
    assert_eq!(aggregate["logs"].as_array().map(Vec::len), Some(2));
}

#[test]
fn same_seed_gives_same_hash() {
    let hash = || {
        let dir = tempdir().unwrap();
        let output = braid_sim()
            .args(["model", "--seed", "7", "--msteps", "40", "--out"])
            .arg(dir.path())
            .output()
            .expect("run braid-sim model");
        let report: Value = serde_json::from_slice(&output.stdout).unwrap();
        report["aggregate_hash"].as_str().unwrap().to_string()
    };
    assert_eq!(hash(), hash());
}

#[test]
fn check_reports_word_statistics() {
    let output = braid_sim()
        .args(["check", "--word", "1,-2,-2"])
        .output()
        .expect("run braid-sim check");
    assert!(output.status.success());
    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["length"], 3);
    assert_eq!(report["largest_generator"], 2);
    assert_eq!(report["writhe"], -1);
}

#[test]
fn check_rejects_words_outside_bounds() {
    let output = braid_sim()
        .args(["check", "--word", "1,12", "--maxgen", "9"])
        .output()
        .expect("run braid-sim check");
    assert!(!output.status.success());
    let invalid = braid_sim()
        .args(["check", "--word", "1,0"])
        .output()
        .expect("run braid-sim check");
    assert!(!invalid.status.success());
}
