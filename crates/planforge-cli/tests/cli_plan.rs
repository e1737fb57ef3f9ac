//! Black-box CLI tests: compile a recipe file through the binary and
//! check the JSON output, including byte-for-byte determinism across runs.

use std::io::Write;
use std::process::Command;

fn planforge_bin() -> &'static str {
    env!("CARGO_BIN_EXE_planforge")
}

fn write_recipe(content: &str) -> tempfile::NamedTempFile {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    f.write_all(content.as_bytes()).unwrap();
    f
}

fn run_plan_json(path: &std::path::Path) -> Vec<u8> {
    let out = Command::new(planforge_bin())
        .arg("--json")
        .arg("plan")
        .arg(path)
        .output()
        .expect("failed to spawn planforge");
    assert!(out.status.success(), "planforge plan failed: {:?}", out);
    out.stdout
}

#[test]
fn plan_emits_expected_json() {
    let f = write_recipe(
        r#"{
            "tier": 2,
            "region": "eu-central-1",
            "selections": ["traffic-medium", "style-website-api", "data-sql", "rel-multi-az"],
            "addons": { "cicd": false, "support": true }
        }"#,
    );
    let stdout = run_plan_json(f.path());
    let v: serde_json::Value = serde_json::from_slice(&stdout).unwrap();

    assert_eq!(v["plan"]["region"], "eu-central-1");
    assert_eq!(v["plan"]["vpc"]["multiAz"], true);
    assert_eq!(v["plan"]["vpc"]["subnets"].as_array().unwrap().len(), 6);
    let ids: Vec<_> = v["plan"]["components"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_str().unwrap().to_string())
        .collect();
    assert!(ids.contains(&"alb".to_string()));
    assert!(ids.contains(&"rds".to_string()));
    assert!(v["estimate"]["monthlyFee"].as_u64().unwrap() > 299);
}

#[test]
fn plan_output_is_deterministic() {
    let f = write_recipe(
        r#"{"tier": 1, "selections": ["traffic-small", "style-api-first", "data-nosql"]}"#,
    );
    let a = run_plan_json(f.path());
    let b = run_plan_json(f.path());
    assert_eq!(a, b);
}

#[test]
fn unknown_ids_are_ignored_not_fatal() {
    let f = write_recipe(r#"{"tier": 3, "selections": ["style-static", "retired-item"]}"#);
    let stdout = run_plan_json(f.path());
    let v: serde_json::Value = serde_json::from_slice(&stdout).unwrap();
    assert_eq!(v["estimate"]["setupFee"], 499);
}

#[test]
fn invalid_tier_fails() {
    let f = write_recipe(r#"{"tier": 9}"#);
    let out = Command::new(planforge_bin())
        .arg("--json")
        .arg("plan")
        .arg(f.path())
        .output()
        .unwrap();
    assert!(!out.status.success());
}
