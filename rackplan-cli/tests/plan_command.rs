//! Integration tests for the `plan` and `export` commands.

mod common;

use common::{TestEnv, CLEAN_LAYOUT, FLAGGED_LAYOUT};
use predicates::prelude::*;

// ============================================================================
// plan
// ============================================================================

#[test]
fn test_plan_human_output() {
    let env = TestEnv::with_catalog();
    env.write_file("layout.yaml", FLAGGED_LAYOUT);

    let stdout = env.run_ok(&["plan", "layout.yaml"]);

    // The configured elevator setting is inherited by the document
    assert!(stdout.starts_with("Rack vx-40 (40 dots, elevator: lift)"));
    assert!(stdout.contains("#1 T1 dot 5 height 265mm [COLLISION]"));
    assert!(stdout.contains("[0] x=0 70mm low /6/ cola"));
    assert!(stdout.contains("[1] x=70 70mm high /6/ water"));
    assert!(stdout.contains("[2] x=140 150mm low /15/15/ crisps"));
    assert!(stdout.contains("#2 T3 dot 12 height 100mm [COLLISION]"));
    assert!(stdout.contains("#3 T2 dot 20 height 110mm\n"));
    assert!(stdout.contains("Rejected:"));
    assert!(stdout.contains("T3: product of width 700mm does not fit on tray T3"));
    assert!(stdout.contains("Utilization: 19.8% across 3 tray(s), 5 product(s)"));
}

#[test]
fn test_plan_json_output() {
    let env = TestEnv::with_catalog();
    env.write_file("layout.yaml", FLAGGED_LAYOUT);

    let stdout = env.run_ok(&["plan", "layout.yaml", "--format", "json"]);
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("Invalid JSON");

    assert_eq!(json["profile"], "vx-40");
    assert_eq!(json["elevator"], "lift");

    let dots: Vec<u64> = json["trays"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["dot"].as_u64().unwrap())
        .collect();
    assert_eq!(dots, vec![5, 12, 20]);

    assert_eq!(json["trays"][0]["has_collision"], true);
    assert_eq!(json["trays"][2]["has_collision"], false);
    assert_eq!(json["rejected"][0]["name"], "giant");
    assert_eq!(json["stats"]["product_count"], 5);
}

#[test]
fn test_plan_format_from_environment() {
    let env = TestEnv::with_catalog();
    env.write_file("layout.yaml", CLEAN_LAYOUT);

    let output = env
        .command()
        .env("RACKPLAN_OUTPUT_FORMAT", "json")
        .args(["plan", "layout.yaml"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("Invalid JSON");
    assert_eq!(json["trays"].as_array().unwrap().len(), 2);
}

#[test]
fn test_plan_strict_fails_on_flags() {
    let env = TestEnv::with_catalog();
    env.write_file("layout.yaml", FLAGGED_LAYOUT);

    env.command()
        .args(["plan", "layout.yaml", "--strict"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Rack vx-40"))
        .stderr(predicate::str::contains(
            "Layout is not clean: 2 colliding tray(s), 0 prohibited tray(s), 1 rejected product(s)",
        ));
}

#[test]
fn test_plan_strict_passes_clean_layout() {
    let env = TestEnv::with_catalog();
    env.write_file("layout.yaml", CLEAN_LAYOUT);

    env.command()
        .args(["plan", "layout.yaml", "--strict"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#1 T1 dot 10 height 220mm\n"))
        .stdout(predicate::str::contains("[0] x=0 150mm high /15/15/"));
}

#[test]
fn test_plan_unknown_profile() {
    let env = TestEnv::with_catalog();
    env.write_file("layout.yaml", "profile: vx-99\ntrays: []\n");

    env.command()
        .args(["plan", "layout.yaml"])
        .assert()
        .code(6)
        .stderr(predicate::str::contains("profile not found: vx-99"));
}

#[test]
fn test_plan_reserved_dot_needs_override() {
    let env = TestEnv::with_catalog();
    env.write_file(
        "blocked.yaml",
        "profile: vx-40\ntrays:\n  - dot: 40\n",
    );
    env.write_file(
        "allowed.yaml",
        "profile: vx-40\ntrays:\n  - dot: 40\n    allow_reserved: true\n",
    );

    env.command()
        .args(["plan", "blocked.yaml"])
        .assert()
        .code(6)
        .stderr(predicate::str::contains("dot position 40 is reserved"));

    env.command()
        .args(["plan", "allowed.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[PROHIBITED]"));
}

#[test]
fn test_plan_missing_layout_file() {
    let env = TestEnv::with_catalog();

    env.command()
        .args(["plan", "absent.yaml"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("failed to read layout document"));
}

// ============================================================================
// export
// ============================================================================

#[test]
fn test_export_csv_to_stdout() {
    let env = TestEnv::with_catalog();
    env.write_file("layout.yaml", FLAGGED_LAYOUT);

    let stdout = env.run_ok(&["export", "layout.yaml"]);
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(
        lines,
        vec![
            "tray,dot,index,code",
            "1,5,0,/6/",
            "1,5,1,/6/",
            "1,5,2,/15/15/",
            "3,12,0,/.../",
            "2,20,0,/..../",
        ]
    );
}

#[test]
fn test_export_csv_to_file() {
    let env = TestEnv::with_catalog();
    env.write_file("layout.yaml", CLEAN_LAYOUT);
    let target = env.path().join("pallets.csv");

    env.command()
        .args(["export", "layout.yaml", "--output"])
        .arg(&target)
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Wrote 2 pallet string(s)"));

    let contents = std::fs::read_to_string(&target).unwrap();
    assert_eq!(contents, "tray,dot,index,code\n1,10,0,/6/\n2,25,0,/15/15/\n");
}
