//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with an isolated home and working directory
//! - Command builder helpers
//! - Catalog and layout fixtures

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would leak host settings into a test run.
const RACKPLAN_VARS: &[&str] = &[
    "RACKPLAN_CONFIG",
    "RACKPLAN_ELEVATOR",
    "RACKPLAN_COLLISION_MARGIN",
    "RACKPLAN_MAX_PRODUCT_HEIGHT",
    "RACKPLAN_OUTPUT_FORMAT",
    "RACKPLAN_LOG_MODE",
];

/// Two machine families: a 40-dot rack with reservations and a small one.
#[allow(dead_code)]
pub const CATALOG: &str = r"
elevator: lift
profiles:
  - name: vx-40
    amount_dots: 40
    dot_delta: 25
    min_tray_height: 100
    tray_width: 640
    low_extractor_height: 20
    high_extractor_height: 45
    high_extractor_clip_distance: 12
    pallet_delta: 135
    reserved_dots: [40]
    elevator_reservations:
      lift: [1, 2, 3]
    double_dot_positions: [20]
  - name: mini-12
    amount_dots: 12
    dot_delta: 30
    min_tray_height: 90
    tray_width: 400
    low_extractor_height: 15
    high_extractor_height: 40
    pallet_delta: 120
";

/// A rack with one colliding pair and one refused product.
#[allow(dead_code)]
pub const FLAGGED_LAYOUT: &str = r"
profile: vx-40
trays:
  - dot: 5
    products:
      - { name: cola, width: 70, height: 200, depth: 70, stable: true }
      - { name: water, width: 70, height: 220, depth: 70, stable: false }
      - { name: crisps, width: 150, height: 180, depth: 200, stable: true }
  - dot: 20
    products:
      - { name: candy, width: 50, height: 90, depth: 50, stable: true }
  - products:
      - { name: gum, width: 40, height: 60, depth: 30, stable: true }
      - { name: giant, width: 700, height: 100, depth: 50, stable: true }
";

/// A rack without flags.
#[allow(dead_code)]
pub const CLEAN_LAYOUT: &str = r"
profile: vx-40
trays:
  - dot: 10
    products:
      - { name: cola, width: 70, height: 200, depth: 70, stable: true }
  - dot: 25
    products:
      - { width: 150, height: 100, depth: 200, stable: false }
";

/// Test environment with an isolated home and working directory.
///
/// The working directory is where the project `rackplan.yaml` is looked up;
/// `HOME` points at an empty directory so the user's own configuration is
/// never read.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Stand-in home directory
    pub home: PathBuf,
    /// Working directory of every command
    pub work: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let home = temp_dir.path().join("home");
        let work = temp_dir.path().join("work");
        std::fs::create_dir_all(&home).expect("Failed to create home directory");
        std::fs::create_dir_all(&work).expect("Failed to create work directory");

        Self {
            temp_dir,
            home,
            work,
        }
    }

    /// Create a test environment whose project config is [`CATALOG`].
    pub fn with_catalog() -> Self {
        let env = Self::new();
        env.write_file("rackplan.yaml", CATALOG);
        env
    }

    /// Get a command builder for the rackplan binary.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("rackplan").expect("Failed to find rackplan binary");
        cmd.current_dir(&self.work).env("HOME", &self.home);
        for var in RACKPLAN_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get the working directory.
    pub fn path(&self) -> &Path {
        &self.work
    }

    /// Write a file into the working directory and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.work.join(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Run a command and return its stdout, asserting success.
    pub fn run_ok(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run rackplan");

        assert!(
            output.status.success(),
            "rackplan {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}
