//! Integration tests for the `ut` CLI.
//!
//! Each test creates a temp data directory, runs `ut` as a subprocess
//! against it, and verifies stdout and/or file contents.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Get the path to the built `ut` binary.
fn ut_bin() -> PathBuf {
    // cargo test builds to target/debug/
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("ut");
    path
}

fn run_ut(data_dir: &Path, args: &[&str]) -> std::process::Output {
    Command::new(ut_bin())
        .arg("-C")
        .arg(data_dir)
        .args(args)
        .output()
        .expect("failed to run ut")
}

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Seed `currentPrograms.json` with two programs. The first one's id lands
/// in the built-in `rm-cs` roadmap grouping.
fn seed_programs(data_dir: &Path) {
    fs::create_dir_all(data_dir).unwrap();
    fs::write(
        data_dir.join("currentPrograms.json"),
        r#"[
  {
    "id": "university-of-toronto-computer-science",
    "universityName": "University of Toronto",
    "programName": "Computer Science",
    "deadline": "2027-01-15",
    "steps": [
      {
        "id": "university-of-toronto-computer-science-step-1",
        "title": "Research the program",
        "description": "Admission averages and course lists",
        "status": "todo",
        "dueDate": "2026-10-15",
        "priority": "medium"
      },
      {
        "id": "university-of-toronto-computer-science-step-2",
        "title": "Draft personal statement",
        "description": "",
        "status": "todo",
        "dueDate": "2026-11-20",
        "priority": "high"
      }
    ],
    "bonusTasks": [],
    "overallProgress": 0
  },
  {
    "id": "queen-s-university-commerce",
    "universityName": "Queen's University",
    "programName": "Commerce",
    "deadline": "2027-02-01",
    "steps": [
      {
        "id": "queen-s-university-commerce-step-1",
        "title": "Submit supplementary essay",
        "description": "",
        "status": "complete",
        "dueDate": "2026-12-01",
        "priority": "high"
      }
    ],
    "bonusTasks": [],
    "overallProgress": 100
  }
]
"#,
    )
    .unwrap();
}

#[test]
fn test_list_shows_seeded_programs() {
    let dir = TempDir::new().unwrap();
    seed_programs(dir.path());

    let output = run_ut(dir.path(), &["list"]);
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("University of Toronto - Computer Science"));
    assert!(stdout.contains("Queen's University - Commerce"));
    assert!(stdout.contains("0%"));
    assert!(stdout.contains("100%"));
}

#[test]
fn test_list_empty_data_dir() {
    let dir = TempDir::new().unwrap();
    let output = run_ut(dir.path(), &["list"]);
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("no programs"));
}

#[test]
fn test_roadmap_filter_narrows_list() {
    let dir = TempDir::new().unwrap();
    seed_programs(dir.path());

    let output = run_ut(dir.path(), &["list", "--roadmap", "rm-cs"]);
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Computer Science"));
    assert!(!stdout.contains("Commerce"));
}

#[test]
fn test_unknown_roadmap_fails() {
    let dir = TempDir::new().unwrap();
    seed_programs(dir.path());

    let output = run_ut(dir.path(), &["list", "--roadmap", "rm-nope"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown roadmap"));
}

#[test]
fn test_status_command_persists_and_recomputes_progress() {
    let dir = TempDir::new().unwrap();
    seed_programs(dir.path());

    let output = run_ut(
        dir.path(),
        &[
            "status",
            "university-of-toronto-computer-science",
            "university-of-toronto-computer-science-step-1",
            "complete",
        ],
    );
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("-> Done"));

    // One of two steps complete: persisted progress is 50
    let saved = fs::read_to_string(dir.path().join("currentPrograms.json")).unwrap();
    let programs: serde_json::Value = serde_json::from_str(&saved).unwrap();
    assert_eq!(programs[0]["overallProgress"], 50);
    assert_eq!(programs[0]["steps"][0]["status"], "complete");
    assert_eq!(programs[0]["steps"][1]["status"], "todo");
}

#[test]
fn test_cycle_advances_and_wraps() {
    let dir = TempDir::new().unwrap();
    seed_programs(dir.path());
    let args = [
        "cycle",
        "university-of-toronto-computer-science",
        "university-of-toronto-computer-science-step-1",
    ];

    let output = run_ut(dir.path(), &args);
    assert!(stdout_of(&output).contains("-> In Progress"));
    let output = run_ut(dir.path(), &args);
    assert!(stdout_of(&output).contains("-> Done"));
    let output = run_ut(dir.path(), &args);
    assert!(stdout_of(&output).contains("-> To Do"));
}

#[test]
fn test_bad_status_string_fails() {
    let dir = TempDir::new().unwrap();
    seed_programs(dir.path());

    let output = run_ut(
        dir.path(),
        &[
            "status",
            "university-of-toronto-computer-science",
            "university-of-toronto-computer-science-step-1",
            "finished",
        ],
    );
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown status"));
}

#[test]
fn test_global_bonus_status_creates_bonus_key() {
    let dir = TempDir::new().unwrap();
    seed_programs(dir.path());

    let output = run_ut(dir.path(), &["bonus", "bonus-club", "in-progress"]);
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("bonus-club -> In Progress"));

    let saved = fs::read_to_string(dir.path().join("globalBonusTasks.json")).unwrap();
    let tasks: serde_json::Value = serde_json::from_str(&saved).unwrap();
    let club = tasks
        .as_array()
        .unwrap()
        .iter()
        .find(|t| t["id"] == "bonus-club")
        .unwrap();
    assert_eq!(club["status"], "in-progress");
}

#[test]
fn test_show_unknown_program_fails() {
    let dir = TempDir::new().unwrap();
    seed_programs(dir.path());

    let output = run_ut(dir.path(), &["show", "nope"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("program not found"));
}

#[test]
fn test_timeline_sorted_with_day_labels() {
    let dir = TempDir::new().unwrap();
    seed_programs(dir.path());

    let output = run_ut(dir.path(), &["timeline"]);
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    // Chronological: the October step precedes the December essay
    let research = stdout.find("Research the program").unwrap();
    let essay = stdout.find("Submit supplementary essay").unwrap();
    assert!(research < essay);
}

#[test]
fn test_stats_json_output() {
    let dir = TempDir::new().unwrap();
    seed_programs(dir.path());

    let output = run_ut(dir.path(), &["stats", "--json"]);
    assert!(output.status.success());
    let stats: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(stats["programs"], 2);
    assert_eq!(stats["steps"], 3);
    assert_eq!(stats["complete"], 1);
    assert_eq!(stats["todo"], 2);
    // round(100 * 1/3)
    assert_eq!(stats["overall_progress"], 33);
}

#[test]
fn test_clear_force_removes_keys() {
    let dir = TempDir::new().unwrap();
    seed_programs(dir.path());

    let output = run_ut(dir.path(), &["clear", "--force"]);
    assert!(output.status.success());
    assert!(!dir.path().join("currentPrograms.json").exists());

    let output = run_ut(dir.path(), &["list"]);
    assert!(stdout_of(&output).contains("no programs"));
}

#[test]
fn test_corrupt_programs_key_degrades_to_empty_and_logs() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path()).unwrap();
    fs::write(dir.path().join("currentPrograms.json"), "not json {{{").unwrap();

    let output = run_ut(dir.path(), &["list"]);
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("no programs"));

    let log = fs::read_to_string(dir.path().join("recovery.log")).unwrap();
    assert!(log.contains("currentPrograms"));
}

#[test]
fn test_roadmaps_lists_builtins_with_match_counts() {
    let dir = TempDir::new().unwrap();
    seed_programs(dir.path());

    let output = run_ut(dir.path(), &["roadmaps"]);
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("rm-cs"));
    let cs_line = stdout.lines().find(|l| l.starts_with("rm-cs")).unwrap();
    assert!(cs_line.contains("1 program(s)"));
}

#[test]
fn test_history_empty_message() {
    let dir = TempDir::new().unwrap();
    let output = run_ut(dir.path(), &["history"]);
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("no roadmaps generated yet"));
}
