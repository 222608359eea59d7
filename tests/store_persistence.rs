//! End-to-end persistence tests: a `ProgramStore` over a `JsonDirRepository`
//! in a temp directory, reopened between mutations to prove that what was
//! committed is what comes back.

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

use unitrack::io::repository::JsonDirRepository;
use unitrack::model::roadmap::{RoadmapSnapshot, StudentProfile};
use unitrack::model::status::TaskStatus;
use unitrack::model::template::program_from_template;
use unitrack::ops::store::{BonusScope, ProgramStore};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn profile() -> StudentProfile {
    StudentProfile {
        grade_level: 12,
        average: 90.0,
        wants_coop: true,
        extra_curriculars: vec![("Robotics".into(), 3)],
        major_interests: vec!["computer science".into()],
        courses_taken: vec![("MHF4U".into(), 94.0)],
    }
}

fn open_store(dir: &TempDir) -> ProgramStore {
    ProgramStore::open(Box::new(JsonDirRepository::new(dir.path())))
}

fn seeded_snapshot() -> RoadmapSnapshot {
    let today = date(2026, 6, 1);
    let programs = vec![
        program_from_template(
            "university-of-toronto-computer-science",
            "University of Toronto",
            "Computer Science",
            date(2027, 1, 15),
            today,
        ),
        program_from_template(
            "university-of-waterloo-software-engineering",
            "University of Waterloo",
            "Software Engineering",
            date(2027, 2, 1),
            today,
        ),
    ];
    RoadmapSnapshot::new(profile(), programs)
}

#[test]
fn adopting_a_roadmap_round_trips_through_reload() {
    let dir = TempDir::new().unwrap();

    let mut store = open_store(&dir);
    store.replace_programs(seeded_snapshot()).unwrap();
    let saved_programs = store.programs().to_vec();

    // Both keys exist and a fresh store sees the same state
    assert!(dir.path().join("currentPrograms.json").exists());
    assert!(dir.path().join("currentRoadmap.json").exists());
    assert!(dir.path().join("userRoadmaps.json").exists());

    let reopened = open_store(&dir);
    assert_eq!(reopened.programs(), saved_programs.as_slice());
    let snapshot = reopened.snapshot().unwrap();
    assert_eq!(snapshot.student_profile, profile());
    assert_eq!(snapshot.programs, saved_programs);
}

#[test]
fn step_mutation_survives_reload_with_recomputed_progress() {
    let dir = TempDir::new().unwrap();
    let mut store = open_store(&dir);
    store.replace_programs(seeded_snapshot()).unwrap();

    let program_id = "university-of-toronto-computer-science";
    let step_id = format!("{program_id}-step-1");
    store
        .set_step_status(program_id, &step_id, TaskStatus::Complete)
        .unwrap();

    let reopened = open_store(&dir);
    let program = reopened.program(program_id).unwrap();
    assert_eq!(program.steps[0].status, TaskStatus::Complete);
    // 1 of 8 template steps complete: round(100/8)
    assert_eq!(program.overall_progress, 13);
    // The snapshot's embedded copy moved in lockstep
    let embedded = reopened
        .snapshot()
        .unwrap()
        .programs
        .iter()
        .find(|p| p.id == program_id)
        .unwrap();
    assert_eq!(embedded.overall_progress, 13);
}

#[test]
fn global_bonus_state_survives_reload() {
    let dir = TempDir::new().unwrap();
    let mut store = open_store(&dir);

    // Defaults are seeded in memory without touching disk
    assert!(!dir.path().join("globalBonusTasks.json").exists());
    store
        .set_bonus_status(BonusScope::Global, "bonus-volunteer", TaskStatus::Complete)
        .unwrap();

    let reopened = open_store(&dir);
    let task = reopened
        .global_bonus()
        .iter()
        .find(|t| t.id == "bonus-volunteer")
        .unwrap();
    assert_eq!(task.status, TaskStatus::Complete);
}

#[test]
fn history_is_append_only_across_generations() {
    let dir = TempDir::new().unwrap();
    let mut store = open_store(&dir);

    let first = seeded_snapshot();
    let first_id = first.id.clone();
    store.replace_programs(first).unwrap();

    let mut second = seeded_snapshot();
    second.id = "roadmap-second".into();
    store.replace_programs(second).unwrap();

    let reopened = open_store(&dir);
    let history = reopened.history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].id, first_id);
    assert_eq!(history[1].id, "roadmap-second");
    // The current snapshot is the latest generation
    assert_eq!(reopened.snapshot().unwrap().id, "roadmap-second");
}

#[test]
fn clear_removes_every_key_and_reload_is_empty() {
    let dir = TempDir::new().unwrap();
    let mut store = open_store(&dir);
    store.replace_programs(seeded_snapshot()).unwrap();
    store
        .set_bonus_status(BonusScope::Global, "bonus-club", TaskStatus::InProgress)
        .unwrap();

    store.clear().unwrap();

    for key in [
        "currentPrograms.json",
        "currentRoadmap.json",
        "userRoadmaps.json",
        "globalBonusTasks.json",
    ] {
        assert!(!dir.path().join(key).exists(), "{key} should be gone");
    }

    let reopened = open_store(&dir);
    assert!(reopened.programs().is_empty());
    assert!(reopened.snapshot().is_none());
    assert!(reopened.history().is_empty());
    // Bonus defaults are re-seeded, back to todo
    assert!(
        reopened
            .global_bonus()
            .iter()
            .all(|t| t.status == TaskStatus::Todo)
    );
}

#[test]
fn corrupt_programs_key_degrades_to_empty_and_logs() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("currentPrograms.json"), "]]] nope").unwrap();

    let store = open_store(&dir);
    assert!(store.programs().is_empty());

    let log = std::fs::read_to_string(dir.path().join("recovery.log")).unwrap();
    assert!(log.contains("currentPrograms"));
}
