use crate::io::repository::{ProgramRepository, RepositoryError};
use crate::model::bonus::{BonusTask, global_bonus_tasks};
use crate::model::program::UniversityProgram;
use crate::model::roadmap::{ApplicationRoadmap, RoadmapSnapshot, builtin_roadmaps};
use crate::model::status::TaskStatus;
use crate::ops::progress::DashboardStats;

/// Error type for store mutations. Unknown ids are not errors; they make
/// the mutation a no-op. Only persistence can fail.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Persist(#[from] RepositoryError),
}

/// Where a bonus task lives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BonusScope<'a> {
    Global,
    Program(&'a str),
}

/// The in-memory source of truth for programs, bonus tasks, and the view
/// filters over them.
///
/// Every accepted mutation synchronously commits the whole program
/// collection (and the roadmap snapshot, kept in lockstep) through the
/// injected repository before returning, so a reload always sees the state
/// the user last saw.
pub struct ProgramStore {
    programs: Vec<UniversityProgram>,
    global_bonus: Vec<BonusTask>,
    roadmaps: Vec<ApplicationRoadmap>,
    snapshot: Option<RoadmapSnapshot>,
    active_roadmap: Option<String>,
    focused: Option<String>,
    repo: Box<dyn ProgramRepository>,
}

impl ProgramStore {
    /// Load the store from durable storage. Absent or corrupt keys degrade
    /// to the empty state; the global bonus list is seeded with the default
    /// set the first time around.
    pub fn open(repo: Box<dyn ProgramRepository>) -> Self {
        let stored = repo.load();
        ProgramStore {
            programs: stored.programs,
            global_bonus: stored.global_bonus.unwrap_or_else(global_bonus_tasks),
            roadmaps: builtin_roadmaps(),
            snapshot: stored.roadmap,
            active_roadmap: None,
            focused: None,
            repo,
        }
    }

    // -- reads ---------------------------------------------------------

    pub fn programs(&self) -> &[UniversityProgram] {
        &self.programs
    }

    pub fn global_bonus(&self) -> &[BonusTask] {
        &self.global_bonus
    }

    pub fn roadmaps(&self) -> &[ApplicationRoadmap] {
        &self.roadmaps
    }

    pub fn snapshot(&self) -> Option<&RoadmapSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn history(&self) -> Vec<RoadmapSnapshot> {
        self.repo.load_history()
    }

    pub fn active_roadmap(&self) -> Option<&ApplicationRoadmap> {
        let id = self.active_roadmap.as_deref()?;
        self.roadmaps.iter().find(|r| r.id == id)
    }

    pub fn focused_program(&self) -> Option<&UniversityProgram> {
        let id = self.focused.as_deref()?;
        self.programs.iter().find(|p| p.id == id)
    }

    pub fn program(&self, program_id: &str) -> Option<&UniversityProgram> {
        self.programs.iter().find(|p| p.id == program_id)
    }

    /// The program subset the dashboard shows: filtered by the active
    /// roadmap's program ids when one is selected, everything otherwise.
    /// Dangling roadmap references simply match nothing.
    pub fn displayed_programs(&self) -> Vec<&UniversityProgram> {
        match self.active_roadmap() {
            Some(roadmap) => self
                .programs
                .iter()
                .filter(|p| roadmap.program_ids.contains(&p.id))
                .collect(),
            None => self.programs.iter().collect(),
        }
    }

    /// Stats over the currently displayed subset
    pub fn stats(&self) -> DashboardStats {
        DashboardStats::compute(&self.displayed_programs())
    }

    // -- view state ----------------------------------------------------

    /// Toggle the roadmap filter. Selecting any roadmap (or toggling one
    /// off) leaves the focused view, since the focused program may not belong to
    /// the new filter.
    pub fn select_roadmap(&mut self, roadmap_id: &str) {
        if self.active_roadmap.as_deref() == Some(roadmap_id) {
            self.active_roadmap = None;
        } else if self.roadmaps.iter().any(|r| r.id == roadmap_id) {
            self.active_roadmap = Some(roadmap_id.to_string());
        } else {
            return;
        }
        self.focused = None;
    }

    pub fn focus(&mut self, program_id: &str) {
        if self.programs.iter().any(|p| p.id == program_id) {
            self.focused = Some(program_id.to_string());
        }
    }

    pub fn unfocus(&mut self) {
        self.focused = None;
    }

    /// Restore session view state (from `.state.json`); unknown ids are
    /// dropped rather than restored.
    pub fn restore_view_state(&mut self, active_roadmap: Option<&str>, focused: Option<&str>) {
        if let Some(id) = active_roadmap
            && self.roadmaps.iter().any(|r| r.id == id)
        {
            self.active_roadmap = Some(id.to_string());
        }
        if let Some(id) = focused {
            self.focus(id);
        }
    }

    pub fn active_roadmap_id(&self) -> Option<&str> {
        self.active_roadmap.as_deref()
    }

    pub fn focused_id(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    // -- mutations -----------------------------------------------------

    /// Set one step's status to an explicit target (the dropdown-pick path).
    ///
    /// Unknown program or step ids make this a no-op; nothing else is
    /// mutated and nothing is persisted. On a match only the status field
    /// changes, the owning program's progress is recomputed, and the whole
    /// collection is committed.
    pub fn set_step_status(
        &mut self,
        program_id: &str,
        step_id: &str,
        status: TaskStatus,
    ) -> Result<(), StoreError> {
        let Some(program) = self.programs.iter_mut().find(|p| p.id == program_id) else {
            return Ok(());
        };
        let Some(step) = program.steps.iter_mut().find(|s| s.id == step_id) else {
            return Ok(());
        };
        step.status = status;
        program.recompute_progress();
        self.commit()
    }

    /// Advance one step along the todo → in-progress → complete cycle
    /// (the click-to-cycle path).
    pub fn cycle_step_status(&mut self, program_id: &str, step_id: &str) -> Result<(), StoreError> {
        let Some(current) = self
            .program(program_id)
            .and_then(|p| p.steps.iter().find(|s| s.id == step_id))
            .map(|s| s.status)
        else {
            return Ok(());
        };
        self.set_step_status(program_id, step_id, current.next())
    }

    pub fn set_bonus_status(
        &mut self,
        scope: BonusScope,
        task_id: &str,
        status: TaskStatus,
    ) -> Result<(), StoreError> {
        match scope {
            BonusScope::Global => {
                let Some(task) = self.global_bonus.iter_mut().find(|t| t.id == task_id) else {
                    return Ok(());
                };
                task.status = status;
                self.repo.commit_bonus(&self.global_bonus)?;
                Ok(())
            }
            BonusScope::Program(program_id) => {
                let Some(task) = self
                    .programs
                    .iter_mut()
                    .find(|p| p.id == program_id)
                    .and_then(|p| p.bonus_tasks.iter_mut().find(|t| t.id == task_id))
                else {
                    return Ok(());
                };
                task.status = status;
                self.commit()
            }
        }
    }

    pub fn cycle_bonus_status(&mut self, scope: BonusScope, task_id: &str) -> Result<(), StoreError> {
        let current = match scope {
            BonusScope::Global => self.global_bonus.iter().find(|t| t.id == task_id),
            BonusScope::Program(program_id) => self
                .program(program_id)
                .and_then(|p| p.bonus_tasks.iter().find(|t| t.id == task_id)),
        }
        .map(|t| t.status);
        match current {
            Some(status) => self.set_bonus_status(scope, task_id, status.next()),
            None => Ok(()),
        }
    }

    /// Bulk replace: adopt a freshly generated roadmap. Replaces the program
    /// collection and the active snapshot, appends the snapshot to history,
    /// and commits. The focused program is cleared (it may no longer exist).
    pub fn replace_programs(&mut self, snapshot: RoadmapSnapshot) -> Result<(), StoreError> {
        self.repo.append_history(&snapshot)?;
        self.programs = snapshot.programs.clone();
        self.snapshot = Some(snapshot);
        self.focused = None;
        self.commit()
    }

    /// Remove everything: programs, bonus completion state, roadmap snapshot
    /// and history, from both memory and storage. Storage is cleared first;
    /// if that fails, memory is left untouched so the user never sees a
    /// half-cleared dashboard.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.repo.clear()?;
        self.programs.clear();
        self.global_bonus = global_bonus_tasks();
        self.snapshot = None;
        self.focused = None;
        self.active_roadmap = None;
        Ok(())
    }

    /// Persist the collection and snapshot in lockstep. The snapshot's
    /// embedded program list is refreshed first so both keys describe the
    /// same state.
    fn commit(&mut self) -> Result<(), StoreError> {
        if let Some(snapshot) = &mut self.snapshot {
            snapshot.programs = self.programs.clone();
        }
        self.repo.commit(&self.programs, self.snapshot.as_ref())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::io::repository::MemoryRepository;
    use crate::model::bonus::{BonusCategory, BonusTask};
    use crate::model::roadmap::StudentProfile;
    use crate::model::step::ApplicationStep;

    fn deadline() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
    }

    fn profile() -> StudentProfile {
        StudentProfile {
            grade_level: 12,
            average: 88.0,
            wants_coop: false,
            extra_curriculars: Vec::new(),
            major_interests: Vec::new(),
            courses_taken: Vec::new(),
        }
    }

    fn program(id: &str, step_count: usize) -> UniversityProgram {
        let mut program = UniversityProgram::new(id, "U", id.to_uppercase(), deadline());
        for i in 0..step_count {
            program
                .steps
                .push(ApplicationStep::new(format!("{id}-s{i}"), format!("Step {i}")));
        }
        program
    }

    fn store_with(programs: Vec<UniversityProgram>) -> (ProgramStore, MemoryRepository) {
        let repo = MemoryRepository::new();
        let mut store = ProgramStore::open(Box::new(repo.clone()));
        let snapshot = RoadmapSnapshot::new(profile(), programs);
        store.replace_programs(snapshot).unwrap();
        (store, repo)
    }

    #[test]
    fn set_step_status_updates_only_the_target() {
        let (mut store, _repo) = store_with(vec![program("p", 2), program("q", 2)]);

        store
            .set_step_status("p", "p-s0", TaskStatus::Complete)
            .unwrap();

        let p = store.program("p").unwrap();
        assert_eq!(p.steps[0].status, TaskStatus::Complete);
        assert_eq!(p.steps[1].status, TaskStatus::Todo);
        assert_eq!(p.overall_progress, 50);
        // isolation: q untouched
        let q = store.program("q").unwrap();
        assert!(q.steps.iter().all(|s| s.status == TaskStatus::Todo));
        assert_eq!(q.overall_progress, 0);
    }

    #[test]
    fn unknown_ids_are_a_no_op() {
        let (mut store, repo) = store_with(vec![program("p", 1)]);
        let before = repo.stored_programs();

        store
            .set_step_status("nope", "p-s0", TaskStatus::Complete)
            .unwrap();
        store
            .set_step_status("p", "nope", TaskStatus::Complete)
            .unwrap();

        assert_eq!(repo.stored_programs(), before);
        assert_eq!(store.program("p").unwrap().steps[0].status, TaskStatus::Todo);
    }

    #[test]
    fn mutation_persists_collection_and_snapshot_in_lockstep() {
        let (mut store, repo) = store_with(vec![program("p", 2)]);

        store
            .set_step_status("p", "p-s1", TaskStatus::Complete)
            .unwrap();

        let stored = repo.stored_programs();
        assert_eq!(stored, store.programs().to_vec());
        let snapshot = repo.stored_roadmap().unwrap();
        assert_eq!(snapshot.programs, stored);
    }

    #[test]
    fn cycle_advances_through_all_three_states() {
        let (mut store, _repo) = store_with(vec![program("p", 1)]);

        store.cycle_step_status("p", "p-s0").unwrap();
        assert_eq!(
            store.program("p").unwrap().steps[0].status,
            TaskStatus::InProgress
        );
        store.cycle_step_status("p", "p-s0").unwrap();
        assert_eq!(
            store.program("p").unwrap().steps[0].status,
            TaskStatus::Complete
        );
        store.cycle_step_status("p", "p-s0").unwrap();
        assert_eq!(store.program("p").unwrap().steps[0].status, TaskStatus::Todo);
    }

    #[test]
    fn roadmap_filter_and_toggle() {
        let (mut store, _repo) = store_with(vec![
            program("university-of-toronto-computer-science", 1),
            program("queen-s-university-commerce", 1),
        ]);

        store.select_roadmap("rm-cs");
        let shown: Vec<&str> = store.displayed_programs().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(shown, vec!["university-of-toronto-computer-science"]);
        assert_eq!(store.stats().total_programs, 1);

        // toggling the same roadmap off restores the full view
        store.select_roadmap("rm-cs");
        assert_eq!(store.displayed_programs().len(), 2);
    }

    #[test]
    fn selecting_roadmap_clears_focus() {
        let (mut store, _repo) = store_with(vec![
            program("university-of-toronto-computer-science", 1),
            program("queen-s-university-commerce", 1),
        ]);
        store.focus("queen-s-university-commerce");
        assert!(store.focused_program().is_some());

        // focused program is not in rm-cs: dashboard must show the filtered
        // list, not a focused view
        store.select_roadmap("rm-cs");
        assert!(store.focused_program().is_none());
    }

    #[test]
    fn dangling_roadmap_references_match_nothing() {
        let (mut store, _repo) = store_with(vec![program("unrelated", 1)]);
        store.select_roadmap("rm-arts");
        assert!(store.displayed_programs().is_empty());
        assert_eq!(store.stats().total_steps, 0);
    }

    #[test]
    fn bonus_status_global_and_program_scoped() {
        let mut p = program("p", 1);
        p.bonus_tasks.push(BonusTask::new(
            "pb1",
            "Visit campus",
            BonusCategory::Extracurricular,
        ));
        let (mut store, _repo) = store_with(vec![p]);

        let global_id = store.global_bonus()[0].id.clone();
        store
            .set_bonus_status(BonusScope::Global, &global_id, TaskStatus::Complete)
            .unwrap();
        assert_eq!(store.global_bonus()[0].status, TaskStatus::Complete);

        store
            .cycle_bonus_status(BonusScope::Program("p"), "pb1")
            .unwrap();
        assert_eq!(
            store.program("p").unwrap().bonus_tasks[0].status,
            TaskStatus::InProgress
        );
    }

    #[test]
    fn clear_wipes_memory_and_storage() {
        let (mut store, repo) = store_with(vec![program("p", 2)]);
        let global_id = store.global_bonus()[0].id.clone();
        store
            .set_bonus_status(BonusScope::Global, &global_id, TaskStatus::Complete)
            .unwrap();
        store.select_roadmap("rm-cs");

        store.clear().unwrap();

        assert!(store.programs().is_empty());
        assert!(store.snapshot().is_none());
        assert!(store.active_roadmap().is_none());
        assert_eq!(store.global_bonus()[0].status, TaskStatus::Todo);
        assert!(repo.stored_programs().is_empty());
        assert!(repo.stored_roadmap().is_none());
        assert!(repo.load_history().is_empty());

        // a fresh load over the same repository sees the empty state
        let reopened = ProgramStore::open(Box::new(repo));
        assert!(reopened.programs().is_empty());
        assert!(reopened.snapshot().is_none());
    }

    #[test]
    fn replace_programs_appends_history_and_clears_focus() {
        let (mut store, repo) = store_with(vec![program("p", 1)]);
        store.focus("p");

        let next = RoadmapSnapshot::new(profile(), vec![program("r", 1)]);
        store.replace_programs(next).unwrap();

        assert!(store.focused_program().is_none());
        assert_eq!(store.programs().len(), 1);
        assert_eq!(store.programs()[0].id, "r");
        // initial store_with replace + this one
        assert_eq!(repo.load_history().len(), 2);
    }

    #[test]
    fn restore_view_state_drops_unknown_ids() {
        let (mut store, _repo) = store_with(vec![program("p", 1)]);
        store.restore_view_state(Some("rm-unknown"), Some("gone"));
        assert!(store.active_roadmap().is_none());
        assert!(store.focused_program().is_none());

        store.restore_view_state(Some("rm-cs"), Some("p"));
        assert_eq!(store.active_roadmap_id(), Some("rm-cs"));
        assert_eq!(store.focused_id(), Some("p"));
    }
}
