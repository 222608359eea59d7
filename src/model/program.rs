use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::bonus::BonusTask;
use super::status::TaskStatus;
use super::step::ApplicationStep;
use crate::ops::progress::compute_progress;

/// One university program being applied to.
///
/// The program is the single source of truth for its steps and bonus tasks.
/// Step order is authored order and doubles as display numbering.
/// `overall_progress` is derived from step statuses; it is recomputed by
/// every status mutation and persisted only as a display cache.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UniversityProgram {
    pub id: String,
    pub university_name: String,
    pub program_name: String,
    pub deadline: NaiveDate,
    #[serde(default)]
    pub steps: Vec<ApplicationStep>,
    #[serde(default)]
    pub bonus_tasks: Vec<BonusTask>,
    /// Integer percent in 0..=100, 0 when there are no steps
    #[serde(default)]
    pub overall_progress: u8,
}

impl UniversityProgram {
    pub fn new(
        id: impl Into<String>,
        university_name: impl Into<String>,
        program_name: impl Into<String>,
        deadline: NaiveDate,
    ) -> Self {
        UniversityProgram {
            id: id.into(),
            university_name: university_name.into(),
            program_name: program_name.into(),
            deadline,
            steps: Vec::new(),
            bonus_tasks: Vec::new(),
            overall_progress: 0,
        }
    }

    /// Recompute `overall_progress` from the current step statuses.
    /// Must be called after any step-status mutation.
    pub fn recompute_progress(&mut self) {
        self.overall_progress = compute_progress(&self.steps);
    }

    pub fn count_with_status(&self, status: TaskStatus) -> usize {
        self.steps.iter().filter(|s| s.status == status).count()
    }

    /// Days from `today` to the deadline; negative when it has passed
    pub fn days_until_deadline(&self, today: NaiveDate) -> i64 {
        (self.deadline - today).num_days()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn program_with_statuses(statuses: &[TaskStatus]) -> UniversityProgram {
        let mut program = UniversityProgram::new(
            "cs-uoft",
            "University of Toronto",
            "Computer Science",
            NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
        );
        for (i, status) in statuses.iter().enumerate() {
            let mut step = ApplicationStep::new(format!("s{i}"), format!("Step {i}"));
            step.status = *status;
            program.steps.push(step);
        }
        program
    }

    #[test]
    fn progress_tracks_step_statuses() {
        let mut program = program_with_statuses(&[
            TaskStatus::Complete,
            TaskStatus::Complete,
            TaskStatus::Todo,
            TaskStatus::InProgress,
        ]);
        program.recompute_progress();
        assert_eq!(program.overall_progress, 50);
    }

    #[test]
    fn progress_is_zero_without_steps() {
        let mut program = program_with_statuses(&[]);
        program.recompute_progress();
        assert_eq!(program.overall_progress, 0);
    }

    #[test]
    fn deadline_day_math() {
        let program = program_with_statuses(&[]);
        let today = NaiveDate::from_ymd_opt(2026, 1, 10).unwrap();
        assert_eq!(program.days_until_deadline(today), 5);
        let late = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
        assert_eq!(program.days_until_deadline(late), -17);
    }
}
