use crate::model::program::UniversityProgram;
use crate::model::status::TaskStatus;
use crate::model::step::ApplicationStep;

/// Canonical completion percentage: `round(100 * complete / total)`,
/// 0 for an empty collection. Every call site that shows a percent goes
/// through here.
pub fn compute_progress(steps: &[ApplicationStep]) -> u8 {
    if steps.is_empty() {
        return 0;
    }
    let complete = steps
        .iter()
        .filter(|s| s.status == TaskStatus::Complete)
        .count();
    ((complete as f64 / steps.len() as f64) * 100.0).round() as u8
}

/// Flattened step counts over the currently displayed program set.
/// When a roadmap filter is active, callers pass the filtered subset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_programs: usize,
    pub total_steps: usize,
    pub complete_steps: usize,
    pub in_progress_steps: usize,
    pub todo_steps: usize,
    /// Percent over all displayed steps
    pub overall_progress: u8,
}

impl DashboardStats {
    pub fn compute(programs: &[&UniversityProgram]) -> Self {
        let mut stats = DashboardStats {
            total_programs: programs.len(),
            ..Default::default()
        };
        for program in programs {
            for step in &program.steps {
                stats.total_steps += 1;
                match step.status {
                    TaskStatus::Todo => stats.todo_steps += 1,
                    TaskStatus::InProgress => stats.in_progress_steps += 1,
                    TaskStatus::Complete => stats.complete_steps += 1,
                }
            }
        }
        if stats.total_steps > 0 {
            stats.overall_progress =
                ((stats.complete_steps as f64 / stats.total_steps as f64) * 100.0).round() as u8;
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn steps(statuses: &[TaskStatus]) -> Vec<ApplicationStep> {
        statuses
            .iter()
            .enumerate()
            .map(|(i, status)| {
                let mut step = ApplicationStep::new(format!("s{i}"), "step");
                step.status = *status;
                step
            })
            .collect()
    }

    #[test]
    fn empty_collection_is_zero() {
        assert_eq!(compute_progress(&[]), 0);
    }

    #[test]
    fn rounds_to_nearest_percent() {
        use TaskStatus::*;
        assert_eq!(compute_progress(&steps(&[Complete, Todo, Todo])), 33);
        assert_eq!(compute_progress(&steps(&[Complete, Complete, Todo])), 67);
        assert_eq!(
            compute_progress(&steps(&[Complete, Complete, Todo, InProgress])),
            50
        );
        assert_eq!(compute_progress(&steps(&[Complete])), 100);
    }

    #[test]
    fn in_progress_does_not_count_as_complete() {
        use TaskStatus::*;
        assert_eq!(compute_progress(&steps(&[InProgress, InProgress])), 0);
    }

    #[test]
    fn dashboard_stats_flatten_over_given_subset() {
        use TaskStatus::*;
        let deadline = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        let mut a = UniversityProgram::new("a", "U", "A", deadline);
        a.steps = steps(&[Complete, Todo]);
        let mut b = UniversityProgram::new("b", "U", "B", deadline);
        b.steps = steps(&[InProgress, Complete]);

        let all = DashboardStats::compute(&[&a, &b]);
        assert_eq!(all.total_programs, 2);
        assert_eq!(all.total_steps, 4);
        assert_eq!(all.complete_steps, 2);
        assert_eq!(all.in_progress_steps, 1);
        assert_eq!(all.todo_steps, 1);
        assert_eq!(all.overall_progress, 50);

        // A filtered subset reflects only its own programs
        let only_a = DashboardStats::compute(&[&a]);
        assert_eq!(only_a.total_programs, 1);
        assert_eq!(only_a.total_steps, 2);
        assert_eq!(only_a.overall_progress, 50);
    }
}
