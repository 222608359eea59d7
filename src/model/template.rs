use chrono::{Duration, NaiveDate};

use super::program::UniversityProgram;
use super::step::{ApplicationStep, Priority};

/// The fixed application-step template applied when a program is created
/// from a ranking selection. Offsets are days before the program deadline;
/// earlier work gets the larger offsets.
const STEP_TEMPLATE: &[(&str, &str, i64, Priority)] = &[
    (
        "Research program requirements",
        "Confirm prerequisite courses, grade cutoffs, and supplementary requirements",
        120,
        Priority::High,
    ),
    (
        "Finalize prerequisite courses",
        "Make sure every required course is on your timetable",
        100,
        Priority::High,
    ),
    (
        "Draft personal statement",
        "First full draft of the supplementary essay or statement of intent",
        75,
        Priority::Medium,
    ),
    (
        "Request reference letters",
        "Ask teachers early and share your resume with them",
        60,
        Priority::Medium,
    ),
    (
        "Submit OUAC application",
        "Complete the centre application and pay the fee",
        30,
        Priority::High,
    ),
    (
        "Complete supplementary application",
        "Program-specific forms, video interviews, or portfolios",
        21,
        Priority::High,
    ),
    (
        "Send transcripts and documents",
        "Verify the school has uploaded grades and any required documents",
        14,
        Priority::Medium,
    ),
    (
        "Confirm submission",
        "Check the applicant portal shows everything as received",
        7,
        Priority::Low,
    ),
];

/// Instantiate a program with the default step template.
///
/// Step ids are `{program_id}-step-{n}` with n starting at 1 in authored
/// order. Due dates are clamped to `today` so a near deadline never produces
/// steps that are born overdue.
pub fn program_from_template(
    id: impl Into<String>,
    university: impl Into<String>,
    program_name: impl Into<String>,
    deadline: NaiveDate,
    today: NaiveDate,
) -> UniversityProgram {
    let mut program = UniversityProgram::new(id, university, program_name, deadline);
    for (i, (title, description, days_before, priority)) in STEP_TEMPLATE.iter().enumerate() {
        let mut step = ApplicationStep::new(format!("{}-step-{}", program.id, i + 1), *title);
        step.description = (*description).into();
        step.priority = *priority;
        let due = deadline - Duration::days(*days_before);
        step.due_date = Some(due.max(today));
        program.steps.push(step);
    }
    program.recompute_progress();
    program
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::status::TaskStatus;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn template_steps_are_chronological_and_todo() {
        let program = program_from_template(
            "cs-x",
            "X University",
            "CS",
            date(2026, 6, 1),
            date(2025, 9, 1),
        );
        assert_eq!(program.steps.len(), STEP_TEMPLATE.len());
        assert_eq!(program.overall_progress, 0);
        let dates: Vec<NaiveDate> = program.steps.iter().filter_map(|s| s.due_date).collect();
        assert!(dates.windows(2).all(|w| w[0] <= w[1]));
        assert!(program.steps.iter().all(|s| s.status == TaskStatus::Todo));
        assert_eq!(program.steps[0].id, "cs-x-step-1");
    }

    #[test]
    fn near_deadline_clamps_due_dates_to_today() {
        let today = date(2026, 1, 10);
        let program = program_from_template("p", "U", "P", date(2026, 1, 20), today);
        assert!(program.steps.iter().all(|s| s.due_date.unwrap() >= today));
    }
}
