use chrono::NaiveDate;

use crate::model::program::UniversityProgram;
use crate::model::status::TaskStatus;

/// What kind of entry a timeline row came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Step,
    Bonus,
}

/// Visual classification for a timeline entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineClass {
    Complete,
    /// Past the due date and not complete
    Overdue,
    InProgress,
    Todo,
}

/// One projected task, with display-only derived fields resolved
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineEntry {
    pub kind: EntryKind,
    pub program_id: String,
    pub task_id: String,
    pub title: String,
    pub university_name: String,
    pub program_name: String,
    pub status: TaskStatus,
    /// Absent entries render the explicit "no deadline" marker
    pub due_date: Option<NaiveDate>,
    /// `Today`, `Tomorrow`, `Yesterday`, `{n}d left`, `{n}d overdue`,
    /// or `no deadline`
    pub day_label: String,
    pub class: TimelineClass,
}

/// Relative-day label for a due date
pub fn day_label(due: NaiveDate, today: NaiveDate) -> String {
    match (due - today).num_days() {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        -1 => "Yesterday".to_string(),
        n if n < 0 => format!("{}d overdue", -n),
        n => format!("{n}d left"),
    }
}

/// Status-derived visual class. Overdue wins over in-progress; complete wins
/// over everything.
pub fn classify(status: TaskStatus, due: Option<NaiveDate>, today: NaiveDate) -> TimelineClass {
    if status == TaskStatus::Complete {
        return TimelineClass::Complete;
    }
    if let Some(due) = due
        && due < today
    {
        return TimelineClass::Overdue;
    }
    match status {
        TaskStatus::InProgress => TimelineClass::InProgress,
        _ => TimelineClass::Todo,
    }
}

fn entry(
    kind: EntryKind,
    program: &UniversityProgram,
    task_id: &str,
    title: &str,
    status: TaskStatus,
    due: Option<NaiveDate>,
    today: NaiveDate,
) -> TimelineEntry {
    TimelineEntry {
        kind,
        program_id: program.id.clone(),
        task_id: task_id.to_string(),
        title: title.to_string(),
        university_name: program.university_name.clone(),
        program_name: program.program_name.clone(),
        status,
        due_date: due,
        day_label: match due {
            Some(due) => day_label(due, today),
            None => "no deadline".to_string(),
        },
        class: classify(status, due, today),
    }
}

/// Cross-program chronological projection: every step that has a due date,
/// ascending by date. Dateless steps are excluded. Ties keep encounter order
/// (program iteration order, then step order within a program).
pub fn chronological(programs: &[&UniversityProgram], today: NaiveDate) -> Vec<TimelineEntry> {
    let mut entries: Vec<TimelineEntry> = Vec::new();
    for program in programs {
        for step in &program.steps {
            if let Some(due) = step.due_date {
                entries.push(entry(
                    EntryKind::Step,
                    program,
                    &step.id,
                    &step.title,
                    step.status,
                    Some(due),
                    today,
                ));
            }
        }
    }
    // stable: equal dates keep encounter order
    entries.sort_by_key(|e| e.due_date);
    entries
}

/// Single-program manual-order projection for the pinned program: steps in
/// authored order, then bonus tasks in authored order. No date sorting;
/// dateless entries stay in, marked "no deadline".
pub fn pinned(program: &UniversityProgram, today: NaiveDate) -> Vec<TimelineEntry> {
    let mut entries: Vec<TimelineEntry> = program
        .steps
        .iter()
        .map(|step| {
            entry(
                EntryKind::Step,
                program,
                &step.id,
                &step.title,
                step.status,
                step.due_date,
                today,
            )
        })
        .collect();
    entries.extend(program.bonus_tasks.iter().map(|task| {
        entry(
            EntryKind::Bonus,
            program,
            &task.id,
            &task.title,
            task.status,
            None,
            today,
        )
    }));
    entries
}
