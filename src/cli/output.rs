use serde::Serialize;

use crate::model::bonus::BonusTask;
use crate::model::program::UniversityProgram;
use crate::model::status::TaskStatus;
use crate::model::step::{ApplicationStep, Priority};
use crate::ops::progress::DashboardStats;
use crate::ops::timeline::TimelineEntry;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct StepJson {
    pub id: String,
    pub title: String,
    pub status: TaskStatus,
    pub priority: Priority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

impl From<&ApplicationStep> for StepJson {
    fn from(step: &ApplicationStep) -> Self {
        StepJson {
            id: step.id.clone(),
            title: step.title.clone(),
            status: step.status,
            priority: step.priority,
            due_date: step.due_date.map(|d| d.to_string()),
        }
    }
}

#[derive(Serialize)]
pub struct BonusJson {
    pub id: String,
    pub title: String,
    pub status: TaskStatus,
    pub category: String,
}

impl From<&BonusTask> for BonusJson {
    fn from(task: &BonusTask) -> Self {
        BonusJson {
            id: task.id.clone(),
            title: task.title.clone(),
            status: task.status,
            category: task.category.label().to_lowercase(),
        }
    }
}

#[derive(Serialize)]
pub struct ProgramJson {
    pub id: String,
    pub university: String,
    pub program: String,
    pub deadline: String,
    pub progress: u8,
    pub steps: Vec<StepJson>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bonus_tasks: Vec<BonusJson>,
}

impl From<&UniversityProgram> for ProgramJson {
    fn from(program: &UniversityProgram) -> Self {
        ProgramJson {
            id: program.id.clone(),
            university: program.university_name.clone(),
            program: program.program_name.clone(),
            deadline: program.deadline.to_string(),
            progress: program.overall_progress,
            steps: program.steps.iter().map(StepJson::from).collect(),
            bonus_tasks: program.bonus_tasks.iter().map(BonusJson::from).collect(),
        }
    }
}

#[derive(Serialize)]
pub struct StatsJson {
    pub programs: usize,
    pub steps: usize,
    pub complete: usize,
    pub in_progress: usize,
    pub todo: usize,
    pub overall_progress: u8,
}

impl From<DashboardStats> for StatsJson {
    fn from(stats: DashboardStats) -> Self {
        StatsJson {
            programs: stats.total_programs,
            steps: stats.total_steps,
            complete: stats.complete_steps,
            in_progress: stats.in_progress_steps,
            todo: stats.todo_steps,
            overall_progress: stats.overall_progress,
        }
    }
}

#[derive(Serialize)]
pub struct TimelineEntryJson {
    pub program: String,
    pub task: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    pub label: String,
    pub status: TaskStatus,
}

impl From<&TimelineEntry> for TimelineEntryJson {
    fn from(entry: &TimelineEntry) -> Self {
        TimelineEntryJson {
            program: entry.program_id.clone(),
            task: entry.task_id.clone(),
            title: entry.title.clone(),
            due_date: entry.due_date.map(|d| d.to_string()),
            label: entry.day_label.clone(),
            status: entry.status,
        }
    }
}

// ---------------------------------------------------------------------------
// Plain-text helpers
// ---------------------------------------------------------------------------

/// One program line: `cs-uoft  University of Toronto - Computer Science  45%  (due 2026-01-15)`
pub fn program_line(program: &UniversityProgram) -> String {
    format!(
        "{}  {} - {}  {}%  (due {})",
        program.id,
        program.university_name,
        program.program_name,
        program.overall_progress,
        program.deadline
    )
}

/// One step line: `  3. [>] cs-uoft-step-3  Draft personal statement  (2025-11-01)`
pub fn step_line(index: usize, step: &ApplicationStep) -> String {
    let marker = match step.status {
        TaskStatus::Todo => ' ',
        TaskStatus::InProgress => '>',
        TaskStatus::Complete => 'x',
    };
    let due = step
        .due_date
        .map(|d| format!("  ({d})"))
        .unwrap_or_default();
    format!("  {}. [{}] {}  {}{}", index + 1, marker, step.id, step.title, due)
}
