use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::status::TaskStatus;

/// How urgent a step is, independent of its due date
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

/// A single actionable task in one program's application process.
///
/// Steps are owned by their parent `UniversityProgram`: they are created when
/// the program is instantiated and only their status changes afterward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationStep {
    /// Unique within the owning program
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub status: TaskStatus,
    /// Calendar date, no time component
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub priority: Priority,
}

impl ApplicationStep {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        ApplicationStep {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            status: TaskStatus::Todo,
            due_date: None,
            priority: Priority::Medium,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_without_status_or_due_date() {
        let step: ApplicationStep = serde_json::from_str(
            r#"{"id":"s1","title":"Submit OUAC","description":"","priority":"high"}"#,
        )
        .unwrap();
        assert_eq!(step.status, TaskStatus::Todo);
        assert_eq!(step.due_date, None);
        assert_eq!(step.priority, Priority::High);
    }

    #[test]
    fn round_trips_camel_case_due_date() {
        let mut step = ApplicationStep::new("s1", "Write essay");
        step.due_date = NaiveDate::from_ymd_opt(2025, 1, 15);
        let json = serde_json::to_string(&step).unwrap();
        assert!(json.contains("\"dueDate\":\"2025-01-15\""));
        let back: ApplicationStep = serde_json::from_str(&json).unwrap();
        assert_eq!(back, step);
    }
}
