use serde::{Deserialize, Serialize};

/// Tri-state status shared by application steps and bonus tasks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Stored data may omit the status entirely; readers see `Todo`
    #[default]
    Todo,
    InProgress,
    Complete,
}

impl TaskStatus {
    /// The cycle used by click-to-cycle surfaces:
    /// todo → in-progress → complete → todo
    pub fn next(self) -> TaskStatus {
        match self {
            TaskStatus::Todo => TaskStatus::InProgress,
            TaskStatus::InProgress => TaskStatus::Complete,
            TaskStatus::Complete => TaskStatus::Todo,
        }
    }

    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            TaskStatus::Todo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Complete => "Done",
        }
    }

    /// All statuses in cycle order (explicit-pick menus)
    pub fn all() -> [TaskStatus; 3] {
        [
            TaskStatus::Todo,
            TaskStatus::InProgress,
            TaskStatus::Complete,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_order() {
        assert_eq!(TaskStatus::Todo.next(), TaskStatus::InProgress);
        assert_eq!(TaskStatus::InProgress.next(), TaskStatus::Complete);
        assert_eq!(TaskStatus::Complete.next(), TaskStatus::Todo);
    }

    #[test]
    fn cycle_closes_after_three() {
        for status in TaskStatus::all() {
            assert_eq!(status.next().next().next(), status);
        }
    }

    #[test]
    fn serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&TaskStatus::InProgress).unwrap(),
            "\"in-progress\""
        );
        assert_eq!(
            serde_json::from_str::<TaskStatus>("\"complete\"").unwrap(),
            TaskStatus::Complete
        );
    }

    #[test]
    fn missing_status_defaults_to_todo() {
        #[derive(serde::Deserialize)]
        struct Holder {
            #[serde(default)]
            status: TaskStatus,
        }
        let h: Holder = serde_json::from_str("{}").unwrap();
        assert_eq!(h.status, TaskStatus::Todo);
    }
}
