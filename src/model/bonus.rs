use serde::{Deserialize, Serialize};

use super::status::TaskStatus;

/// Profile area a bonus task strengthens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BonusCategory {
    Extracurricular,
    Academic,
    Leadership,
    Community,
}

impl BonusCategory {
    pub fn label(self) -> &'static str {
        match self {
            BonusCategory::Extracurricular => "Extracurricular",
            BonusCategory::Academic => "Academic",
            BonusCategory::Leadership => "Leadership",
            BonusCategory::Community => "Community",
        }
    }
}

/// An optional enrichment task, either global or owned by one program.
///
/// Earlier data carried a boolean `isComplete`; the tri-state `status` is
/// canonical and the boolean is not read back. Payloads without a status
/// deserialize as `Todo`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BonusTask {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub status: TaskStatus,
    pub category: BonusCategory,
}

impl BonusTask {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: BonusCategory,
    ) -> Self {
        BonusTask {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            status: TaskStatus::Todo,
            category,
        }
    }
}

/// The fixed global bonus tasks shown to every student
pub fn global_bonus_tasks() -> Vec<BonusTask> {
    let mut tasks = Vec::new();

    let mut t = BonusTask::new("bonus-club", "Join a school club", BonusCategory::Extracurricular);
    t.description = "Sustained involvement matters more than quantity".into();
    tasks.push(t);

    let mut t = BonusTask::new(
        "bonus-competition",
        "Enter an academic competition",
        BonusCategory::Academic,
    );
    t.description = "Math, science, or coding contests show depth of interest".into();
    tasks.push(t);

    let mut t = BonusTask::new(
        "bonus-leadership",
        "Take on a leadership role",
        BonusCategory::Leadership,
    );
    t.description = "Captain, editor, or executive position in an existing activity".into();
    tasks.push(t);

    let mut t = BonusTask::new(
        "bonus-volunteer",
        "Complete 40+ volunteer hours",
        BonusCategory::Community,
    );
    t.description = "Community service beyond the graduation requirement".into();
    tasks.push(t);

    tasks
}
