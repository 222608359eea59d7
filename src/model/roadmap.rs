use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::program::UniversityProgram;

/// Fixed domain for roadmap groupings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoadmapCategory {
    ComputerScience,
    Business,
    HealthSciences,
    Engineering,
    Arts,
    RiskAnalysis,
}

impl RoadmapCategory {
    pub fn label(self) -> &'static str {
        match self {
            RoadmapCategory::ComputerScience => "Computer Science",
            RoadmapCategory::Business => "Business",
            RoadmapCategory::HealthSciences => "Health Sciences",
            RoadmapCategory::Engineering => "Engineering",
            RoadmapCategory::Arts => "Arts",
            RoadmapCategory::RiskAnalysis => "Risk Analysis",
        }
    }
}

/// A named grouping of programs used to filter the dashboard.
///
/// `program_ids` are weak references into the program collection. A roadmap
/// referencing a program that no longer exists simply matches fewer programs;
/// dangling ids are never an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRoadmap {
    pub id: String,
    pub name: String,
    pub category: RoadmapCategory,
    pub description: String,
    #[serde(default)]
    pub program_ids: Vec<String>,
    pub icon: String,
}

/// Student profile captured by the intake form; also the body of the
/// recommendation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub grade_level: u8,
    /// Percent average, 0-100
    pub average: f64,
    pub wants_coop: bool,
    /// `[name, leadership level 1..=4]` pairs
    #[serde(default)]
    pub extra_curriculars: Vec<(String, u8)>,
    #[serde(default)]
    pub major_interests: Vec<String>,
    /// `[course code, grade]` pairs
    #[serde(default)]
    pub courses_taken: Vec<(String, f64)>,
}

/// Snapshot written to the `currentRoadmap` key and appended to
/// `userRoadmaps`. The `programs` field duplicates the program collection so
/// both keys describe the same state after a reload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapSnapshot {
    pub id: String,
    pub student_profile: StudentProfile,
    pub programs: Vec<UniversityProgram>,
    pub created_at: DateTime<Utc>,
}

impl RoadmapSnapshot {
    pub fn new(profile: StudentProfile, programs: Vec<UniversityProgram>) -> Self {
        let created_at = Utc::now();
        RoadmapSnapshot {
            id: format!("roadmap-{}", created_at.timestamp_millis()),
            student_profile: profile,
            programs,
            created_at,
        }
    }
}

/// The built-in roadmap groupings offered in the dashboard sidebar.
/// Program ids follow the same slug scheme as ranking-created programs, so
/// generated programs land in the matching group automatically.
pub fn builtin_roadmaps() -> Vec<ApplicationRoadmap> {
    vec![
        ApplicationRoadmap {
            id: "rm-cs".into(),
            name: "Computer Science Path".into(),
            category: RoadmapCategory::ComputerScience,
            description: "CS and software engineering programs".into(),
            program_ids: vec![
                "university-of-toronto-computer-science".into(),
                "university-of-waterloo-computer-science".into(),
                "university-of-waterloo-software-engineering".into(),
            ],
            icon: "laptop".into(),
        },
        ApplicationRoadmap {
            id: "rm-business".into(),
            name: "Business Path".into(),
            category: RoadmapCategory::Business,
            description: "Commerce and business administration programs".into(),
            program_ids: vec![
                "queen-s-university-commerce".into(),
                "wilfrid-laurier-university-bba".into(),
            ],
            icon: "briefcase".into(),
        },
        ApplicationRoadmap {
            id: "rm-health".into(),
            name: "Health Sciences Path".into(),
            category: RoadmapCategory::HealthSciences,
            description: "Health and life sciences programs".into(),
            program_ids: vec![
                "mcmaster-university-health-sciences".into(),
                "mcmaster-university-life-sciences".into(),
            ],
            icon: "heart".into(),
        },
        ApplicationRoadmap {
            id: "rm-eng".into(),
            name: "Engineering Path".into(),
            category: RoadmapCategory::Engineering,
            description: "Engineering programs".into(),
            program_ids: vec![
                "university-of-toronto-engineering-science".into(),
                "university-of-waterloo-mechatronics-engineering".into(),
            ],
            icon: "wrench".into(),
        },
        ApplicationRoadmap {
            id: "rm-arts".into(),
            name: "Arts Path".into(),
            category: RoadmapCategory::Arts,
            description: "Arts and humanities programs".into(),
            program_ids: vec!["university-of-toronto-humanities".into()],
            icon: "palette".into(),
        },
        ApplicationRoadmap {
            id: "rm-risk".into(),
            name: "Risk Analysis Path".into(),
            category: RoadmapCategory::RiskAnalysis,
            description: "Actuarial science and risk management programs".into(),
            program_ids: vec!["university-of-waterloo-actuarial-science".into()],
            icon: "scale".into(),
        },
    ]
}

/// Slug used as a program id: university and program joined, lowercased,
/// punctuation collapsed to single dashes.
pub fn program_slug(university: &str, program: &str) -> String {
    let mut slug = String::new();
    let mut last_dash = true;
    for c in format!("{university} {program}").chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    if slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_collapses_punctuation() {
        assert_eq!(
            program_slug("University of Toronto", "Computer Science"),
            "university-of-toronto-computer-science"
        );
        assert_eq!(
            program_slug("Queen's University", "Commerce"),
            "queen-s-university-commerce"
        );
        assert_eq!(program_slug("X ", " Y"), "x-y");
    }

    #[test]
    fn categories_serialize_kebab_case() {
        assert_eq!(
            serde_json::to_string(&RoadmapCategory::HealthSciences).unwrap(),
            "\"health-sciences\""
        );
    }

    #[test]
    fn builtin_roadmaps_cover_all_categories() {
        let roadmaps = builtin_roadmaps();
        assert_eq!(roadmaps.len(), 6);
        let mut seen: Vec<RoadmapCategory> = roadmaps.iter().map(|r| r.category).collect();
        seen.dedup();
        assert_eq!(seen.len(), 6);
    }
}
