use crate::types::{DepartmentId, FacultyId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Designation {
    Professor,
    AssociateProfessor,
    AssistantProfessor,
}

impl Designation {
    /// Default weekly teaching load cap, overridable per-faculty.
    pub fn default_max_hours(self) -> u8 {
        match self {
            Designation::Professor | Designation::AssociateProfessor => 18,
            Designation::AssistantProfessor => 20,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faculty {
    pub id: FacultyId,
    pub name: String,
    pub designation: Designation,
    pub department_id: Option<DepartmentId>,
    /// Comma-separated subject codes this faculty prefers to teach, as
    /// stored; parsed once into an index at snapshot load time.
    #[serde(default)]
    pub preferences: String,
    pub max_hours: Option<u8>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

impl Faculty {
    pub fn max_weekly_hours(&self) -> u8 {
        self.max_hours.unwrap_or_else(|| self.designation.default_max_hours())
    }

    pub fn preference_codes(&self) -> Vec<String> {
        self.preferences
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}
