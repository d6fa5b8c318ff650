use crate::types::{DepartmentId, SemesterId, SubjectId};
use serde::{Deserialize, Serialize};

/// Number of contiguous periods a single lab block occupies.
pub const PERIODS_PER_LAB_BLOCK: u8 = 3;

fn default_lab_blocks() -> u8 {
    1
}

/// A subject's kind determines how it is placed on the grid: a theory or
/// elective subject is spread across `hours_per_week` individual periods, a
/// lab subject is placed as `blocks` contiguous three-period blocks.
///
/// Modelled as a tagged variant rather than a kind flag plus raw L-T-P
/// fields so a lab can't carry an L-T-P triple and a theory subject can't
/// carry a block count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "UPPERCASE")]
pub enum SubjectKind {
    Theory {
        lecture_hours: u8,
        #[serde(default)]
        tutorial_hours: u8,
    },
    Lab {
        practical_hours: u8,
        #[serde(default = "default_lab_blocks")]
        blocks: u8,
    },
    Elective {
        lecture_hours: u8,
    },
}

impl SubjectKind {
    pub fn is_lab(&self) -> bool {
        matches!(self, SubjectKind::Lab { .. })
    }

    /// Number of individual teaching periods this subject consumes per class
    /// per week, regardless of how those periods are grouped.
    pub fn hours_per_week(&self) -> u8 {
        match self {
            SubjectKind::Theory {
                lecture_hours,
                tutorial_hours,
            } => lecture_hours + tutorial_hours,
            SubjectKind::Lab { blocks, .. } => blocks * PERIODS_PER_LAB_BLOCK,
            SubjectKind::Elective { lecture_hours } => *lecture_hours,
        }
    }

    pub fn lab_blocks(&self) -> u8 {
        match self {
            SubjectKind::Lab { blocks, .. } => *blocks,
            _ => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: SubjectId,
    pub code: String,
    pub short_code: String,
    pub department_id: DepartmentId,
    pub semester_id: SemesterId,
    #[serde(default)]
    pub credits: u8,
    #[serde(flatten)]
    pub kind: SubjectKind,
}

impl Subject {
    pub fn is_lab(&self) -> bool {
        self.kind.is_lab()
    }

    pub fn hours_per_week(&self) -> u8 {
        self.kind.hours_per_week()
    }
}
