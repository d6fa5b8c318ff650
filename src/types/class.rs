use crate::types::{ClassId, SemesterId};
use serde::{Deserialize, Serialize};

/// A class section: the unit that consumes one weekly timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSection {
    pub id: ClassId,
    pub semester_id: SemesterId,
    pub name: String,
    #[serde(default)]
    pub capacity: u32,
}
