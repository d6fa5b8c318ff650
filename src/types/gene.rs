use crate::types::{ClassId, FacultyId, SubjectId, TimeSlotId};
use serde::{Deserialize, Serialize};

/// One assignment: a class occupies a time slot with a subject and faculty.
/// Three genes sharing a (class, subject) and an `is_lab` flag form a lab
/// block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gene {
    pub class_id: ClassId,
    pub subject_id: SubjectId,
    pub faculty_id: FacultyId,
    pub time_slot_id: TimeSlotId,
    pub is_lab: bool,
    pub assistant_faculty_id: Option<FacultyId>,
}

impl Gene {
    pub fn faculties(&self) -> impl Iterator<Item = &FacultyId> {
        self.assistant_faculty_id.iter().chain(std::iter::once(&self.faculty_id))
    }
}
