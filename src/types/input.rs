use crate::types::{
    ClassId, ClassSection, Department, Faculty, FacultyId, ScheduleConfig, Semester, Subject,
    SubjectId, TimeSlot, TimeSlotId,
};
use serde::{Deserialize, Serialize};

/// A faculty member's subject assignment in a prior or already-persisted
/// term; doubles as the thing a rotation-penalty lookup consults and as the
/// record the persistence adapter writes on every run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacultySubjectAssignment {
    pub faculty_id: FacultyId,
    pub subject_id: SubjectId,
    pub class_id: ClassId,
    pub term_label: String,
    pub is_main: bool,
}

/// A (faculty, slot) claimed by an already-persisted timetable in another
/// department for the same term; treated as immovable by this run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreBookedEntry {
    pub faculty_id: FacultyId,
    pub time_slot_id: TimeSlotId,
    pub term_label: String,
}

/// All raw input the scheduler reads for one run, before it is assembled
/// into an immutable [`crate::scheduler::DomainSnapshot`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DomainInput {
    pub departments: Vec<Department>,
    pub semesters: Vec<Semester>,
    pub classes: Vec<ClassSection>,
    pub subjects: Vec<Subject>,
    pub faculty: Vec<Faculty>,
    pub time_slots: Vec<TimeSlot>,
    #[serde(default)]
    pub prior_assignments: Vec<FacultySubjectAssignment>,
    #[serde(default)]
    pub pre_booked: Vec<PreBookedEntry>,
    #[serde(default)]
    pub config: ScheduleConfig,
}
