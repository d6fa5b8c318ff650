use crate::types::{ClassId, FacultyId, SubjectId, TimeSlotId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One persisted row: a gene rewritten into the shape the external schema
/// describes in terms of (class, subject, faculty, slot, term).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetableEntry {
    pub class_id: ClassId,
    pub subject_id: SubjectId,
    pub faculty_id: FacultyId,
    pub assistant_faculty_id: Option<FacultyId>,
    pub time_slot_id: TimeSlotId,
    pub term_label: String,
    pub is_lab: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationCounts {
    pub classes: usize,
    pub subjects: usize,
    pub genes: usize,
}

/// The shape returned by both `generate_department_timetable` and
/// `generate_class_timetable`. On failure every field but `success` and
/// `error` is `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationResult {
    pub success: bool,
    #[serde(default)]
    pub timetables_by_class: BTreeMap<String, Vec<TimetableEntry>>,
    pub counts: Option<GenerationCounts>,
    pub final_fitness: Option<f64>,
    pub generations_run: Option<usize>,
    pub fitness_history: Vec<f64>,
    pub error: Option<String>,
}

impl GenerationResult {
    pub fn failure(error: impl Into<String>) -> Self {
        GenerationResult {
            success: false,
            error: Some(error.into()),
            ..Default::default()
        }
    }
}
