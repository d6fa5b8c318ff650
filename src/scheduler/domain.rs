use crate::error::{Result, SchedulerError};
use crate::types::{
    ClassSection, DepartmentId, DomainInput, Faculty, FacultyId, GaConfig, SemesterId, Subject,
    TimeSlot,
};
use std::collections::{HashMap, HashSet};

/// An immutable view of the scheduling problem for one (department, term)
/// run. Built once by [`build_snapshot`] and never mutated afterwards; every
/// worker reads it, none write.
#[derive(Debug, Clone)]
pub struct DomainSnapshot {
    pub department_id: DepartmentId,
    pub term_label: String,
    pub classes: Vec<ClassSection>,
    pub subjects_by_semester: HashMap<SemesterId, Vec<Subject>>,
    pub faculty: Vec<Faculty>,
    pub time_slots: Vec<TimeSlot>,
    /// subject code -> faculty eligible to teach it (preference-matched).
    pub faculty_by_subject_code: HashMap<String, Vec<FacultyId>>,
    /// faculty -> subject codes taught in a prior term, for the rotation
    /// penalty.
    pub faculty_history: HashMap<FacultyId, HashSet<String>>,
    /// faculty -> slots already claimed by another department for this
    /// term; treated as immovable.
    pub pre_booked: HashMap<FacultyId, HashSet<crate::types::TimeSlotId>>,
    pub config: GaConfig,
    /// Full eligible-faculty pool, used as `eligible_faculty`'s fallback
    /// when no one has expressed a preference for a subject.
    pub all_faculty_ids: Vec<FacultyId>,
}

impl DomainSnapshot {
    pub fn subjects_for_class(&self, class: &ClassSection) -> &[Subject] {
        self.subjects_by_semester
            .get(&class.semester_id)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Eligible faculty for a subject code: preference-matched if any exist,
    /// else the whole active pool.
    pub fn eligible_faculty(&self, subject_code: &str) -> &[FacultyId] {
        match self.faculty_by_subject_code.get(subject_code) {
            Some(list) if !list.is_empty() => list.as_slice(),
            _ => &self.all_faculty_ids[..],
        }
    }

    pub fn faculty_max_hours(&self, id: &FacultyId) -> u8 {
        self.faculty
            .iter()
            .find(|f| &f.id == id)
            .map(|f| f.max_weekly_hours())
            .unwrap_or(18)
    }
}

/// Build an immutable domain snapshot for one department/term run.
///
/// Faculty pool selection: a faculty is included when active and (belongs
/// to the target department, or has no department, or lists a subject code
/// of this department in their preferences). If that leaves an empty pool,
/// fall back to every active faculty.
pub fn build_snapshot(
    input: &DomainInput,
    department_id: &DepartmentId,
    term_label: &str,
) -> Result<DomainSnapshot> {
    input
        .departments
        .iter()
        .find(|d| &d.id == department_id)
        .ok_or_else(|| SchedulerError::UnknownDepartment(department_id.to_string()))?;

    let time_slots: Vec<TimeSlot> = input
        .time_slots
        .iter()
        .filter(|t| t.is_teaching())
        .cloned()
        .collect();
    if time_slots.is_empty() {
        return Err(SchedulerError::NoTimeSlots.into());
    }
    if time_slots.len() != 35 {
        return Err(SchedulerError::InvalidSlotCount {
            found: time_slots.len(),
        }
        .into());
    }

    let active_parity = input.config.active_semester_type;
    let semesters: Vec<_> = input
        .semesters
        .iter()
        .filter(|s| &s.department_id == department_id && s.parity() == active_parity)
        .collect();
    if semesters.is_empty() {
        return Err(SchedulerError::NoMatchingSemesters {
            department_id: department_id.to_string(),
        }
        .into());
    }
    let semester_ids: HashSet<SemesterId> = semesters.iter().map(|s| s.id.clone()).collect();

    let classes: Vec<ClassSection> = input
        .classes
        .iter()
        .filter(|c| semester_ids.contains(&c.semester_id))
        .cloned()
        .collect();
    if classes.is_empty() {
        return Err(SchedulerError::NoClasses {
            department_id: department_id.to_string(),
        }
        .into());
    }

    let mut subjects_by_semester: HashMap<SemesterId, Vec<Subject>> = HashMap::new();
    let mut subject_codes: HashSet<String> = HashSet::new();
    for subject in &input.subjects {
        if &subject.department_id != department_id || !semester_ids.contains(&subject.semester_id)
        {
            continue;
        }
        if subject.hours_per_week() == 0 {
            continue;
        }
        subject_codes.insert(subject.code.clone());
        subjects_by_semester
            .entry(subject.semester_id.clone())
            .or_default()
            .push(subject.clone());
    }
    if subject_codes.is_empty() {
        return Err(SchedulerError::NoSubjects {
            department_id: department_id.to_string(),
        }
        .into());
    }

    let mut pool: Vec<Faculty> = input
        .faculty
        .iter()
        .filter(|f| {
            f.is_active
                && (f.department_id.as_ref() == Some(department_id)
                    || f.department_id.is_none()
                    || f.preference_codes().iter().any(|c| subject_codes.contains(c)))
        })
        .cloned()
        .collect();
    if pool.is_empty() {
        pool = input.faculty.iter().filter(|f| f.is_active).cloned().collect();
    }

    let mut faculty_by_subject_code: HashMap<String, Vec<FacultyId>> = HashMap::new();
    for faculty in &pool {
        for code in faculty.preference_codes() {
            faculty_by_subject_code.entry(code).or_default().push(faculty.id.clone());
        }
    }

    let mut faculty_history: HashMap<FacultyId, HashSet<String>> = HashMap::new();
    for record in &input.prior_assignments {
        if record.term_label == term_label {
            continue;
        }
        if let Some(subject) = input.subjects.iter().find(|s| s.id == record.subject_id) {
            faculty_history
                .entry(record.faculty_id.clone())
                .or_default()
                .insert(subject.code.clone());
        }
    }

    let mut pre_booked: HashMap<FacultyId, HashSet<crate::types::TimeSlotId>> = HashMap::new();
    for entry in &input.pre_booked {
        if entry.term_label == term_label {
            pre_booked
                .entry(entry.faculty_id.clone())
                .or_default()
                .insert(entry.time_slot_id.clone());
        }
    }

    let all_faculty_ids: Vec<FacultyId> = pool.iter().map(|f| f.id.clone()).collect();

    Ok(DomainSnapshot {
        department_id: department_id.clone(),
        term_label: term_label.to_string(),
        classes,
        subjects_by_semester,
        faculty: pool,
        time_slots,
        faculty_by_subject_code,
        faculty_history,
        pre_booked,
        config: input.config.ga.clone(),
        all_faculty_ids,
    })
}
