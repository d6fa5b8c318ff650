use crate::error::Result;
use crate::types::{ClassId, DepartmentId, DomainInput, SemesterId, SubjectId};
use std::collections::HashSet;

/// Collected referential-integrity errors and warnings from checking a
/// [`DomainInput`] before it reaches [`crate::scheduler::build_snapshot`].
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    pub fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }
}

/// Validates referential integrity of a loaded [`DomainInput`]: duplicate
/// IDs and dangling references across departments, semesters, classes,
/// subjects, and faculty.
pub fn validate_input(input: &DomainInput) -> Result<ValidationResult> {
    let mut result = ValidationResult::default();

    let department_ids: HashSet<&DepartmentId> = input.departments.iter().map(|d| &d.id).collect();
    let semester_ids: HashSet<&SemesterId> = input.semesters.iter().map(|s| &s.id).collect();
    let class_ids: HashSet<&ClassId> = input.classes.iter().map(|c| &c.id).collect();
    let subject_ids: HashSet<&SubjectId> = input.subjects.iter().map(|s| &s.id).collect();

    check_duplicate_ids(&input.departments.iter().map(|d| &d.id).collect::<Vec<_>>(), "department", &mut result);
    check_duplicate_ids(&input.semesters.iter().map(|s| &s.id).collect::<Vec<_>>(), "semester", &mut result);
    check_duplicate_ids(&input.classes.iter().map(|c| &c.id).collect::<Vec<_>>(), "class", &mut result);
    check_duplicate_ids(&input.subjects.iter().map(|s| &s.id).collect::<Vec<_>>(), "subject", &mut result);
    check_duplicate_ids(&input.faculty.iter().map(|f| &f.id).collect::<Vec<_>>(), "faculty", &mut result);
    check_duplicate_ids(&input.time_slots.iter().map(|t| &t.id).collect::<Vec<_>>(), "time slot", &mut result);

    for semester in &input.semesters {
        if !department_ids.contains(&semester.department_id) {
            result.add_error(format!(
                "Semester '{}' references unknown department '{}'",
                semester.id, semester.department_id
            ));
        }
    }

    for class in &input.classes {
        if !semester_ids.contains(&class.semester_id) {
            result.add_error(format!(
                "Class '{}' references unknown semester '{}'",
                class.id, class.semester_id
            ));
        }
    }

    for subject in &input.subjects {
        if !department_ids.contains(&subject.department_id) {
            result.add_error(format!(
                "Subject '{}' references unknown department '{}'",
                subject.id, subject.department_id
            ));
        }
        if !semester_ids.contains(&subject.semester_id) {
            result.add_error(format!(
                "Subject '{}' references unknown semester '{}'",
                subject.id, subject.semester_id
            ));
        }
    }

    for faculty in &input.faculty {
        if let Some(dept) = &faculty.department_id {
            if !department_ids.contains(dept) {
                result.add_warning(format!(
                    "Faculty '{}' references unknown department '{}'",
                    faculty.id, dept
                ));
            }
        }
    }

    for record in &input.prior_assignments {
        if !subject_ids.contains(&record.subject_id) {
            result.add_warning(format!(
                "Prior assignment references unknown subject '{}'",
                record.subject_id
            ));
        }
        if !class_ids.contains(&record.class_id) {
            result.add_warning(format!(
                "Prior assignment references unknown class '{}'",
                record.class_id
            ));
        }
    }

    if !result.is_valid() {
        return Err(anyhow::anyhow!(
            "Validation failed with {} errors:\n{}",
            result.errors.len(),
            result.errors.join("\n")
        ));
    }

    Ok(result)
}

fn check_duplicate_ids<T: std::hash::Hash + Eq + std::fmt::Display>(
    ids: &[&T],
    kind: &str,
    result: &mut ValidationResult,
) {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(*id) {
            result.add_error(format!("Duplicate {} ID: '{}'", kind, id));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        ClassSection, Department, Semester, SemesterParity, Subject, SubjectKind,
    };

    fn base_input() -> DomainInput {
        let dept = Department {
            id: DepartmentId::from("cse"),
            code: "CSE".to_string(),
            name: "Computer Science".to_string(),
            active: true,
        };
        let sem = Semester {
            id: SemesterId::from("sem3"),
            department_id: dept.id.clone(),
            number: 3,
        };
        let class = ClassSection {
            id: ClassId::from("cse3a"),
            semester_id: sem.id.clone(),
            name: "CSE-3A".to_string(),
            capacity: 60,
        };
        let subject = Subject {
            id: SubjectId::from("cs301"),
            code: "CS301".to_string(),
            short_code: "DS".to_string(),
            department_id: dept.id.clone(),
            semester_id: sem.id.clone(),
            credits: 4,
            kind: SubjectKind::Theory { lecture_hours: 3, tutorial_hours: 0 },
        };
        DomainInput {
            departments: vec![dept],
            semesters: vec![sem],
            classes: vec![class],
            subjects: vec![subject],
            faculty: vec![],
            time_slots: vec![],
            prior_assignments: vec![],
            pre_booked: vec![],
            config: crate::types::ScheduleConfig {
                active_semester_type: SemesterParity::Odd,
                ..Default::default()
            },
        }
    }

    #[test]
    fn well_formed_input_is_valid() {
        let input = base_input();
        assert!(validate_input(&input).is_ok());
    }

    #[test]
    fn dangling_semester_reference_is_an_error() {
        let mut input = base_input();
        input.classes[0].semester_id = SemesterId::from("ghost");
        assert!(validate_input(&input).is_err());
    }

    #[test]
    fn duplicate_subject_ids_are_rejected() {
        let mut input = base_input();
        let dup = input.subjects[0].clone();
        input.subjects.push(dup);
        assert!(validate_input(&input).is_err());
    }
}
