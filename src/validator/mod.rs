mod hard_constraints;
mod soft_constraints;

pub use hard_constraints::*;
pub use soft_constraints::*;

use crate::scheduler::DomainSnapshot;
use crate::types::Chromosome;

/// Result of independently re-checking a generated chromosome. A second,
/// simpler implementation of the constraint checks the evolver's fitness
/// function must agree with.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub hard_violations: Vec<Violation>,
    pub soft_scores: Vec<SoftScore>,
    pub total_score: f64,
}

#[derive(Debug, Clone)]
pub struct Violation {
    pub constraint: String,
    pub message: String,
    pub severity: Severity,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone)]
pub struct SoftScore {
    pub constraint: String,
    pub score: f64,
    pub max_score: f64,
    pub details: String,
}

/// Re-checks every hard and soft term a fitness evaluation would score,
/// using an implementation deliberately kept separate from
/// `scheduler::fitness::evaluate` so the two can be compared.
pub fn validate_chromosome(snapshot: &DomainSnapshot, chromosome: &Chromosome) -> ValidationReport {
    let mut hard_violations = Vec::new();
    hard_violations.extend(check_faculty_conflicts(chromosome));
    hard_violations.extend(check_class_conflicts(chromosome));
    hard_violations.extend(check_workload_limits(snapshot, chromosome));
    hard_violations.extend(check_lab_blocks(snapshot, chromosome));
    hard_violations.extend(check_lab_room_clashes(chromosome));
    hard_violations.extend(check_lab_day_clashes(snapshot, chromosome));
    hard_violations.extend(check_pre_booked_violations(snapshot, chromosome));

    let soft_scores = calculate_soft_scores(snapshot, chromosome);

    let total_score = if !hard_violations.is_empty() {
        0.0
    } else {
        let soft_total: f64 = soft_scores.iter().map(|s| s.score).sum();
        let soft_max: f64 = soft_scores.iter().map(|s| s.max_score).sum();
        if soft_max > 0.0 {
            (soft_total / soft_max) * 100.0
        } else {
            100.0
        }
    };

    ValidationReport {
        is_valid: hard_violations.is_empty(),
        hard_violations,
        soft_scores,
        total_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::domain::build_snapshot;
    use crate::types::{
        ClassId, ClassSection, Day, Department, DepartmentId, Designation, DomainInput, Faculty,
        FacultyId, Gene, ScheduleConfig, Semester, SemesterId, SemesterParity, Subject, SubjectId,
        SubjectKind, TimeSlot, TimeSlotId,
    };

    fn snapshot() -> DomainSnapshot {
        let dept_id = DepartmentId::from("cse");
        let sem_id = SemesterId::from("sem3");
        let dept = Department {
            id: dept_id.clone(),
            code: "CSE".to_string(),
            name: "Computer Science".to_string(),
            active: true,
        };
        let sem = Semester {
            id: sem_id.clone(),
            department_id: dept_id.clone(),
            number: 3,
        };
        let class = ClassSection {
            id: ClassId::from("cse3a"),
            semester_id: sem_id.clone(),
            name: "CSE-3A".to_string(),
            capacity: 60,
        };
        let subject = Subject {
            id: SubjectId::from("cs301"),
            code: "CS301".to_string(),
            short_code: "DS".to_string(),
            department_id: dept_id.clone(),
            semester_id: sem_id.clone(),
            credits: 4,
            kind: SubjectKind::Theory {
                lecture_hours: 3,
                tutorial_hours: 0,
            },
        };
        let faculty = Faculty {
            id: FacultyId::from("f1"),
            name: "Dr. Rao".to_string(),
            designation: Designation::Professor,
            department_id: Some(dept_id.clone()),
            preferences: "CS301".to_string(),
            max_hours: None,
            is_active: true,
        };
        let mut time_slots = Vec::new();
        for day in Day::ALL {
            for period in [1u8, 2, 3, 4, 5, 6, 7] {
                time_slots.push(TimeSlot {
                    id: TimeSlotId::from(format!("{day}-{period}").as_str()),
                    day,
                    period,
                    is_locked: false,
                });
            }
        }
        let input = DomainInput {
            departments: vec![dept],
            semesters: vec![sem],
            classes: vec![class],
            subjects: vec![subject],
            faculty: vec![faculty],
            time_slots,
            prior_assignments: vec![],
            pre_booked: vec![],
            config: ScheduleConfig {
                active_semester_type: SemesterParity::Odd,
                ..Default::default()
            },
        };
        build_snapshot(&input, &dept_id, "2024-ODD").unwrap()
    }

    #[test]
    fn clean_chromosome_validates() {
        let snapshot = snapshot();
        let chromosome = Chromosome::new(vec![Gene {
            class_id: ClassId::from("cse3a"),
            subject_id: SubjectId::from("cs301"),
            faculty_id: FacultyId::from("f1"),
            time_slot_id: TimeSlotId::from("MON-1"),
            is_lab: false,
            assistant_faculty_id: None,
        }]);
        let report = validate_chromosome(&snapshot, &chromosome);
        assert!(report.is_valid);
        assert_eq!(report.total_score, 100.0);
    }

    #[test]
    fn conflicting_chromosome_fails_validation() {
        let snapshot = snapshot();
        let chromosome = Chromosome::new(vec![
            Gene {
                class_id: ClassId::from("cse3a"),
                subject_id: SubjectId::from("cs301"),
                faculty_id: FacultyId::from("f1"),
                time_slot_id: TimeSlotId::from("MON-1"),
                is_lab: false,
                assistant_faculty_id: None,
            },
            Gene {
                class_id: ClassId::from("cse3a"),
                subject_id: SubjectId::from("cs301"),
                faculty_id: FacultyId::from("f1"),
                time_slot_id: TimeSlotId::from("MON-1"),
                is_lab: false,
                assistant_faculty_id: None,
            },
        ]);
        let report = validate_chromosome(&snapshot, &chromosome);
        assert!(!report.is_valid);
        assert_eq!(report.total_score, 0.0);
    }
}
