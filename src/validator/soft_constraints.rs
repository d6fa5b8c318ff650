use crate::scheduler::DomainSnapshot;
use crate::types::{Chromosome, FacultyId};
use crate::validator::SoftScore;
use std::collections::HashMap;

const WORKLOAD_IMBALANCE_TOLERANCE: f64 = 5.0;

/// All soft-constraint scores, independent of the weights the evolver uses
/// internally — this is a second opinion, not a recomputation of fitness.
pub fn calculate_soft_scores(snapshot: &DomainSnapshot, chromosome: &Chromosome) -> Vec<SoftScore> {
    vec![
        score_subject_rotation(snapshot, chromosome),
        score_preference_match(snapshot, chromosome),
        score_workload_balance(chromosome),
    ]
}

fn score_subject_rotation(snapshot: &DomainSnapshot, chromosome: &Chromosome) -> SoftScore {
    let total = chromosome.genes.len();
    let repeats = chromosome
        .genes
        .iter()
        .filter(|gene| {
            snapshot
                .faculty_history
                .get(&gene.faculty_id)
                .zip(find_subject_code(snapshot, gene))
                .map(|(history, code)| history.contains(&code))
                .unwrap_or(false)
        })
        .count();

    SoftScore {
        constraint: "SubjectRotation".to_string(),
        score: (total - repeats) as f64,
        max_score: total as f64,
        details: format!("{}/{} assignments avoid repeating last term's subject", total - repeats, total),
    }
}

fn score_preference_match(snapshot: &DomainSnapshot, chromosome: &Chromosome) -> SoftScore {
    let total = chromosome.genes.len();
    let matched = chromosome
        .genes
        .iter()
        .filter(|gene| {
            find_subject_code(snapshot, gene)
                .map(|code| snapshot.eligible_faculty(&code).iter().any(|f| f == &gene.faculty_id))
                .unwrap_or(false)
        })
        .count();

    SoftScore {
        constraint: "PreferenceMatch".to_string(),
        score: matched as f64,
        max_score: total as f64,
        details: format!("{}/{} assignments match a faculty preference", matched, total),
    }
}

fn score_workload_balance(chromosome: &Chromosome) -> SoftScore {
    let mut hours: HashMap<FacultyId, u32> = HashMap::new();
    for gene in &chromosome.genes {
        for faculty in gene.faculties() {
            *hours.entry(faculty.clone()).or_insert(0) += 1;
        }
    }

    if hours.is_empty() {
        return SoftScore {
            constraint: "WorkloadBalance".to_string(),
            score: 100.0,
            max_score: 100.0,
            details: "no assignments to balance".to_string(),
        };
    }

    let mean = hours.values().sum::<u32>() as f64 / hours.len() as f64;
    let max_deviation = hours
        .values()
        .map(|&h| (h as f64 - mean).abs())
        .fold(0.0_f64, f64::max);

    let score = if max_deviation <= WORKLOAD_IMBALANCE_TOLERANCE {
        100.0
    } else {
        (100.0 - (max_deviation - WORKLOAD_IMBALANCE_TOLERANCE) * 5.0).max(0.0)
    };

    SoftScore {
        constraint: "WorkloadBalance".to_string(),
        score,
        max_score: 100.0,
        details: format!("max deviation from mean load is {:.1}h", max_deviation),
    }
}

fn find_subject_code(snapshot: &DomainSnapshot, gene: &crate::types::Gene) -> Option<String> {
    snapshot
        .subjects_by_semester
        .values()
        .flatten()
        .find(|s| s.id == gene.subject_id)
        .map(|s| s.code.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::domain::build_snapshot;
    use crate::types::{
        ClassId, ClassSection, Day, Department, DepartmentId, Designation, DomainInput, Faculty,
        FacultyId as FId, Gene, ScheduleConfig, Semester, SemesterId, SemesterParity, Subject,
        SubjectId, SubjectKind, TimeSlot, TimeSlotId,
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
            id: FId::from("f1"),
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
    fn preference_match_scores_full_when_all_matched() {
        let snapshot = snapshot();
        let chromosome = Chromosome::new(vec![Gene {
            class_id: ClassId::from("cse3a"),
            subject_id: SubjectId::from("cs301"),
            faculty_id: FId::from("f1"),
            time_slot_id: TimeSlotId::from("MON-1"),
            is_lab: false,
            assistant_faculty_id: None,
        }]);
        let scores = calculate_soft_scores(&snapshot, &chromosome);
        let pref = scores.iter().find(|s| s.constraint == "PreferenceMatch").unwrap();
        assert_eq!(pref.score, pref.max_score);
    }

    #[test]
    fn workload_balance_is_perfect_with_one_faculty() {
        let snapshot = snapshot();
        let chromosome = Chromosome::new(vec![Gene {
            class_id: ClassId::from("cse3a"),
            subject_id: SubjectId::from("cs301"),
            faculty_id: FId::from("f1"),
            time_slot_id: TimeSlotId::from("MON-1"),
            is_lab: false,
            assistant_faculty_id: None,
        }]);
        let scores = calculate_soft_scores(&snapshot, &chromosome);
        let balance = scores.iter().find(|s| s.constraint == "WorkloadBalance").unwrap();
        assert_eq!(balance.score, 100.0);
    }
}
