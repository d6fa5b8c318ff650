use crate::scheduler::DomainSnapshot;
use crate::types::{Chromosome, ClassId, Day, FacultyId, SlotKind, SubjectId, TimeSlotId};
use crate::validator::{Severity, Violation};
use std::collections::{HashMap, HashSet};

/// Faculty assigned to two genes in the same slot.
pub fn check_faculty_conflicts(chromosome: &Chromosome) -> Vec<Violation> {
    let mut violations = Vec::new();
    let mut seen: HashMap<FacultyId, HashSet<TimeSlotId>> = HashMap::new();

    for gene in &chromosome.genes {
        for faculty in gene.faculties() {
            let slots = seen.entry(faculty.clone()).or_default();
            if !slots.insert(gene.time_slot_id.clone()) {
                violations.push(Violation {
                    constraint: "NoFacultyConflict".to_string(),
                    message: format!("Faculty '{}' double-booked at '{}'", faculty, gene.time_slot_id),
                    severity: Severity::Error,
                });
            }
        }
    }

    violations
}

/// Class assigned to two genes in the same slot.
pub fn check_class_conflicts(chromosome: &Chromosome) -> Vec<Violation> {
    let mut violations = Vec::new();
    let mut seen: HashMap<ClassId, HashSet<TimeSlotId>> = HashMap::new();

    for gene in &chromosome.genes {
        let slots = seen.entry(gene.class_id.clone()).or_default();
        if !slots.insert(gene.time_slot_id.clone()) {
            violations.push(Violation {
                constraint: "NoClassConflict".to_string(),
                message: format!("Class '{}' double-booked at '{}'", gene.class_id, gene.time_slot_id),
                severity: Severity::Error,
            });
        }
    }

    violations
}

/// Faculty teaching more hours than their designation-derived cap.
pub fn check_workload_limits(snapshot: &DomainSnapshot, chromosome: &Chromosome) -> Vec<Violation> {
    let mut hours: HashMap<FacultyId, u32> = HashMap::new();
    for gene in &chromosome.genes {
        for faculty in gene.faculties() {
            *hours.entry(faculty.clone()).or_insert(0) += 1;
        }
    }

    hours
        .into_iter()
        .filter_map(|(faculty, hrs)| {
            let max = snapshot.faculty_max_hours(&faculty) as u32;
            if hrs > max {
                Some(Violation {
                    constraint: "WorkloadLimit".to_string(),
                    message: format!("Faculty '{}' assigned {} hours, cap is {}", faculty, hrs, max),
                    severity: Severity::Error,
                })
            } else {
                None
            }
        })
        .collect()
}

/// Every lab subject must occupy the expected number of 3-period blocks, and
/// each block must be 3 contiguous periods within one half-day.
pub fn check_lab_blocks(snapshot: &DomainSnapshot, chromosome: &Chromosome) -> Vec<Violation> {
    let mut violations = Vec::new();
    let mut groups: HashMap<(ClassId, SubjectId), Vec<TimeSlotId>> = HashMap::new();

    for gene in chromosome.genes.iter().filter(|g| g.is_lab) {
        groups
            .entry((gene.class_id.clone(), gene.subject_id.clone()))
            .or_default()
            .push(gene.time_slot_id.clone());
    }

    for ((class_id, subject_id), slots) in &groups {
        let expected_blocks = snapshot
            .subjects_by_semester
            .values()
            .flatten()
            .find(|s| &s.id == subject_id)
            .map(|s| s.kind.lab_blocks())
            .unwrap_or(2) as usize;
        let expected_count = expected_blocks * 3;

        if slots.len() != expected_count {
            violations.push(Violation {
                constraint: "LabBlockCount".to_string(),
                message: format!(
                    "Class '{}' subject '{}' has {} lab slots, expected {}",
                    class_id,
                    subject_id,
                    slots.len(),
                    expected_count
                ),
                severity: Severity::Error,
            });
            continue;
        }

        for chunk in slots.chunks(3) {
            if !is_contiguous_same_half(snapshot, chunk) {
                violations.push(Violation {
                    constraint: "LabContiguity".to_string(),
                    message: format!("Class '{}' subject '{}' has a non-contiguous lab block", class_id, subject_id),
                    severity: Severity::Error,
                });
            }
        }
    }

    violations
}

fn is_contiguous_same_half(snapshot: &DomainSnapshot, slots: &[TimeSlotId]) -> bool {
    let periods: Vec<(Day, u8)> = slots
        .iter()
        .filter_map(|id| snapshot.time_slots.iter().find(|t| &t.id == id).map(|t| (t.day, t.period)))
        .collect();
    if periods.len() != slots.len() {
        return false;
    }
    let day = periods[0].0;
    if !periods.iter().all(|(d, _)| *d == day) {
        return false;
    }
    let mut ps: Vec<u8> = periods.iter().map(|(_, p)| *p).collect();
    ps.sort_unstable();
    let contiguous = ps.windows(2).all(|w| w[1] == w[0] + 1);
    let same_half = ps.iter().all(|p| crate::types::classify_period(*p) == crate::types::classify_period(ps[0]));
    contiguous && same_half
}

/// Two classes holding the same lab subject in the same slot (same physical
/// room implied by shared lab subject identity).
pub fn check_lab_room_clashes(chromosome: &Chromosome) -> Vec<Violation> {
    let mut by_slot: HashMap<(SubjectId, TimeSlotId), HashSet<ClassId>> = HashMap::new();
    for gene in chromosome.genes.iter().filter(|g| g.is_lab) {
        by_slot
            .entry((gene.subject_id.clone(), gene.time_slot_id.clone()))
            .or_default()
            .insert(gene.class_id.clone());
    }

    by_slot
        .into_iter()
        .filter(|(_, classes)| classes.len() > 1)
        .map(|((subject_id, slot_id), classes)| Violation {
            constraint: "LabRoomClash".to_string(),
            message: format!(
                "Lab subject '{}' claimed by {} classes at '{}'",
                subject_id,
                classes.len(),
                slot_id
            ),
            severity: Severity::Error,
        })
        .collect()
}

/// Two lab subjects for the same class on the same day/half (only one lab
/// room is available to a class per half-day).
pub fn check_lab_day_clashes(snapshot: &DomainSnapshot, chromosome: &Chromosome) -> Vec<Violation> {
    let mut usage: HashMap<(ClassId, Day, SlotKind), HashSet<SubjectId>> = HashMap::new();
    for gene in chromosome.genes.iter().filter(|g| g.is_lab) {
        if let Some(slot) = snapshot.time_slots.iter().find(|t| t.id == gene.time_slot_id) {
            usage
                .entry((gene.class_id.clone(), slot.day, slot.kind()))
                .or_default()
                .insert(gene.subject_id.clone());
        }
    }

    usage
        .into_iter()
        .filter(|(_, subjects)| subjects.len() > 1)
        .map(|((class_id, day, kind), subjects)| Violation {
            constraint: "LabDayClash".to_string(),
            message: format!(
                "Class '{}' has {} labs on {} {:?}",
                class_id,
                subjects.len(),
                day,
                kind
            ),
            severity: Severity::Error,
        })
        .collect()
}

/// A faculty placed in a slot another department already claimed for them
/// this term.
pub fn check_pre_booked_violations(snapshot: &DomainSnapshot, chromosome: &Chromosome) -> Vec<Violation> {
    chromosome
        .genes
        .iter()
        .filter(|gene| {
            snapshot
                .pre_booked
                .get(&gene.faculty_id)
                .map(|s| s.contains(&gene.time_slot_id))
                .unwrap_or(false)
        })
        .map(|gene| Violation {
            constraint: "PreBookedViolation".to_string(),
            message: format!("Faculty '{}' placed in a pre-booked slot '{}'", gene.faculty_id, gene.time_slot_id),
            severity: Severity::Error,
        })
        .collect()
}
