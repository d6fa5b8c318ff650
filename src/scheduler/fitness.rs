use crate::scheduler::domain::DomainSnapshot;
use crate::types::{Chromosome, ClassId, Day, FacultyId, SlotKind, SubjectId, TimeSlotId};
use std::collections::{HashMap, HashSet};

const W_FACULTY_DOUBLE_BOOKING: f64 = -1000.0;
const W_CLASS_DOUBLE_BOOKING: f64 = -1000.0;
const W_WORKLOAD_EXCEEDED_PER_HOUR: f64 = -500.0;
const W_LAB_CONTIGUITY_BROKEN: f64 = -5000.0;
const W_LAB_WRONG_COUNT: f64 = -10000.0;
const W_LAB_HALF_DAY_MIXING: f64 = -100.0;
const W_LAB_DAY_CLASH_PER_EXTRA: f64 = -800.0;
const W_LAB_ROOM_CLASH_PER_EXTRA: f64 = -1500.0;
const W_PRE_BOOKED_VIOLATION: f64 = -2000.0;
const W_SUBJECT_ROTATION: f64 = -50.0;
const W_PREFERENCE_MATCH: f64 = 100.0;
const W_WORKLOAD_IMBALANCE_PER_HOUR: f64 = -30.0;

const WORKLOAD_IMBALANCE_TOLERANCE: f64 = 5.0;

/// Scores a chromosome against the weighted hard/soft constraint set. Higher
/// is better; a non-negative score indicates no hard violation remains.
pub fn evaluate(snapshot: &DomainSnapshot, chromosome: &Chromosome) -> f64 {
    let mut score = 0.0;

    let mut faculty_slot_hits: HashMap<FacultyId, HashMap<TimeSlotId, usize>> = HashMap::new();
    let mut class_slot_hits: HashMap<ClassId, HashMap<TimeSlotId, usize>> = HashMap::new();
    let mut faculty_hours: HashMap<FacultyId, u32> = HashMap::new();
    let mut lab_groups: HashMap<(ClassId, SubjectId), Vec<&crate::types::Gene>> = HashMap::new();
    let mut lab_slot_classes: HashMap<(SubjectId, TimeSlotId), HashSet<ClassId>> = HashMap::new();

    for gene in &chromosome.genes {
        for faculty in gene.faculties() {
            *faculty_slot_hits
                .entry(faculty.clone())
                .or_default()
                .entry(gene.time_slot_id.clone())
                .or_insert(0) += 1;
            *faculty_hours.entry(faculty.clone()).or_insert(0) += 1;
        }
        *class_slot_hits
            .entry(gene.class_id.clone())
            .or_default()
            .entry(gene.time_slot_id.clone())
            .or_insert(0) += 1;

        if gene.is_lab {
            lab_groups
                .entry((gene.class_id.clone(), gene.subject_id.clone()))
                .or_default()
                .push(gene);
            lab_slot_classes
                .entry((gene.subject_id.clone(), gene.time_slot_id.clone()))
                .or_default()
                .insert(gene.class_id.clone());
        }

        if snapshot
            .pre_booked
            .get(&gene.faculty_id)
            .map(|s| s.contains(&gene.time_slot_id))
            .unwrap_or(false)
        {
            score += W_PRE_BOOKED_VIOLATION;
        }

        if let Some(history) = snapshot.faculty_history.get(&gene.faculty_id) {
            if let Some(subject) = find_subject(snapshot, &gene.subject_id) {
                if history.contains(&subject.code) {
                    score += W_SUBJECT_ROTATION;
                }
            }
        }

        if let Some(subject) = find_subject(snapshot, &gene.subject_id) {
            if snapshot
                .eligible_faculty(&subject.code)
                .iter()
                .any(|f| f == &gene.faculty_id)
            {
                score += W_PREFERENCE_MATCH;
            }
        }
    }

    for (faculty, per_slot) in &faculty_slot_hits {
        let doubles: usize = per_slot.values().filter(|&&c| c > 1).map(|&c| c - 1).sum();
        score += doubles as f64 * W_FACULTY_DOUBLE_BOOKING;

        let max_hours = snapshot.faculty_max_hours(faculty) as u32;
        let hours = *faculty_hours.get(faculty).unwrap_or(&0);
        if hours > max_hours {
            score += (hours - max_hours) as f64 * W_WORKLOAD_EXCEEDED_PER_HOUR;
        }
    }

    for per_slot in class_slot_hits.values() {
        let doubles: usize = per_slot.values().filter(|&&c| c > 1).map(|&c| c - 1).sum();
        score += doubles as f64 * W_CLASS_DOUBLE_BOOKING;
    }

    for ((class_id, subject_id), genes) in &lab_groups {
        let subject = find_subject(snapshot, subject_id);
        let expected_blocks = subject.map(|s| s.kind.lab_blocks()).unwrap_or(2) as usize;
        let expected_genes = expected_blocks * 3;
        if genes.len() != expected_genes {
            score += W_LAB_WRONG_COUNT;
            continue;
        }
        score += lab_contiguity_penalty(snapshot, class_id, genes);
    }

    for classes in lab_slot_classes.values() {
        if classes.len() > 1 {
            score += (classes.len() - 1) as f64 * W_LAB_ROOM_CLASH_PER_EXTRA;
        }
    }

    score += lab_day_clash_penalty(snapshot, chromosome);
    score += workload_imbalance_penalty(&faculty_hours);

    score
}

fn find_subject<'a>(
    snapshot: &'a DomainSnapshot,
    subject_id: &SubjectId,
) -> Option<&'a crate::types::Subject> {
    snapshot
        .subjects_by_semester
        .values()
        .flatten()
        .find(|s| &s.id == subject_id)
}

/// Lab triples are split into contiguous runs grouped by day; a correctly
/// built block yields exactly one run of 3 on one day within one half.
fn lab_contiguity_penalty(snapshot: &DomainSnapshot, _class_id: &ClassId, genes: &[&crate::types::Gene]) -> f64 {
    let mut by_day: HashMap<Day, Vec<u8>> = HashMap::new();
    for gene in genes {
        if let Some(slot) = snapshot.time_slots.iter().find(|t| t.id == gene.time_slot_id) {
            by_day.entry(slot.day).or_default().push(slot.period);
        }
    }

    if by_day.len() != 1 {
        return W_LAB_CONTIGUITY_BROKEN;
    }

    let periods = by_day.values().next().unwrap();
    let mut sorted = periods.clone();
    sorted.sort_unstable();
    let contiguous = sorted.windows(2).all(|w| w[1] == w[0] + 1);
    if !contiguous {
        return W_LAB_CONTIGUITY_BROKEN;
    }

    let all_morning = sorted.iter().all(|p| crate::types::classify_period(*p) == SlotKind::Morning);
    let all_afternoon = sorted.iter().all(|p| crate::types::classify_period(*p) == SlotKind::Afternoon);
    if all_morning || all_afternoon {
        0.0
    } else {
        W_LAB_HALF_DAY_MIXING
    }
}

fn lab_day_clash_penalty(snapshot: &DomainSnapshot, chromosome: &Chromosome) -> f64 {
    let mut usage: HashMap<(Day, SlotKind), HashSet<ClassId>> = HashMap::new();
    for gene in chromosome.genes.iter().filter(|g| g.is_lab) {
        if let Some(slot) = snapshot.time_slots.iter().find(|t| t.id == gene.time_slot_id) {
            usage
                .entry((slot.day, slot.kind()))
                .or_default()
                .insert(gene.class_id.clone());
        }
    }
    usage
        .values()
        .map(|classes| if classes.len() > 1 { (classes.len() - 1) as f64 } else { 0.0 })
        .sum::<f64>()
        * W_LAB_DAY_CLASH_PER_EXTRA
}

fn workload_imbalance_penalty(faculty_hours: &HashMap<FacultyId, u32>) -> f64 {
    if faculty_hours.is_empty() {
        return 0.0;
    }
    let mean = faculty_hours.values().sum::<u32>() as f64 / faculty_hours.len() as f64;
    faculty_hours
        .values()
        .map(|&hours| {
            let diff = (hours as f64 - mean).abs();
            if diff > WORKLOAD_IMBALANCE_TOLERANCE {
                (diff - WORKLOAD_IMBALANCE_TOLERANCE) * W_WORKLOAD_IMBALANCE_PER_HOUR
            } else {
                0.0
            }
        })
        .sum()
}
