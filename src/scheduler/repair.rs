use crate::scheduler::candidate::find_lab_block;
use crate::scheduler::domain::DomainSnapshot;
use crate::types::{Chromosome, ClassId, Day, SubjectId, TimeSlotId};
use rand::rngs::StdRng;
use std::collections::{HashMap, HashSet};

/// Restores lab contiguity after crossover/mutation without a full re-solve.
/// Never adds or removes genes, never changes faculty; if no non-conflicting
/// triple exists, leaves the chromosome as-is and lets fitness penalise it.
pub fn repair_labs(chromosome: &mut Chromosome, snapshot: &DomainSnapshot, rng: &mut StdRng) {
    let all_slot_ids: HashSet<TimeSlotId> = snapshot.time_slots.iter().map(|t| t.id.clone()).collect();

    let mut by_class_subject: HashMap<(ClassId, SubjectId), Vec<usize>> = HashMap::new();
    for (i, gene) in chromosome.genes.iter().enumerate() {
        if gene.is_lab {
            by_class_subject
                .entry((gene.class_id.clone(), gene.subject_id.clone()))
                .or_default()
                .push(i);
        }
    }

    let mut class_slots_used: HashMap<ClassId, HashSet<TimeSlotId>> = HashMap::new();
    for gene in &chromosome.genes {
        class_slots_used
            .entry(gene.class_id.clone())
            .or_default()
            .insert(gene.time_slot_id.clone());
    }

    let mut keys: Vec<(ClassId, SubjectId)> = by_class_subject.keys().cloned().collect();
    keys.sort_by(|a, b| (a.0 .0.as_str(), a.1 .0.as_str()).cmp(&(b.0 .0.as_str(), b.1 .0.as_str())));

    for key in keys {
        let indices = by_class_subject[&key].clone();
        if indices.len() != 3 {
            continue;
        }
        let slots: Vec<TimeSlotId> = indices
            .iter()
            .map(|&i| chromosome.genes[i].time_slot_id.clone())
            .collect();
        if is_contiguous_same_half(snapshot, &slots) {
            continue;
        }

        let (class_id, subject_id) = &key;
        let used = class_slots_used.get(class_id).cloned().unwrap_or_default();
        let mut free: HashSet<TimeSlotId> = all_slot_ids.difference(&used).cloned().collect();
        free.extend(slots.iter().cloned());

        let room_usage: HashSet<TimeSlotId> = chromosome
            .genes
            .iter()
            .filter(|g| g.is_lab && &g.subject_id == subject_id && &g.class_id != class_id)
            .map(|g| g.time_slot_id.clone())
            .collect();

        let other_lab_days: HashSet<Day> = by_class_subject
            .iter()
            .filter(|(k, _)| &k.0 == class_id && &k.1 != subject_id)
            .flat_map(|(_, idxs)| idxs.iter())
            .filter_map(|&i| {
                snapshot
                    .time_slots
                    .iter()
                    .find(|t| t.id == chromosome.genes[i].time_slot_id)
                    .map(|t| t.day)
            })
            .collect();

        if let Some(new_slots) =
            find_lab_block(&snapshot.time_slots, &free, &room_usage, &other_lab_days, &HashMap::new(), rng)
        {
            for (idx, slot) in indices.iter().zip(new_slots.iter()) {
                chromosome.genes[*idx].time_slot_id = slot.clone();
            }
            class_slots_used.entry(class_id.clone()).or_default().extend(new_slots.iter().cloned());
            for slot in &slots {
                class_slots_used.get_mut(class_id).unwrap().remove(slot);
            }
        }
    }
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
