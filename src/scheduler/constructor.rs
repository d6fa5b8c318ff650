use crate::scheduler::candidate::find_lab_block;
use crate::scheduler::domain::DomainSnapshot;
use crate::types::{Chromosome, ClassId, Day, FacultyId, Gene, SlotKind, Subject, TimeSlotId};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::collections::{HashMap, HashSet};

/// Produces one seeded chromosome that is already close to feasible:
/// lab blocks are contiguous and non-colliding, theory/elective subjects get
/// their required hours, and every teaching slot in every class ends up
/// covered. Faculty double-booking and workload caps are *not* guaranteed
/// here; they are enforced by fitness pressure and repaired, best-effort, by
/// later generations.
pub fn construct_chromosome(snapshot: &DomainSnapshot, rng: &mut StdRng) -> Chromosome {
    let mut genes: Vec<Gene> = Vec::new();

    let mut lab_day_usage: HashMap<(Day, SlotKind), usize> = HashMap::new();
    let mut lab_room_usage: HashMap<crate::types::SubjectId, HashSet<TimeSlotId>> = HashMap::new();
    let mut faculty_schedule: HashMap<FacultyId, HashSet<TimeSlotId>> = HashMap::new();

    let all_slot_ids: Vec<TimeSlotId> = snapshot.time_slots.iter().map(|t| t.id.clone()).collect();

    let mut class_order: Vec<_> = snapshot.classes.iter().collect();
    class_order.shuffle(rng);

    for class in class_order {
        let subjects = snapshot.subjects_for_class(class).to_vec();
        let mut free_in_class: HashSet<TimeSlotId> = all_slot_ids.iter().cloned().collect();
        let mut excluded_days: HashSet<Day> = HashSet::new();
        let mut faculty_by_subject: HashMap<crate::types::SubjectId, FacultyId> = HashMap::new();

        let labs: Vec<&Subject> = subjects.iter().filter(|s| s.is_lab()).take(2).collect();
        for lab in &labs {
            // One lab subject occupies `lab_blocks()` separate contiguous
            // 3-period blocks; fitness and validation both expect exactly
            // `lab_blocks() * 3` genes for this subject.
            for _ in 0..lab.kind.lab_blocks().max(1) {
                let room_usage = lab_room_usage.entry(lab.id.clone()).or_default().clone();
                let block = find_lab_block(
                    &snapshot.time_slots,
                    &free_in_class,
                    &room_usage,
                    &excluded_days,
                    &lab_day_usage,
                    rng,
                );
                let Some(slots) = block else { continue };

                if let Some(day) = crate::scheduler::candidate::slot_day(&snapshot.time_slots, &slots[0]) {
                    excluded_days.insert(day);
                    if let Some(half) = crate::scheduler::candidate::slot_kind(&snapshot.time_slots, &slots[0]) {
                        *lab_day_usage.entry((day, half)).or_insert(0) += 1;
                    }
                }

                let eligible = snapshot.eligible_faculty(&lab.code);
                let mut candidates: Vec<FacultyId> = eligible
                    .iter()
                    .filter(|f| {
                        let busy = faculty_schedule
                            .get(f)
                            .map(|s| slots.iter().any(|sl| s.contains(sl)))
                            .unwrap_or(false);
                        let pre_booked = snapshot
                            .pre_booked
                            .get(f)
                            .map(|s| slots.iter().any(|sl| s.contains(sl)))
                            .unwrap_or(false);
                        !busy && !pre_booked
                    })
                    .cloned()
                    .collect();
                candidates.shuffle(rng);

                let (main, assistant) = match candidates.len() {
                    0 => {
                        let mut all = snapshot.all_faculty_ids.clone();
                        all.shuffle(rng);
                        (
                            all.first().cloned().unwrap_or_else(|| FacultyId::from("unassigned")),
                            None,
                        )
                    }
                    1 => (candidates[0].clone(), None),
                    _ => (candidates[0].clone(), Some(candidates[1].clone())),
                };

                lab_room_usage.entry(lab.id.clone()).or_default().extend(slots.iter().cloned());
                for slot in &slots {
                    faculty_schedule.entry(main.clone()).or_default().insert(slot.clone());
                    if let Some(a) = &assistant {
                        faculty_schedule.entry(a.clone()).or_default().insert(slot.clone());
                    }
                    genes.push(Gene {
                        class_id: class.id.clone(),
                        subject_id: lab.id.clone(),
                        faculty_id: main.clone(),
                        time_slot_id: slot.clone(),
                        is_lab: true,
                        assistant_faculty_id: assistant.clone(),
                    });
                    free_in_class.remove(slot);
                }
                faculty_by_subject.insert(lab.id.clone(), main);
            }
        }

        let theory_and_electives: Vec<&Subject> = subjects.iter().filter(|s| !s.is_lab()).collect();

        for subject in &theory_and_electives {
            let eligible = snapshot.eligible_faculty(&subject.code);
            let mut pool: Vec<FacultyId> = eligible.to_vec();
            pool.shuffle(rng);
            let faculty = pool.first().cloned().unwrap_or_else(|| FacultyId::from("unassigned"));
            faculty_by_subject.insert(subject.id.clone(), faculty.clone());

            let mut blocked: HashSet<TimeSlotId> =
                snapshot.pre_booked.get(&faculty).cloned().unwrap_or_default();
            blocked.extend(faculty_schedule.get(&faculty).cloned().unwrap_or_default());

            let mut free_sorted: Vec<TimeSlotId> = free_in_class.iter().cloned().collect();
            free_sorted.shuffle(rng);
            free_sorted.sort_by_key(|s| blocked.contains(s));

            let needed = subject.hours_per_week() as usize;
            for slot in free_sorted.into_iter().take(needed) {
                faculty_schedule.entry(faculty.clone()).or_default().insert(slot.clone());
                genes.push(Gene {
                    class_id: class.id.clone(),
                    subject_id: subject.id.clone(),
                    faculty_id: faculty.clone(),
                    time_slot_id: slot.clone(),
                    is_lab: false,
                    assistant_faculty_id: None,
                });
                free_in_class.remove(&slot);
            }
        }

        if !free_in_class.is_empty() && !theory_and_electives.is_empty() {
            let mut remaining: Vec<TimeSlotId> = free_in_class.iter().cloned().collect();
            remaining.shuffle(rng);
            let mut cursor = 0usize;
            let mut stalled_rounds = 0usize;

            while !remaining.is_empty() && stalled_rounds <= theory_and_electives.len() {
                let subject = theory_and_electives[cursor % theory_and_electives.len()];
                cursor += 1;
                let faculty = faculty_by_subject
                    .get(&subject.id)
                    .cloned()
                    .unwrap_or_else(|| FacultyId::from("unassigned"));

                let busy_now = |slot: &TimeSlotId| {
                    faculty_schedule.get(&faculty).map(|s| s.contains(slot)).unwrap_or(false)
                };

                let pick = remaining
                    .iter()
                    .position(|s| !busy_now(s))
                    .or_else(|| if stalled_rounds == theory_and_electives.len() { Some(0) } else { None });

                match pick {
                    Some(idx) => {
                        let slot = remaining.remove(idx);
                        faculty_schedule.entry(faculty.clone()).or_default().insert(slot.clone());
                        genes.push(Gene {
                            class_id: class.id.clone(),
                            subject_id: subject.id.clone(),
                            faculty_id: faculty,
                            time_slot_id: slot,
                            is_lab: false,
                            assistant_faculty_id: None,
                        });
                        stalled_rounds = 0;
                    }
                    None => {
                        stalled_rounds += 1;
                    }
                }
            }
        }
    }

    Chromosome::new(genes)
}
