use crate::types::{Day, SlotKind, TimeSlot, TimeSlotId};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::collections::{HashMap, HashSet};

pub type LabUsageKey = (Day, SlotKind);

const MORNING: [u8; 3] = [1, 2, 3];
const AFTERNOON: [u8; 3] = [5, 6, 7];

/// Find three contiguous same-half-day periods for one lab block: free
/// within the class, not already claimed for this lab subject elsewhere
/// (same subject same slot would imply the same physical room), and
/// preferring a day not already excluded (typically a day the class has
/// already scheduled its other lab on) and a (day, half) with the lowest
/// usage across the rest of the timetable so far. Shared by the constructor
/// and by repair.
pub fn find_lab_block(
    time_slots: &[TimeSlot],
    free_in_class: &HashSet<TimeSlotId>,
    room_usage: &HashSet<TimeSlotId>,
    excluded_days: &HashSet<Day>,
    lab_day_usage: &HashMap<LabUsageKey, usize>,
    rng: &mut StdRng,
) -> Option<[TimeSlotId; 3]> {
    let mut candidates: Vec<(Day, SlotKind, [TimeSlotId; 3])> = Vec::new();

    for day in Day::ALL {
        for (half, periods) in [(SlotKind::Morning, MORNING), (SlotKind::Afternoon, AFTERNOON)] {
            let mut ids: Vec<TimeSlotId> = Vec::with_capacity(3);
            let mut ok = true;
            for period in periods {
                let slot = time_slots.iter().find(|t| t.day == day && t.period == period);
                match slot {
                    Some(slot) if free_in_class.contains(&slot.id) && !room_usage.contains(&slot.id) => {
                        ids.push(slot.id.clone());
                    }
                    _ => {
                        ok = false;
                        break;
                    }
                }
            }
            if ok && ids.len() == 3 {
                candidates.push((day, half, [ids[0].clone(), ids[1].clone(), ids[2].clone()]));
            }
        }
    }

    if candidates.is_empty() {
        return None;
    }

    let (preferred, fallback): (Vec<_>, Vec<_>) =
        candidates.into_iter().partition(|(day, _, _)| !excluded_days.contains(day));

    pick_lowest_usage(preferred, lab_day_usage, rng)
        .or_else(|| pick_lowest_usage(fallback, lab_day_usage, rng))
}

fn pick_lowest_usage(
    mut group: Vec<(Day, SlotKind, [TimeSlotId; 3])>,
    lab_day_usage: &HashMap<LabUsageKey, usize>,
    rng: &mut StdRng,
) -> Option<[TimeSlotId; 3]> {
    if group.is_empty() {
        return None;
    }
    group.shuffle(rng);
    group.sort_by_key(|(day, half, _)| *lab_day_usage.get(&(*day, *half)).unwrap_or(&0));
    group.into_iter().next().map(|(_, _, ids)| ids)
}

pub fn slot_day(time_slots: &[TimeSlot], id: &TimeSlotId) -> Option<Day> {
    time_slots.iter().find(|t| &t.id == id).map(|t| t.day)
}

pub fn slot_kind(time_slots: &[TimeSlot], id: &TimeSlotId) -> Option<SlotKind> {
    time_slots.iter().find(|t| &t.id == id).map(|t| t.kind())
}
