use crate::types::TimeSlotId;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Day {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
}

impl Day {
    pub const ALL: [Day; 5] = [Day::Mon, Day::Tue, Day::Wed, Day::Thu, Day::Fri];
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Day::Mon => "MON",
            Day::Tue => "TUE",
            Day::Wed => "WED",
            Day::Thu => "THU",
            Day::Fri => "FRI",
        };
        write!(f, "{}", s)
    }
}

/// Coarse classification of a period, used to enforce lab contiguity within
/// a single half-day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SlotKind {
    Morning,
    Afternoon,
    Lunch,
    Recess,
}

/// Periods 1-4 are morning teaching periods, 5-7 afternoon. Lunch and
/// recess entries are recorded with period numbers outside 1-7 and never
/// reach this classifier via [`TimeSlot::is_teaching`].
pub fn classify_period(period: u8) -> SlotKind {
    match period {
        1..=4 => SlotKind::Morning,
        5..=7 => SlotKind::Afternoon,
        _ => SlotKind::Lunch,
    }
}

pub fn is_teaching_period(period: u8) -> bool {
    matches!(classify_period(period), SlotKind::Morning | SlotKind::Afternoon)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub id: TimeSlotId,
    pub day: Day,
    pub period: u8,
    #[serde(default)]
    pub is_locked: bool,
}

impl TimeSlot {
    pub fn kind(&self) -> SlotKind {
        classify_period(self.period)
    }

    pub fn is_teaching(&self) -> bool {
        is_teaching_period(self.period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn morning_periods_classify_correctly() {
        assert_eq!(classify_period(1), SlotKind::Morning);
        assert_eq!(classify_period(3), SlotKind::Morning);
    }

    #[test]
    fn afternoon_periods_classify_correctly() {
        assert_eq!(classify_period(5), SlotKind::Afternoon);
        assert_eq!(classify_period(7), SlotKind::Afternoon);
    }

    #[test]
    fn period_four_is_a_morning_teaching_period() {
        assert!(is_teaching_period(4));
        assert_eq!(classify_period(4), SlotKind::Morning);
    }

    #[test]
    fn period_outside_the_teaching_grid_is_not_teaching() {
        assert!(!is_teaching_period(0));
        assert!(!is_teaching_period(8));
    }
}
