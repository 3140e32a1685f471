use chrono::{Duration, NaiveDate, Weekday};
use serde::{Serialize, Serializer};

use crate::models::Combo;
use crate::planner::constants::{DAYS_PER_SCHEDULE, UNAVAILABLE};

/// Human-readable weekday name.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// How the seven slots of a schedule are labeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayLabeling {
    /// Monday..Sunday cycle rotated to start at `start`.
    Weekdays { start: Weekday },

    /// Consecutive `YYYY-MM-DD` dates beginning at `from`.
    Dates { from: NaiveDate },
}

impl Default for DayLabeling {
    fn default() -> Self {
        DayLabeling::Weekdays { start: Weekday::Mon }
    }
}

impl DayLabeling {
    /// The seven labels in rotation order.
    pub fn labels(&self) -> Vec<String> {
        match *self {
            DayLabeling::Weekdays { start } => {
                let mut day = start;
                let mut labels = Vec::with_capacity(DAYS_PER_SCHEDULE);
                for _ in 0..DAYS_PER_SCHEDULE {
                    labels.push(weekday_name(day).to_string());
                    day = day.succ();
                }
                labels
            }
            DayLabeling::Dates { from } => (0..DAYS_PER_SCHEDULE as i64)
                .map(|offset| {
                    (from + Duration::days(offset))
                        .format("%Y-%m-%d")
                        .to_string()
                })
                .collect(),
        }
    }
}

/// One day of a schedule. `combo == None` is the sentinel for
/// "no valid combo found".
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleSlot {
    pub day: String,
    pub combo: Option<Combo>,
}

impl ScheduleSlot {
    pub fn filled(day: String, combo: Combo) -> Self {
        Self {
            day,
            combo: Some(combo),
        }
    }

    pub fn empty(day: String) -> Self {
        Self { day, combo: None }
    }

    pub fn is_empty(&self) -> bool {
        self.combo.is_none()
    }

    /// Item names, or the unavailable marker in every position.
    pub fn names(&self) -> [&str; 3] {
        match &self.combo {
            Some(combo) => combo.names(),
            None => [UNAVAILABLE; 3],
        }
    }

    pub fn calories(&self) -> Option<i32> {
        self.combo.as_ref().map(|c| c.total_calories)
    }

    pub fn popularity(&self) -> Option<f64> {
        self.combo.as_ref().map(|c| c.avg_popularity)
    }
}

/// A number on the wire, or the literal `"N/A"`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum WireValue<T> {
    Value(T),
    Unavailable(&'static str),
}

impl<T> From<Option<T>> for WireValue<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => WireValue::Value(v),
            None => WireValue::Unavailable(UNAVAILABLE),
        }
    }
}

/// JSON shape of a slot: `{day, combo, popularity, calories}`.
#[derive(Debug, Serialize)]
pub struct WireSlot<'a> {
    pub day: &'a str,
    pub combo: [&'a str; 3],
    pub popularity: WireValue<f64>,
    pub calories: WireValue<i32>,
}

impl<'a> From<&'a ScheduleSlot> for WireSlot<'a> {
    fn from(slot: &'a ScheduleSlot) -> Self {
        Self {
            day: &slot.day,
            combo: slot.names(),
            popularity: slot.popularity().into(),
            calories: slot.calories().into(),
        }
    }
}

impl Serialize for ScheduleSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        WireSlot::from(self).serialize(serializer)
    }
}

/// Seven slots in rotation order. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Schedule {
    slots: Vec<ScheduleSlot>,
}

impl Schedule {
    pub(crate) fn from_slots(slots: Vec<ScheduleSlot>) -> Self {
        debug_assert_eq!(slots.len(), DAYS_PER_SCHEDULE);
        Self { slots }
    }

    pub fn slots(&self) -> &[ScheduleSlot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of slots holding a combo.
    pub fn populated_count(&self) -> usize {
        self.slots.iter().filter(|s| !s.is_empty()).count()
    }

    /// Exact label lookup.
    pub fn find_slot(&self, day: &str) -> Option<&ScheduleSlot> {
        self.slots.iter().find(|s| s.day == day)
    }

    /// True if any non-empty combo appears in two slots.
    pub fn has_repeats(&self) -> bool {
        let combos: Vec<&Combo> = self.slots.iter().filter_map(|s| s.combo.as_ref()).collect();
        combos
            .iter()
            .enumerate()
            .any(|(i, a)| combos[i + 1..].iter().any(|b| a == b))
    }

    /// True if three consecutive slots hold the same non-empty combo.
    pub fn has_three_in_a_row(&self) -> bool {
        self.slots.windows(3).any(|w| match &w[0].combo {
            Some(first) => {
                w[1].combo.as_ref() == Some(first) && w[2].combo.as_ref() == Some(first)
            }
            None => false,
        })
    }
}

/// Find the slot labeled `day`, if any.
pub fn find_slot<'a>(schedule: &'a Schedule, day: &str) -> Option<&'a ScheduleSlot> {
    schedule.find_slot(day)
}
