use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, warn};

use crate::error::{PlannerError, Result};
use crate::models::{Combo, DayLabeling, Schedule, ScheduleSlot};
use crate::planner::config::PlannerConfig;

/// Would placing `combo` next make three identical days in a row?
fn completes_streak(slots: &[ScheduleSlot], combo: &Combo) -> bool {
    match slots {
        [.., a, b] => a.combo.as_ref() == Some(combo) && b.combo.as_ref() == Some(combo),
        _ => false,
    }
}

/// Average popularity of the most recent populated slot.
fn last_popularity(slots: &[ScheduleSlot]) -> Option<f64> {
    slots.iter().rev().find_map(|s| s.popularity())
}

/// Can `combo` go into the next slot?
fn admissible(
    combo: &Combo,
    slots: &[ScheduleSlot],
    used: &HashSet<&Combo>,
    config: &PlannerConfig,
) -> bool {
    !used.contains(combo)
        && !completes_streak(slots, combo)
        && config.neighbor_ok(last_popularity(slots), combo.avg_popularity)
}

/// Assign combos to days with the default settings (degrade policy).
pub fn assign<R: Rng + ?Sized>(
    candidates: &[Combo],
    labeling: &DayLabeling,
    rng: &mut R,
) -> Schedule {
    assign_greedy(candidates, labeling, &PlannerConfig::default(), rng)
}

/// Greedy single pass over a shuffled candidate list.
///
/// Each day takes the first admissible candidate. A day with none left gets a
/// sentinel slot and the pass continues; this never fails, and an empty
/// candidate list yields seven sentinels.
pub fn assign_greedy<R: Rng + ?Sized>(
    candidates: &[Combo],
    labeling: &DayLabeling,
    config: &PlannerConfig,
    rng: &mut R,
) -> Schedule {
    let mut order: Vec<&Combo> = candidates.iter().collect();
    order.shuffle(rng);

    let labels = labeling.labels();
    let mut slots: Vec<ScheduleSlot> = Vec::with_capacity(labels.len());
    let mut used: HashSet<&Combo> = HashSet::new();

    for day in labels {
        let pick = order
            .iter()
            .copied()
            .find(|c| admissible(c, &slots, &used, config));

        match pick {
            Some(combo) => {
                used.insert(combo);
                slots.push(ScheduleSlot::filled(day, combo.clone()));
            }
            None => {
                warn!(day = %day, "no admissible combo left, leaving day empty");
                slots.push(ScheduleSlot::empty(day));
            }
        }
    }

    Schedule::from_slots(slots)
}

/// One rejection-sampling pass. `None` as soon as a day exhausts its draws.
fn sample_schedule<R: Rng + ?Sized>(
    candidates: &[Combo],
    labels: &[String],
    config: &PlannerConfig,
    rng: &mut R,
) -> Option<Vec<ScheduleSlot>> {
    let mut slots: Vec<ScheduleSlot> = Vec::with_capacity(labels.len());
    let mut used: HashSet<&Combo> = HashSet::new();

    for day in labels {
        let mut chosen = None;
        for _ in 0..config.slot_attempts {
            let candidate = candidates.choose(rng)?;
            if admissible(candidate, &slots, &used, config) {
                chosen = Some(candidate);
                break;
            }
        }

        let Some(combo) = chosen else {
            debug!(day = %day, attempts = config.slot_attempts, "day exhausted its draws");
            return None;
        };
        used.insert(combo);
        slots.push(ScheduleSlot::filled(day.clone(), combo.clone()));
    }

    Some(slots)
}

/// Rejection sampling with whole-schedule retry.
///
/// Every day draws random candidates up to `slot_attempts` times. If any day
/// comes up empty the partial schedule is thrown away and generation starts
/// over, at most `schedule_attempts` times. A finished schedule is checked
/// once more for three-in-a-row before it is returned.
pub fn assign_with_retry<R: Rng + ?Sized>(
    candidates: &[Combo],
    labeling: &DayLabeling,
    config: &PlannerConfig,
    rng: &mut R,
) -> Result<Schedule> {
    if candidates.is_empty() {
        return Err(PlannerError::NoCandidates);
    }

    let labels = labeling.labels();

    for attempt in 1..=config.schedule_attempts {
        let Some(slots) = sample_schedule(candidates, &labels, config, rng) else {
            continue;
        };

        let schedule = Schedule::from_slots(slots);
        if schedule.has_three_in_a_row() {
            debug!(attempt, "discarding schedule with a three-day streak");
            continue;
        }

        debug!(attempt, "complete schedule found");
        return Ok(schedule);
    }

    warn!(
        attempts = config.schedule_attempts,
        candidates = candidates.len(),
        "retry policy exhausted"
    );
    Err(PlannerError::Infeasible {
        attempts: config.schedule_attempts,
    })
}
