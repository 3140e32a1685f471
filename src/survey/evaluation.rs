use crate::error::{PlannerError, Result};
use crate::models::{DayLabeling, MenuItem};
use crate::planner::{generate_schedule, planner_rng, FailurePolicy, PlannerConfig};

/// What happened for one seed.
#[derive(Debug, Clone, PartialEq)]
pub enum SeedOutcome {
    /// A schedule was produced (possibly with sentinel days).
    Scheduled {
        populated: usize,
        avg_popularity: f64,
        avg_calories: f64,
    },
    /// The retry policy gave up.
    Infeasible,
    /// The catalog has no valid combos at all.
    NoCandidates,
}

/// Result of one pipeline run.
#[derive(Debug, Clone)]
pub struct SeedResult {
    pub policy: FailurePolicy,
    pub seed: u64,
    pub outcome: SeedOutcome,
}

impl SeedResult {
    /// Populated days / 7; zero for failed runs.
    pub fn fill_rate(&self, days: usize) -> f64 {
        match self.outcome {
            SeedOutcome::Scheduled { populated, .. } if days > 0 => populated as f64 / days as f64,
            _ => 0.0,
        }
    }
}

/// Aggregate over every seed for one policy.
#[derive(Debug, Clone)]
pub struct PolicySummary {
    pub policy: FailurePolicy,
    pub runs: usize,
    /// Runs where every day was filled.
    pub complete: usize,
    pub infeasible: usize,
    pub no_candidates: usize,
    pub mean_fill_rate: f64,
    /// Means over populated slots of successful runs.
    pub mean_popularity: f64,
    pub mean_calories: f64,
}

/// Run the full pipeline once.
///
/// Infeasibility and an empty enumeration are outcomes; any other error
/// (an invalid config or catalog) is returned.
pub fn evaluate_seed(
    menu: &[MenuItem],
    labeling: &DayLabeling,
    config: &PlannerConfig,
    seed: u64,
) -> Result<SeedResult> {
    let mut rng = planner_rng(Some(seed));
    let outcome = match generate_schedule(menu, labeling, config, &mut rng) {
        Ok(schedule) => {
            let combos: Vec<_> = schedule
                .slots()
                .iter()
                .filter_map(|s| s.combo.as_ref())
                .collect();
            let n = combos.len().max(1) as f64;
            SeedOutcome::Scheduled {
                populated: combos.len(),
                avg_popularity: combos.iter().map(|c| c.avg_popularity).sum::<f64>() / n,
                avg_calories: combos.iter().map(|c| c.total_calories as f64).sum::<f64>() / n,
            }
        }
        Err(PlannerError::NoCandidates) => SeedOutcome::NoCandidates,
        Err(PlannerError::Infeasible { .. }) => SeedOutcome::Infeasible,
        Err(e) => return Err(e),
    };

    Ok(SeedResult {
        policy: config.policy,
        seed,
        outcome,
    })
}

/// Summarize the results of one policy.
pub fn summarize(policy: FailurePolicy, results: &[SeedResult], days: usize) -> PolicySummary {
    let mine: Vec<&SeedResult> = results.iter().filter(|r| r.policy == policy).collect();
    let runs = mine.len();

    let mut complete = 0;
    let mut infeasible = 0;
    let mut no_candidates = 0;
    let mut pop_sum = 0.0;
    let mut cal_sum = 0.0;
    let mut slot_count = 0usize;

    for r in &mine {
        match r.outcome {
            SeedOutcome::Scheduled {
                populated,
                avg_popularity,
                avg_calories,
            } => {
                if populated == days {
                    complete += 1;
                }
                pop_sum += avg_popularity * populated as f64;
                cal_sum += avg_calories * populated as f64;
                slot_count += populated;
            }
            SeedOutcome::Infeasible => infeasible += 1,
            SeedOutcome::NoCandidates => no_candidates += 1,
        }
    }

    let mean = |total: f64, count: usize| if count > 0 { total / count as f64 } else { 0.0 };

    PolicySummary {
        policy,
        runs,
        complete,
        infeasible,
        no_candidates,
        mean_fill_rate: mean(mine.iter().map(|r| r.fill_rate(days)).sum(), runs),
        mean_popularity: mean(pop_sum, slot_count),
        mean_calories: mean(cal_sum, slot_count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_menu;
    use crate::models::{Category, TasteProfile};
    use crate::planner::DAYS_PER_SCHEDULE;

    #[test]
    fn test_evaluate_seed_default_menu() {
        let result = evaluate_seed(
            &default_menu(),
            &DayLabeling::default(),
            &PlannerConfig::default(),
            1,
        )
        .unwrap();
        assert_eq!(result.fill_rate(DAYS_PER_SCHEDULE), 1.0);
        match result.outcome {
            SeedOutcome::Scheduled { avg_calories, .. } => {
                assert!((500.0..=800.0).contains(&avg_calories));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_evaluate_seed_empty_menu() {
        let result = evaluate_seed(&[], &DayLabeling::default(), &PlannerConfig::default(), 1).unwrap();
        assert_eq!(result.outcome, SeedOutcome::NoCandidates);
        assert_eq!(result.fill_rate(DAYS_PER_SCHEDULE), 0.0);
    }

    #[test]
    fn test_evaluate_seed_infeasible() {
        // one valid combo cannot fill seven days without repeats
        let menu = vec![
            MenuItem::new("Masala Chaas", Category::Drink, 100, TasteProfile::Spicy, 0.8),
            MenuItem::new("Rajma Chawal", Category::Main, 500, TasteProfile::Savory, 0.8),
            MenuItem::new("Iced Tea", Category::Drink, 120, TasteProfile::Sweet, 0.78),
        ];
        let config = PlannerConfig {
            policy: FailurePolicy::Retry,
            slot_attempts: 10,
            schedule_attempts: 2,
            ..Default::default()
        };
        let result = evaluate_seed(&menu, &DayLabeling::default(), &config, 3).unwrap();
        assert_eq!(result.outcome, SeedOutcome::Infeasible);
    }

    #[test]
    fn test_evaluate_seed_propagates_bad_config() {
        let config = PlannerConfig {
            min_calories: 900,
            max_calories: 500,
            ..Default::default()
        };
        let result = evaluate_seed(&default_menu(), &DayLabeling::default(), &config, 1);
        assert!(matches!(result, Err(PlannerError::InvalidInput(_))));
    }

    #[test]
    fn test_summarize_counts() {
        let results = vec![
            SeedResult {
                policy: FailurePolicy::Retry,
                seed: 1,
                outcome: SeedOutcome::Scheduled {
                    populated: 7,
                    avg_popularity: 0.8,
                    avg_calories: 700.0,
                },
            },
            SeedResult {
                policy: FailurePolicy::Retry,
                seed: 2,
                outcome: SeedOutcome::Infeasible,
            },
            SeedResult {
                policy: FailurePolicy::Degrade,
                seed: 1,
                outcome: SeedOutcome::NoCandidates,
            },
        ];

        let summary = summarize(FailurePolicy::Retry, &results, 7);
        assert_eq!(summary.runs, 2);
        assert_eq!(summary.complete, 1);
        assert_eq!(summary.infeasible, 1);
        assert_eq!(summary.no_candidates, 0);
        assert!((summary.mean_fill_rate - 0.5).abs() < 1e-9);
        assert!((summary.mean_calories - 700.0).abs() < 1e-9);
    }
}
