use tracing::info;

use crate::cli::PlannerArgs;
use crate::error::{PlannerError, Result};

use crate::models::{DayLabeling, MenuItem};
use crate::planner::{FailurePolicy, PlannerConfig, DAYS_PER_SCHEDULE};
use crate::survey::evaluation::{evaluate_seed, summarize, PolicySummary, SeedResult};

/// Configuration for a survey run.
#[derive(Debug, Clone)]
pub struct SurveyConfig {
    pub first_seed: u64,
    pub runs: usize,
    pub labeling: DayLabeling,
    /// Settings shared by both policies; `policy` is overridden per pass.
    pub planner: PlannerConfig,
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            first_seed: 1,
            runs: 200,
            labeling: DayLabeling::default(),
            planner: PlannerConfig::default(),
        }
    }
}

impl SurveyConfig {
    /// Survey settings from shared planner flags. `--seed` and `--policy` are
    /// refused: the survey walks its own seed range under both policies.
    pub fn from_planner_args(
        args: &PlannerArgs,
        first_seed: u64,
        runs: usize,
        labeling: DayLabeling,
    ) -> Result<Self> {
        if args.seed.is_some() {
            return Err(PlannerError::InvalidInput(
                "--seed has no effect on a survey; use --first-seed".to_string(),
            ));
        }
        if args.policy.is_some() {
            return Err(PlannerError::InvalidInput(
                "--policy has no effect on a survey; both policies are run".to_string(),
            ));
        }

        let planner = args.to_config();
        planner.validate()?;

        Ok(Self {
            first_seed,
            runs,
            labeling,
            planner,
        })
    }
}

/// Per-seed results and per-policy summaries.
pub struct SurveyResults {
    pub results: Vec<SeedResult>,
    pub summaries: Vec<PolicySummary>,
}

/// Run the pipeline over a range of seeds under both failure policies.
///
/// Stops at the first error that is not a planning outcome.
pub fn run_survey(config: &SurveyConfig, menu: &[MenuItem]) -> Result<SurveyResults> {
    let policies = [FailurePolicy::Degrade, FailurePolicy::Retry];
    let mut results = Vec::with_capacity(config.runs * policies.len());

    for policy in policies {
        let planner = PlannerConfig {
            policy,
            ..config.planner.clone()
        };

        for offset in 0..config.runs as u64 {
            let seed = config.first_seed.wrapping_add(offset);
            results.push(evaluate_seed(menu, &config.labeling, &planner, seed)?);
        }

        info!(policy = policy.as_str(), runs = config.runs, "survey pass finished");
    }

    let summaries = policies
        .iter()
        .map(|&p| summarize(p, &results, DAYS_PER_SCHEDULE))
        .collect();

    Ok(SurveyResults { results, summaries })
}
