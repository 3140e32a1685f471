pub mod assign;
pub mod config;
pub mod constants;
pub mod enumerate;
pub mod generate;
pub mod normalize;

pub use assign::{assign, assign_greedy, assign_with_retry};
pub use config::{FailurePolicy, PlannerConfig};
pub use constants::*;
pub use enumerate::{enumerate, enumerate_with};
pub use generate::{generate_schedule, planner_rng};
pub use normalize::{bucket, is_close, mean_normalized, normalize, round2};
