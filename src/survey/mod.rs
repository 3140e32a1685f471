pub mod evaluation;
pub mod output;
pub mod run;

pub use evaluation::{evaluate_seed, summarize, PolicySummary, SeedOutcome, SeedResult};
pub use output::{print_summary, write_csv, write_summary_json};
pub use run::{run_survey, SurveyConfig, SurveyResults};
