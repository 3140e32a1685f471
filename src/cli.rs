use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::planner::{FailurePolicy, PlannerConfig};

/// ComboPlanner — assigns a drink, savory and sweet combo to each day of the week.
#[derive(Parser, Debug)]
#[command(name = "combo_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to a JSON menu file. The built-in menu is used when omitted.
    #[arg(short, long, global = true)]
    pub menu: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(flatten)]
    pub planner: PlannerArgs,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a seven-day schedule.
    Generate {
        #[command(flatten)]
        labels: LabelArgs,

        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Write the output to a file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the menu.
    Menu {
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// List every combo that satisfies the static constraints.
    Candidates,

    /// Generate a dated schedule and browse it day by day.
    Browse {
        /// First date of the schedule (defaults to today).
        #[arg(long)]
        from: Option<NaiveDate>,
    },

    /// Generate a schedule and print the combo for one day label.
    Lookup {
        /// Exact day label, e.g. "Tuesday" or "2024-05-02".
        label: String,

        #[command(flatten)]
        labels: LabelArgs,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Generate {
            labels: LabelArgs::default(),
            format: OutputFormat::Table,
            output: None,
        }
    }
}

/// How the seven days are labeled.
#[derive(Args, Debug, Clone)]
pub struct LabelArgs {
    /// Weekday the schedule starts on.
    #[arg(long, default_value = "Monday", conflicts_with = "dates")]
    pub start_day: String,

    /// Label days with consecutive dates instead of weekday names.
    #[arg(long)]
    pub dates: bool,

    /// First date when labeling with dates (defaults to today).
    #[arg(long, requires = "dates")]
    pub from: Option<NaiveDate>,
}

impl Default for LabelArgs {
    fn default() -> Self {
        Self {
            start_day: "Monday".to_string(),
            dates: false,
            from: None,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyArg {
    /// Leave unfillable days empty.
    Degrade,
    /// Regenerate the whole schedule when a day cannot be filled.
    Retry,
}

impl From<PolicyArg> for FailurePolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Degrade => FailurePolicy::Degrade,
            PolicyArg::Retry => FailurePolicy::Retry,
        }
    }
}

/// Planner settings shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct PlannerArgs {
    /// Random seed for reproducible schedules.
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Start from the desktop preset (retry policy, neighbor tolerance 0.1).
    #[arg(long, global = true)]
    pub desktop: bool,

    /// Failure policy when a day cannot be filled.
    #[arg(long, value_enum, global = true)]
    pub policy: Option<PolicyArg>,

    /// Lower bound of the combo calorie band (inclusive).
    #[arg(long, global = true)]
    pub min_calories: Option<i32>,

    /// Upper bound of the combo calorie band (inclusive).
    #[arg(long, global = true)]
    pub max_calories: Option<i32>,

    /// Random draws per day under the retry policy.
    #[arg(long, global = true)]
    pub slot_attempts: Option<usize>,

    /// Whole-schedule attempts under the retry policy.
    #[arg(long, global = true)]
    pub schedule_attempts: Option<usize>,

    /// Max distance between consecutive days' average popularity.
    #[arg(long, global = true)]
    pub neighbor_tolerance: Option<f64>,
}

impl PlannerArgs {
    /// Overlay the given flags on the default (or desktop) config.
    pub fn to_config(&self) -> PlannerConfig {
        let mut config = if self.desktop {
            PlannerConfig::desktop()
        } else {
            PlannerConfig::default()
        };

        if let Some(policy) = self.policy {
            config.policy = policy.into();
        }
        if let Some(min) = self.min_calories {
            config.min_calories = min;
        }
        if let Some(max) = self.max_calories {
            config.max_calories = max;
        }
        if let Some(n) = self.slot_attempts {
            config.slot_attempts = n;
        }
        if let Some(n) = self.schedule_attempts {
            config.schedule_attempts = n;
        }
        if self.neighbor_tolerance.is_some() {
            config.neighbor_tolerance = self.neighbor_tolerance;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_generate() {
        let cli = Cli::parse_from(["combo_planner"]);
        assert!(cli.command.is_none());
        assert!(matches!(Command::default(), Command::Generate { .. }));
        assert_eq!(cli.planner.to_config().policy, FailurePolicy::Degrade);
    }

    #[test]
    fn test_flags_overlay_config() {
        let cli = Cli::parse_from([
            "combo_planner",
            "generate",
            "--start-day",
            "Friday",
            "--policy",
            "retry",
            "--max-calories",
            "750",
            "--seed",
            "9",
        ]);
        let config = cli.planner.to_config();
        assert_eq!(config.policy, FailurePolicy::Retry);
        assert_eq!(config.max_calories, 750);
        assert_eq!(config.min_calories, 500);
        assert_eq!(cli.planner.seed, Some(9));

        match cli.command {
            Some(Command::Generate { labels, .. }) => assert_eq!(labels.start_day, "Friday"),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_desktop_preset() {
        let cli = Cli::parse_from(["combo_planner", "--desktop", "browse"]);
        let config = cli.planner.to_config();
        assert_eq!(config.policy, FailurePolicy::Retry);
        assert_eq!(config.neighbor_tolerance, Some(0.1));
    }

    #[test]
    fn test_start_day_conflicts_with_dates() {
        let result = Cli::try_parse_from([
            "combo_planner",
            "generate",
            "--dates",
            "--start-day",
            "Friday",
        ]);
        assert!(result.is_err());

        // the default start day alone does not trip the conflict
        let cli = Cli::parse_from(["combo_planner", "generate", "--dates"]);
        assert!(matches!(cli.command, Some(Command::Generate { .. })));
    }

    #[test]
    fn test_lookup_takes_positional_label() {
        let cli = Cli::parse_from([
            "combo_planner",
            "lookup",
            "2024-05-02",
            "--dates",
            "--from",
            "2024-05-01",
        ]);
        match cli.command {
            Some(Command::Lookup { label, labels }) => {
                assert_eq!(label, "2024-05-02");
                assert!(labels.dates);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_dates_with_from() {
        let cli = Cli::parse_from([
            "combo_planner",
            "generate",
            "--dates",
            "--from",
            "2024-05-01",
        ]);
        match cli.command {
            Some(Command::Generate { labels, .. }) => {
                assert!(labels.dates);
                assert_eq!(labels.from, NaiveDate::from_ymd_opt(2024, 5, 1));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
