use std::path::PathBuf;

use clap::Parser;

use combo_planner_rs::catalog::{default_menu, load_menu};
use combo_planner_rs::cli::PlannerArgs;
use combo_planner_rs::error::Result;
use combo_planner_rs::interface::resolve_weekday;
use combo_planner_rs::logging::init_logging;
use combo_planner_rs::models::DayLabeling;
use combo_planner_rs::survey::{
    print_summary, run_survey, write_csv, write_summary_json, SurveyConfig,
};

#[derive(Parser, Debug)]
#[command(name = "survey")]
#[command(about = "Compare failure policies of the combo planner across many seeds")]
struct Args {
    /// Number of seeds per policy
    #[arg(long, default_value = "200")]
    runs: usize,

    /// First seed; seeds are consecutive from here
    #[arg(long, default_value = "1")]
    first_seed: u64,

    /// Weekday the schedules start on
    #[arg(long, default_value = "Monday")]
    start_day: String,

    /// Path to a JSON menu (built-in menu when omitted)
    #[arg(long)]
    menu: Option<PathBuf>,

    /// Output CSV file for per-seed results
    #[arg(long, default_value = "survey_results.csv")]
    csv: PathBuf,

    /// Output JSON file for per-policy summaries
    #[arg(long, default_value = "survey_summary.json")]
    json: PathBuf,

    /// Increase log verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Planner flags; --seed and --policy are rejected here
    #[command(flatten)]
    planner: PlannerArgs,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let menu = match &args.menu {
        Some(path) => load_menu(path)?,
        None => default_menu(),
    };

    let start = resolve_weekday(&args.start_day)?;
    let config = SurveyConfig::from_planner_args(
        &args.planner,
        args.first_seed,
        args.runs,
        DayLabeling::Weekdays { start },
    )?;

    println!("Loaded {} menu items", menu.len());
    println!("Surveying {} seeds per policy from seed {}", args.runs, args.first_seed);

    let survey = run_survey(&config, &menu)?;
    print_summary(&survey.summaries);

    if let Err(e) = write_csv(&survey.results, &args.csv) {
        eprintln!("Error writing CSV: {}", e);
    } else {
        println!("Wrote per-seed results to {:?}", args.csv);
    }

    if let Err(e) = write_summary_json(&survey.summaries, &args.json) {
        eprintln!("Error writing JSON: {}", e);
    } else {
        println!("Wrote summary to {:?}", args.json);
    }

    Ok(())
}
