use std::fs::File;
use std::path::Path;

use chrono::{Local, NaiveDate};
use clap::Parser;

use combo_planner_rs::catalog::{default_menu, load_menu};
use combo_planner_rs::cli::{Cli, Command, LabelArgs, OutputFormat};
use combo_planner_rs::error::{PlannerError, Result};
use combo_planner_rs::interface::{
    display_candidates, display_menu, display_schedule, display_slot_items, prompt_day_label,
    prompt_yes_no, resolve_weekday, schedule_to_json, write_schedule_csv,
};
use combo_planner_rs::logging::init_logging;
use combo_planner_rs::models::{find_slot, DayLabeling, MenuItem, Schedule};
use combo_planner_rs::planner::{enumerate_with, generate_schedule, planner_rng, PlannerConfig};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let menu = match &cli.menu {
        Some(path) => load_menu(path)?,
        None => default_menu(),
    };
    let config = cli.planner.to_config();
    config.validate()?;

    let command = cli.command.unwrap_or_default();
    let seed = cli.planner.seed;

    match command {
        Command::Generate {
            labels,
            format,
            output,
        } => cmd_generate(&menu, &config, seed, &labels, format, output.as_deref()),
        Command::Menu { format } => cmd_menu(&menu, format),
        Command::Candidates => cmd_candidates(&menu, &config),
        Command::Browse { from } => cmd_browse(&menu, &config, seed, from),
        Command::Lookup { label, labels } => cmd_lookup(&menu, &config, seed, &label, &labels),
    }
}

/// Turn label flags into a labeling strategy.
fn labeling_from(labels: &LabelArgs) -> Result<DayLabeling> {
    if labels.dates {
        let from = labels.from.unwrap_or_else(|| Local::now().date_naive());
        Ok(DayLabeling::Dates { from })
    } else {
        let start = resolve_weekday(&labels.start_day)?;
        Ok(DayLabeling::Weekdays { start })
    }
}

fn build_schedule(
    menu: &[MenuItem],
    config: &PlannerConfig,
    seed: Option<u64>,
    labeling: &DayLabeling,
) -> Result<Schedule> {
    let mut rng = planner_rng(seed);
    generate_schedule(menu, labeling, config, &mut rng)
}

/// Generate a schedule and print or save it.
fn cmd_generate(
    menu: &[MenuItem],
    config: &PlannerConfig,
    seed: Option<u64>,
    labels: &LabelArgs,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<()> {
    let labeling = labeling_from(labels)?;
    let schedule = build_schedule(menu, config, seed, &labeling)?;

    match (format, output) {
        (OutputFormat::Table, None) => display_schedule(&schedule),
        (OutputFormat::Table, Some(_)) => {
            return Err(PlannerError::InvalidInput(
                "table output cannot be written to a file; use --format json or csv".to_string(),
            ));
        }
        (OutputFormat::Json, None) => println!("{}", schedule_to_json(&schedule)?),
        (OutputFormat::Json, Some(path)) => {
            std::fs::write(path, schedule_to_json(&schedule)?)?;
            println!("Schedule written to {}", path.display());
        }
        (OutputFormat::Csv, None) => write_schedule_csv(&schedule, std::io::stdout().lock())?,
        (OutputFormat::Csv, Some(path)) => {
            write_schedule_csv(&schedule, File::create(path)?)?;
            println!("Schedule written to {}", path.display());
        }
    }

    Ok(())
}

/// Print the menu.
fn cmd_menu(menu: &[MenuItem], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(menu)?),
        OutputFormat::Table => display_menu(menu),
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout().lock());
            wtr.write_record([
                "item_name",
                "category",
                "calories",
                "taste_profile",
                "popularity_score",
            ])?;
            for item in menu {
                wtr.write_record([
                    item.name.clone(),
                    item.category.to_string(),
                    item.calories.to_string(),
                    item.taste_profile.to_string(),
                    item.popularity.to_string(),
                ])?;
            }
            wtr.flush()?;
        }
    }
    Ok(())
}

/// List all valid combos.
fn cmd_candidates(menu: &[MenuItem], config: &PlannerConfig) -> Result<()> {
    let combos = enumerate_with(menu, config);
    display_candidates(&combos);
    Ok(())
}

/// Generate a dated schedule and look up days interactively.
fn cmd_browse(
    menu: &[MenuItem],
    config: &PlannerConfig,
    seed: Option<u64>,
    from: Option<NaiveDate>,
) -> Result<()> {
    let from = from.unwrap_or_else(|| Local::now().date_naive());
    let labeling = DayLabeling::Dates { from };
    let schedule = build_schedule(menu, config, seed, &labeling)?;

    let first = from.format("%Y-%m-%d").to_string();
    println!(
        "Schedule covers {} to {}",
        first,
        schedule.slots().last().map(|s| s.day.as_str()).unwrap_or("?")
    );

    loop {
        let Some(label) = prompt_day_label(&first)? else {
            break;
        };

        display_slot_items(find_slot(&schedule, &label));

        if !prompt_yes_no("Look up another date?", true)? {
            break;
        }
    }

    Ok(())
}

/// Print the combo for a single label.
fn cmd_lookup(
    menu: &[MenuItem],
    config: &PlannerConfig,
    seed: Option<u64>,
    label: &str,
    labels: &LabelArgs,
) -> Result<()> {
    let labeling = labeling_from(labels)?;
    let schedule = build_schedule(menu, config, seed, &labeling)?;
    display_slot_items(find_slot(&schedule, label));
    Ok(())
}
