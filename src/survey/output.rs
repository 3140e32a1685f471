use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::planner::{round2, DAYS_PER_SCHEDULE};
use crate::survey::evaluation::{PolicySummary, SeedOutcome, SeedResult};

/// Write every seed's result to a CSV file.
pub fn write_csv(results: &[SeedResult], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "policy",
        "seed",
        "outcome",
        "populated",
        "fill_rate",
        "avg_popularity",
        "avg_calories",
    ])?;

    for result in results {
        let (outcome, populated, pop, cal) = match result.outcome {
            SeedOutcome::Scheduled {
                populated,
                avg_popularity,
                avg_calories,
            } => (
                "scheduled",
                populated.to_string(),
                format!("{:.2}", avg_popularity),
                format!("{:.1}", avg_calories),
            ),
            SeedOutcome::Infeasible => ("infeasible", "0".into(), String::new(), String::new()),
            SeedOutcome::NoCandidates => {
                ("no_candidates", "0".into(), String::new(), String::new())
            }
        };

        wtr.write_record([
            result.policy.as_str().to_string(),
            result.seed.to_string(),
            outcome.to_string(),
            populated,
            format!("{:.3}", result.fill_rate(DAYS_PER_SCHEDULE)),
            pop,
            cal,
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the per-policy summaries to a JSON file.
pub fn write_summary_json(summaries: &[PolicySummary], path: &Path) -> Result<()> {
    let json = serde_json::json!(summaries
        .iter()
        .map(|s| {
            serde_json::json!({
                "policy": s.policy.as_str(),
                "runs": s.runs,
                "complete": s.complete,
                "infeasible": s.infeasible,
                "no_candidates": s.no_candidates,
                "mean_fill_rate": (s.mean_fill_rate * 1000.0).round() / 1000.0,
                "mean_popularity": round2(s.mean_popularity),
                "mean_calories": (s.mean_calories * 10.0).round() / 10.0,
            })
        })
        .collect::<Vec<_>>());

    let mut file = File::create(path)?;
    file.write_all(serde_json::to_string_pretty(&json)?.as_bytes())?;
    Ok(())
}

/// Print the per-policy summaries to stdout.
pub fn print_summary(summaries: &[PolicySummary]) {
    println!("\n=== Survey Summary ===\n");

    for s in summaries {
        println!(
            "{:<8} runs={} complete={} infeasible={} no_candidates={}",
            s.policy.as_str(),
            s.runs,
            s.complete,
            s.infeasible,
            s.no_candidates
        );
        println!(
            "         fill={:.1}% pop={:.2} cal={:.1}",
            s.mean_fill_rate * 100.0,
            s.mean_popularity,
            s.mean_calories
        );
    }

    println!();
}
