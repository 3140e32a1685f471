use std::io::Write;

use crate::error::Result;
use crate::models::Schedule;
use crate::planner::constants::UNAVAILABLE;

/// Serialize a schedule in its wire shape (array of `{day, combo, popularity, calories}`).
pub fn schedule_to_json(schedule: &Schedule) -> Result<String> {
    Ok(serde_json::to_string_pretty(schedule)?)
}

/// Write a schedule as CSV, one row per day.
pub fn write_schedule_csv<W: Write>(schedule: &Schedule, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(["day", "drink", "savory", "sweet", "calories", "popularity"])?;

    for slot in schedule.slots() {
        let [drink, savory, sweet] = slot.names();
        wtr.write_record([
            slot.day.clone(),
            drink.to_string(),
            savory.to_string(),
            sweet.to_string(),
            slot.calories()
                .map(|c| c.to_string())
                .unwrap_or_else(|| UNAVAILABLE.to_string()),
            slot.popularity()
                .map(|p| format!("{:.2}", p))
                .unwrap_or_else(|| UNAVAILABLE.to_string()),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_menu;
    use crate::models::DayLabeling;
    use crate::planner::{generate_schedule, planner_rng, PlannerConfig};

    #[test]
    fn test_csv_has_header_and_seven_rows() {
        let schedule = generate_schedule(
            &default_menu(),
            &DayLabeling::default(),
            &PlannerConfig::default(),
            &mut planner_rng(Some(5)),
        )
        .unwrap();

        let mut buf = Vec::new();
        write_schedule_csv(&schedule, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "day,drink,savory,sweet,calories,popularity");
        assert!(lines[1].starts_with("Monday,"));
    }

    #[test]
    fn test_json_is_array_of_seven() {
        let schedule = generate_schedule(
            &default_menu(),
            &DayLabeling::default(),
            &PlannerConfig::default(),
            &mut planner_rng(Some(5)),
        )
        .unwrap();

        let json = schedule_to_json(&schedule).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 7);
    }
}
