use chrono::Weekday;
use dialoguer::{Confirm, Input};
use strsim::jaro_winkler;

use crate::error::{PlannerError, Result};
use crate::models::weekday_name;

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Minimum Jaro-Winkler score for a "did you mean" suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Resolve a weekday name ("Monday", "mon", "FRIDAY").
///
/// Unknown input is rejected; if it looks like a typo of a weekday the error
/// names the closest match.
pub fn resolve_weekday(input: &str) -> Result<Weekday> {
    let input = input.trim();
    if let Ok(day) = input.parse::<Weekday>() {
        return Ok(day);
    }

    let lowered = input.to_lowercase();
    let best = WEEKDAYS
        .iter()
        .map(|&d| (d, jaro_winkler(&weekday_name(d).to_lowercase(), &lowered)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

    let message = match best {
        Some((day, _)) => format!(
            "Unknown day '{}'. Did you mean '{}'?",
            input,
            weekday_name(day)
        ),
        None => format!("Unknown day '{}'", input),
    };
    Err(PlannerError::InvalidInput(message))
}

/// Ask for a day label to look up. Empty input means "done".
pub fn prompt_day_label(default: &str) -> Result<Option<String>> {
    let input: String = Input::new()
        .with_prompt("Select a date (YYYY-MM-DD, empty to quit)")
        .default(default.to_string())
        .allow_empty(true)
        .interact_text()?;

    let input = input.trim();
    if input.is_empty() {
        Ok(None)
    } else {
        Ok(Some(input.to_string()))
    }
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_exact_and_abbreviated() {
        assert_eq!(resolve_weekday("Monday").unwrap(), Weekday::Mon);
        assert_eq!(resolve_weekday("sunday").unwrap(), Weekday::Sun);
        assert_eq!(resolve_weekday("Thu").unwrap(), Weekday::Thu);
        assert_eq!(resolve_weekday("  FRIDAY ").unwrap(), Weekday::Fri);
    }

    #[test]
    fn test_resolve_suggests_on_typo() {
        let err = resolve_weekday("Firday").unwrap_err();
        assert!(err.to_string().contains("Did you mean 'Friday'?"));
    }

    #[test]
    fn test_resolve_rejects_garbage() {
        let err = resolve_weekday("xyz").unwrap_err();
        assert!(matches!(err, PlannerError::InvalidInput(_)));
        assert!(!err.to_string().contains("Did you mean"));
    }
}
