use std::collections::HashSet;

use crate::error::{PlannerError, Result};
use crate::models::MenuItem;

/// Reject catalogs the planner cannot trust.
///
/// Names must be unique (exact match), calories positive, popularity a
/// finite number in `[0, 1]`. Nothing is coerced or deduplicated.
pub fn validate_menu(items: &[MenuItem]) -> Result<()> {
    let mut seen: HashSet<&str> = HashSet::new();

    for item in items {
        if item.name.trim().is_empty() {
            return Err(PlannerError::InvalidCatalog(
                "item with an empty name".to_string(),
            ));
        }
        if !seen.insert(item.name.as_str()) {
            return Err(PlannerError::InvalidCatalog(format!(
                "duplicate item name '{}'",
                item.name
            )));
        }
        if item.calories <= 0 {
            return Err(PlannerError::InvalidCatalog(format!(
                "'{}' has non-positive calories ({})",
                item.name, item.calories
            )));
        }
        if !item.popularity.is_finite() || !(0.0..=1.0).contains(&item.popularity) {
            return Err(PlannerError::InvalidCatalog(format!(
                "'{}' has popularity {} outside [0, 1]",
                item.name, item.popularity
            )));
        }
    }

    Ok(())
}
