use tracing::debug;

use crate::models::{Combo, MenuItem};
use crate::planner::config::PlannerConfig;
use crate::planner::normalize::{is_close, mean_normalized};

/// Check the calorie band and popularity closeness for a role-valid triple.
///
/// Returns the finished combo, or `None` if any static constraint fails.
fn build_combo(
    drink: &MenuItem,
    savory: &MenuItem,
    sweet: &MenuItem,
    config: &PlannerConfig,
) -> Option<Combo> {
    if drink.name == savory.name || drink.name == sweet.name || savory.name == sweet.name {
        return None;
    }

    let total_calories = drink.calories + savory.calories + sweet.calories;
    if !config.calories_in_band(total_calories) {
        return None;
    }

    // All three pairs, not just pairs against the drink
    if !(is_close(drink.popularity, savory.popularity)
        && is_close(drink.popularity, sweet.popularity)
        && is_close(savory.popularity, sweet.popularity))
    {
        return None;
    }

    let avg_popularity = mean_normalized(&[drink.popularity, savory.popularity, sweet.popularity]);

    Some(Combo::new(
        drink.clone(),
        savory.clone(),
        sweet.clone(),
        total_calories,
        avg_popularity,
    ))
}

/// Enumerate every valid combo in the catalog using the default bounds.
pub fn enumerate(catalog: &[MenuItem]) -> Vec<Combo> {
    enumerate_with(catalog, &PlannerConfig::default())
}

/// Enumerate every valid combo in the catalog.
///
/// Cross product over drink x savory x sweet, filtered by:
/// 1. role (category and taste)
/// 2. pairwise distinct names
/// 3. inclusive calorie band
/// 4. every pair of normalized popularities within 0.05
///
/// Output follows catalog order; callers shuffle.
pub fn enumerate_with(catalog: &[MenuItem], config: &PlannerConfig) -> Vec<Combo> {
    let drinks: Vec<&MenuItem> = catalog.iter().filter(|i| i.is_drink()).collect();
    let savories: Vec<&MenuItem> = catalog.iter().filter(|i| i.is_savory()).collect();
    let sweets: Vec<&MenuItem> = catalog.iter().filter(|i| i.is_sweet()).collect();

    let mut combos = Vec::new();
    for drink in &drinks {
        for savory in &savories {
            for sweet in &sweets {
                if let Some(combo) = build_combo(drink, savory, sweet, config) {
                    combos.push(combo);
                }
            }
        }
    }

    debug!(
        drinks = drinks.len(),
        savories = savories.len(),
        sweets = sweets.len(),
        accepted = combos.len(),
        "enumerated candidate combos"
    );

    combos
}
