use crate::models::{Combo, MenuItem, Schedule, ScheduleSlot};
use crate::planner::constants::UNAVAILABLE;

/// Display a schedule as a table, one row per day.
pub fn display_schedule(schedule: &Schedule) {
    let slots = schedule.slots();
    let day_width = slots.iter().map(|s| s.day.len()).max().unwrap_or(9);
    let name_width = slots
        .iter()
        .flat_map(|s| s.names())
        .map(str::len)
        .max()
        .unwrap_or(10);

    println!();
    println!("=== Weekly Combos ===");
    println!();

    for slot in slots {
        let [drink, savory, sweet] = slot.names();
        let calories = slot
            .calories()
            .map(|c| c.to_string())
            .unwrap_or_else(|| UNAVAILABLE.to_string());
        let popularity = slot
            .popularity()
            .map(|p| format!("{:.2}", p))
            .unwrap_or_else(|| UNAVAILABLE.to_string());

        println!(
            "{:<dw$}  {:<nw$} | {:<nw$} | {:<nw$} | {:>4} cal | pop {}",
            slot.day,
            drink,
            savory,
            sweet,
            calories,
            popularity,
            dw = day_width,
            nw = name_width
        );
    }

    let empty = schedule.len() - schedule.populated_count();
    println!();
    println!("--- Summary ---");
    println!("Days filled: {}/{}", schedule.populated_count(), schedule.len());
    if empty > 0 {
        println!("Days without a valid combo: {}", empty);
    }
    println!();
}

/// Display the items of a single slot, one row per item, with the total.
pub fn display_slot_items(slot: Option<&ScheduleSlot>) {
    let Some(combo) = slot.and_then(|s| s.combo.as_ref()) else {
        println!("Total Calories: 0");
        println!("No menu available for selected date");
        return;
    };

    println!();
    println!(
        "{:<22} {:<8} {:>8} {:<8} {:>10}",
        "Item Name", "Category", "Calories", "Taste", "Popularity"
    );
    for item in combo.items() {
        println!(
            "{:<22} {:<8} {:>8} {:<8} {:>10}",
            item.name, item.category, item.calories, item.taste_profile, item.popularity
        );
    }
    println!();
    println!("Total Calories: {}", combo.total_calories);
    println!();
}

/// Display the catalog.
pub fn display_menu(items: &[MenuItem]) {
    if items.is_empty() {
        println!("Menu: (none)");
        return;
    }

    println!();
    println!("=== Menu ({} items) ===", items.len());
    println!();

    for item in items {
        println!(
            "  {} - {} cal, {} {}, popularity {}",
            item.name, item.calories, item.taste_profile, item.category, item.popularity
        );
    }

    println!();
}

/// Display every enumerated combo.
pub fn display_candidates(combos: &[Combo]) {
    if combos.is_empty() {
        println!("No combo satisfies the calorie and popularity constraints.");
        return;
    }

    println!();
    println!("=== Candidate Combos ({}) ===", combos.len());
    println!();

    for (i, combo) in combos.iter().enumerate() {
        let [drink, savory, sweet] = combo.names();
        println!(
            "{:>3}. {} + {} + {} - {} cal, pop {:.2}",
            i + 1,
            drink,
            savory,
            sweet,
            combo.total_calories,
            combo.avg_popularity
        );
    }

    println!();
}
