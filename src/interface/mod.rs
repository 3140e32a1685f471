pub mod export;
pub mod prompts;
pub mod render;

pub use export::{schedule_to_json, write_schedule_csv};
pub use prompts::{prompt_day_label, prompt_yes_no, resolve_weekday};
pub use render::{display_candidates, display_menu, display_schedule, display_slot_items};
