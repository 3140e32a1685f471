mod combo;
mod menu;
mod schedule;

pub use combo::Combo;
pub use menu::{Category, MenuItem, TasteProfile};
pub use schedule::{
    find_slot, weekday_name, DayLabeling, Schedule, ScheduleSlot, WireSlot, WireValue,
};
