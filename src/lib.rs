pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod planner;
pub mod survey;

pub use error::{PlannerError, Result};
pub use models::{Combo, DayLabeling, MenuItem, Schedule, ScheduleSlot};
