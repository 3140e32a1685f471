mod builtin;
mod persistence;
mod validate;

pub use builtin::default_menu;
pub use persistence::{load_menu, save_menu};
pub use validate::validate_menu;
