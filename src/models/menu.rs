use std::fmt;

use serde::{Deserialize, Serialize};

/// Menu category of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Main,
    Side,
    Drink,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Main => "main",
            Category::Side => "side",
            Category::Drink => "drink",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Dominant taste of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TasteProfile {
    Spicy,
    Savory,
    Sweet,
}

impl TasteProfile {
    pub fn as_str(&self) -> &'static str {
        match self {
            TasteProfile::Spicy => "spicy",
            TasteProfile::Savory => "savory",
            TasteProfile::Sweet => "sweet",
        }
    }
}

impl fmt::Display for TasteProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A catalog entry.
///
/// Popularity is a raw score in `[0, 1]`; the planner only ever compares
/// normalized values (see [`crate::planner::normalize`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(rename = "item_name")]
    pub name: String,

    pub category: Category,

    pub calories: i32,

    pub taste_profile: TasteProfile,

    #[serde(rename = "popularity_score")]
    pub popularity: f64,
}

impl MenuItem {
    pub fn new(
        name: &str,
        category: Category,
        calories: i32,
        taste_profile: TasteProfile,
        popularity: f64,
    ) -> Self {
        Self {
            name: name.to_string(),
            category,
            calories,
            taste_profile,
            popularity,
        }
    }

    /// Can this item fill the drink role?
    #[inline]
    pub fn is_drink(&self) -> bool {
        self.category == Category::Drink
    }

    /// Can this item fill the savory role (a savory main or side)?
    #[inline]
    pub fn is_savory(&self) -> bool {
        matches!(self.category, Category::Main | Category::Side)
            && self.taste_profile == TasteProfile::Savory
    }

    /// Can this item fill the sweet role (a sweet side or drink)?
    #[inline]
    pub fn is_sweet(&self) -> bool {
        matches!(self.category, Category::Side | Category::Drink)
            && self.taste_profile == TasteProfile::Sweet
    }
}
