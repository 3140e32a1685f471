use crate::models::MenuItem;

/// A (drink, savory, sweet) triple that passed the static constraints.
///
/// Identity is the ordered name triple; the derived fields are fixed at
/// construction time.
#[derive(Debug, Clone)]
pub struct Combo {
    pub drink: MenuItem,
    pub savory: MenuItem,
    pub sweet: MenuItem,

    /// Sum of the three items' calories.
    pub total_calories: i32,

    /// Mean of the three normalized popularity scores, rounded to 2 decimals.
    pub avg_popularity: f64,
}

impl Combo {
    pub fn new(
        drink: MenuItem,
        savory: MenuItem,
        sweet: MenuItem,
        total_calories: i32,
        avg_popularity: f64,
    ) -> Self {
        Self {
            drink,
            savory,
            sweet,
            total_calories,
            avg_popularity,
        }
    }

    /// Ordered item names: drink, savory, sweet.
    pub fn names(&self) -> [&str; 3] {
        [
            self.drink.name.as_str(),
            self.savory.name.as_str(),
            self.sweet.name.as_str(),
        ]
    }

    /// Items in role order.
    pub fn items(&self) -> [&MenuItem; 3] {
        [&self.drink, &self.savory, &self.sweet]
    }
}

impl PartialEq for Combo {
    fn eq(&self, other: &Self) -> bool {
        self.names() == other.names()
    }
}

impl Eq for Combo {}

impl std::hash::Hash for Combo {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.names().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, TasteProfile};

    fn combo(drink: &str, savory: &str, sweet: &str) -> Combo {
        Combo::new(
            MenuItem::new(drink, Category::Drink, 100, TasteProfile::Spicy, 0.8),
            MenuItem::new(savory, Category::Main, 400, TasteProfile::Savory, 0.8),
            MenuItem::new(sweet, Category::Drink, 120, TasteProfile::Sweet, 0.8),
            620,
            0.8,
        )
    }

    #[test]
    fn test_identity_is_name_triple() {
        let a = combo("Masala Chaas", "Rajma Chawal", "Iced Tea");
        let mut b = combo("Masala Chaas", "Rajma Chawal", "Iced Tea");
        b.avg_popularity = 0.5;
        assert_eq!(a, b);

        let c = combo("Masala Chaas", "French Fries", "Iced Tea");
        assert_ne!(a, c);
    }

    #[test]
    fn test_names_in_role_order() {
        let a = combo("Masala Chaas", "Rajma Chawal", "Iced Tea");
        assert_eq!(a.names(), ["Masala Chaas", "Rajma Chawal", "Iced Tea"]);
    }
}
