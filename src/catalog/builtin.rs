use crate::models::{Category, MenuItem, TasteProfile};

/// The stock 19-item menu.
pub fn default_menu() -> Vec<MenuItem> {
    use Category::*;
    use TasteProfile::*;

    vec![
        MenuItem::new("Paneer Butter Masala", Main, 450, Spicy, 0.9),
        MenuItem::new("Chicken Biryani", Main, 600, Spicy, 0.95),
        MenuItem::new("Vegetable Pulao", Main, 400, Savory, 0.7),
        MenuItem::new("Rajma Chawal", Main, 500, Savory, 0.8),
        MenuItem::new("Chole Bhature", Main, 650, Spicy, 0.85),
        MenuItem::new("Masala Dosa", Main, 480, Savory, 0.88),
        MenuItem::new("Grilled Sandwich", Main, 370, Savory, 0.6),
        MenuItem::new("Garlic Naan", Side, 200, Savory, 0.9),
        MenuItem::new("Mixed Veg Salad", Side, 150, Sweet, 0.75),
        MenuItem::new("French Fries", Side, 350, Savory, 0.8),
        MenuItem::new("Curd Rice", Side, 250, Savory, 0.7),
        MenuItem::new("Papad", Side, 100, Savory, 0.65),
        MenuItem::new("Paneer Tikka", Side, 300, Spicy, 0.85),
        MenuItem::new("Masala Chaas", Drink, 100, Spicy, 0.8),
        MenuItem::new("Sweet Lassi", Drink, 220, Sweet, 0.9),
        MenuItem::new("Lemon Soda", Drink, 90, Savory, 0.7),
        MenuItem::new("Cold Coffee", Drink, 180, Sweet, 0.75),
        MenuItem::new("Coconut Water", Drink, 60, Sweet, 0.6),
        MenuItem::new("Iced Tea", Drink, 120, Sweet, 0.78),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::validate_menu;

    #[test]
    fn test_default_menu_is_valid() {
        let menu = default_menu();
        assert_eq!(menu.len(), 19);
        assert!(validate_menu(&menu).is_ok());
    }

    #[test]
    fn test_default_menu_role_counts() {
        let menu = default_menu();
        assert_eq!(menu.iter().filter(|i| i.is_drink()).count(), 6);
        assert_eq!(menu.iter().filter(|i| i.is_savory()).count(), 8);
        assert_eq!(menu.iter().filter(|i| i.is_sweet()).count(), 5);
    }
}
