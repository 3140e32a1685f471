use combo_planner_rs::catalog::default_menu;
use combo_planner_rs::models::{Category, MenuItem, TasteProfile};
use combo_planner_rs::planner::{bucket, enumerate, normalize, POPULARITY_STEP};

fn make_item(name: &str, category: Category, cal: i32, taste: TasteProfile, pop: f64) -> MenuItem {
    MenuItem::new(name, category, cal, taste, pop)
}

#[test]
fn test_default_menu_enumerates_eighteen_combos() {
    let combos = enumerate(&default_menu());
    assert_eq!(combos.len(), 18);
}

#[test]
fn test_every_combo_in_calorie_band() {
    for combo in enumerate(&default_menu()) {
        assert!(
            (500..=800).contains(&combo.total_calories),
            "{:?} has {} calories",
            combo.names(),
            combo.total_calories
        );
        let sum: i32 = combo.items().iter().map(|i| i.calories).sum();
        assert_eq!(sum, combo.total_calories);
    }
}

#[test]
fn test_every_combo_has_distinct_names() {
    for combo in enumerate(&default_menu()) {
        let [a, b, c] = combo.names();
        assert!(a != b && a != c && b != c, "repeated name in {:?}", combo.names());
    }
}

#[test]
fn test_every_combo_popularity_is_close() {
    for combo in enumerate(&default_menu()) {
        let buckets: Vec<i64> = combo.items().iter().map(|i| bucket(i.popularity)).collect();
        let spread = buckets.iter().max().unwrap() - buckets.iter().min().unwrap();
        assert!(spread <= 1, "{:?} spread {}", combo.names(), spread);

        for i in combo.items() {
            for j in combo.items() {
                assert!((normalize(i.popularity) - normalize(j.popularity)).abs() <= POPULARITY_STEP + 1e-9);
            }
        }
    }
}

#[test]
fn test_every_combo_respects_roles() {
    for combo in enumerate(&default_menu()) {
        assert_eq!(combo.drink.category, Category::Drink);
        assert!(matches!(combo.savory.category, Category::Main | Category::Side));
        assert_eq!(combo.savory.taste_profile, TasteProfile::Savory);
        assert!(matches!(combo.sweet.category, Category::Side | Category::Drink));
        assert_eq!(combo.sweet.taste_profile, TasteProfile::Sweet);
    }
}

#[test]
fn test_known_combo_values() {
    let combos = enumerate(&default_menu());
    let found = combos
        .iter()
        .find(|c| c.names() == ["Lemon Soda", "Curd Rice", "Cold Coffee"])
        .expect("Lemon Soda + Curd Rice + Cold Coffee should be valid");
    assert_eq!(found.total_calories, 520);
    assert_eq!(found.avg_popularity, 0.72);

    let iced = combos
        .iter()
        .find(|c| c.names() == ["Masala Chaas", "Rajma Chawal", "Iced Tea"])
        .expect("Masala Chaas + Rajma Chawal + Iced Tea should be valid");
    assert_eq!(iced.total_calories, 720);
    assert_eq!(iced.avg_popularity, 0.8);
}

#[test]
fn test_below_band_rejected() {
    // 90 + 250 + 150 = 490
    let combos = enumerate(&default_menu());
    assert!(!combos
        .iter()
        .any(|c| c.names() == ["Lemon Soda", "Curd Rice", "Mixed Veg Salad"]));
}

#[test]
fn test_upper_bound_inclusive() {
    // Cold Coffee 180 + Rajma Chawal 500 + Iced Tea 120 = 800
    let combos = enumerate(&default_menu());
    assert!(combos
        .iter()
        .any(|c| c.names() == ["Cold Coffee", "Rajma Chawal", "Iced Tea"] && c.total_calories == 800));
}

#[test]
fn test_missing_role_yields_nothing() {
    // No sweet items at all
    let catalog = vec![
        make_item("Masala Chaas", Category::Drink, 100, TasteProfile::Spicy, 0.8),
        make_item("Lemon Soda", Category::Drink, 90, TasteProfile::Savory, 0.7),
        make_item("Rajma Chawal", Category::Main, 500, TasteProfile::Savory, 0.8),
        make_item("French Fries", Category::Side, 350, TasteProfile::Savory, 0.8),
    ];
    assert!(enumerate(&catalog).is_empty());
}

#[test]
fn test_sweet_main_cannot_fill_sweet_role() {
    let catalog = vec![
        make_item("Masala Chaas", Category::Drink, 100, TasteProfile::Spicy, 0.8),
        make_item("Rajma Chawal", Category::Main, 500, TasteProfile::Savory, 0.8),
        make_item("Kheer", Category::Main, 150, TasteProfile::Sweet, 0.8),
    ];
    assert!(enumerate(&catalog).is_empty());
}
