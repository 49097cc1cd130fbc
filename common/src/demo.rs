//! Built-in demo inventory for the load-demo-data action.
//!
//! Expiry offsets are days relative to the load date, so the listing always
//! shows a spread of tiers no matter when the data is loaded. Names repeat on
//! purpose; bulk-loading keeps the first occurrence of each.

use chrono::NaiveDate;

use crate::expiry::date_after_days;
use crate::product::{Product, ProductKind};

/// (kind, name, quantity, days from load date until expiry)
pub const DEMO_SEEDS: &[(&str, &str, u32, i64)] = &[
    ("Food Item", "Bread", 10, 120),
    ("Medicine", "Aspirin", 5, 10),
    ("Grocery Item", "Milk", 20, 30),
    ("Food Item", "Cheese", 15, 90),
    ("Food Item", "Tomato", 8, 50),
    ("Food Item", "Apple", 20, 15),
    ("Grocery Item", "Sugar", 50, 45),
    ("Food Item", "Rice", 100, 180),
    ("Medicine", "Paracetamol", 30, 5),
    ("Grocery Item", "Salt", 200, 60),
    ("Food Item", "Carrot", 10, 90),
    ("Grocery Item", "Lentils", 15, 120),
    ("Medicine", "Ibuprofen", 25, 20),
    ("Food Item", "Potatoes", 40, 60),
    ("Grocery Item", "Flour", 50, 150),
    ("Food Item", "Banana", 30, 10),
    ("Medicine", "Cough Syrup", 40, 15),
    ("Grocery Item", "Tomato Paste", 25, 45),
    ("Food Item", "Onions", 10, 75),
    ("Food Item", "Cucumber", 18, 30),
    ("Grocery Item", "Chickpeas", 40, 180),
    ("Food Item", "Spinach", 20, 7),
    ("Medicine", "Vitamins", 60, 120),
    ("Grocery Item", "Oats", 80, 210),
    ("Food Item", "Pineapple", 10, 40),
    ("Grocery Item", "Olive Oil", 12, 200),
    ("Food Item", "Cabbage", 12, 55),
    ("Medicine", "Antibiotics", 50, 25),
    ("Grocery Item", "Pasta", 100, 190),
    ("Food Item", "Avocado", 25, 5),
    ("Medicine", "Cold Medicine", 10, 35),
    ("Food Item", "Lettuce", 50, 10),
    ("Grocery Item", "Cereal", 30, 60),
    ("Food Item", "Eggplant", 15, 100),
    ("Medicine", "Eye Drops", 25, 45),
    ("Grocery Item", "Honey", 50, 210),
    ("Food Item", "Strawberries", 8, 10),
    ("Food Item", "Blueberries", 10, 20),
    ("Grocery Item", "Quinoa", 25, 150),
    ("Food Item", "Mango", 12, 20),
    ("Food Item", "Papaya", 10, 60),
    ("Grocery Item", "Beans", 30, 70),
    ("Food Item", "Broccoli", 15, 35),
    ("Food Item", "Garlic", 50, 130),
    ("Food Item", "Tomato", 8, 50),
    ("Food Item", "Apple", 20, 15),
    ("Grocery Item", "Sugar", 50, 45),
    ("Food Item", "Rice", 100, 180),
    ("Medicine", "Paracetamol", 30, 5),
    ("Grocery Item", "Salt", 200, 60),
    ("Food Item", "Carrot", 10, 90),
    ("Grocery Item", "Lentils", 15, 120),
    ("Medicine", "Ibuprofen", 25, 20),
    ("Food Item", "Potatoes", 40, 60),
    ("Grocery Item", "Flour", 50, 150),
    ("Food Item", "Banana", 30, 10),
    ("Medicine", "Cough Syrup", 40, 15),
    ("Grocery Item", "Tomato Paste", 25, 45),
    ("Food Item", "Onions", 10, 75),
    ("Food Item", "Cucumber", 18, 30),
    ("Grocery Item", "Chickpeas", 40, 180),
    ("Food Item", "Spinach", 20, 7),
    ("Medicine", "Vitamins", 60, 120),
    ("Grocery Item", "Oats", 80, 210),
    ("Food Item", "Pineapple", 10, 40),
    ("Grocery Item", "Olive Oil", 12, 200),
    ("Food Item", "Cabbage", 12, 55),
    ("Medicine", "Antibiotics", 50, 25),
    ("Grocery Item", "Pasta", 100, 190),
    ("Food Item", "Avocado", 25, 5),
    ("Medicine", "Cold Medicine", 10, 35),
    ("Food Item", "Lettuce", 50, 10),
    ("Grocery Item", "Cereal", 30, 60),
    ("Food Item", "Eggplant", 15, 100),
    ("Medicine", "Eye Drops", 25, 45),
    ("Grocery Item", "Honey", 50, 210),
    ("Food Item", "Strawberries", 8, 10),
    ("Food Item", "Blueberries", 10, 20),
    ("Grocery Item", "Quinoa", 25, 150),
    ("Food Item", "Mango", 12, 20),
    ("Food Item", "Papaya", 10, 60),
    ("Grocery Item", "Beans", 30, 70),
    ("Food Item", "Broccoli", 15, 35),
    ("Food Item", "Garlic", 50, 130),
    ("Food Item", "Lemon", 40, 80),
    ("Medicine", "Pain Reliever", 15, 60),
    ("Food Item", "Peas", 100, 90),
    ("Grocery Item", "Chili Powder", 70, 150),
    ("Grocery Item", "Coconut Oil", 12, 200),
    ("Food Item", "Paprika", 25, 100),
    ("Food Item", "Pomegranate", 50, 20),
    ("Grocery Item", "Mustard", 25, 30),
    ("Medicine", "Antiseptic", 60, 120),
    ("Grocery Item", "Rice Flour", 30, 90),
    ("Food Item", "Zucchini", 40, 60),
    ("Food Item", "Eggs", 50, 60),
    ("Medicine", "Cough Tablets", 30, 15),
    ("Food Item", "Squash", 10, 45),
    ("Grocery Item", "Tomato Sauce", 50, 100),
    ("Grocery Item", "Coconut Milk", 10, 80),
    ("Food Item", "Berries", 40, 30),
    ("Food Item", "Kiwi", 15, 20),
    ("Medicine", "Cold Relief", 25, 70),
    ("Food Item", "Cherries", 10, 50),
];

/// Materialize the demo seeds into records dated relative to `today`.
pub fn demo_products(today: NaiveDate) -> Vec<Product> {
    DEMO_SEEDS
        .iter()
        .map(|&(kind, name, quantity, offset)| Product {
            kind: ProductKind::from(kind),
            name: name.to_string(),
            quantity,
            expiry: date_after_days(today, offset),
            details: String::new(),
            status: None,
        })
        .collect()
}
