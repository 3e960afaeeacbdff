//! Placeholder data generation for mock screens.
//!
//! Values are illustrative only — randomly generated per render, never
//! persisted, never asserted exactly. Generators pick a value family from
//! the attribute name so mock tables look plausible (prices look like
//! prices, dates like dates).

use chrono::{Duration, Local};
use rand::seq::SliceRandom;
use rand::Rng;

/// Sample person names for user/customer style columns.
const SAMPLE_NAMES: &[&str] = &[
    "Ava Thompson",
    "Liam Carter",
    "Mia Rodriguez",
    "Noah Kim",
    "Sofia Ahmed",
    "Ethan Walsh",
    "Priya Nair",
    "Lucas Moreau",
];

/// Sample product-ish nouns for item columns.
const SAMPLE_ITEMS: &[&str] = &[
    "Wireless Mouse",
    "Desk Lamp",
    "Notebook",
    "Water Bottle",
    "Backpack",
    "Headphones",
    "Coffee Mug",
    "Phone Stand",
];

const SAMPLE_STATUSES: &[&str] = &["Active", "Pending", "Completed", "Archived"];

const SAMPLE_WORDS: &[&str] = &[
    "Sample", "Demo", "Example", "Placeholder", "Preview", "Draft", "Mock",
];

/// A placeholder value that fits the attribute's apparent meaning.
pub fn mock_value(attribute: &str) -> String {
    let mut rng = rand::thread_rng();
    let attr = attribute.to_lowercase();

    if attr.ends_with("_id") || attr == "id" {
        return format!("#{:04}", rng.gen_range(1..10_000));
    }
    if attr.ends_with("_date") || attr.contains("date") {
        let days_ago = rng.gen_range(0..365);
        return (Local::now().date_naive() - Duration::days(days_ago))
            .format("%Y-%m-%d")
            .to_string();
    }
    if attr.ends_with("_time") || attr.contains("time") {
        return format!("{:02}:{:02}", rng.gen_range(0..24), rng.gen_range(0..60));
    }
    if attr.ends_with("_status") || attr.contains("status") {
        return pick(&mut rng, SAMPLE_STATUSES);
    }
    if attr.contains("price") || attr.contains("amount") || attr.contains("total") {
        return format!("${:.2}", rng.gen_range(1.0..500.0));
    }
    if attr.contains("quantity") || attr.contains("count") || attr.contains("stock") {
        return rng.gen_range(1..100).to_string();
    }
    if attr.contains("email") {
        let name = pick(&mut rng, SAMPLE_NAMES)
            .split_whitespace()
            .next()
            .unwrap_or("demo")
            .to_lowercase();
        return format!("{name}@example.com");
    }
    if attr.contains("name") || attr.contains("user") || attr.contains("customer") {
        return pick(&mut rng, SAMPLE_NAMES);
    }

    pick(&mut rng, SAMPLE_WORDS)
}

/// `count` placeholder rows matching `columns`.
pub fn mock_rows(columns: &[String], count: usize) -> Vec<Vec<String>> {
    (0..count)
        .map(|_| columns.iter().map(|c| mock_value(c)).collect())
        .collect()
}

/// Up to `count` distinct sample person names.
pub fn sample_names(count: usize) -> Vec<String> {
    SAMPLE_NAMES
        .iter()
        .take(count)
        .map(|n| n.to_string())
        .collect()
}

/// Up to `count` distinct sample item names.
pub fn sample_items(count: usize) -> Vec<String> {
    SAMPLE_ITEMS
        .iter()
        .take(count)
        .map(|n| n.to_string())
        .collect()
}

fn pick(rng: &mut impl Rng, values: &[&str]) -> String {
    values.choose(rng).copied().unwrap_or("Sample").to_string()
}

#[cfg(test)]
#[path = "tests/mock_data_tests.rs"]
mod tests;
