use std::collections::HashSet;

use crate::food::error::{FoodError, FoodResult};
use crate::food::models::{Minerals, NutritionRecord, Vitamins};

/// A canonical food name and its per-serving nutrition.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodEntry {
    pub name: String,
    pub nutrition: NutritionRecord,
}

/// Read-only nutrition lookup table.
///
/// Keys are matched byte-for-byte as they were inserted, and iteration
/// always follows insertion order. The substring tier of the alias resolver
/// depends on that order.
#[derive(Debug, Clone)]
pub struct NutritionTable {
    entries: Vec<FoodEntry>,
}

// (name, calories, protein, carbs, fat, fiber, [A, C, D, E], [calcium, iron, potassium])
type Row = (&'static str, f64, f64, f64, f64, f64, [f64; 4], [f64; 3]);

const BUILTIN_ROWS: &[Row] = &[
    ("김치찌개", 320.0, 12.5, 45.2, 8.3, 6.8, [450.0, 25.0, 2.1, 3.2], [180.0, 3.5, 420.0]),
    ("샐러드", 150.0, 8.2, 25.1, 4.5, 8.2, [1200.0, 45.0, 0.5, 2.8], [120.0, 2.8, 380.0]),
    ("닭가슴살", 165.0, 31.0, 0.0, 3.6, 0.0, [6.0, 0.0, 0.1, 0.3], [15.0, 1.0, 256.0]),
    ("밥", 130.0, 2.7, 28.2, 0.3, 0.4, [0.0, 0.0, 0.0, 0.1], [10.0, 0.2, 35.0]),
    ("치킨", 250.0, 25.0, 10.5, 13.0, 0.5, [40.0, 1.0, 0.3, 1.5], [20.0, 1.2, 230.0]),
    ("된장찌개", 180.0, 12.0, 15.0, 7.5, 4.2, [300.0, 10.0, 0.0, 1.2], [150.0, 2.5, 520.0]),
    ("불고기", 280.0, 22.0, 12.0, 15.0, 1.0, [20.0, 3.0, 0.2, 0.8], [25.0, 3.2, 380.0]),
    ("비빔밥", 560.0, 18.0, 85.0, 15.0, 6.0, [600.0, 12.0, 0.5, 2.0], [90.0, 4.0, 560.0]),
    ("김밥", 320.0, 9.0, 55.0, 7.0, 2.5, [280.0, 6.0, 0.3, 1.0], [60.0, 1.5, 250.0]),
    ("떡볶이", 380.0, 8.0, 75.0, 5.0, 2.0, [150.0, 8.0, 0.0, 1.1], [40.0, 2.0, 300.0]),
    ("라면", 500.0, 10.0, 70.0, 20.0, 3.0, [0.0, 0.0, 0.0, 1.5], [30.0, 2.5, 200.0]),
    ("삼겹살", 518.0, 9.3, 0.0, 53.0, 0.0, [9.0, 0.0, 0.7, 0.4], [5.0, 0.5, 185.0]),
    ("계란", 155.0, 12.6, 1.1, 10.6, 0.0, [160.0, 0.0, 2.0, 1.0], [50.0, 1.2, 126.0]),
    ("연어구이", 280.0, 30.0, 0.0, 17.0, 0.0, [50.0, 0.0, 14.0, 3.5], [15.0, 0.8, 490.0]),
    ("두부", 76.0, 8.1, 1.9, 4.8, 0.3, [0.0, 0.0, 0.0, 0.0], [350.0, 5.4, 121.0]),
    ("잡채", 300.0, 6.0, 50.0, 9.0, 2.5, [200.0, 8.0, 0.0, 1.2], [40.0, 1.5, 250.0]),
    ("미역국", 70.0, 5.0, 5.0, 3.5, 1.5, [150.0, 3.0, 0.0, 0.2], [120.0, 2.2, 300.0]),
    ("우유", 122.0, 8.1, 11.7, 4.8, 0.0, [150.0, 0.0, 2.9, 0.1], [276.0, 0.1, 366.0]),
    ("바나나", 105.0, 1.3, 27.0, 0.4, 3.1, [3.0, 10.3, 0.0, 0.1], [6.0, 0.3, 422.0]),
    ("사과", 95.0, 0.5, 25.0, 0.3, 4.4, [3.0, 8.4, 0.0, 0.2], [11.0, 0.2, 195.0]),
];

fn row_to_entry(row: &Row) -> FoodEntry {
    let (name, calories, protein, carbs, fat, fiber, [a, c, d, e], [calcium, iron, potassium]) =
        *row;
    FoodEntry {
        name: name.to_string(),
        nutrition: NutritionRecord {
            calories,
            protein,
            carbs,
            fat,
            fiber,
            vitamins: Vitamins {
                vitamin_a: a,
                vitamin_c: c,
                vitamin_d: d,
                vitamin_e: e,
            },
            minerals: Minerals {
                calcium,
                iron,
                potassium,
            },
        },
    }
}

impl NutritionTable {
    /// Builds a table, rejecting duplicate names and invalid records.
    pub fn new(entries: Vec<FoodEntry>) -> FoodResult<Self> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.name.as_str()) {
                return Err(FoodError::Config(format!(
                    "duplicate food name in nutrition table: {}",
                    entry.name
                )));
            }
            if !entry.nutrition.is_valid() {
                return Err(FoodError::Config(format!(
                    "nutrition record for {} has negative or non-finite values",
                    entry.name
                )));
            }
        }
        Ok(Self { entries })
    }

    /// The table shipped with the application.
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_ROWS.iter().map(row_to_entry).collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&NutritionRecord> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| &entry.nutrition)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Canonical names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    pub fn entries(&self) -> &[FoodEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_passes_validation() {
        let builtin = NutritionTable::builtin();
        let rebuilt = NutritionTable::new(builtin.entries().to_vec());
        assert!(rebuilt.is_ok());
        assert_eq!(builtin.len(), BUILTIN_ROWS.len());
    }

    #[test]
    fn test_chicken_values() {
        let table = NutritionTable::builtin();
        let chicken = table.get("치킨").unwrap();
        assert_eq!(chicken.calories, 250.0);
        assert_eq!(chicken.protein, 25.0);
        assert_eq!(chicken.minerals.calcium, 20.0);
    }

    #[test]
    fn test_names_follow_insertion_order() {
        let table = NutritionTable::builtin();
        let names: Vec<&str> = table.names().take(4).collect();
        assert_eq!(names, vec!["김치찌개", "샐러드", "닭가슴살", "밥"]);
    }

    #[test]
    fn test_duplicate_names_are_rejected() {
        let entry = FoodEntry {
            name: "밥".to_string(),
            nutrition: NutritionRecord::zeroed(),
        };
        let result = NutritionTable::new(vec![entry.clone(), entry]);
        assert!(matches!(result, Err(FoodError::Config(_))));
    }

    #[test]
    fn test_lookup_is_exact() {
        let table = NutritionTable::builtin();
        assert!(table.contains("밥"));
        assert!(!table.contains(" 밥"));
    }
}
