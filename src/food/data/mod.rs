pub mod aliases;
pub mod catalog;
pub mod table;

// Re-export common types
pub use aliases::AliasMap;
pub use catalog::{SuggestionCatalog, SuggestionTopic};
pub use table::{FoodEntry, NutritionTable};
