pub mod analysis;
pub mod config;
pub mod data;
pub mod error;
pub mod models;

pub use analysis::FoodAnalyzer;
pub use config::FoodConfig;
pub use error::{FoodError, FoodResult};
