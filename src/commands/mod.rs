use std::sync::Arc;

use crate::food::FoodAnalyzer;

pub mod food_cmd;
mod system;

/// Whether the REPL keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct CommandHandler {
    analyzer: Arc<FoodAnalyzer>,
}

impl CommandHandler {
    pub fn new(analyzer: Arc<FoodAnalyzer>) -> Self {
        Self { analyzer }
    }

    pub async fn handle_command(&self, input: &str) -> Result<Flow, String> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(Flow::Continue);
        }

        // Single-word commands first
        match input.to_lowercase().as_str() {
            "help" | "exit" | "quit" => return system::handle_command(input),
            "foods" => {
                food_cmd::list_foods(&self.analyzer);
                return Ok(Flow::Continue);
            }
            _ => {}
        }

        let (command, rest) = match input.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (input, ""),
        };
        if command.eq_ignore_ascii_case("analyze") {
            food_cmd::analyze(&self.analyzer, rest).await?;
            return Ok(Flow::Continue);
        }

        // Anything else is treated as a food name
        food_cmd::analyze(&self.analyzer, input).await?;
        Ok(Flow::Continue)
    }
}
