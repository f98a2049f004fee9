use super::Flow;

pub fn handle_command(input: &str) -> Result<Flow, String> {
    match input.to_lowercase().as_str() {
        "help" => {
            println!("\n🥗 Nutrition Commands:");
            println!("  analyze <food>  - Show nutrition facts and suggestions");
            println!("  <food>          - Same as analyze");
            println!("  foods           - List foods in the nutrition table");
            println!("  Example: analyze 김치찌개, analyze bulgogi");
            println!();

            println!("⚙️ System Commands:");
            println!("  help  - Show this help menu");
            println!("  quit  - Exit the program");
            println!();
            Ok(Flow::Continue)
        }
        "exit" | "quit" => {
            println!("👋 Goodbye!");
            Ok(Flow::Exit)
        }
        _ => Err("Unknown system command. Type 'help' for available commands.".to_string()),
    }
}
