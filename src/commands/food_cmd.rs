use colored::Colorize;

use crate::food::models::{AnalysisReport, AnalysisRequest, NutritionSource};
use crate::food::FoodAnalyzer;

pub async fn analyze(analyzer: &FoodAnalyzer, food_name: &str) -> Result<(), String> {
    let food_name = food_name.trim();
    if food_name.is_empty() {
        return Err("Please specify a food item to analyze.".to_string());
    }

    let report = analyzer
        .analyze(&AnalysisRequest::from_name(food_name))
        .await
        .map_err(|e| format!("Failed to analyze {}: {}", food_name, e))?;
    print_report(&report);
    Ok(())
}

pub fn list_foods(analyzer: &FoodAnalyzer) {
    println!("\n📋 Foods in the nutrition table:");
    for name in analyzer.food_names() {
        println!("  • {}", name);
    }
    println!();
}

pub fn print_report(report: &AnalysisReport) {
    let source = match report.source {
        NutritionSource::ExactMatch => "database".green(),
        NutritionSource::AiEstimate => "AI estimate".yellow(),
        NutritionSource::RandomFallback => "example values".red(),
        NutritionSource::RecognitionUnavailable => "not recognized".red(),
    };
    println!("\n🍽️  {} ({})", report.food.bold(), source);
    if let Some(matched) = &report.matched_name {
        if *matched != report.food {
            println!("   matched as {}", matched.cyan());
        }
    }
    if let Some(message) = &report.message {
        println!("   {}", message.dimmed());
    }

    println!("\n📊 Nutrition per serving:");
    for (field, value) in report.nutrition.fields() {
        println!("  {:<10} {}", field, format!("{:.1}", value).cyan());
    }

    println!("\n💡 Suggestions:");
    for suggestion in &report.recommendations {
        println!(
            "  {} {} - {}",
            suggestion.image,
            suggestion.name.bold(),
            suggestion.nutrition
        );
        println!("     {}", suggestion.description);
        if !suggestion.food_list.is_empty() {
            println!("     {}", suggestion.food_list.join(", ").truecolor(255, 236, 179));
        }
    }
    println!();
}
