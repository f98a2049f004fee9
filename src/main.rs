use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use colored::Colorize;
use dotenv::dotenv;
use nutrition_advisor::api;
use nutrition_advisor::commands::food_cmd;
use nutrition_advisor::commands::{CommandHandler, Flow};
use nutrition_advisor::food::models::AnalysisRequest;
use nutrition_advisor::food::{FoodAnalyzer, FoodConfig};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Korean food nutrition analysis and suggestions", long_about = None)]
struct Args {
    /// Serve the HTTP API instead of the interactive prompt
    #[arg(long)]
    api: bool,

    #[arg(long, default_value = "3000")]
    port: u16,

    /// Analyze one food, print the report and exit
    #[arg(long)]
    food: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Load environment variables
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config = FoodConfig::from_env()?;
    let analyzer = Arc::new(FoodAnalyzer::from_config(&config)?);

    if args.api {
        run_api_server(&args, analyzer).await
    } else if let Some(food) = &args.food {
        let report = analyzer.analyze(&AnalysisRequest::from_name(food.as_str())).await?;
        food_cmd::print_report(&report);
        Ok(())
    } else {
        colored::control::set_override(true);
        run_cli_mode(analyzer).await
    }
}

async fn run_cli_mode(
    analyzer: Arc<FoodAnalyzer>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let command_handler = CommandHandler::new(analyzer);

    // Show initial help menu
    command_handler.handle_command("help").await?;

    let mut rl = Editor::<(), DefaultHistory>::new()?;

    loop {
        match rl.readline("🍚 ") {
            Ok(line) => {
                let input = line.trim();
                let _ = rl.add_history_entry(input);

                match command_handler.handle_command(input).await {
                    Ok(Flow::Exit) => break,
                    Ok(Flow::Continue) => {}
                    Err(e) => println!("{}", e.red()),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    Ok(())
}

async fn run_api_server(
    args: &Args,
    analyzer: Arc<FoodAnalyzer>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));

    let app = api::create_api(analyzer);

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| format!("Failed to bind to {}: {}", addr, e))?;

    info!(%addr, "Nutrition API listening");

    axum::serve(listener, app)
        .await
        .map_err(|e| format!("Server error: {}", e))?;

    Ok(())
}
