use clap::{Parser, Subcommand};
use complaint_analyzer::Config;
use serde_json::{json, Value};

#[derive(Parser, Debug)]
#[command(name = "complaintctl", about = "CLI for the Customer Complaint Analyzer", version)]
struct Cli {
    /// Base URL of a running analyzer service (defaults to API_HOST:API_PORT)
    #[arg(global = true, long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Submit a complaint message for analysis
    Analyze {
        /// Complaint text to analyze
        message: String,
        /// Pretty-print the JSON result
        #[arg(short, long)]
        pretty: bool,
    },
    /// Check service health
    Health,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load env and parse CLI
    Config::dotenv_load();
    let cli = Cli::parse();

    let conf = Config::new().expect("Failed to load config");
    let base_url = cli
        .base_url
        .unwrap_or_else(|| format!("http://{}:{}", conf.api_host, conf.api_port));
    let base_url = base_url.trim_end_matches('/').to_string();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Analyze { message, pretty } => {
            let response = client
                .post(format!("{}/api/summarize", base_url))
                .json(&json!({ "message": message }))
                .send()
                .await?;
            let status = response.status();
            let body: Value = response.json().await?;
            if !status.is_success() {
                let detail = body
                    .get("message")
                    .and_then(|v| v.as_str())
                    .unwrap_or("unknown error");
                eprintln!("Error ({}): {}", status, detail);
                std::process::exit(1);
            }
            if pretty {
                println!("{}", serde_json::to_string_pretty(&body)?);
            } else {
                println!("{}", serde_json::to_string(&body)?);
            }
            Ok(())
        }
        Commands::Health => {
            let body: Value = client
                .get(format!("{}/health", base_url))
                .send()
                .await?
                .json()
                .await?;
            println!("{}", serde_json::to_string_pretty(&body)?);
            Ok(())
        }
    }
}
