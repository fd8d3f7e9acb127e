use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "gateway-cli")]
#[command(about = "Query a running off-plan gateway", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:3000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check gateway status
    Health,
    /// List property areas
    Areas,
    /// Fetch one page of the property batch
    Batch {
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Query points of interest, e.g. --query lat=25.2 --query lng=55.3
    PointsOfInterest {
        #[arg(short, long = "query")]
        query: Vec<String>,
    },
    /// List listing regions
    Regions,
    /// List sale statuses
    SaleStatuses,
}

impl Commands {
    fn path(&self) -> &'static str {
        match self {
            Commands::Health => "/health",
            Commands::Areas => "/api/areas",
            Commands::Batch { .. } => "/api/properties/batch-100",
            Commands::PointsOfInterest { .. } => "/api/property-monitor/points-of-interest",
            Commands::Regions => "/api/regions",
            Commands::SaleStatuses => "/api/sale-statuses",
        }
    }

    /// Query parameters, left unencoded for the client to encode.
    fn query(&self) -> Vec<(String, String)> {
        match self {
            Commands::Batch { page, limit } => {
                let mut params = Vec::new();
                if let Some(page) = page {
                    params.push(("page".to_string(), page.to_string()));
                }
                if let Some(limit) = limit {
                    params.push(("limit".to_string(), limit.to_string()));
                }
                params
            }
            Commands::PointsOfInterest { query } => query
                .iter()
                .map(|pair| match pair.split_once('=') {
                    Some((key, value)) => (key.to_string(), value.to_string()),
                    None => (pair.clone(), String::new()),
                })
                .collect(),
            _ => Vec::new(),
        }
    }

    fn request(&self, client: &reqwest::Client, base_url: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", base_url.trim_end_matches('/'), self.path());
        client.get(url).query(&self.query())
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let res = cli.command.request(&client, &cli.url).send().await?;
    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: gateway returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
