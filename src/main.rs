use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use gitalyze::{Config, GitHubClient, RepoAnalyzer, RepoComparator, RepoId};

#[derive(Parser, Debug)]
#[command(name = "gitalyze")]
#[command(version = "0.1.0")]
#[command(about = "Analyze and compare GitHub repositories")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text", global = true)]
    format: String,

    /// Trailing window for recent activity, in days
    #[arg(long, global = true)]
    days: Option<i64>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze a single repository
    Analyze { owner: String, repo: String },

    /// Compare repositories, each given as owner/repo
    Compare {
        #[arg(required = true)]
        repos: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("gitalyze=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = Config::from_env()?;
    let client = GitHubClient::new(config.github_token.as_deref())?;

    match &args.command {
        Command::Analyze { owner, repo } => {
            let analyzer = RepoAnalyzer::new(client, args.days.unwrap_or(config.recent_days));
            let report = analyzer.analyze(owner, repo).await?;
            emit(&report, report.render_text(), &args.format)?;
        }
        Command::Compare { repos } => {
            let ids = repos
                .iter()
                .map(|s| s.parse())
                .collect::<gitalyze::Result<Vec<RepoId>>>()?;

            let comparator = RepoComparator::new(client, config.request_delay_ms);
            let table = comparator.compare(&ids).await?;
            emit(&table, table.render_text(), &args.format)?;
        }
    }

    Ok(())
}

fn emit<T: Serialize>(value: &T, text: String, format: &str) -> anyhow::Result<()> {
    match format {
        "json" => println!("{}", serde_json::to_string_pretty(value)?),
        _ => println!("{}", text),
    }
    Ok(())
}
