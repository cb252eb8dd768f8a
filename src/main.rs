mod config;
mod logger;

use anyhow::{Context, Result};
use clap::Parser;
use config::Config;
use github_issue::IssueCreator;
use std::path::PathBuf;

/// Create a GitHub issue described by a YAML file.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path of the issue description.
    #[arg(default_value = "issue.yaml")]
    config: PathBuf,

    /// GitHub token used to authenticate the request.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    auth_token: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::load(&args.config)
        .await
        .with_context(|| format!("Cannot load config file {}", args.config.display()))?;

    logger::init(config.log_level()?)?;

    log::info!("Creating issue on {}", config.repository);
    let creator = IssueCreator::with_base_url(&config.api_url);
    let issue = creator
        .create_issue(config.into_options(args.auth_token))
        .await
        .context("Cannot create the github issue")?;

    log::info!(
        "Created issue #{} {}",
        issue["number"],
        issue["html_url"].as_str().unwrap_or_default()
    );

    Ok(())
}
