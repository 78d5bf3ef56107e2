mod config;
mod git;
mod github;
mod http;
mod publisher;
mod query;
mod report;

use anyhow::{Context, Result};
use chrono::Local;
use config::Config;
use github::github_client::GithubClient;
use std::env;

const GITHUB_TOKEN_VAR: &str = "GITHUB_TOKEN";

#[tokio::main]
async fn main() -> Result<()> {
    simple_logger::init_with_level(log::Level::Info)?;

    log::info!("Starting");
    let config = Config::load().await.context("Cannot load config file")?;

    // An absent token is not validated here; it fails upstream as a non-200.
    let token = env::var(GITHUB_TOKEN_VAR).unwrap_or_default();
    let client = GithubClient::new(token);

    log::info!("Fetching issues");
    let issues = github::fetch_issues(&client, &config.search).await;
    log::info!("Collected {} issues", issues.len());

    let generated_at = Local::now();
    let document = report::render(&issues, generated_at);

    log::info!("Publishing report");
    let path = publisher::publish(&config, &document, generated_at)
        .await
        .context("Cannot publish the report")?;

    log::info!("Report committed as {}", path.display());

    Ok(())
}
