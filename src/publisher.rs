use crate::{
    config::Config,
    git::{committer::Committer, GitClient},
    report,
};
use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use itertools::Itertools;
use std::path::{Path, PathBuf};

const COMMIT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Writes the document under the content directory, then stages, commits and
/// pushes it. The file is on disk before the first git call, so a publish
/// failure never loses the artifact.
pub async fn publish(
    config: &Config,
    document: &str,
    generated_at: DateTime<Local>,
) -> Result<PathBuf> {
    let path = write_report(&config.report.output_dir, document, generated_at)
        .await
        .context("Cannot write the report file")?;

    log::info!("Report saved to {}", path.display());

    let committer = config
        .commit_author
        .as_ref()
        .map(Committer::from)
        .unwrap_or_default();

    let git = GitClient::new(".")?;
    git.configure_committer(&committer)
        .await
        .context("Cannot configure the git committer")?;
    git.stage(&path)
        .await
        .context("Cannot stage the report file")?;
    git.commit(&commit_message(config, &path, generated_at))
        .await
        .context("Cannot commit the report file")?;
    git.push().await.context("Cannot push the report commit")?;

    Ok(path)
}

async fn write_report(
    output_dir: &Path,
    document: &str,
    generated_at: DateTime<Local>,
) -> Result<PathBuf> {
    tokio::fs::create_dir_all(output_dir).await?;

    let file_name = format!("issues_{}.md", generated_at.format(report::TIMESTAMP_FORMAT));
    let path = output_dir.join(file_name);

    tokio::fs::write(&path, document).await?;

    Ok(path)
}

fn commit_message(config: &Config, path: &Path, generated_at: DateTime<Local>) -> String {
    format!(
        "Added issues collected on {}

Filters applied:
  - Labels: {}
  - Languages: {}
  - Created after: {}

Filename: {}",
        generated_at.format(COMMIT_TIMESTAMP_FORMAT),
        config.search.labels.iter().join(", "),
        config.search.languages.iter().join(", "),
        config.search.created_after,
        path.display()
    )
}
