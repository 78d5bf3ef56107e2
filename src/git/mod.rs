pub mod committer;

use self::committer::Committer;
use anyhow::{bail, Result};
use std::{
    path::{Path, PathBuf},
    process::Stdio,
};
use tokio::process::Command;

const GIT_BIN_NAME: &str = "git";

/// Drives the local git binary as subprocesses, all inside `work_dir`.
pub struct GitClient {
    work_dir: PathBuf,
}

impl GitClient {
    pub fn new(work_dir: impl Into<PathBuf>) -> Result<GitClient> {
        check_git()?;

        Ok(GitClient {
            work_dir: work_dir.into(),
        })
    }

    pub async fn configure_committer(&self, committer: &Committer) -> Result<()> {
        self.run(&["config", "--global", "user.name", &committer.name])
            .await?;
        self.run(&["config", "--global", "user.email", &committer.email])
            .await?;

        Ok(())
    }

    pub async fn stage(&self, file: &Path) -> Result<()> {
        self.run(&["add", &file.to_string_lossy()]).await
    }

    pub async fn commit(&self, message: &str) -> Result<()> {
        self.run(&["commit", "-m", message]).await
    }

    pub async fn push(&self) -> Result<()> {
        self.run(&["push"]).await
    }

    async fn run(&self, args: &[&str]) -> Result<()> {
        log::debug!("running git {}", args.join(" "));

        let exit_status = Command::new(GIT_BIN_NAME)
            .args(args)
            .current_dir(&self.work_dir)
            .stdout(Stdio::null())
            .spawn()?
            .wait()
            .await?;

        if !exit_status.success() {
            bail!("git {} exited with {}", args[0], exit_status);
        }

        Ok(())
    }
}

fn check_git() -> Result<()> {
    match which::which(GIT_BIN_NAME) {
        Ok(_) => Ok(()),
        Err(error) => bail!("git binary not found: {:?}", error),
    }
}
