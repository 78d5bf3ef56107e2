use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const DEFAULT_CONFIG_FILE_NAME: &str = "issuedigest.yaml";
const DEFAULT_OUTPUT_DIR: &str = "issues";

const DEFAULT_MIN_STARS: u32 = 10;
const DEFAULT_MIN_FORKS: u32 = 10;
const DEFAULT_PER_PAGE: u8 = 20;
const DEFAULT_MAX_ISSUES: usize = 20;

#[derive(Serialize, Deserialize)]
pub struct Config {
    pub search: SearchConfig,
    #[serde(default)]
    pub report: ReportConfig,
    pub commit_author: Option<CommitterConfig>,
}

impl Config {
    pub async fn load() -> Result<Config> {
        let config_string = tokio::fs::read_to_string(DEFAULT_CONFIG_FILE_NAME).await?;

        let config = serde_yaml::from_str::<Config>(&config_string)?;

        Ok(config)
    }
}

#[derive(Serialize, Deserialize)]
pub struct SearchConfig {
    pub labels: Vec<String>,
    pub languages: Vec<String>,
    /// Creation-date floor, `YYYY-MM-DD`, inclusive.
    pub created_after: String,
    #[serde(default = "SearchConfig::default_min_stars")]
    pub min_stars: u32,
    #[serde(default = "SearchConfig::default_min_forks")]
    pub min_forks: u32,
    #[serde(default = "SearchConfig::default_per_page")]
    pub per_page: u8,
    #[serde(default = "SearchConfig::default_max_issues")]
    pub max_issues: usize,
}

impl SearchConfig {
    fn default_min_stars() -> u32 {
        DEFAULT_MIN_STARS
    }

    fn default_min_forks() -> u32 {
        DEFAULT_MIN_FORKS
    }

    fn default_per_page() -> u8 {
        DEFAULT_PER_PAGE
    }

    fn default_max_issues() -> usize {
        DEFAULT_MAX_ISSUES
    }
}

#[derive(Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "ReportConfig::default_output_dir")]
    pub output_dir: PathBuf,
}

impl ReportConfig {
    fn default_output_dir() -> PathBuf {
        PathBuf::from(DEFAULT_OUTPUT_DIR)
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            output_dir: ReportConfig::default_output_dir(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CommitterConfig {
    pub email: String,
    pub name: String,
}
