use anyhow::{Context, Result};
use github_issue::{issue::GITHUB_API_URL, CreateIssueOptions};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Deserialize)]
pub struct Config {
    pub repository: String,
    pub user_agent: Option<String>,
    #[serde(default = "Config::default_log_level")]
    pub log_level: String,
    #[serde(default = "Config::default_api_url")]
    pub api_url: String,
    pub issue: IssueConfig,
}

#[derive(Debug, Deserialize)]
pub struct IssueConfig {
    pub title: String,
    pub body: Option<String>,
    pub assignee: Option<String>,
    pub milestone: Option<u64>,
    pub labels: Option<Vec<String>>,
}

impl Config {
    pub async fn load(path: impl AsRef<Path>) -> Result<Config> {
        let config_string = tokio::fs::read_to_string(path).await?;

        let config = serde_yaml::from_str::<Config>(&config_string)?;

        Ok(config)
    }

    pub fn log_level(&self) -> Result<log::Level> {
        self.log_level
            .parse()
            .with_context(|| format!("Unknown log level {}", self.log_level))
    }

    pub fn into_options(self, auth_token: impl Into<String>) -> CreateIssueOptions {
        CreateIssueOptions {
            auth_token: auth_token.into(),
            repository: self.repository,
            user_agent: self.user_agent,
            title: self.issue.title,
            body: self.issue.body,
            assignee: self.issue.assignee,
            milestone: self.issue.milestone,
            labels: self.issue.labels,
        }
    }

    fn default_log_level() -> String {
        DEFAULT_LOG_LEVEL.to_owned()
    }

    fn default_api_url() -> String {
        GITHUB_API_URL.to_owned()
    }
}
