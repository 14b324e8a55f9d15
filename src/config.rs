//! Run configuration
//!
//! One explicit record per run, loaded from TOML and overridden from the
//! command line. Nothing here is global.

use crate::tracking::contributors::{DEFAULT_WINDOW_DAYS, LoginCase};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Which columns to fetch and render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Code scanning, Dependabot, secret scanning and contributors.
    #[default]
    Simple,
    /// Adds build systems, CodeQL setup, actions policy and tracking items.
    Full,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Organization (or user) owning the repositories.
    pub owner: String,
    pub repos: Vec<String>,
    /// Personal access token. Usually supplied through `GITHUB_TOKEN` instead.
    #[serde(skip_serializing)]
    pub token: Option<String>,
    /// API root for GitHub Enterprise Server.
    pub base_uri: Option<String>,
    pub profile: Profile,
    pub concurrency_limit: usize,
    pub window_days: u32,
    pub login_case: LoginCase,
    pub seats: Option<u32>,
    pub codeql_languages: Vec<String>,
    /// REST calls fail once `x-ratelimit-remaining` drops below this.
    pub min_rate_limit_remaining: u32,
    /// Re-polls of contributor statistics while GitHub answers 202.
    pub stats_retries: u32,
    pub stats_retry_delay_secs: u64,
    pub tracking_issue_label: String,
    pub tracking_issue_title: String,
    pub codeql_pull_request_title: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            owner: String::new(),
            repos: Vec::new(),
            token: None,
            base_uri: None,
            profile: Profile::Simple,
            concurrency_limit: 10,
            window_days: DEFAULT_WINDOW_DAYS,
            login_case: LoginCase::Sensitive,
            seats: None,
            codeql_languages: ["cpp", "csharp", "go", "java", "javascript", "python"]
                .into_iter()
                .map(String::from)
                .collect(),
            min_rate_limit_remaining: 1000,
            stats_retries: 3,
            stats_retry_delay_secs: 2,
            tracking_issue_label: "GHAS".to_string(),
            tracking_issue_title: "GHAS (GitHub Advanced Security) setup for repository"
                .to_string(),
            codeql_pull_request_title: "Create codeql-analysis.yml".to_string(),
        }
    }
}

impl TrackerConfig {
    /// Parse a TOML document. Missing keys take their defaults.
    pub fn from_toml(text: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&text)
    }

    /// Reject configurations a run cannot start with.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.owner.trim().is_empty() {
            return Err(ConfigError::Invalid("owner must not be empty".into()));
        }
        if self.repos.is_empty() {
            return Err(ConfigError::Invalid("repos must list at least one repository".into()));
        }
        if let Some(repo) = self.repos.iter().find(|r| r.trim().is_empty() || r.contains('/')) {
            return Err(ConfigError::Invalid(format!(
                "invalid repository name {repo:?}, expected a bare name"
            )));
        }
        if self.concurrency_limit == 0 {
            return Err(ConfigError::Invalid("concurrency_limit must be at least 1".into()));
        }
        if self.window_days == 0 {
            return Err(ConfigError::Invalid("window_days must be at least 1".into()));
        }
        Ok(())
    }

    #[must_use]
    pub fn stats_retry_delay(&self) -> Duration {
        Duration::from_secs(self.stats_retry_delay_secs)
    }

    /// `org:<owner> is:issue label:<label>`
    #[must_use]
    pub fn tracking_issue_query(&self) -> String {
        format!("org:{} is:issue label:{}", self.owner, self.tracking_issue_label)
    }

    /// `org:<owner> is:pr in:title "<title>"`
    #[must_use]
    pub fn codeql_pull_request_query(&self) -> String {
        format!(
            "org:{} is:pr in:title \"{}\"",
            self.owner, self.codeql_pull_request_title
        )
    }
}
