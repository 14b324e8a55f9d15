//! GHAS adoption tracker command-line interface.
//!
//! Fetches every configured repository of an organization and prints the
//! adoption report.

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, ValueEnum};
use env_logger::Env;
use ghas_tracker::{
    EvaluationOptions, GitHubClient, LoginCase, OutputFormat, Profile, SnapshotCollector,
    TrackerConfig, evaluate, render,
};
use log::info;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ghas-tracker", version, about = "GitHub Advanced Security adoption tracker")]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Organization owning the repositories.
    #[arg(long)]
    owner: Option<String>,
    /// Repository to track (repeatable; replaces the configured list).
    #[arg(long = "repo")]
    repos: Vec<String>,
    /// Personal access token.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,
    /// Report profile.
    #[arg(long, value_enum)]
    profile: Option<ProfileArg>,
    /// Output format.
    #[arg(long, value_enum, default_value_t = FormatArg::Text)]
    format: FormatArg,
    /// Write the report to a file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Treat contributor logins differing only by case as one person.
    #[arg(long)]
    case_insensitive_logins: bool,
}

#[derive(ValueEnum, Copy, Clone, Debug, Eq, PartialEq)]
enum ProfileArg {
    Simple,
    Full,
}

impl From<ProfileArg> for Profile {
    fn from(value: ProfileArg) -> Self {
        match value {
            ProfileArg::Simple => Self::Simple,
            ProfileArg::Full => Self::Full,
        }
    }
}

#[derive(ValueEnum, Copy, Clone, Debug, Eq, PartialEq)]
enum FormatArg {
    Text,
    Html,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Text => Self::Text,
            FormatArg::Html => Self::Html,
            FormatArg::Json => Self::Json,
        }
    }
}

impl Cli {
    fn into_config(self) -> Result<(TrackerConfig, OutputFormat, Option<PathBuf>)> {
        let mut config = match &self.config {
            Some(path) => TrackerConfig::load(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => TrackerConfig::default(),
        };
        if let Some(owner) = self.owner {
            config.owner = owner;
        }
        if !self.repos.is_empty() {
            config.repos = self.repos;
        }
        if self.token.is_some() {
            config.token = self.token;
        }
        if let Some(profile) = self.profile {
            config.profile = profile.into();
        }
        if self.case_insensitive_logins {
            config.login_case = LoginCase::Insensitive;
        }
        config.validate()?;
        Ok((config, self.format.into(), self.output))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let _ = rustls::crypto::ring::default_provider().install_default();

    let (config, format, output) = Cli::parse().into_config()?;

    let mut builder = GitHubClient::builder()
        .min_rate_limit_remaining(config.min_rate_limit_remaining);
    if let Some(token) = &config.token {
        builder = builder.personal_token(token.clone());
    }
    if let Some(base_uri) = &config.base_uri {
        builder = builder.base_uri(base_uri.clone());
    }
    let client = builder.build().context("creating GitHub client")?;

    let collector = SnapshotCollector::new(client, config);
    let snapshot = collector.collect().await?;
    let options = EvaluationOptions::from_config(collector.config(), Utc::now());
    let report = evaluate(&snapshot, &options)?;
    let rendered = render(&report, format)?;

    match output {
        Some(path) => {
            tokio::fs::write(&path, rendered)
                .await
                .with_context(|| format!("writing {}", path.display()))?;
            info!("report written to {}", path.display());
        }
        None => print!("{rendered}"),
    }
    Ok(())
}
