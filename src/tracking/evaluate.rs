//! Entry point: snapshots in, report out.

use crate::config::TrackerConfig;
use crate::tracking::aggregate::{OrganizationSummary, RepositoryStatus};
use crate::tracking::classify::{classify_code_scanning, classify_dependabot, classify_secret_scanning};
use crate::tracking::contributors::{ContributorWindow, parse_contributors};
use crate::tracking::error::ClassifyResult;
use crate::tracking::extras::{ExtrasStatus, TrackingTitles};
use crate::tracking::snapshot::{OrganizationSnapshot, RepositorySnapshot, TrackingSearch};
use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

/// Inputs of an evaluation besides the snapshots themselves.
#[derive(Debug, Clone)]
pub struct EvaluationOptions {
    /// Reference instant for the contributor window.
    pub now: DateTime<Utc>,
    pub window: ContributorWindow,
    pub seats: Option<u32>,
    /// CodeQL-supported languages, lowercase.
    pub codeql_languages: Vec<String>,
    pub titles: TrackingTitles,
}

impl EvaluationOptions {
    #[must_use]
    pub fn from_config(config: &TrackerConfig, now: DateTime<Utc>) -> Self {
        Self {
            now,
            window: ContributorWindow::new(config.window_days).with_case(config.login_case),
            seats: config.seats,
            codeql_languages: config
                .codeql_languages
                .iter()
                .map(|l| l.to_lowercase())
                .collect(),
            titles: TrackingTitles {
                issue: config.tracking_issue_title.clone(),
                pull_request: config.codeql_pull_request_title.clone(),
            },
        }
    }
}

/// Result of one run, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub owner: String,
    pub repositories: Vec<RepositoryStatus>,
    pub summary: OrganizationSummary,
}

/// Classify one repository.
pub fn evaluate_repository(
    snapshot: &RepositorySnapshot,
    tracking: Option<&TrackingSearch>,
    options: &EvaluationOptions,
) -> ClassifyResult<RepositoryStatus> {
    let repo = snapshot.repo.as_str();
    debug!("classifying {repo}");

    let code_scanning = classify_code_scanning(repo, &snapshot.code_scanning)?;
    let dependabot = classify_dependabot(repo, &snapshot.dependabot)?;
    let secret_scanning = classify_secret_scanning(repo, &snapshot.secret_scanning)?;
    let contributors = parse_contributors(repo, &snapshot.contributors)?;

    let extras = snapshot
        .extras
        .as_ref()
        .map(|extras| {
            ExtrasStatus::derive(
                repo,
                snapshot.repository.default_branch.clone(),
                extras,
                &options.codeql_languages,
                tracking,
                &options.titles,
            )
        })
        .transpose()?;

    Ok(RepositoryStatus {
        repo: snapshot.repo.clone(),
        public: !snapshot.repository.private,
        code_scanning,
        dependabot,
        secret_scanning,
        advanced_security: snapshot.repository.advanced_security_enabled(),
        secret_scanning_setting: snapshot.repository.secret_scanning_setting_enabled(),
        contributors: options.window.active_logins(&contributors, options.now),
        extras,
    })
}

/// Classify every repository and aggregate; the first failure aborts.
pub fn evaluate(snapshot: &OrganizationSnapshot, options: &EvaluationOptions) -> ClassifyResult<Report> {
    let repositories = snapshot
        .repositories
        .iter()
        .map(|repo| evaluate_repository(repo, snapshot.tracking.as_ref(), options))
        .collect::<ClassifyResult<Vec<_>>>()?;

    let summary = OrganizationSummary::from_statuses(&repositories, options.window.case, options.seats)
        .with_tracking_issue_states(&repositories, snapshot.tracking.as_ref());

    Ok(Report {
        generated_at: options.now,
        owner: snapshot.owner.clone(),
        repositories,
        summary,
    })
}
