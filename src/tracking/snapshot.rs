//! Per-repository bundles of fetched API responses.
//!
//! Responses whose shape varies with the feature state are kept as raw
//! JSON and only interpreted by the classifiers.

use crate::tracking::status::FeatureStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Subset of `GET /repos/{owner}/{repo}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryMetadata {
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub default_branch: Option<String>,
    #[serde(default)]
    pub security_and_analysis: Option<SecurityAndAnalysis>,
}

impl RepositoryMetadata {
    #[must_use]
    pub fn advanced_security_enabled(&self) -> bool {
        self.security_and_analysis
            .as_ref()
            .and_then(|s| s.advanced_security.as_ref())
            .is_some_and(SettingStatus::is_enabled)
    }

    #[must_use]
    pub fn secret_scanning_setting_enabled(&self) -> bool {
        self.security_and_analysis
            .as_ref()
            .and_then(|s| s.secret_scanning.as_ref())
            .is_some_and(SettingStatus::is_enabled)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityAndAnalysis {
    #[serde(default)]
    pub advanced_security: Option<SettingStatus>,
    #[serde(default)]
    pub secret_scanning: Option<SettingStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingStatus {
    #[serde(default)]
    pub status: Option<String>,
}

impl SettingStatus {
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.status.as_deref() == Some("enabled")
    }
}

/// Everything fetched for one repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositorySnapshot {
    pub repo: String,
    pub repository: RepositoryMetadata,
    pub contributors: Value,
    pub code_scanning: Value,
    pub dependabot: Value,
    pub secret_scanning: Value,
    #[serde(default)]
    pub extras: Option<RepositoryExtras>,
}

/// Additional per-repository data fetched by the full profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepositoryExtras {
    pub teams: Vec<String>,
    /// Language name to bytes of code.
    pub languages: BTreeMap<String, u64>,
    pub build: BuildSystems,
    pub dependabot_config: bool,
    /// Decoded `.github/workflows/codeql-analysis.yml`, when present.
    pub codeql_analysis_yml: Option<String>,
    pub workflows: Vec<WorkflowSummary>,
    /// `patterns_allowed` of the selected-actions policy, absent when the
    /// repository does not restrict actions.
    pub allowed_action_patterns: Option<Vec<String>>,
    pub vulnerability_alerts: FeatureStatus,
}

/// CI configuration files found at the repository root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildSystems {
    pub travis: bool,
    pub circleci: bool,
    pub codebuild: bool,
    pub makefile: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRef {
    pub name: String,
}

/// Entry of `GET /repos/{owner}/{repo}/actions/workflows`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowSummary {
    pub name: String,
    pub path: String,
    pub state: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowList {
    #[serde(default)]
    pub workflows: Vec<WorkflowSummary>,
}

/// Body of `GET /repos/{owner}/{repo}/actions/permissions/selected-actions`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedActions {
    #[serde(default)]
    pub patterns_allowed: Option<Vec<String>>,
}

/// An issue or pull request found by an organization-wide search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingItem {
    pub repository_url: String,
    pub number: u64,
    pub title: String,
    pub state: String,
    pub user: String,
    pub assignees: Vec<String>,
    pub comments: u32,
    pub updated_at: DateTime<Utc>,
}

/// GHAS tracking issues and CodeQL setup pull requests of the organization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingSearch {
    pub issues: Vec<TrackingItem>,
    pub pull_requests: Vec<TrackingItem>,
}

/// One run's worth of fetched data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizationSnapshot {
    pub owner: String,
    pub repositories: Vec<RepositorySnapshot>,
    #[serde(default)]
    pub tracking: Option<TrackingSearch>,
}
