//! Full-profile derivations: CodeQL setup, allowed actions, tracking items.

use crate::tracking::error::{ClassifyError, ClassifyResult};
use crate::tracking::snapshot::{BuildSystems, RepositoryExtras, TrackingItem, TrackingSearch};
use crate::tracking::status::FeatureStatus;
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const CODEQL_WORKFLOW_NAME: &str = "CodeQL";
pub const CODEQL_WORKFLOW_PATH: &str = ".github/workflows/codeql-analysis.yml";
pub const CHECKOUT_ACTION_PATTERN: &str = "actions/checkout@*";
pub const CODEQL_ACTION_PATTERN: &str = "github/codeql-action/*";

/// Languages listed under `jobs.<job>.strategy.matrix.language` of a
/// CodeQL workflow, in first-seen order.
pub fn codeql_matrix_languages(yaml: &str) -> Result<Vec<String>, serde_yaml::Error> {
    let doc: serde_yaml::Value = serde_yaml::from_str(yaml)?;
    let mut languages: Vec<String> = Vec::new();

    let Some(jobs) = doc.get("jobs").and_then(serde_yaml::Value::as_mapping) else {
        return Ok(languages);
    };

    for (_, job) in jobs {
        let matrix = job
            .get("strategy")
            .and_then(|s| s.get("matrix"))
            .and_then(|m| m.get("language"))
            .and_then(serde_yaml::Value::as_sequence);
        for language in matrix.into_iter().flatten().filter_map(serde_yaml::Value::as_str) {
            if !languages.iter().any(|l| l == language) {
                languages.push(language.to_string());
            }
        }
    }
    Ok(languages)
}

/// CodeQL-supported languages the repository uses but the workflow matrix omits.
///
/// Empty when the matrix itself is empty: no workflow means nothing to compare.
#[must_use]
pub fn missing_codeql_languages(
    supported: &[String],
    repository_languages: &BTreeMap<String, u64>,
    configured: &[String],
) -> Vec<String> {
    if configured.is_empty() {
        return Vec::new();
    }
    let used: Vec<String> = repository_languages.keys().map(|l| l.to_lowercase()).collect();
    supported
        .iter()
        .filter(|language| used.contains(language))
        .filter(|language| !configured.contains(language))
        .cloned()
        .collect()
}

/// Whether the selected-actions policy allows both checkout and CodeQL actions.
#[must_use]
pub fn ghas_actions_allowed(patterns: Option<&[String]>) -> bool {
    patterns.is_some_and(|p| {
        p.iter().any(|s| s == CHECKOUT_ACTION_PATTERN) && p.iter().any(|s| s == CODEQL_ACTION_PATTERN)
    })
}

/// `GET /repos/{owner}/{repo}/vulnerability-alerts` answers 204 or 404.
#[must_use]
pub const fn vulnerability_alerts_status(http_status: u16) -> FeatureStatus {
    match http_status {
        204 => FeatureStatus::Enabled,
        404 => FeatureStatus::Disabled,
        _ => FeatureStatus::Unknown,
    }
}

/// Whether `repository_url` points at `repo`.
#[must_use]
pub fn belongs_to(item: &TrackingItem, repo: &str) -> bool {
    item.repository_url
        .strip_suffix(repo)
        .is_some_and(|prefix| prefix.ends_with('/'))
}

/// The search hit for `repo`, warning when it is ambiguous or mistitled.
pub fn match_tracking_item<'a>(
    items: &'a [TrackingItem],
    repo: &str,
    expected_title: &str,
    kind: &str,
) -> Option<&'a TrackingItem> {
    let matches: Vec<&TrackingItem> = items.iter().filter(|i| belongs_to(i, repo)).collect();
    if matches.len() > 1 {
        warn!("repo {repo} has {} {kind}s instead of 1", matches.len());
    }
    let first = matches.first().copied()?;
    if first.title != expected_title {
        warn!("repo {repo} {kind} {} has different title, {}", first.number, first.title);
    }
    Some(first)
}

/// Titles the tracking search results are expected to carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackingTitles {
    pub issue: String,
    pub pull_request: String,
}

/// Derived full-profile columns of one repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtrasStatus {
    pub default_branch: Option<String>,
    pub teams: Vec<String>,
    pub languages: BTreeMap<String, u64>,
    pub build: BuildSystems,
    pub dependabot_config: bool,
    pub codeql_file: bool,
    pub codeql_languages: Vec<String>,
    pub missing_codeql_languages: Vec<String>,
    pub codeql_workflow: bool,
    pub allowed_action_patterns: Option<Vec<String>>,
    pub ghas_actions_allowed: bool,
    pub vulnerability_alerts: FeatureStatus,
    pub tracking_issue: Option<TrackingItem>,
    pub codeql_pull_request: Option<TrackingItem>,
}

impl ExtrasStatus {
    /// Derive the columns from the fetched extras.
    pub fn derive(
        repo: &str,
        default_branch: Option<String>,
        extras: &RepositoryExtras,
        supported_languages: &[String],
        tracking: Option<&TrackingSearch>,
        titles: &TrackingTitles,
    ) -> ClassifyResult<Self> {
        let codeql_languages = match &extras.codeql_analysis_yml {
            Some(yaml) => codeql_matrix_languages(yaml).map_err(|e| {
                ClassifyError::malformed(repo, "codeql-analysis.yml", &e)
            })?,
            None => Vec::new(),
        };
        let missing =
            missing_codeql_languages(supported_languages, &extras.languages, &codeql_languages);
        let codeql_workflow = extras.workflows.iter().any(|w| {
            w.name == CODEQL_WORKFLOW_NAME && w.path == CODEQL_WORKFLOW_PATH && w.state == "active"
        });

        let tracking_issue = tracking
            .and_then(|t| match_tracking_item(&t.issues, repo, &titles.issue, "issue"))
            .cloned();
        let codeql_pull_request = tracking
            .and_then(|t| {
                match_tracking_item(&t.pull_requests, repo, &titles.pull_request, "pull request")
            })
            .cloned();

        Ok(Self {
            default_branch,
            teams: extras.teams.clone(),
            languages: extras.languages.clone(),
            build: extras.build,
            dependabot_config: extras.dependabot_config,
            codeql_file: extras.codeql_analysis_yml.is_some(),
            codeql_languages,
            missing_codeql_languages: missing,
            codeql_workflow,
            ghas_actions_allowed: ghas_actions_allowed(extras.allowed_action_patterns.as_deref()),
            allowed_action_patterns: extras.allowed_action_patterns.clone(),
            vulnerability_alerts: extras.vulnerability_alerts,
            tracking_issue,
            codeql_pull_request,
        })
    }

    /// Number of green checks contributed by the full-profile columns.
    #[must_use]
    pub fn checks_passed(&self) -> usize {
        let closed = |item: &Option<TrackingItem>| item.as_ref().is_some_and(|i| i.state == "closed");
        [
            closed(&self.tracking_issue),
            closed(&self.codeql_pull_request),
            self.vulnerability_alerts.is_enabled(),
            self.allowed_action_patterns.is_some(),
            self.codeql_workflow,
            self.codeql_file,
        ]
        .into_iter()
        .filter(|ok| *ok)
        .count()
    }
}
