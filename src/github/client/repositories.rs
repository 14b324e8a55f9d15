//! Repositories API methods

use super::GitHubClient;
use crate::github::error::GitHubError;
use crate::runtime::AsyncTask;
use crate::tracking::snapshot::{RepositoryMetadata, WorkflowSummary};
use std::collections::BTreeMap;
use std::time::Duration;

impl GitHubClient {
    /// Get repository metadata
    pub fn get_repository(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> AsyncTask<Result<RepositoryMetadata, GitHubError>> {
        crate::github::get_repository::get_repository(self.inner.clone(), owner, repo, self.guard)
    }

    /// Get contributor commit activity, re-polling while it is being computed
    pub fn get_contributor_stats(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        retries: u32,
        delay: Duration,
    ) -> AsyncTask<Result<serde_json::Value, GitHubError>> {
        crate::github::contributor_stats::get_contributor_stats(
            self.inner.clone(),
            owner,
            repo,
            self.guard,
            retries,
            delay,
        )
    }

    /// Get file contents; `None` when the file does not exist
    pub fn get_file_contents(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        path: impl Into<String>,
    ) -> AsyncTask<Result<Option<octocrab::models::repos::Content>, GitHubError>> {
        crate::github::get_file_contents::get_file_contents(
            self.inner.clone(),
            owner,
            repo,
            path,
            self.guard,
        )
    }

    /// List team names with access to the repository
    pub fn list_repository_teams(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> AsyncTask<Result<Vec<String>, GitHubError>> {
        crate::github::list_repository_teams::list_repository_teams(
            self.inner.clone(),
            owner,
            repo,
            self.guard,
        )
    }

    /// List repository languages (bytes per language)
    pub fn list_languages(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> AsyncTask<Result<BTreeMap<String, u64>, GitHubError>> {
        crate::github::list_languages::list_languages(self.inner.clone(), owner, repo, self.guard)
    }

    /// List GitHub Actions workflows
    pub fn list_workflows(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> AsyncTask<Result<Vec<WorkflowSummary>, GitHubError>> {
        crate::github::list_workflows::list_workflows(self.inner.clone(), owner, repo, self.guard)
    }

    /// Allowed action patterns of the selected-actions policy
    pub fn get_allowed_action_patterns(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> AsyncTask<Result<Option<Vec<String>>, GitHubError>> {
        crate::github::selected_actions::get_allowed_action_patterns(
            self.inner.clone(),
            owner,
            repo,
            self.guard,
        )
    }
}
