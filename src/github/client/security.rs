//! Security API methods (code scanning, secret scanning, Dependabot)

use super::GitHubClient;
use crate::github::error::GitHubError;
use crate::github::raw::RawResponse;
use crate::runtime::AsyncTask;

impl GitHubClient {
    /// List code scanning alerts, keeping error bodies
    pub fn list_code_scanning_alerts(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> AsyncTask<Result<RawResponse, GitHubError>> {
        crate::github::code_scanning_alerts::list_code_scanning_alerts(
            self.inner.clone(),
            owner,
            repo,
            self.guard,
        )
    }

    /// List secret scanning alerts, keeping error bodies
    pub fn list_secret_scanning_alerts(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> AsyncTask<Result<RawResponse, GitHubError>> {
        crate::github::secret_scanning_alerts::list_secret_scanning_alerts(
            self.inner.clone(),
            owner,
            repo,
            self.guard,
        )
    }

    /// Dependabot vulnerability alerts (GraphQL response)
    pub fn get_dependabot_alerts(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> AsyncTask<Result<serde_json::Value, GitHubError>> {
        crate::github::dependabot_alerts::get_dependabot_alerts(
            self.inner.clone(),
            owner,
            repo,
            self.guard,
        )
    }

    /// HTTP status of the vulnerability alerts setting check
    pub fn check_vulnerability_alerts(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> AsyncTask<Result<u16, GitHubError>> {
        crate::github::vulnerability_alerts::check_vulnerability_alerts(
            self.inner.clone(),
            owner,
            repo,
            self.guard,
        )
    }
}
