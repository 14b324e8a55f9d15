//! Issues API methods

use super::GitHubClient;
use crate::github::error::GitHubError;
use crate::runtime::AsyncStream;
use crate::tracking::snapshot::TrackingItem;

impl GitHubClient {
    /// Search issues and pull requests across every result page
    pub fn search_issues(
        &self,
        query: impl Into<String>,
        per_page: Option<u8>,
    ) -> AsyncStream<Result<TrackingItem, GitHubError>> {
        crate::github::search_issues::search_issues(self.inner.clone(), query, per_page)
    }
}
