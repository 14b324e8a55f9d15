//! GitHub Issues search operation.

use crate::github::error::GitHubError;
use crate::runtime::{AsyncStream, PageSink};
use crate::tracking::snapshot::TrackingItem;
use log::{debug, warn};
use octocrab::{
    Octocrab, Page,
    models::{IssueState, issues::Issue},
};
use std::sync::Arc;

/// Search issues and pull requests, following every result page.
///
/// Items are streamed as each page arrives.
pub(crate) fn search_issues(
    inner: Arc<Octocrab>,
    query: impl Into<String>,
    per_page: Option<u8>,
) -> AsyncStream<Result<TrackingItem, GitHubError>> {
    let q = query.into();
    AsyncStream::paged(move |sink| follow_pages(inner, q, per_page.unwrap_or(100), sink))
}

async fn follow_pages(
    inner: Arc<Octocrab>,
    q: String,
    per_page: u8,
    sink: PageSink<TrackingItem, GitHubError>,
) -> Result<(), GitHubError> {
    let mut page: Page<Issue> = inner
        .search()
        .issues_and_pull_requests(&q)
        .per_page(per_page)
        .send()
        .await
        .map_err(|e| {
            warn!("issue search failed: {e}");
            GitHubError::from(e)
        })?;

    loop {
        debug!("search {q:?}: {} items", page.items.len());
        if !sink.send_page(page.items.drain(..).map(tracking_item)) {
            return Ok(());
        }
        match inner.get_page::<Issue>(&page.next).await? {
            Some(next) => page = next,
            None => return Ok(()),
        }
    }
}

fn tracking_item(issue: Issue) -> TrackingItem {
    let state = match issue.state {
        IssueState::Open => "open",
        IssueState::Closed => "closed",
        _ => "unknown",
    };
    TrackingItem {
        repository_url: issue.repository_url.to_string(),
        number: issue.number,
        title: issue.title,
        state: state.to_string(),
        user: issue.user.login,
        assignees: issue.assignees.into_iter().map(|a| a.login).collect(),
        comments: issue.comments,
        updated_at: issue.updated_at,
    }
}
