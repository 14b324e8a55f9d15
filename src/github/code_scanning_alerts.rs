//! GitHub code scanning alerts operation.

use crate::github::raw::{RateLimitGuard, RawResponse, get_raw, repo_route};
use crate::github::{error::GitHubError, util::spawn_task};
use crate::runtime::AsyncTask;
use octocrab::Octocrab;
use std::sync::Arc;

/// List code scanning alerts for a repository, keeping error bodies.
///
/// Without Advanced Security, or before the first analysis upload, GitHub
/// answers with an error message instead of an alert list.
pub(crate) fn list_code_scanning_alerts(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    guard: RateLimitGuard,
) -> AsyncTask<Result<RawResponse, GitHubError>> {
    let (owner, repo) = (owner.into(), repo.into());

    spawn_task(format!("{owner}/{repo} code scanning alerts"), async move {
        let route = repo_route(&owner, &repo, "/code-scanning/alerts");
        get_raw(&inner, &route, guard).await
    })
}
