//! Vulnerability alerts setting operation.

use crate::github::raw::{RateLimitGuard, get_raw, repo_route};
use crate::github::{error::GitHubError, util::spawn_task};
use crate::runtime::AsyncTask;
use octocrab::Octocrab;
use std::sync::Arc;

/// HTTP status of the "check if vulnerability alerts are enabled" endpoint.
///
/// 204 means enabled and 404 disabled; the body carries nothing else.
pub(crate) fn check_vulnerability_alerts(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    guard: RateLimitGuard,
) -> AsyncTask<Result<u16, GitHubError>> {
    let (owner, repo) = (owner.into(), repo.into());

    spawn_task(format!("{owner}/{repo} vulnerability alerts"), async move {
        let route = repo_route(&owner, &repo, "/vulnerability-alerts");
        let raw = get_raw(&inner, &route, guard).await?;
        Ok(raw.status)
    })
}
