//! Repository metadata operation.

use crate::github::raw::{RateLimitGuard, get_raw, repo_route};
use crate::github::{error::GitHubError, util::spawn_task};
use crate::runtime::AsyncTask;
use crate::tracking::snapshot::RepositoryMetadata;
use octocrab::Octocrab;
use std::sync::Arc;

/// Get a repository's visibility, default branch and security settings.
pub(crate) fn get_repository(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    guard: RateLimitGuard,
) -> AsyncTask<Result<RepositoryMetadata, GitHubError>> {
    let (owner, repo) = (owner.into(), repo.into());

    spawn_task(format!("{owner}/{repo} repository"), async move {
        let route = repo_route(&owner, &repo, "");
        get_raw(&inner, &route, guard).await?.json(&route)
    })
}
