//! Repository teams operation.

use crate::github::raw::{RateLimitGuard, get_raw, repo_route};
use crate::github::{error::GitHubError, util::spawn_task};
use crate::runtime::AsyncTask;
use crate::tracking::snapshot::TeamRef;
use octocrab::Octocrab;
use std::sync::Arc;

/// List the names of the teams with access to a repository.
pub(crate) fn list_repository_teams(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    guard: RateLimitGuard,
) -> AsyncTask<Result<Vec<String>, GitHubError>> {
    let (owner, repo) = (owner.into(), repo.into());

    spawn_task(format!("{owner}/{repo} teams"), async move {
        let route = repo_route(&owner, &repo, "/teams?per_page=100");
        let teams: Vec<TeamRef> = get_raw(&inner, &route, guard).await?.json(&route)?;
        Ok(teams.into_iter().map(|t| t.name).collect())
    })
}
