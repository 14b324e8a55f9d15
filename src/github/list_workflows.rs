//! GitHub Actions workflows operation.

use crate::github::raw::{RateLimitGuard, get_raw, repo_route};
use crate::github::{error::GitHubError, util::spawn_task};
use crate::runtime::AsyncTask;
use crate::tracking::snapshot::{WorkflowList, WorkflowSummary};
use octocrab::Octocrab;
use std::sync::Arc;

/// List repository workflows.
pub(crate) fn list_workflows(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    guard: RateLimitGuard,
) -> AsyncTask<Result<Vec<WorkflowSummary>, GitHubError>> {
    let (owner, repo) = (owner.into(), repo.into());

    spawn_task(format!("{owner}/{repo} workflows"), async move {
        let route = repo_route(&owner, &repo, "/actions/workflows?per_page=100");
        let list: WorkflowList = get_raw(&inner, &route, guard).await?.json(&route)?;
        Ok(list.workflows)
    })
}
