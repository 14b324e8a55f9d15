//! Allowed actions policy operation.

use crate::github::raw::{RateLimitGuard, get_raw, repo_route};
use crate::github::{error::GitHubError, util::spawn_task};
use crate::runtime::AsyncTask;
use crate::tracking::snapshot::SelectedActions;
use octocrab::Octocrab;
use std::sync::Arc;

/// `patterns_allowed` of the repository's selected-actions policy.
///
/// GitHub answers with an error when the repository does not use the
/// "selected actions" policy; that is reported as `None`.
pub(crate) fn get_allowed_action_patterns(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    guard: RateLimitGuard,
) -> AsyncTask<Result<Option<Vec<String>>, GitHubError>> {
    let (owner, repo) = (owner.into(), repo.into());

    spawn_task(format!("{owner}/{repo} selected actions"), async move {
        let route = repo_route(&owner, &repo, "/actions/permissions/selected-actions");
        let raw = get_raw(&inner, &route, guard).await?;
        if !raw.is_success() {
            return Ok(None);
        }
        let policy: SelectedActions =
            serde_json::from_value(raw.body).map_err(|source| GitHubError::Json { route, source })?;
        Ok(policy.patterns_allowed)
    })
}
