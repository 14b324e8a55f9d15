//! Repository languages operation.

use crate::github::raw::{RateLimitGuard, get_raw, repo_route};
use crate::github::{error::GitHubError, util::spawn_task};
use crate::runtime::AsyncTask;
use octocrab::Octocrab;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Bytes of code per language.
pub(crate) fn list_languages(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    guard: RateLimitGuard,
) -> AsyncTask<Result<BTreeMap<String, u64>, GitHubError>> {
    let (owner, repo) = (owner.into(), repo.into());

    spawn_task(format!("{owner}/{repo} languages"), async move {
        let route = repo_route(&owner, &repo, "/languages");
        get_raw(&inner, &route, guard).await?.json(&route)
    })
}
