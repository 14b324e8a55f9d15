//! GitHub File contents retrieval operation.

use crate::github::raw::{RateLimitGuard, get_raw, repo_route};
use crate::github::{error::GitHubError, util::spawn_task};
use crate::runtime::AsyncTask;
use octocrab::{Octocrab, models::repos::Content};
use serde_json::Value;
use std::sync::Arc;

/// Retrieve a file on the default branch; `None` when GitHub answers 404.
///
/// A directory path yields its first entry.
pub(crate) fn get_file_contents(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    path: impl Into<String>,
    guard: RateLimitGuard,
) -> AsyncTask<Result<Option<Content>, GitHubError>> {
    let (owner, repo, path) = (owner.into(), repo.into(), path.into());

    spawn_task(format!("{owner}/{repo} {path}"), async move {
        let encoded: Vec<_> = path.split('/').map(urlencoding::encode).collect();
        let route = repo_route(&owner, &repo, &format!("/contents/{}", encoded.join("/")));

        let body: Value = match get_raw(&inner, &route, guard).await?.json(&route) {
            Ok(body) => body,
            Err(e) if e.is_not_found() => return Ok(None),
            Err(e) => return Err(e),
        };
        let first = match body {
            Value::Array(entries) => entries.into_iter().next(),
            entry => Some(entry),
        };
        first
            .map(serde_json::from_value::<Content>)
            .transpose()
            .map_err(|source| GitHubError::Json { route, source })
    })
}
