//! Contributor commit activity statistics.

use crate::github::raw::{RateLimitGuard, get_raw, repo_route};
use crate::github::{error::GitHubError, util::spawn_task};
use crate::runtime::AsyncTask;
use log::info;
use octocrab::Octocrab;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// GitHub is still computing the statistics.
const STATS_PENDING: u16 = 202;

/// Get all contributor commit activity, re-polling while GitHub answers 202.
///
/// The last body is returned as is once `retries` are spent; the caller
/// decides what a non-array body means.
pub(crate) fn get_contributor_stats(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    guard: RateLimitGuard,
    retries: u32,
    delay: Duration,
) -> AsyncTask<Result<Value, GitHubError>> {
    let (owner, repo) = (owner.into(), repo.into());

    spawn_task(format!("{owner}/{repo} contributor statistics"), async move {
        let route = repo_route(&owner, &repo, "/stats/contributors");
        let mut attempt = 0;
        loop {
            let raw = get_raw(&inner, &route, guard).await?;
            if raw.status != STATS_PENDING || attempt >= retries {
                return Ok(raw.body);
            }
            attempt += 1;
            info!("{owner}/{repo} contributor statistics pending, retry {attempt}/{retries} in {delay:?}");
            tokio::time::sleep(delay).await;
        }
    })
}
