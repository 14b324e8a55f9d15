//! Dependabot vulnerability alerts through the GraphQL API.

use crate::github::raw::{RateLimitGuard, post_raw};
use crate::github::{error::GitHubError, util::spawn_task};
use crate::runtime::AsyncTask;
use octocrab::Octocrab;
use serde_json::{Value, json};
use std::sync::Arc;

/// First page of a repository's `vulnerabilityAlerts`.
pub const VULNERABILITY_ALERTS_QUERY: &str = r"query($owner: String!, $name: String!) {
  repository(owner: $owner, name: $name) {
    isPrivate
    vulnerabilityAlerts(first: 100) {
      nodes {
        createdAt
        dismissedAt
        securityVulnerability {
          package { name }
          advisory { description }
        }
      }
    }
  }
}";

const GRAPHQL_ROUTE: &str = "/graphql";

/// Fetch the raw GraphQL response for a repository's Dependabot alerts.
///
/// GraphQL reports query errors in a 200 body, which is returned as is.
pub(crate) fn get_dependabot_alerts(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    guard: RateLimitGuard,
) -> AsyncTask<Result<Value, GitHubError>> {
    let (owner, repo) = (owner.into(), repo.into());

    spawn_task(format!("{owner}/{repo} vulnerabilityAlerts"), async move {
        let payload = json!({
            "query": VULNERABILITY_ALERTS_QUERY,
            "variables": { "owner": owner, "name": repo },
        });
        let raw = post_raw(&inner, GRAPHQL_ROUTE, &payload, guard).await?;
        Ok(raw.error_for_status(GRAPHQL_ROUTE)?.body)
    })
}
