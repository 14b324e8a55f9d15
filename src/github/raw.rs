//! Raw REST responses.
//!
//! Several endpoints encode the feature state in the error body itself
//! (e.g. `{"message": "no analysis found"}`), so these calls keep the body
//! and the status code whatever the outcome instead of turning non-2xx
//! answers into errors.

use crate::github::error::{GitHubError, GitHubResult};
use log::debug;
use octocrab::Octocrab;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

const RATE_LIMIT_REMAINING_HEADER: &str = "x-ratelimit-remaining";

/// Status, body and rate-limit header of one REST call.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    /// Parsed JSON body; `Null` for empty bodies such as `204 No Content`.
    pub body: Value,
    pub rate_limit_remaining: Option<u32>,
}

impl RawResponse {
    /// `message` of an error body.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.body.get("message").and_then(Value::as_str)
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turn a non-2xx answer into [`GitHubError::Api`].
    pub fn error_for_status(self, route: &str) -> GitHubResult<Self> {
        if self.is_success() {
            return Ok(self);
        }
        Err(GitHubError::Api {
            route: route.to_string(),
            status: self.status,
            message: self.message().unwrap_or_default().to_string(),
        })
    }

    /// Deserialize the body of a 2xx answer.
    pub fn json<T: DeserializeOwned>(self, route: &str) -> GitHubResult<T> {
        let ok = self.error_for_status(route)?;
        serde_json::from_value(ok.body).map_err(|source| GitHubError::Json {
            route: route.to_string(),
            source,
        })
    }
}

/// Stops the run before the rate limit is exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitGuard {
    pub min_remaining: u32,
}

impl Default for RateLimitGuard {
    fn default() -> Self {
        Self { min_remaining: 1000 }
    }
}

impl RateLimitGuard {
    /// Fail when the reported remaining budget is under the floor.
    pub fn check(&self, remaining: Option<u32>) -> GitHubResult<()> {
        match remaining {
            Some(remaining) if remaining < self.min_remaining => {
                Err(GitHubError::RateLimitExceeded(format!(
                    "{RATE_LIMIT_REMAINING_HEADER}: {remaining}"
                )))
            }
            _ => Ok(()),
        }
    }
}

/// Build `/repos/{owner}/{repo}{suffix}` with encoded path segments.
#[must_use]
pub fn repo_route(owner: &str, repo: &str, suffix: &str) -> String {
    format!(
        "/repos/{}/{}{suffix}",
        urlencoding::encode(owner),
        urlencoding::encode(repo)
    )
}

/// Issue `GET route` and keep the answer whatever its status.
pub(crate) async fn get_raw(
    inner: &Octocrab,
    route: &str,
    guard: RateLimitGuard,
) -> GitHubResult<RawResponse> {
    debug!("GET {route}");
    let response = inner._get(route).await?;
    let status = response.status().as_u16();
    let remaining = response
        .headers()
        .get(RATE_LIMIT_REMAINING_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u32>().ok());
    let text = inner.body_to_string(response).await?;
    finish(route, status, remaining, &text, guard)
}

/// Issue `POST route` with a JSON body and keep the answer whatever its status.
pub(crate) async fn post_raw<B>(
    inner: &Octocrab,
    route: &str,
    body: &B,
    guard: RateLimitGuard,
) -> GitHubResult<RawResponse>
where
    B: Serialize + ?Sized,
{
    debug!("POST {route}");
    let response = inner._post(route, Some(body)).await?;
    let status = response.status().as_u16();
    let remaining = response
        .headers()
        .get(RATE_LIMIT_REMAINING_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u32>().ok());
    let text = inner.body_to_string(response).await?;
    finish(route, status, remaining, &text, guard)
}

fn finish(
    route: &str,
    status: u16,
    rate_limit_remaining: Option<u32>,
    text: &str,
    guard: RateLimitGuard,
) -> GitHubResult<RawResponse> {
    let body = if text.trim().is_empty() {
        Value::Null
    } else {
        serde_json::from_str(text).map_err(|source| GitHubError::Json {
            route: route.to_string(),
            source,
        })?
    };

    let raw = RawResponse {
        status,
        body,
        rate_limit_remaining,
    };

    if let Some(fatal) = raw.message().and_then(GitHubError::from_fatal_message) {
        return Err(fatal);
    }
    guard.check(raw.rate_limit_remaining)?;

    Ok(raw)
}
