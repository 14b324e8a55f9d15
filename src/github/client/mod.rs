//! GitHub API client wrapper
//!
//! Provides the endpoint calls the tracker needs without exposing Octocrab.
//!
//! # Examples
//!
//! ```rust,no_run
//! use ghas_tracker::GitHubClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let gh = GitHubClient::with_token("ghp_...")?;
//!
//!     let body = gh.list_code_scanning_alerts("acme", "widgets").await??;
//!     println!("{}", body.body);
//!
//!     Ok(())
//! }
//! ```

use crate::github::error::{GitHubError, GitHubResult};
use crate::github::raw::RateLimitGuard;
use octocrab::Octocrab;
use std::sync::Arc;

mod issues;
mod repositories;
mod security;

/// GitHub API client wrapper that encapsulates Octocrab.
///
/// Cloning is cheap (Arc clone).
#[derive(Clone, Debug)]
pub struct GitHubClient {
    inner: Arc<Octocrab>,
    guard: RateLimitGuard,
}

impl GitHubClient {
    /// Create a new client builder
    #[must_use]
    pub fn builder() -> GitHubClientBuilder {
        GitHubClientBuilder::new()
    }

    /// Convenience: create client with personal access token
    pub fn with_token(token: impl Into<String>) -> GitHubResult<Self> {
        Self::builder().personal_token(token).build()
    }
}

/// Builder for creating `GitHubClient`
pub struct GitHubClientBuilder {
    token: Option<String>,
    base_uri: Option<String>,
    guard: RateLimitGuard,
}

impl GitHubClientBuilder {
    /// Create a new builder
    #[must_use]
    pub fn new() -> Self {
        Self {
            token: None,
            base_uri: None,
            guard: RateLimitGuard::default(),
        }
    }

    /// Set personal access token for authentication
    pub fn personal_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set base URI (for GitHub Enterprise)
    pub fn base_uri(mut self, uri: impl Into<String>) -> Self {
        self.base_uri = Some(uri.into());
        self
    }

    /// Fail REST and GraphQL calls once fewer than `min_remaining` requests are left.
    #[must_use]
    pub fn min_rate_limit_remaining(mut self, min_remaining: u32) -> Self {
        self.guard = RateLimitGuard { min_remaining };
        self
    }

    /// Build the `GitHubClient`
    pub fn build(self) -> GitHubResult<GitHubClient> {
        let mut builder = Octocrab::builder();

        match self.token {
            Some(token) if !token.trim().is_empty() => {
                builder = builder.personal_token(token);
            }
            _ => {
                return Err(GitHubError::AuthRequired(
                    "no personal access token configured".into(),
                ));
            }
        }

        if let Some(uri) = self.base_uri {
            builder = builder
                .base_uri(&uri)
                .map_err(|e| GitHubError::ClientSetup(e.to_string()))?;
        }

        let octocrab = builder
            .build()
            .map_err(|e| GitHubError::ClientSetup(e.to_string()))?;

        Ok(GitHubClient {
            inner: Arc::new(octocrab),
            guard: self.guard,
        })
    }
}

impl Default for GitHubClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
