//! GitHub API error types

use crate::runtime::TaskDropped;
use thiserror::Error;

/// Answer GitHub gives once an organization revokes a token under SAML enforcement.
pub const SAML_REVOKED_MESSAGE: &str = "Resource protected by organization SAML enforcement. Your token's access was revoked. Please generate a new Personal Access token and grant it access to this organization.";

/// Prefix of the primary rate limit error message.
pub const RATE_LIMIT_MESSAGE_PREFIX: &str = "API rate limit exceeded";

/// Error types for GitHub API operations
#[derive(Debug, Error)]
pub enum GitHubError {
    /// Octocrab library error
    #[error("Octocrab error: {0}")]
    Octocrab(#[source] octocrab::Error),

    /// Non-2xx answer from a call whose body carries no feature state
    #[error("GitHub API error {status} on {route}: {message}")]
    Api {
        route: String,
        status: u16,
        message: String,
    },

    /// Token missing, revoked, or lacking access
    #[error("Authentication required: {0}")]
    AuthRequired(String),

    /// Rate limit exceeded or about to be
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// Client setup/configuration error
    #[error("Client setup failed: {0}")]
    ClientSetup(String),

    /// Response body was not JSON
    #[error("Invalid JSON from {route}: {source}")]
    Json {
        route: String,
        source: serde_json::Error,
    },

    /// The spawned request task went away before answering
    #[error("Request task cancelled: {0}")]
    TaskCancelled(#[from] TaskDropped),
}

impl GitHubError {
    /// Map a GitHub error message that must stop the run.
    #[must_use]
    pub fn from_fatal_message(message: &str) -> Option<Self> {
        if message == SAML_REVOKED_MESSAGE {
            Some(Self::AuthRequired(message.to_string()))
        } else if message.starts_with(RATE_LIMIT_MESSAGE_PREFIX) {
            Some(Self::RateLimitExceeded(message.to_string()))
        } else {
            None
        }
    }

    /// The API answered 404.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. })
    }
}

/// Convenience result alias for GitHub operations
pub type GitHubResult<T> = Result<T, GitHubError>;

impl From<octocrab::Error> for GitHubError {
    fn from(error: octocrab::Error) -> Self {
        if let octocrab::Error::GitHub { source, .. } = &error
            && let Some(fatal) = Self::from_fatal_message(&source.message)
        {
            return fatal;
        }
        Self::Octocrab(error)
    }
}
