//! GitHub API operations module
//!
//! Provides the GitHub REST and GraphQL calls behind a snapshot, using the
//! octocrab library.

pub mod client;
pub mod error;
pub mod raw;
pub mod util;

// Re-export client types
pub use client::{GitHubClient, GitHubClientBuilder};

// Re-export error types
pub use error::{GitHubError, GitHubResult};
pub use raw::{RateLimitGuard, RawResponse};
pub use util::{settle, spawn_task};

pub use dependabot_alerts::VULNERABILITY_ALERTS_QUERY;

// GitHub API operations - Repositories (internal)
pub(crate) mod contributor_stats;
pub(crate) mod get_file_contents;
pub(crate) mod get_repository;
pub(crate) mod list_languages;
pub(crate) mod list_repository_teams;
pub(crate) mod list_workflows;
pub(crate) mod selected_actions;

// GitHub API operations - Issues (internal)
pub(crate) mod search_issues;

// GitHub API operations - Security (internal)
pub(crate) mod code_scanning_alerts;
pub(crate) mod dependabot_alerts;
pub(crate) mod secret_scanning_alerts;
pub(crate) mod vulnerability_alerts;
