//! `ghas_tracker` - GitHub Advanced Security adoption tracking
//!
//! Fetches the security endpoints of every configured repository of an
//! organization, classifies each GHAS feature as enabled, disabled or unknown,
//! counts recently active contributors and aggregates the results into a
//! progress report.

// Module declarations
pub mod collect;
pub mod config;
pub mod error;
pub mod github;
pub mod render;
pub mod runtime;
pub mod tracking;

// Re-export runtime types
pub use runtime::{AsyncStream, AsyncTask, PageSink, TaskDropped};

// Re-export GitHub client types
pub use github::{GitHubClient, GitHubClientBuilder, RateLimitGuard};

// Re-export GitHub error types
pub use github::{GitHubError, GitHubResult};

pub use collect::SnapshotCollector;
pub use config::{ConfigError, Profile, TrackerConfig};
pub use error::{TrackerError, TrackerResult};
pub use render::{OutputFormat, RenderError, render, render_html, render_text};

// Re-export the tracking core
pub use tracking::{
    Classification, ClassifyError, ClassifyResult, ContributorWindow, EvaluationOptions, Feature,
    FeatureStatus, LoginCase, OrganizationSnapshot, OrganizationSummary, Report,
    RepositorySnapshot, RepositoryStatus, completion_percent, evaluate, evaluate_repository,
};
