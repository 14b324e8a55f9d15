//! GHAS feature-status aggregation
//!
//! Pure, synchronous transformation of fetched API responses into
//! per-repository statuses and organization counters. No I/O happens here.

pub mod aggregate;
pub mod classify;
pub mod contributors;
pub mod error;
pub mod evaluate;
pub mod extras;
pub mod snapshot;
pub mod status;

pub use aggregate::{
    BuildCounts, ExtrasSummary, FeatureCounts, OrganizationSummary, RepositoryStatus,
    TASKS_PER_REPOSITORY, completion_percent,
};
pub use classify::{
    Classification, Evidence, classify_code_scanning, classify_dependabot,
    classify_secret_scanning,
};
pub use contributors::{
    ContributorActivity, ContributorWindow, LoginCase, WeeklyCommits, dedup_logins,
    parse_contributors,
};
pub use error::{ClassifyError, ClassifyResult};
pub use evaluate::{EvaluationOptions, Report, evaluate, evaluate_repository};
pub use extras::{ExtrasStatus, TrackingTitles};
pub use snapshot::{
    BuildSystems, OrganizationSnapshot, RepositoryExtras, RepositoryMetadata, RepositorySnapshot,
    TrackingItem, TrackingSearch,
};
pub use status::{Feature, FeatureStatus};
