//! Snapshot fixtures shared by the tracking tests.

use chrono::{DateTime, TimeZone, Utc};
use ghas_tracker::tracking::classify::{CODE_SCANNING_DISABLED, SECRET_SCANNING_DISABLED};
use ghas_tracker::tracking::snapshot::{RepositoryMetadata, RepositorySnapshot};
use serde_json::{Value, json};

pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
}

pub fn days_ago(days: i64) -> i64 {
    (now() - chrono::Duration::days(days)).timestamp()
}

pub fn contributor(login: &str, weeks: &[(i64, u64)]) -> Value {
    let weeks: Vec<Value> = weeks
        .iter()
        .map(|(w, c)| json!({ "w": w, "a": 0, "d": 0, "c": c }))
        .collect();
    json!({ "author": { "login": login }, "total": 1, "weeks": weeks })
}

pub fn dependabot_nodes(count: usize) -> Value {
    let nodes: Vec<Value> = (0..count)
        .map(|i| json!({ "securityVulnerability": { "package": { "name": format!("pkg{i}") } } }))
        .collect();
    json!({ "data": { "repository": { "vulnerabilityAlerts": { "nodes": nodes } } } })
}

/// A repository with every feature disabled and no contributors.
pub fn disabled_repo(name: &str) -> RepositorySnapshot {
    RepositorySnapshot {
        repo: name.to_string(),
        repository: RepositoryMetadata::default(),
        contributors: json!([]),
        code_scanning: json!({ "message": CODE_SCANNING_DISABLED }),
        dependabot: dependabot_nodes(0),
        secret_scanning: json!({ "message": SECRET_SCANNING_DISABLED }),
        extras: None,
    }
}

pub fn with_code_scanning(mut snapshot: RepositorySnapshot) -> RepositorySnapshot {
    snapshot.code_scanning = json!([{ "number": 1 }]);
    snapshot
}

pub fn with_dependabot(mut snapshot: RepositorySnapshot) -> RepositorySnapshot {
    snapshot.dependabot = dependabot_nodes(2);
    snapshot
}

pub fn with_secret_scanning(mut snapshot: RepositorySnapshot) -> RepositorySnapshot {
    snapshot.secret_scanning = json!([]);
    snapshot
}
