//! Collector tests against a mocked GitHub API.

use super::support::client_for;
use chrono::Utc;
use ghas_tracker::tracking::classify::SECRET_SCANNING_DISABLED;
use ghas_tracker::{
    EvaluationOptions, FeatureStatus, GitHubError, SnapshotCollector, TrackerConfig, evaluate,
};
use httpmock::prelude::*;
use serde_json::json;
use std::time::Duration;

fn config(repos: &[&str]) -> TrackerConfig {
    TrackerConfig {
        owner: "acme".into(),
        repos: repos.iter().map(|r| r.to_string()).collect(),
        concurrency_limit: 4,
        stats_retry_delay_secs: 0,
        ..TrackerConfig::default()
    }
}

async fn mock_graphql(server: &MockServer) {
    server
        .mock_async(|when, then| {
            when.method(POST).path("/graphql");
            then.status(200).json_body(json!({
                "data": { "repository": { "isPrivate": false, "vulnerabilityAlerts": { "nodes": [] } } }
            }));
        })
        .await;
}

/// Mock the simple-profile endpoints of `acme/{repo}`.
async fn mock_repository(
    server: &MockServer,
    repo: &str,
    metadata_status: u16,
    delay: Duration,
) {
    let repo_path = format!("/repos/acme/{repo}");
    server
        .mock_async(|when, then| {
            when.method(GET).path(repo_path.clone());
            then.status(metadata_status)
                .delay(delay)
                .json_body(if metadata_status == 200 {
                    json!({ "private": false, "default_branch": "main" })
                } else {
                    json!({ "message": "Not Found" })
                });
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(format!("{repo_path}/stats/contributors"));
            then.status(200).json_body(json!([]));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(format!("{repo_path}/code-scanning/alerts"));
            then.status(200).json_body(json!([{ "number": 1 }]));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(format!("{repo_path}/secret-scanning/alerts"));
            then.status(404)
                .json_body(json!({ "message": SECRET_SCANNING_DISABLED }));
        })
        .await;
}

#[tokio::test]
async fn test_collect_keeps_configured_order() {
    let server = MockServer::start_async().await;
    mock_graphql(&server).await;
    // the first repository answers last
    mock_repository(&server, "zeta", 200, Duration::from_millis(300)).await;
    mock_repository(&server, "alpha", 200, Duration::ZERO).await;

    let collector = SnapshotCollector::new(client_for(&server), config(&["zeta", "alpha"]));
    let snapshot = collector.collect().await.unwrap();

    let names: Vec<&str> = snapshot.repositories.iter().map(|r| r.repo.as_str()).collect();
    assert_eq!(names, vec!["zeta", "alpha"]);
    assert!(snapshot.tracking.is_none());
    assert_eq!(snapshot.repositories[0].repository.default_branch.as_deref(), Some("main"));

    let options = EvaluationOptions::from_config(collector.config(), Utc::now());
    let report = evaluate(&snapshot, &options).unwrap();
    let zeta = &report.repositories[0];
    assert_eq!(zeta.code_scanning.status, FeatureStatus::Enabled);
    assert_eq!(zeta.secret_scanning.status, FeatureStatus::Disabled);
    assert_eq!(zeta.dependabot.status, FeatureStatus::Unknown);
    assert!(zeta.contributors.is_empty());
}

#[tokio::test]
async fn test_collect_fails_fast() {
    let server = MockServer::start_async().await;
    mock_graphql(&server).await;
    mock_repository(&server, "api", 200, Duration::ZERO).await;
    mock_repository(&server, "gone", 404, Duration::ZERO).await;

    let collector = SnapshotCollector::new(client_for(&server), config(&["api", "gone"]));
    let result = collector.collect().await;

    match result {
        Err(GitHubError::Api { route, status, .. }) => {
            assert_eq!(route, "/repos/acme/gone");
            assert_eq!(status, 404);
        }
        Err(other) => panic!("expected Api error, got {other}"),
        Ok(_) => panic!("collect should fail when a repository is missing"),
    }
}
