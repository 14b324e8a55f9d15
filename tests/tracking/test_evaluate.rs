//! Tests for snapshot evaluation.

use ghas_tracker::tracking::snapshot::{
    RepositoryExtras, SecurityAndAnalysis, SettingStatus, TrackingSearch,
};
use ghas_tracker::{
    ClassifyError, EvaluationOptions, Feature, FeatureStatus, OrganizationSnapshot, TrackerConfig,
    evaluate, evaluate_repository,
};
use serde_json::json;

use super::support::{
    contributor, days_ago, disabled_repo, now, with_code_scanning, with_dependabot,
    with_secret_scanning,
};

fn options() -> EvaluationOptions {
    EvaluationOptions::from_config(&TrackerConfig::default(), now())
}

#[test]
fn test_evaluate_repository() {
    let mut snapshot = with_code_scanning(disabled_repo("api"));
    snapshot.repository.private = true;
    snapshot.repository.security_and_analysis = Some(SecurityAndAnalysis {
        advanced_security: Some(SettingStatus {
            status: Some("enabled".into()),
        }),
        secret_scanning: Some(SettingStatus {
            status: Some("disabled".into()),
        }),
    });
    snapshot.contributors = json!([
        contributor("alice", &[(days_ago(3), 4)]),
        contributor("bob", &[(days_ago(400), 4)]),
    ]);

    let status = evaluate_repository(&snapshot, None, &options()).unwrap();
    assert_eq!(status.repo, "api");
    assert!(!status.public);
    assert_eq!(status.status(Feature::CodeScanning), FeatureStatus::Enabled);
    assert_eq!(status.status(Feature::Dependabot), FeatureStatus::Unknown);
    assert_eq!(status.status(Feature::SecretScanning), FeatureStatus::Disabled);
    assert!(status.advanced_security);
    assert!(!status.secret_scanning_setting);
    assert_eq!(status.contributors, vec!["alice"]);
    assert!(status.extras.is_none());
}

#[test]
fn test_evaluate_preserves_order_and_counts() {
    let snapshot = OrganizationSnapshot {
        owner: "acme".into(),
        repositories: vec![
            with_secret_scanning(disabled_repo("zeta")),
            with_dependabot(with_code_scanning(disabled_repo("alpha"))),
            disabled_repo("mid"),
        ],
        tracking: None,
    };
    let report = evaluate(&snapshot, &options()).unwrap();

    let names: Vec<&str> = report.repositories.iter().map(|r| r.repo.as_str()).collect();
    assert_eq!(names, ["zeta", "alpha", "mid"]);
    assert_eq!(report.owner, "acme");
    assert_eq!(report.generated_at, now());
    assert_eq!(report.summary.repository_count, 3);
    assert_eq!(report.summary.public_count, 3);
    assert_eq!(report.summary.tasks_completed, 3);
    assert_eq!(report.summary.tasks_expected, 9);
    assert_eq!(report.summary.completion_percent, 33);
}

#[test]
fn test_evaluate_fails_fast() {
    let mut broken = disabled_repo("broken");
    broken.secret_scanning = json!({ "message": "Something new" });
    let snapshot = OrganizationSnapshot {
        owner: "acme".into(),
        repositories: vec![disabled_repo("ok"), broken, disabled_repo("never")],
        tracking: None,
    };

    let err = evaluate(&snapshot, &options()).unwrap_err();
    assert_eq!(err.repo(), "broken");
    assert!(matches!(
        err,
        ClassifyError::UnrecognizedResponseShape {
            feature: Feature::SecretScanning,
            ..
        }
    ));
}

#[test]
fn test_evaluate_rejects_pending_statistics() {
    let mut pending = disabled_repo("pending");
    pending.contributors = json!({});
    let snapshot = OrganizationSnapshot {
        owner: "acme".into(),
        repositories: vec![pending],
        tracking: None,
    };
    assert!(matches!(
        evaluate(&snapshot, &options()),
        Err(ClassifyError::MalformedInput { .. })
    ));
}

#[test]
fn test_options_from_config() {
    let config = TrackerConfig {
        window_days: 30,
        seats: Some(12),
        codeql_languages: vec!["Go".into(), "Python".into()],
        ..TrackerConfig::default()
    };
    let options = EvaluationOptions::from_config(&config, now());
    assert_eq!(options.window.days, 30);
    assert_eq!(options.seats, Some(12));
    assert_eq!(options.codeql_languages, vec!["go", "python"]);
    assert_eq!(options.titles.issue, config.tracking_issue_title);
}

#[test]
fn test_full_profile_done() {
    let mut snapshot = with_secret_scanning(with_dependabot(with_code_scanning(disabled_repo("api"))));
    snapshot.repository.security_and_analysis = Some(SecurityAndAnalysis {
        advanced_security: Some(SettingStatus {
            status: Some("enabled".into()),
        }),
        secret_scanning: Some(SettingStatus {
            status: Some("enabled".into()),
        }),
    });
    snapshot.extras = Some(RepositoryExtras {
        codeql_analysis_yml: Some(
            "jobs:\n  analyze:\n    strategy:\n      matrix:\n        language: ['python']\n".into(),
        ),
        workflows: vec![ghas_tracker::tracking::snapshot::WorkflowSummary {
            name: "CodeQL".into(),
            path: ".github/workflows/codeql-analysis.yml".into(),
            state: "active".into(),
        }],
        allowed_action_patterns: Some(vec![
            "actions/checkout@*".into(),
            "github/codeql-action/*".into(),
        ]),
        vulnerability_alerts: FeatureStatus::Enabled,
        ..RepositoryExtras::default()
    });

    let closed = |url: &str, title: &str| ghas_tracker::tracking::TrackingItem {
        repository_url: url.into(),
        number: 1,
        title: title.into(),
        state: "closed".into(),
        user: "octocat".into(),
        assignees: vec![],
        comments: 0,
        updated_at: now(),
    };
    let config = TrackerConfig::default();
    let tracking = TrackingSearch {
        issues: vec![closed(
            "https://api.github.com/repos/acme/api",
            &config.tracking_issue_title,
        )],
        pull_requests: vec![closed(
            "https://api.github.com/repos/acme/api",
            &config.codeql_pull_request_title,
        )],
    };

    let organization = OrganizationSnapshot {
        owner: "acme".into(),
        repositories: vec![snapshot],
        tracking: Some(tracking),
    };
    let report = evaluate(&organization, &options()).unwrap();
    let repo = &report.repositories[0];
    assert_eq!(repo.is_done(), Some(true));

    let extras = report.summary.extras.as_ref().unwrap();
    assert_eq!(extras.done, 1);
    assert_eq!(extras.tracking_issues, 1);
    assert_eq!(extras.tracking_issue_states.get("closed"), Some(&1));
    assert_eq!(extras.codeql_files, 1);
    assert_eq!(extras.ghas_actions_allowed, 1);
}

#[test]
fn test_tracking_issue_states_count_every_issue() {
    let full = |name: &str| {
        let mut snapshot = disabled_repo(name);
        snapshot.extras = Some(RepositoryExtras::default());
        snapshot
    };
    let config = TrackerConfig::default();
    let issue = |repo: &str, number: u64, state: &str| ghas_tracker::tracking::TrackingItem {
        repository_url: format!("https://api.github.com/repos/acme/{repo}"),
        number,
        title: config.tracking_issue_title.clone(),
        state: state.into(),
        user: "octocat".into(),
        assignees: vec![],
        comments: 0,
        updated_at: now(),
    };

    let organization = OrganizationSnapshot {
        owner: "acme".into(),
        repositories: vec![full("api"), full("web")],
        tracking: Some(TrackingSearch {
            issues: vec![
                issue("api", 1, "open"),
                issue("api", 2, "closed"),
                issue("web", 3, "open"),
                issue("rest-api", 4, "closed"),
            ],
            pull_requests: vec![],
        }),
    };
    let report = evaluate(&organization, &options()).unwrap();

    let extras = report.summary.extras.as_ref().unwrap();
    assert_eq!(extras.tracking_issues, 2);
    assert_eq!(extras.tracking_issue_states.get("open"), Some(&2));
    assert_eq!(extras.tracking_issue_states.get("closed"), Some(&1));
}
