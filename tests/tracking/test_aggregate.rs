//! Tests for organization counters.

use ghas_tracker::tracking::aggregate::{TASKS_PER_REPOSITORY, completion_percent};
use ghas_tracker::tracking::{
    Classification, Evidence, LoginCase, OrganizationSummary, RepositoryStatus,
};
use ghas_tracker::{Feature, FeatureStatus};

fn classification(status: FeatureStatus) -> Classification {
    Classification {
        status,
        evidence: Evidence::Alerts(0),
    }
}

fn status(repo: &str, enabled: [bool; 3], contributors: &[&str]) -> RepositoryStatus {
    let pick = |on: bool| {
        classification(if on {
            FeatureStatus::Enabled
        } else {
            FeatureStatus::Disabled
        })
    };
    RepositoryStatus {
        repo: repo.to_string(),
        public: false,
        code_scanning: pick(enabled[0]),
        dependabot: pick(enabled[1]),
        secret_scanning: pick(enabled[2]),
        advanced_security: false,
        secret_scanning_setting: false,
        contributors: contributors.iter().map(|s| s.to_string()).collect(),
        extras: None,
    }
}

#[test]
fn test_ten_repositories_example() {
    let statuses: Vec<RepositoryStatus> = (0..10)
        .map(|i| status(&format!("repo{i}"), [i < 4, i < 3, i < 5], &[]))
        .collect();
    let summary = OrganizationSummary::from_statuses(&statuses, LoginCase::Sensitive, None);

    assert_eq!(summary.enabled.get(Feature::CodeScanning), 4);
    assert_eq!(summary.enabled.get(Feature::Dependabot), 3);
    assert_eq!(summary.enabled.get(Feature::SecretScanning), 5);
    assert_eq!(summary.tasks_completed, 12);
    assert_eq!(summary.tasks_expected, 30);
    assert_eq!(summary.completion_percent, 40);
}

#[test]
fn test_tasks_completed_equals_feature_sum() {
    let statuses = vec![
        status("a", [true, false, true], &[]),
        status("b", [false, false, false], &[]),
        status("c", [true, true, true], &[]),
    ];
    let summary = OrganizationSummary::from_statuses(&statuses, LoginCase::Sensitive, None);
    assert_eq!(summary.tasks_completed, summary.enabled.total());
    assert_eq!(summary.tasks_expected, statuses.len() * TASKS_PER_REPOSITORY);
    assert!(summary.tasks_completed <= summary.tasks_expected);
    assert_eq!(statuses[0].tasks_completed(), 2);
}

#[test]
fn test_unknown_is_not_counted() {
    let mut repo = status("a", [false, false, false], &[]);
    repo.dependabot = classification(FeatureStatus::Unknown);
    let summary = OrganizationSummary::from_statuses(&[repo], LoginCase::Sensitive, None);
    assert_eq!(summary.tasks_completed, 0);
}

#[test]
fn test_empty_organization() {
    let summary = OrganizationSummary::from_statuses(&[], LoginCase::Sensitive, Some(50));
    assert_eq!(summary.repository_count, 0);
    assert_eq!(summary.tasks_expected, 0);
    assert_eq!(summary.completion_percent, 0);
    assert_eq!(summary.seats, Some(50));
    assert!(summary.extras.is_none());
}

#[test]
fn test_completion_percent_rounding() {
    assert_eq!(completion_percent(0, 3), 0);
    assert_eq!(completion_percent(1, 3), 33);
    assert_eq!(completion_percent(2, 3), 67);
    assert_eq!(completion_percent(1, 8), 13);
    assert_eq!(completion_percent(3, 3), 100);
    assert_eq!(completion_percent(0, 0), 0);
}

#[test]
fn test_contributor_union() {
    let statuses = vec![
        status("a", [false; 3], &["alice", "bob"]),
        status("b", [false; 3], &["bob", "Carol"]),
        status("c", [false; 3], &["carol"]),
    ];
    let sensitive = OrganizationSummary::from_statuses(&statuses, LoginCase::Sensitive, None);
    assert_eq!(sensitive.contributor_count(), 4);

    let insensitive = OrganizationSummary::from_statuses(&statuses, LoginCase::Insensitive, None);
    assert_eq!(insensitive.contributors, vec!["alice", "bob", "Carol"]);
}

#[test]
fn test_simple_profile_has_no_done_column() {
    assert_eq!(status("a", [true; 3], &[]).is_done(), None);
}
