//! Tests for the trailing contributor window.

use ghas_tracker::tracking::{
    ContributorWindow, LoginCase, dedup_logins, parse_contributors,
};
use ghas_tracker::ClassifyError;
use serde_json::json;

use super::support::{contributor, days_ago, now};

#[test]
fn test_recent_commit_is_included() {
    let payload = json!([contributor("alice", &[(days_ago(10), 5)])]);
    let contributors = parse_contributors("api", &payload).unwrap();
    let logins = ContributorWindow::default().active_logins(&contributors, now());
    assert_eq!(logins, vec!["alice".to_string()]);
}

#[test]
fn test_old_commit_is_excluded() {
    let payload = json!([contributor("bob", &[(days_ago(100), 5)])]);
    let contributors = parse_contributors("api", &payload).unwrap();
    assert!(ContributorWindow::default().active_logins(&contributors, now()).is_empty());
}

#[test]
fn test_zero_commit_week_is_excluded() {
    let payload = json!([contributor("carol", &[(days_ago(10), 0), (days_ago(200), 3)])]);
    let contributors = parse_contributors("api", &payload).unwrap();
    assert!(ContributorWindow::default().active_logins(&contributors, now()).is_empty());
}

#[test]
fn test_window_bounds_are_inclusive() {
    let window = ContributorWindow::new(90);
    let (from, to) = window.bounds(now());
    assert_eq!(from, days_ago(90));
    assert_eq!(to, now().timestamp());

    let payload = json!([
        contributor("edge-start", &[(from, 1)]),
        contributor("edge-end", &[(to, 1)]),
        contributor("before", &[(from - 1, 1)]),
        contributor("after", &[(to + 1, 1)]),
    ]);
    let contributors = parse_contributors("api", &payload).unwrap();
    assert_eq!(
        window.active_logins(&contributors, now()),
        vec!["edge-end".to_string(), "edge-start".to_string()]
    );
}

#[test]
fn test_window_length_is_configurable() {
    let payload = json!([contributor("dave", &[(days_ago(20), 2)])]);
    let contributors = parse_contributors("api", &payload).unwrap();
    assert!(ContributorWindow::new(14).active_logins(&contributors, now()).is_empty());
    assert_eq!(ContributorWindow::new(30).active_logins(&contributors, now()).len(), 1);
}

#[test]
fn test_logins_are_sorted_and_unique() {
    let payload = json!([
        contributor("zoe", &[(days_ago(1), 1)]),
        contributor("adam", &[(days_ago(2), 1)]),
        contributor("zoe", &[(days_ago(3), 1)]),
    ]);
    let contributors = parse_contributors("api", &payload).unwrap();
    assert_eq!(
        ContributorWindow::default().active_logins(&contributors, now()),
        vec!["adam".to_string(), "zoe".to_string()]
    );
}

#[test]
fn test_missing_author_is_skipped() {
    let payload = json!([
        { "author": null, "total": 3, "weeks": [{ "w": days_ago(1), "c": 3 }] },
        contributor("erin", &[(days_ago(1), 1)]),
    ]);
    let contributors = parse_contributors("api", &payload).unwrap();
    assert_eq!(
        ContributorWindow::default().active_logins(&contributors, now()),
        vec!["erin".to_string()]
    );
}

#[test]
fn test_non_array_is_malformed() {
    // 202 Accepted while statistics are computed
    let err = parse_contributors("api", &json!({})).unwrap_err();
    assert!(matches!(err, ClassifyError::MalformedInput { endpoint: "contributors", .. }));
}

#[test]
fn test_dedup_case_sensitive() {
    let logins = ["Alice", "alice", "bob"].map(String::from);
    assert_eq!(
        dedup_logins(logins, LoginCase::Sensitive),
        vec!["Alice".to_string(), "alice".to_string(), "bob".to_string()]
    );
}

#[test]
fn test_dedup_case_insensitive() {
    let logins = ["bob", "Alice", "alice", "BOB"].map(String::from);
    assert_eq!(
        dedup_logins(logins, LoginCase::Insensitive),
        vec!["Alice".to_string(), "bob".to_string()]
    );
}
