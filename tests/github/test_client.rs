//! Tests for GitHub client construction.

use ghas_tracker::{GitHubClient, GitHubError, RateLimitGuard};

#[test]
fn test_build_without_token_requires_auth() {
    let result = GitHubClient::builder().build();
    assert!(matches!(result, Err(GitHubError::AuthRequired(_))));
}

#[test]
fn test_blank_token_requires_auth() {
    let result = GitHubClient::builder().personal_token("   ").build();
    assert!(matches!(result, Err(GitHubError::AuthRequired(_))));
}

#[test]
fn test_rate_limit_guard_threshold() {
    let guard = RateLimitGuard::default();
    assert_eq!(guard.min_remaining, 1000);
    assert!(guard.check(Some(4999)).is_ok());
    assert!(guard.check(None).is_ok());
    assert!(matches!(
        guard.check(Some(10)),
        Err(GitHubError::RateLimitExceeded(_))
    ));

    let lenient = RateLimitGuard { min_remaining: 0 };
    assert!(lenient.check(Some(0)).is_ok());
}
