//! Tests for GitHub error mapping.

use ghas_tracker::GitHubError;
use ghas_tracker::github::error::{RATE_LIMIT_MESSAGE_PREFIX, SAML_REVOKED_MESSAGE};

#[test]
fn test_saml_revocation_is_fatal() {
    assert!(matches!(
        GitHubError::from_fatal_message(SAML_REVOKED_MESSAGE),
        Some(GitHubError::AuthRequired(_))
    ));
}

#[test]
fn test_rate_limit_message_is_fatal() {
    let message = format!("{RATE_LIMIT_MESSAGE_PREFIX} for user ID 1.");
    assert!(matches!(
        GitHubError::from_fatal_message(&message),
        Some(GitHubError::RateLimitExceeded(_))
    ));
}

#[test]
fn test_feature_messages_are_not_fatal() {
    assert!(GitHubError::from_fatal_message("no analysis found").is_none());
    assert!(GitHubError::from_fatal_message("Not Found").is_none());
}

#[test]
fn test_api_error_display() {
    let error = GitHubError::Api {
        route: "/repos/acme/api".into(),
        status: 404,
        message: "Not Found".into(),
    };
    assert_eq!(
        error.to_string(),
        "GitHub API error 404 on /repos/acme/api: Not Found"
    );
    assert!(error.is_not_found());

    let error = GitHubError::Api {
        route: "/repos/acme/api/teams".into(),
        status: 403,
        message: "Must have admin rights to Repository.".into(),
    };
    assert!(!error.is_not_found());
}
