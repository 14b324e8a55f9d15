//! Tests for feature-status classification.

use ghas_tracker::tracking::classify::{
    CODE_SCANNING_DISABLED, CODE_SCANNING_MESSAGES, CODE_SCANNING_NO_ANALYSIS,
    SECRET_SCANNING_DISABLED, SECRET_SCANNING_MESSAGES, SECRET_SCANNING_PUBLIC_REPOSITORY,
};
use ghas_tracker::{
    ClassifyError, Feature, FeatureStatus,
    tracking::{Evidence, classify_code_scanning, classify_dependabot, classify_secret_scanning},
};
use serde_json::json;

use super::support::dependabot_nodes;

#[test]
fn test_code_scanning_array_is_enabled() {
    let result = classify_code_scanning("api", &json!([{ "number": 1 }, { "number": 2 }])).unwrap();
    assert_eq!(result.status, FeatureStatus::Enabled);
    assert_eq!(result.evidence, Evidence::Alerts(2));
}

#[test]
fn test_empty_alert_array_is_enabled() {
    // An enabled feature with zero alerts
    let result = classify_code_scanning("api", &json!([])).unwrap();
    assert_eq!(result.status, FeatureStatus::Enabled);
    assert_eq!(result.evidence, Evidence::Alerts(0));

    let result = classify_secret_scanning("api", &json!([])).unwrap();
    assert_eq!(result.status, FeatureStatus::Enabled);
}

#[test]
fn test_code_scanning_known_messages() {
    let disabled = classify_code_scanning("api", &json!({ "message": CODE_SCANNING_DISABLED })).unwrap();
    assert_eq!(disabled.status, FeatureStatus::Disabled);
    assert_eq!(disabled.evidence, Evidence::Message(CODE_SCANNING_DISABLED.to_string()));

    let no_analysis =
        classify_code_scanning("api", &json!({ "message": CODE_SCANNING_NO_ANALYSIS })).unwrap();
    assert_eq!(no_analysis.status, FeatureStatus::Unknown);
}

#[test]
fn test_secret_scanning_known_messages() {
    let disabled =
        classify_secret_scanning("api", &json!({ "message": SECRET_SCANNING_DISABLED })).unwrap();
    assert_eq!(disabled.status, FeatureStatus::Disabled);

    let public = classify_secret_scanning(
        "api",
        &json!({ "message": SECRET_SCANNING_PUBLIC_REPOSITORY }),
    )
    .unwrap();
    assert_eq!(public.status, FeatureStatus::Unknown);
}

#[test]
fn test_every_known_message_classifies() {
    for (message, status) in CODE_SCANNING_MESSAGES {
        let result = classify_code_scanning("r", &json!({ "message": message })).unwrap();
        assert_eq!(result.status, *status, "{message}");
    }
    for (message, status) in SECRET_SCANNING_MESSAGES {
        let result = classify_secret_scanning("r", &json!({ "message": message })).unwrap();
        assert_eq!(result.status, *status, "{message}");
    }
}

#[test]
fn test_unseen_message_is_unrecognized() {
    let err = classify_code_scanning("api", &json!({ "message": "Resource not accessible" })).unwrap_err();
    assert_eq!(
        err,
        ClassifyError::UnrecognizedResponseShape {
            repo: "api".to_string(),
            feature: Feature::CodeScanning,
            message: "Resource not accessible".to_string(),
        }
    );

    // Matching is exact: no trimming, no case folding
    let err = classify_secret_scanning(
        "api",
        &json!({ "message": SECRET_SCANNING_DISABLED.to_uppercase() }),
    )
    .unwrap_err();
    assert!(matches!(err, ClassifyError::UnrecognizedResponseShape { .. }));
}

#[test]
fn test_object_without_message_is_malformed() {
    let err = classify_code_scanning("api", &json!({})).unwrap_err();
    assert!(matches!(err, ClassifyError::MalformedInput { .. }));
    assert_eq!(err.repo(), "api");

    let err = classify_secret_scanning("api", &json!({ "message": 42 })).unwrap_err();
    assert!(matches!(err, ClassifyError::MalformedInput { .. }));

    let err = classify_secret_scanning("api", &json!("text")).unwrap_err();
    assert!(matches!(err, ClassifyError::MalformedInput { .. }));
}

#[test]
fn test_classification_is_idempotent() {
    let payloads = [
        json!([{ "number": 7 }]),
        json!({ "message": CODE_SCANNING_DISABLED }),
        json!({ "message": CODE_SCANNING_NO_ANALYSIS }),
    ];
    for payload in &payloads {
        assert_eq!(
            classify_code_scanning("r", payload).unwrap(),
            classify_code_scanning("r", payload).unwrap()
        );
    }
}

#[test]
fn test_dependabot_nodes() {
    let enabled = classify_dependabot("api", &dependabot_nodes(3)).unwrap();
    assert_eq!(enabled.status, FeatureStatus::Enabled);
    assert_eq!(enabled.evidence, Evidence::Alerts(3));

    // Disabled and clean repositories look the same
    let empty = classify_dependabot("api", &dependabot_nodes(0)).unwrap();
    assert_eq!(empty.status, FeatureStatus::Unknown);
}

#[test]
fn test_dependabot_missing_nodes_is_malformed() {
    let err = classify_dependabot("api", &json!({ "data": { "repository": null } })).unwrap_err();
    assert!(matches!(err, ClassifyError::MalformedInput { .. }));

    let err = classify_dependabot("api", &json!({ "errors": [{ "message": "boom" }] })).unwrap_err();
    assert!(matches!(err, ClassifyError::MalformedInput { .. }));
}

#[test]
fn test_evidence_display() {
    assert_eq!(Evidence::Alerts(4).to_string(), "4");
    assert_eq!(Evidence::Message("no analysis found".into()).to_string(), "no analysis found");
}
