//! Feature-status classification of raw GitHub responses.
//!
//! The alert endpoints answer with a JSON array on success and with an
//! object carrying a `message` for every failure or edge case, without any
//! discriminant. Each classifier maps the exact messages it knows to a
//! status; anything else is an error.

use crate::tracking::error::{ClassifyError, ClassifyResult};
use crate::tracking::status::{Feature, FeatureStatus};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const CODE_SCANNING_DISABLED: &str =
    "Advanced Security must be enabled for this repository to use code scanning.";
pub const CODE_SCANNING_NO_ANALYSIS: &str = "no analysis found";
pub const SECRET_SCANNING_DISABLED: &str = "Secret scanning is disabled on this repository.";
pub const SECRET_SCANNING_PUBLIC_REPOSITORY: &str =
    "Secret scanning APIs are not available on public repositories";

/// Messages recognized by the code scanning classifier.
pub const CODE_SCANNING_MESSAGES: &[(&str, FeatureStatus)] = &[
    (CODE_SCANNING_DISABLED, FeatureStatus::Disabled),
    // enabled, but no scan has been uploaded yet
    (CODE_SCANNING_NO_ANALYSIS, FeatureStatus::Unknown),
];

/// Messages recognized by the secret scanning classifier.
pub const SECRET_SCANNING_MESSAGES: &[(&str, FeatureStatus)] = &[
    (SECRET_SCANNING_DISABLED, FeatureStatus::Disabled),
    (SECRET_SCANNING_PUBLIC_REPOSITORY, FeatureStatus::Unknown),
];

/// What the classified response contained, kept for report hover text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Evidence {
    /// Number of alerts (or Dependabot nodes) returned.
    Alerts(usize),
    /// The API's error message.
    Message(String),
}

impl std::fmt::Display for Evidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Alerts(n) => write!(f, "{n}"),
            Self::Message(m) => f.write_str(m),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub status: FeatureStatus,
    pub evidence: Evidence,
}

impl Classification {
    fn new(status: FeatureStatus, evidence: Evidence) -> Self {
        Self { status, evidence }
    }
}

/// Classify a `GET /repos/{owner}/{repo}/code-scanning/alerts` body.
pub fn classify_code_scanning(repo: &str, payload: &Value) -> ClassifyResult<Classification> {
    classify_alerts(repo, Feature::CodeScanning, payload, CODE_SCANNING_MESSAGES)
}

/// Classify a `GET /repos/{owner}/{repo}/secret-scanning/alerts` body.
pub fn classify_secret_scanning(repo: &str, payload: &Value) -> ClassifyResult<Classification> {
    classify_alerts(repo, Feature::SecretScanning, payload, SECRET_SCANNING_MESSAGES)
}

/// Classify the GraphQL `vulnerabilityAlerts` response.
///
/// An empty node list is `Unknown`: the query cannot tell a disabled
/// feature from an enabled one with no alerts.
pub fn classify_dependabot(repo: &str, payload: &Value) -> ClassifyResult<Classification> {
    let nodes = dependabot_nodes(repo, payload)?;
    let status = if nodes.is_empty() {
        FeatureStatus::Unknown
    } else {
        FeatureStatus::Enabled
    };
    Ok(Classification::new(status, Evidence::Alerts(nodes.len())))
}

/// The `data.repository.vulnerabilityAlerts.nodes` array of a GraphQL response.
pub fn dependabot_nodes<'a>(repo: &str, payload: &'a Value) -> ClassifyResult<&'a [Value]> {
    payload
        .pointer("/data/repository/vulnerabilityAlerts/nodes")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .ok_or_else(|| ClassifyError::malformed(repo, Feature::Dependabot.as_str(), payload))
}

fn classify_alerts(
    repo: &str,
    feature: Feature,
    payload: &Value,
    known: &[(&str, FeatureStatus)],
) -> ClassifyResult<Classification> {
    let message = match payload {
        Value::Array(alerts) => {
            return Ok(Classification::new(
                FeatureStatus::Enabled,
                Evidence::Alerts(alerts.len()),
            ));
        }
        Value::Object(map) => match map.get("message").and_then(Value::as_str) {
            Some(message) => message,
            None => return Err(ClassifyError::malformed(repo, feature.as_str(), payload)),
        },
        _ => return Err(ClassifyError::malformed(repo, feature.as_str(), payload)),
    };

    known
        .iter()
        .find(|(text, _)| *text == message)
        .map(|(_, status)| Classification::new(*status, Evidence::Message(message.to_string())))
        .ok_or_else(|| ClassifyError::UnrecognizedResponseShape {
            repo: repo.to_string(),
            feature,
            message: message.to_string(),
        })
}
