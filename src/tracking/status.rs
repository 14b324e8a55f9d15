//! Three-valued feature status and the GHAS features it is computed for.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of classifying one feature's API response.
///
/// `Unknown` is a terminal classification of its own: the response shape
/// does not tell whether the feature is on, and it must never be reported
/// as `Disabled`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureStatus {
    Enabled,
    Disabled,
    #[default]
    Unknown,
}

impl FeatureStatus {
    #[inline]
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        matches!(self, Self::Enabled)
    }

    #[inline]
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Enabled => "enabled",
            Self::Disabled => "disabled",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for FeatureStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A GHAS feature counted as one adoption task per repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Feature {
    CodeScanning,
    Dependabot,
    SecretScanning,
}

impl Feature {
    /// Every tracked feature, in report column order.
    pub const ALL: [Feature; 3] = [Self::CodeScanning, Self::Dependabot, Self::SecretScanning];

    #[inline]
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CodeScanning => "code-scanning",
            Self::Dependabot => "dependabot",
            Self::SecretScanning => "secret-scanning",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
