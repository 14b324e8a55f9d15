//! Classification failures
//!
//! Both kinds abort the whole run: a repository whose response cannot be
//! classified would otherwise skew the organization's completion percentage.

use crate::tracking::status::Feature;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    /// The API answered with an error message outside the recognized set.
    #[error("unrecognized {feature} response for {repo}: {message}")]
    UnrecognizedResponseShape {
        repo: String,
        feature: Feature,
        message: String,
    },

    /// The payload is neither the success shape nor an object with a message.
    #[error("malformed {endpoint} response for {repo}: {payload}")]
    MalformedInput {
        repo: String,
        endpoint: &'static str,
        payload: String,
    },
}

impl ClassifyError {
    pub(crate) fn malformed(
        repo: &str,
        endpoint: &'static str,
        payload: &impl ToString,
    ) -> Self {
        Self::MalformedInput {
            repo: repo.to_string(),
            endpoint,
            payload: payload.to_string(),
        }
    }

    /// Repository the offending response belongs to.
    #[must_use]
    pub fn repo(&self) -> &str {
        match self {
            Self::UnrecognizedResponseShape { repo, .. } | Self::MalformedInput { repo, .. } => {
                repo
            }
        }
    }
}

pub type ClassifyResult<T> = Result<T, ClassifyError>;
