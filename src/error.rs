//! Top-level error type of a tracking run.

use crate::config::ConfigError;
use crate::github::GitHubError;
use crate::render::RenderError;
use crate::tracking::ClassifyError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    GitHub(#[from] GitHubError),

    #[error(transparent)]
    Classify(#[from] ClassifyError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type TrackerResult<T> = Result<T, TrackerError>;
