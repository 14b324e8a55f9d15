//! Report rendering
//!
//! Presentation of a [`Report`]: console table, standalone HTML page, JSON.

mod html;
mod text;

pub use html::{escape_html, render_html};
pub use text::render_text;

use crate::tracking::{FeatureStatus, Report};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to format report: {0}")]
    Fmt(#[from] std::fmt::Error),
}

/// Output format of a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
    Json,
}

/// Render `report` in the requested format.
pub fn render(report: &Report, format: OutputFormat) -> Result<String, RenderError> {
    match format {
        OutputFormat::Text => render_text(report),
        OutputFormat::Html => render_html(report),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

/// Cell marker for a feature status.
#[must_use]
pub const fn status_mark(status: FeatureStatus) -> &'static str {
    match status {
        FeatureStatus::Enabled => "✓",
        FeatureStatus::Unknown => "?",
        FeatureStatus::Disabled => "",
    }
}

/// Cell marker for a yes/no column.
#[must_use]
pub const fn check_mark(value: bool) -> &'static str {
    if value { "✓" } else { "" }
}

/// `completed / expected = N%` progress line shared by the renderers.
#[must_use]
pub fn progress_line(report: &Report) -> String {
    let s = &report.summary;
    format!(
        "{} / {} = {}%",
        s.tasks_completed, s.tasks_expected, s.completion_percent
    )
}
