//! Console table.

use super::{RenderError, check_mark, progress_line, status_mark};
use crate::tracking::{Feature, Report, TASKS_PER_REPOSITORY};
use std::fmt::Write;

const HEADERS: [&str; 6] = [
    "repo",
    "public",
    "contributors",
    "code-scanning",
    "dependabot",
    "secret-scanning",
];

/// Plain-text table with one row per repository and a totals footer.
pub fn render_text(report: &Report) -> Result<String, RenderError> {
    let rows: Vec<[String; 6]> = report
        .repositories
        .iter()
        .map(|r| {
            [
                r.repo.clone(),
                check_mark(r.public).to_string(),
                r.contributor_count().to_string(),
                status_mark(r.status(Feature::CodeScanning)).to_string(),
                status_mark(r.status(Feature::Dependabot)).to_string(),
                status_mark(r.status(Feature::SecretScanning)).to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    writeln!(out, "{} ({})", report.owner, report.generated_at.to_rfc3339())?;
    write_row(&mut out, &HEADERS.map(String::from), &widths)?;
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    writeln!(out, "{}", rule.join("-+-"))?;
    for row in &rows {
        write_row(&mut out, row, &widths)?;
    }

    let s = &report.summary;
    writeln!(out)?;
    writeln!(out, "{} repos, {} public", s.repository_count, s.public_count)?;
    match s.seats {
        Some(seats) => writeln!(
            out,
            "{} unique contributors in the last window out of {seats} seats",
            s.contributor_count()
        )?,
        None => writeln!(out, "{} unique contributors in the last window", s.contributor_count())?,
    }
    for feature in Feature::ALL {
        writeln!(out, "{} repos setup with {feature}", s.enabled.get(feature))?;
    }
    if let Some(extras) = &s.extras {
        writeln!(
            out,
            "{} Travis CI, {} Circle CI, {} AWS CodeBuild, {} Makefiles",
            extras.build.travis, extras.build.circleci, extras.build.codebuild, extras.build.makefile
        )?;
        writeln!(out, "{} codeql-analysis.yml files setup", extras.codeql_files)?;
        writeln!(out, "{} repos are DONE", extras.done)?;
    }
    writeln!(out, "tasks completed: {} tasks", s.tasks_completed)?;
    writeln!(
        out,
        "tasks expected: {} repos * {TASKS_PER_REPOSITORY} tasks/repo = {} tasks",
        s.repository_count, s.tasks_expected
    )?;
    writeln!(out, "progress: {}", progress_line(report))?;
    Ok(out)
}

fn write_row(out: &mut String, cells: &[String; 6], widths: &[usize; 6]) -> std::fmt::Result {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect();
    writeln!(out, "{}", padded.join(" | ").trim_end())
}
