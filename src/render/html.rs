//! Standalone HTML page.

use super::{RenderError, check_mark, progress_line, status_mark};
use crate::tracking::{
    Classification, Evidence, ExtrasStatus, Feature, FeatureStatus, Report, RepositoryStatus,
    TASKS_PER_REPOSITORY, TrackingItem,
};
use chrono::{DateTime, SecondsFormat, Utc};
use std::collections::BTreeMap;
use std::fmt::Write;

/// Columns left of the task columns.
const FULL_LEADING_COLUMNS: usize = 35;
const SIMPLE_LEADING_COLUMNS: usize = 3;

const STYLE: &str = r"<style>
table, tr, th, td { border: 1px solid black; border-collapse: collapse; }
table thead tr:nth-child(1) { background: lightslategray; }
table thead tr:nth-child(2) { background: lightgrey; }
table { margin-bottom: 50px; }
table tbody tr:hover { background: #EEEEEE; }
td:nth-child(n+2) { text-align: center; }
.highlight { background: yellow; font-size: 2em; }
.green { background: lightgreen; }
.red { background: lightcoral; }
</style>";

/// Escape text for element content and attribute values.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn status_class(status: FeatureStatus) -> &'static str {
    match status {
        FeatureStatus::Enabled => "green",
        FeatureStatus::Disabled => "red",
        FeatureStatus::Unknown => "",
    }
}

fn green_red(ok: bool) -> &'static str {
    if ok { "green" } else { "red" }
}

/// Class and content of a task cell.
///
/// The full page spells the disabled state out and shows the API message of
/// an unknown state in place.
fn task_cell(classification: &Classification, full: bool) -> (&'static str, String) {
    if !full {
        return (
            status_class(classification.status),
            status_mark(classification.status).to_string(),
        );
    }
    match (classification.status, &classification.evidence) {
        (FeatureStatus::Enabled, _) => ("green", "✓".to_string()),
        (FeatureStatus::Disabled, _) => ("red", "✘".to_string()),
        (FeatureStatus::Unknown, Evidence::Message(message)) => ("", escape_html(message)),
        (FeatureStatus::Unknown, Evidence::Alerts(_)) => ("", "?".to_string()),
    }
}

/// Language names sized by the square of their share of the bytes.
fn language_cloud(languages: &BTreeMap<String, u64>) -> String {
    let total: u64 = languages.values().sum();
    if total == 0 {
        return String::new();
    }
    languages
        .iter()
        .map(|(language, bytes)| {
            let ratio = *bytes as f64 / total as f64;
            format!(
                "<span style=\"font-size:{:.4}em\">{}</span>",
                ratio * ratio,
                escape_html(language)
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn language_title(languages: &BTreeMap<String, u64>) -> String {
    let parts: Vec<String> = languages
        .iter()
        .map(|(language, bytes)| format!("{language}: {bytes}"))
        .collect();
    escape_html(&parts.join(", "))
}

/// Whole hours and days between `then` and `now`, each rounded half up.
fn age(now: DateTime<Utc>, then: DateTime<Utc>) -> (i64, i64) {
    let hours = ((now - then).num_seconds() + 1800).div_euclid(3600);
    (hours, (hours * 2 + 24).div_euclid(48))
}

/// Render the report as an HTML document.
pub fn render_html(report: &Report) -> Result<String, RenderError> {
    let full = report.summary.extras.is_some();
    let mut out = String::new();

    writeln!(out, "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">")?;
    writeln!(out, "<title>GHAS tracking: {}</title>", escape_html(&report.owner))?;
    writeln!(out, "{STYLE}\n</head>\n<body>")?;
    writeln!(out, "{}", report.generated_at.to_rfc3339())?;
    writeln!(out, "<table>\n<thead>")?;
    write_header(&mut out, full)?;
    writeln!(out, "</thead>\n<tbody>")?;
    for (index, repository) in report.repositories.iter().enumerate() {
        write_row(&mut out, report, index, repository)?;
    }
    writeln!(out, "</tbody>\n<tfoot>")?;
    write_footer(&mut out, report)?;
    writeln!(out, "</tfoot>\n</table>")?;

    let s = &report.summary;
    writeln!(
        out,
        "<div>\ntasks completed: {} tasks<br/>\ntasks expected: {} repos * {TASKS_PER_REPOSITORY} tasks/repo = {} tasks<br/>\nprogress: <span class=\"highlight\">{}</span>\n</div>",
        s.tasks_completed,
        s.repository_count,
        s.tasks_expected,
        progress_line(report)
    )?;
    writeln!(out, "</body>\n</html>")?;
    Ok(out)
}

fn write_header(out: &mut String, full: bool) -> std::fmt::Result {
    if full {
        writeln!(
            out,
            "<tr><th></th><th colspan=\"6\">repository</th><th colspan=\"4\">build</th>\
             <th colspan=\"7\">issue</th><th colspan=\"3\">GHAS</th><th>GitHub Actions</th>\
             <th>CodeQL workflow</th><th colspan=\"3\">CodeQL YAML</th><th colspan=\"8\">Pull Request</th>\
             <th rowspan=\"2\">Dependabot YAML</th><th colspan=\"3\">tasks</th><th rowspan=\"2\">DONE</th></tr>"
        )?;
        writeln!(
            out,
            "<tr><th>[i]</th><th>name</th><th>is public</th><th>default_branch</th><th>teams</th>\
             <th>languages</th><th>contributors in the last 90 days</th>\
             <th>Travis CI</th><th>Circle CI</th><th>AWS CodeBuild</th><th>Makefile</th>\
             <th>#</th><th>state</th><th>assignees</th><th>comments</th><th>updated_at</th>\
             <th>hours ago</th><th>days ago</th>\
             <th>advanced_security</th><th>secret_scanning</th><th>vulnerability-alerts</th>\
             <th>actions/checkout@*, github/codeql-action/*</th><th></th>\
             <th>codeql-analysis.yml</th><th>languages</th><th>missing languages</th>\
             <th>#</th><th>state</th><th>user</th><th>assignees</th><th>comments</th>\
             <th>updated_at</th><th>hours ago</th><th>days ago</th>\
             <th>code-scanning</th><th>dependabot</th><th>secret-scanning</th></tr>"
        )
    } else {
        writeln!(
            out,
            "<tr><th rowspan=\"2\">repo</th><th rowspan=\"2\">is public</th>\
             <th rowspan=\"2\">contributors in the last 90 days</th><th colspan=\"3\">tasks</th></tr>"
        )?;
        writeln!(
            out,
            "<tr><th>code-scanning</th><th>dependabot</th><th>secret-scanning</th></tr>"
        )
    }
}

fn write_row(
    out: &mut String,
    report: &Report,
    index: usize,
    repository: &RepositoryStatus,
) -> std::fmt::Result {
    let owner = escape_html(&report.owner);
    let repo = escape_html(&repository.repo);
    let contributors = escape_html(&repository.contributors.join(","));

    writeln!(out, "<tr>")?;
    if repository.extras.is_some() {
        writeln!(out, "<td>{index}</td>")?;
    }
    writeln!(out, "<td><a href=\"https://github.com/{owner}/{repo}\">{repo}</a></td>")?;
    writeln!(out, "<td>{}</td>", check_mark(repository.public))?;

    if let Some(extras) = &repository.extras {
        write_extras_leading(out, report, repository, extras, &contributors)?;
    } else {
        writeln!(
            out,
            "<td title=\"{contributors}\">{}</td>",
            repository.contributor_count()
        )?;
    }

    let full = repository.extras.is_some();
    for feature in Feature::ALL {
        let classification = repository.classification(feature);
        let (class, mark) = task_cell(classification, full);
        writeln!(
            out,
            "<td class=\"{class}\" title=\"{}\">{mark}</td>",
            escape_html(&classification.evidence.to_string())
        )?;
    }

    if let Some(done) = repository.is_done() {
        writeln!(
            out,
            "<td class=\"{}\">{}</td>",
            green_red(done),
            if done { "✓" } else { "✘" }
        )?;
    }
    writeln!(out, "</tr>")
}

fn write_extras_leading(
    out: &mut String,
    report: &Report,
    repository: &RepositoryStatus,
    extras: &ExtrasStatus,
    contributors: &str,
) -> std::fmt::Result {
    let owner = escape_html(&report.owner);
    let repo = escape_html(&repository.repo);

    writeln!(
        out,
        "<td>{}</td>",
        escape_html(extras.default_branch.as_deref().unwrap_or(""))
    )?;
    let teams: Vec<String> = extras
        .teams
        .iter()
        .map(|t| {
            let t = escape_html(t);
            format!("<a href=\"https://github.com/orgs/{owner}/teams/{t}/members\">{t}</a>")
        })
        .collect();
    writeln!(out, "<td>{}</td>", teams.join(", "))?;
    writeln!(
        out,
        "<td title=\"{}\">{}</td>",
        language_title(&extras.languages),
        language_cloud(&extras.languages)
    )?;
    writeln!(
        out,
        "<td title=\"{contributors}\">{}</td>",
        repository.contributor_count()
    )?;

    for present in [
        extras.build.travis,
        extras.build.circleci,
        extras.build.codebuild,
        extras.build.makefile,
    ] {
        writeln!(out, "<td>{}</td>", check_mark(present))?;
    }

    let now = report.generated_at;
    let issue = extras.tracking_issue.as_ref();
    write_tracking_item(out, &owner, &repo, "issues", issue, false, now)?;

    writeln!(
        out,
        "<td class=\"{}\">{}</td>",
        if repository.advanced_security { "green" } else { "" },
        if repository.advanced_security { "✓" } else { "?" }
    )?;
    writeln!(
        out,
        "<td class=\"{}\">{}</td>",
        if repository.secret_scanning_setting { "green" } else { "" },
        if repository.secret_scanning_setting { "✓" } else { "?" }
    )?;
    let vulnerability = match extras.vulnerability_alerts {
        FeatureStatus::Enabled => "✓",
        FeatureStatus::Disabled => "✘",
        FeatureStatus::Unknown => "?",
    };
    writeln!(
        out,
        "<td class=\"{}\">{vulnerability}</td>",
        green_red(extras.vulnerability_alerts.is_enabled())
    )?;

    let actions = if extras.ghas_actions_allowed {
        "✓".to_string()
    } else {
        escape_html(&extras.allowed_action_patterns.clone().unwrap_or_default().join(", "))
    };
    writeln!(
        out,
        "<td class=\"{}\">{actions}</td>",
        green_red(extras.allowed_action_patterns.is_some())
    )?;
    writeln!(
        out,
        "<td class=\"{}\">{}</td>",
        green_red(extras.codeql_workflow),
        if extras.codeql_workflow { "✓" } else { "✘" }
    )?;

    writeln!(
        out,
        "<td class=\"{}\">{}</td>",
        green_red(extras.codeql_file),
        if extras.codeql_file { "codeql-analysis.yml" } else { "Not Found" }
    )?;
    writeln!(out, "<td>{}</td>", escape_html(&extras.codeql_languages.join(",")))?;
    writeln!(
        out,
        "<td class=\"{}\">{}</td>",
        if extras.missing_codeql_languages.is_empty() { "" } else { "red" },
        escape_html(&extras.missing_codeql_languages.join(","))
    )?;

    let pull_request = extras.codeql_pull_request.as_ref();
    write_tracking_item(out, &owner, &repo, "pull", pull_request, true, now)?;

    writeln!(
        out,
        "<td>{}</td>",
        if extras.dependabot_config { "dependabot.yml" } else { "Not Found" }
    )
}

fn user_link(login: &str) -> String {
    let login = escape_html(login);
    format!("<a href=\"https://github.com/{login}\">{login}</a>")
}

/// Number, state, optionally author, assignees, comments and age of a search hit.
fn write_tracking_item(
    out: &mut String,
    owner: &str,
    repo: &str,
    path: &str,
    item: Option<&TrackingItem>,
    with_user: bool,
    now: DateTime<Utc>,
) -> std::fmt::Result {
    let Some(item) = item else {
        writeln!(out, "<td></td>\n<td class=\"red\"></td>")?;
        let blanks = if with_user { 6 } else { 5 };
        return writeln!(out, "{}", "<td></td>".repeat(blanks));
    };

    writeln!(
        out,
        "<td><a href=\"https://github.com/{owner}/{repo}/{path}/{n}\">#{n}</a></td>",
        n = item.number
    )?;
    writeln!(
        out,
        "<td class=\"{}\">{}</td>",
        green_red(item.state == "closed"),
        escape_html(&item.state)
    )?;
    if with_user {
        writeln!(out, "<td>{}</td>", user_link(&item.user))?;
    }
    let assignees: Vec<String> = item.assignees.iter().map(|a| user_link(a)).collect();
    writeln!(out, "<td>{}</td>", assignees.join(", "))?;

    let (hours, days) = age(now, item.updated_at);
    writeln!(
        out,
        "<td>{}</td><td>{}</td><td>{hours}</td><td>{days}</td>",
        item.comments,
        item.updated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    )
}

fn write_footer(out: &mut String, report: &Report) -> std::fmt::Result {
    let s = &report.summary;
    let contributors = escape_html(&s.contributors.join(","));
    let seats = s
        .seats
        .map(|seats| format!(" out of {seats} seats"))
        .unwrap_or_default();

    writeln!(out, "<tr>")?;
    match &s.extras {
        Some(extras) => {
            writeln!(out, "<th></th>")?;
            writeln!(out, "<th>{} repos</th>", s.repository_count)?;
            writeln!(out, "<th>{} repos public</th>", s.public_count)?;
            writeln!(out, "<th></th>")?;
            writeln!(out, "<th>{} unique teams</th>", extras.teams.len())?;
            writeln!(
                out,
                "<th title=\"{}\">{} languages<br/>{}</th>",
                language_title(&extras.language_bytes),
                extras.language_bytes.len(),
                language_cloud(&extras.language_bytes)
            )?;
            writeln!(
                out,
                "<th title=\"{contributors}\">{} unique contributors{seats}</th>",
                s.contributor_count()
            )?;
            writeln!(
                out,
                "<th>{} Travis CI</th><th>{} Circle CI</th><th>{} AWS CodeBuild</th><th>{} Makefiles</th>",
                extras.build.travis, extras.build.circleci, extras.build.codebuild, extras.build.makefile
            )?;
            let states: Vec<String> = extras
                .tracking_issue_states
                .iter()
                .map(|(state, count)| format!("{count} {}", escape_html(state)))
                .collect();
            writeln!(
                out,
                "<th>{} issues</th><th>{}</th><th></th><th></th><th></th><th></th><th></th>",
                extras.tracking_issues,
                states.join("<br/>")
            )?;
            writeln!(
                out,
                "<th>{} repos have advanced_security enabled</th><th>{} repos have secret_scanning enabled</th><th></th>",
                s.advanced_security_enabled, s.secret_scanning_setting_enabled
            )?;
            writeln!(
                out,
                "<th>{} repos setup with GHAS Actions</th><th></th>",
                extras.ghas_actions_allowed
            )?;
            writeln!(
                out,
                "<th>{} codeql-analysis.yml files setup</th><th>{} languages setup</th><th></th>",
                extras.codeql_files,
                extras.codeql_languages.len()
            )?;
            // pull request and dependabot.yml columns
            writeln!(out, "{}", "<th></th>".repeat(9))?;
        }
        None => {
            writeln!(out, "<th>{} repos</th>", s.repository_count)?;
            writeln!(out, "<th>{} repos public</th>", s.public_count)?;
            writeln!(
                out,
                "<th title=\"{contributors}\">{} unique contributors{seats}</th>",
                s.contributor_count()
            )?;
        }
    }
    for feature in Feature::ALL {
        writeln!(
            out,
            "<th>{} repos setup with {feature}</th>",
            s.enabled.get(feature)
        )?;
    }
    if let Some(extras) = &s.extras {
        writeln!(out, "<th>{} repos are DONE</th>", extras.done)?;
    }
    writeln!(out, "</tr>")?;
    writeln!(
        out,
        "<tr><th colspan=\"{}\"></th><th colspan=\"3\">= {} + {} + {}<br/>= {} tasks completed out of {}</th></tr>",
        if s.extras.is_some() {
            FULL_LEADING_COLUMNS
        } else {
            SIMPLE_LEADING_COLUMNS
        },
        s.enabled.code_scanning,
        s.enabled.dependabot,
        s.enabled.secret_scanning,
        s.enabled.total(),
        s.tasks_expected
    )
}
