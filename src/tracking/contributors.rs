//! Active contributors within a trailing window, from commit-activity stats.

use crate::tracking::error::{ClassifyError, ClassifyResult};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeSet, HashSet};

/// Window used for GHAS seat counting.
pub const DEFAULT_WINDOW_DAYS: u32 = 90;

/// One entry of `GET /repos/{owner}/{repo}/stats/contributors`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributorActivity {
    /// `null` for commits by deleted accounts.
    pub author: Option<ContributorAuthor>,
    #[serde(default)]
    pub weeks: Vec<WeeklyCommits>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributorAuthor {
    pub login: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyCommits {
    /// Start of the week, epoch seconds.
    #[serde(rename = "w")]
    pub week_start: i64,
    /// Commits authored that week.
    #[serde(rename = "c")]
    pub commits: u64,
}

/// How logins are compared when de-duplicating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoginCase {
    #[default]
    Sensitive,
    Insensitive,
}

/// Decode a contributor-stats body.
///
/// GitHub answers `202` with an empty object while statistics are being
/// computed; anything that is not an array is reported as malformed.
pub fn parse_contributors(repo: &str, payload: &Value) -> ClassifyResult<Vec<ContributorActivity>> {
    if !payload.is_array() {
        return Err(ClassifyError::malformed(repo, "contributors", payload));
    }
    serde_json::from_value(payload.clone())
        .map_err(|_| ClassifyError::malformed(repo, "contributors", payload))
}

/// Trailing window filter over weekly commit counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContributorWindow {
    pub days: u32,
    pub case: LoginCase,
}

impl Default for ContributorWindow {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_DAYS)
    }
}

impl ContributorWindow {
    #[must_use]
    pub const fn new(days: u32) -> Self {
        Self {
            days,
            case: LoginCase::Sensitive,
        }
    }

    #[must_use]
    pub const fn with_case(mut self, case: LoginCase) -> Self {
        self.case = case;
        self
    }

    /// Inclusive `[from, to]` bounds in epoch seconds.
    #[must_use]
    pub fn bounds(&self, now: DateTime<Utc>) -> (i64, i64) {
        let from = now - Duration::days(i64::from(self.days));
        (from.timestamp(), now.timestamp())
    }

    /// Whether the contributor committed at least once inside the window.
    #[must_use]
    pub fn is_active(&self, contributor: &ContributorActivity, now: DateTime<Utc>) -> bool {
        let (from, to) = self.bounds(now);
        contributor
            .weeks
            .iter()
            .any(|week| week.week_start >= from && week.week_start <= to && week.commits > 0)
    }

    /// Sorted, de-duplicated logins of the contributors active in the window.
    #[must_use]
    pub fn active_logins(&self, contributors: &[ContributorActivity], now: DateTime<Utc>) -> Vec<String> {
        let logins = contributors
            .iter()
            .filter(|c| self.is_active(c, now))
            .filter_map(|c| c.author.as_ref().map(|a| a.login.clone()));
        dedup_logins(logins, self.case)
    }
}

/// Sort and de-duplicate logins.
///
/// In insensitive mode the first spelling seen is kept and ordering ignores case.
pub fn dedup_logins<I>(logins: I, case: LoginCase) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    match case {
        LoginCase::Sensitive => logins.into_iter().collect::<BTreeSet<_>>().into_iter().collect(),
        LoginCase::Insensitive => {
            let mut seen = HashSet::new();
            let mut unique: Vec<String> = logins
                .into_iter()
                .filter(|login| seen.insert(login.to_lowercase()))
                .collect();
            unique.sort_by_key(|login| login.to_lowercase());
            unique
        }
    }
}
