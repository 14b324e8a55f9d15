//! Organization-wide counters over per-repository statuses.

use crate::tracking::classify::Classification;
use crate::tracking::contributors::{LoginCase, dedup_logins};
use crate::tracking::extras::{ExtrasStatus, belongs_to};
use crate::tracking::snapshot::TrackingSearch;
use crate::tracking::status::{Feature, FeatureStatus};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Number of GHAS features counted as tasks per repository.
pub const TASKS_PER_REPOSITORY: usize = Feature::ALL.len();

/// Checks a repository must pass, in the full profile, to count as done.
pub const FULL_PROFILE_CHECKS: usize = TASKS_PER_REPOSITORY + 2 + 6;

/// Derived status of one repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryStatus {
    pub repo: String,
    pub public: bool,
    pub code_scanning: Classification,
    pub dependabot: Classification,
    pub secret_scanning: Classification,
    pub advanced_security: bool,
    pub secret_scanning_setting: bool,
    /// Sorted logins with commits inside the contributor window.
    pub contributors: Vec<String>,
    #[serde(default)]
    pub extras: Option<ExtrasStatus>,
}

impl RepositoryStatus {
    #[must_use]
    pub fn status(&self, feature: Feature) -> FeatureStatus {
        self.classification(feature).status
    }

    #[must_use]
    pub fn classification(&self, feature: Feature) -> &Classification {
        match feature {
            Feature::CodeScanning => &self.code_scanning,
            Feature::Dependabot => &self.dependabot,
            Feature::SecretScanning => &self.secret_scanning,
        }
    }

    #[must_use]
    pub fn contributor_count(&self) -> usize {
        self.contributors.len()
    }

    /// Features classified `Enabled`.
    #[must_use]
    pub fn tasks_completed(&self) -> usize {
        Feature::ALL
            .iter()
            .filter(|f| self.status(**f).is_enabled())
            .count()
    }

    /// Full profile only: every tracked check passed.
    #[must_use]
    pub fn is_done(&self) -> Option<bool> {
        self.extras.as_ref().map(|extras| {
            let passed = self.tasks_completed()
                + usize::from(self.advanced_security)
                + usize::from(self.secret_scanning_setting)
                + extras.checks_passed();
            passed == FULL_PROFILE_CHECKS
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureCounts {
    pub code_scanning: usize,
    pub dependabot: usize,
    pub secret_scanning: usize,
}

impl FeatureCounts {
    #[must_use]
    pub const fn get(&self, feature: Feature) -> usize {
        match feature {
            Feature::CodeScanning => self.code_scanning,
            Feature::Dependabot => self.dependabot,
            Feature::SecretScanning => self.secret_scanning,
        }
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.code_scanning + self.dependabot + self.secret_scanning
    }

    fn bump(&mut self, feature: Feature) {
        match feature {
            Feature::CodeScanning => self.code_scanning += 1,
            Feature::Dependabot => self.dependabot += 1,
            Feature::SecretScanning => self.secret_scanning += 1,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildCounts {
    pub travis: usize,
    pub circleci: usize,
    pub codebuild: usize,
    pub makefile: usize,
}

/// Full-profile organization counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtrasSummary {
    pub build: BuildCounts,
    pub teams: Vec<String>,
    pub language_bytes: BTreeMap<String, u64>,
    pub ghas_actions_allowed: usize,
    pub codeql_files: usize,
    pub codeql_languages: Vec<String>,
    pub tracking_issues: usize,
    pub tracking_issue_states: BTreeMap<String, usize>,
    pub done: usize,
}

impl ExtrasSummary {
    fn from_statuses(statuses: &[RepositoryStatus]) -> Option<Self> {
        let mut summary = Self::default();
        let mut any = false;
        let mut teams = Vec::new();

        for status in statuses {
            let Some(extras) = &status.extras else {
                continue;
            };
            any = true;
            summary.build.travis += usize::from(extras.build.travis);
            summary.build.circleci += usize::from(extras.build.circleci);
            summary.build.codebuild += usize::from(extras.build.codebuild);
            summary.build.makefile += usize::from(extras.build.makefile);
            teams.extend(extras.teams.iter().cloned());
            for (language, bytes) in &extras.languages {
                *summary.language_bytes.entry(language.clone()).or_default() += bytes;
            }
            summary.ghas_actions_allowed += usize::from(extras.ghas_actions_allowed);
            summary.codeql_files += usize::from(extras.codeql_file);
            for language in &extras.codeql_languages {
                if !summary.codeql_languages.contains(language) {
                    summary.codeql_languages.push(language.clone());
                }
            }
            summary.tracking_issues += usize::from(extras.tracking_issue.is_some());
            summary.done += usize::from(status.is_done() == Some(true));
        }

        summary.teams = dedup_logins(teams, LoginCase::Sensitive);
        any.then_some(summary)
    }
}

/// Counters over every repository of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationSummary {
    pub repository_count: usize,
    pub public_count: usize,
    pub enabled: FeatureCounts,
    pub advanced_security_enabled: usize,
    pub secret_scanning_setting_enabled: usize,
    pub tasks_completed: usize,
    pub tasks_expected: usize,
    pub completion_percent: u32,
    /// De-duplicated union of every repository's window contributors.
    pub contributors: Vec<String>,
    /// Licensed GHAS seats, when configured.
    pub seats: Option<u32>,
    #[serde(default)]
    pub extras: Option<ExtrasSummary>,
}

impl OrganizationSummary {
    /// Fold repository statuses into organization counters.
    #[must_use]
    pub fn from_statuses(statuses: &[RepositoryStatus], case: LoginCase, seats: Option<u32>) -> Self {
        let mut enabled = FeatureCounts::default();
        for status in statuses {
            for feature in Feature::ALL {
                if status.status(feature).is_enabled() {
                    enabled.bump(feature);
                }
            }
        }

        let tasks_completed = enabled.total();
        let tasks_expected = statuses.len() * TASKS_PER_REPOSITORY;

        Self {
            repository_count: statuses.len(),
            public_count: statuses.iter().filter(|s| s.public).count(),
            enabled,
            advanced_security_enabled: statuses.iter().filter(|s| s.advanced_security).count(),
            secret_scanning_setting_enabled: statuses
                .iter()
                .filter(|s| s.secret_scanning_setting)
                .count(),
            tasks_completed,
            tasks_expected,
            completion_percent: completion_percent(tasks_completed, tasks_expected),
            contributors: dedup_logins(
                statuses.iter().flat_map(|s| s.contributors.iter().cloned()),
                case,
            ),
            seats,
            extras: ExtrasSummary::from_statuses(statuses),
        }
    }

    /// Count every tracking issue of the summarized repositories by state.
    ///
    /// A repository with several tracking issues contributes each of them.
    #[must_use]
    pub fn with_tracking_issue_states(
        mut self,
        statuses: &[RepositoryStatus],
        tracking: Option<&TrackingSearch>,
    ) -> Self {
        let (Some(extras), Some(tracking)) = (self.extras.as_mut(), tracking) else {
            return self;
        };
        extras.tracking_issue_states.clear();
        for issue in tracking
            .issues
            .iter()
            .filter(|issue| statuses.iter().any(|s| belongs_to(issue, &s.repo)))
        {
            *extras.tracking_issue_states.entry(issue.state.clone()).or_default() += 1;
        }
        self
    }

    #[must_use]
    pub fn contributor_count(&self) -> usize {
        self.contributors.len()
    }
}

/// `completed / expected` as a percentage rounded half up; 0 when nothing is expected.
#[must_use]
pub fn completion_percent(completed: usize, expected: usize) -> u32 {
    if expected == 0 {
        return 0;
    }
    let rounded = (completed * 200 + expected) / (expected * 2);
    u32::try_from(rounded).unwrap_or(u32::MAX)
}
