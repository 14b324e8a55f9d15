//! Snapshot collection
//!
//! Fans the per-repository endpoint calls out with bounded concurrency and
//! assembles the raw responses into an [`OrganizationSnapshot`].

use crate::config::{Profile, TrackerConfig};
use crate::github::{GitHubClient, GitHubResult, settle};
use crate::tracking::extras::{belongs_to, vulnerability_alerts_status};
use crate::tracking::snapshot::{
    BuildSystems, OrganizationSnapshot, RepositoryExtras, RepositorySnapshot, TrackingItem,
    TrackingSearch,
};
use futures::stream::{self, StreamExt, TryStreamExt};
use log::info;
use std::sync::Arc;

pub const TRAVIS_YML: &str = ".travis.yml";
pub const CIRCLECI_YML: &str = ".circleci/config.yml";
pub const CODEBUILD_YML: &str = "buildspec.yml";
pub const MAKEFILE: &str = "Makefile";
pub const DEPENDABOT_YML: &str = ".github/dependabot.yml";
pub const CODEQL_ANALYSIS_YML: &str = ".github/workflows/codeql-analysis.yml";

/// Fetches every configured repository of one organization.
#[derive(Clone, Debug)]
pub struct SnapshotCollector {
    client: GitHubClient,
    config: Arc<TrackerConfig>,
}

impl SnapshotCollector {
    #[must_use]
    pub fn new(client: GitHubClient, config: TrackerConfig) -> Self {
        Self {
            client,
            config: Arc::new(config),
        }
    }

    #[must_use]
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Fetch all repositories; the first failing call aborts the run.
    ///
    /// Snapshots come back in configuration order.
    pub async fn collect(&self) -> GitHubResult<OrganizationSnapshot> {
        let started = std::time::Instant::now();
        let full = self.config.profile == Profile::Full;

        let futures = self.config.repos.iter().map(|repo| {
            let client = self.client.clone();
            let config = self.config.clone();
            let repo = repo.clone();
            async move { Self::collect_repository(&client, &config, &repo, full).await }
        });

        let repositories: Vec<RepositorySnapshot> = stream::iter(futures)
            .buffered(self.config.concurrency_limit)
            .try_collect()
            .await?;

        let tracking = if full {
            Some(self.collect_tracking().await?)
        } else {
            None
        };

        info!(
            "collected {} repositories of {} in {:?}",
            repositories.len(),
            self.config.owner,
            started.elapsed()
        );

        Ok(OrganizationSnapshot {
            owner: self.config.owner.clone(),
            repositories,
            tracking,
        })
    }

    async fn collect_repository(
        client: &GitHubClient,
        config: &TrackerConfig,
        repo: &str,
        full: bool,
    ) -> GitHubResult<RepositorySnapshot> {
        let owner = config.owner.as_str();
        info!("fetching {owner}/{repo}");

        let (repository, contributors, code_scanning, dependabot, secret_scanning) = tokio::try_join!(
            settle(client.get_repository(owner, repo)),
            settle(client.get_contributor_stats(
                owner,
                repo,
                config.stats_retries,
                config.stats_retry_delay()
            )),
            settle(client.list_code_scanning_alerts(owner, repo)),
            settle(client.get_dependabot_alerts(owner, repo)),
            settle(client.list_secret_scanning_alerts(owner, repo)),
        )?;

        let extras = if full {
            Some(Self::collect_extras(client, owner, repo).await?)
        } else {
            None
        };

        Ok(RepositorySnapshot {
            repo: repo.to_string(),
            repository,
            contributors,
            code_scanning: code_scanning.body,
            dependabot,
            secret_scanning: secret_scanning.body,
            extras,
        })
    }

    async fn collect_extras(
        client: &GitHubClient,
        owner: &str,
        repo: &str,
    ) -> GitHubResult<RepositoryExtras> {
        let (
            teams,
            languages,
            travis,
            circleci,
            codebuild,
            makefile,
            dependabot_config,
            codeql_analysis,
            workflows,
            allowed_action_patterns,
            vulnerability_alerts,
        ) = tokio::try_join!(
            settle(client.list_repository_teams(owner, repo)),
            settle(client.list_languages(owner, repo)),
            settle(client.get_file_contents(owner, repo, TRAVIS_YML)),
            settle(client.get_file_contents(owner, repo, CIRCLECI_YML)),
            settle(client.get_file_contents(owner, repo, CODEBUILD_YML)),
            settle(client.get_file_contents(owner, repo, MAKEFILE)),
            settle(client.get_file_contents(owner, repo, DEPENDABOT_YML)),
            settle(client.get_file_contents(owner, repo, CODEQL_ANALYSIS_YML)),
            settle(client.list_workflows(owner, repo)),
            settle(client.get_allowed_action_patterns(owner, repo)),
            settle(client.check_vulnerability_alerts(owner, repo)),
        )?;

        let codeql_analysis_yml = codeql_analysis.and_then(|content| content.decoded_content());

        Ok(RepositoryExtras {
            teams,
            languages,
            build: BuildSystems {
                travis: travis.is_some(),
                circleci: circleci.is_some(),
                codebuild: codebuild.is_some(),
                makefile: makefile.is_some(),
            },
            dependabot_config: dependabot_config.is_some(),
            codeql_analysis_yml,
            workflows,
            allowed_action_patterns,
            vulnerability_alerts: vulnerability_alerts_status(vulnerability_alerts),
        })
    }

    /// GHAS tracking issues and CodeQL pull requests of the configured repositories.
    async fn collect_tracking(&self) -> GitHubResult<TrackingSearch> {
        let issues: Vec<TrackingItem> = self
            .client
            .search_issues(self.config.tracking_issue_query(), Some(100))
            .try_collect()
            .await?;
        let pull_requests: Vec<TrackingItem> = self
            .client
            .search_issues(self.config.codeql_pull_request_query(), Some(100))
            .try_collect()
            .await?;

        let in_scope = |item: &TrackingItem| self.config.repos.iter().any(|r| belongs_to(item, r));
        Ok(TrackingSearch {
            issues: issues.into_iter().filter(|i| in_scope(i)).collect(),
            pull_requests: pull_requests.into_iter().filter(|i| in_scope(i)).collect(),
        })
    }
}
