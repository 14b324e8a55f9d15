//! GitHub API utilities

use crate::github::error::GitHubResult;
use crate::runtime::AsyncTask;
use std::future::Future;

/// Spawn an async task for a GitHub API operation.
#[inline]
pub fn spawn_task<T, F>(label: impl Into<String>, work: F) -> AsyncTask<T>
where
    T: Send + 'static,
    F: Future<Output = T> + Send + 'static,
{
    AsyncTask::spawn(label, work)
}

/// Await a spawned operation, folding a dropped task into the error type.
pub async fn settle<T>(task: AsyncTask<GitHubResult<T>>) -> GitHubResult<T>
where
    T: Send + 'static,
{
    task.await?
}
