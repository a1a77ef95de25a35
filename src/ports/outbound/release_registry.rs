use crate::provider_project::domain::RepositorySlug;
use async_trait::async_trait;

/// Outcome of looking for a major-version-1 release of a repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseQueryOutcome {
    /// At least one release tag contains `v1.`
    Found,
    /// The query ran and no release tag contains `v1.`
    NotFound,
    /// The query could not complete (not installed, unreachable, timed out, ...)
    Failed(String),
}

/// ReleaseRegistry port for querying a repository's published releases
///
/// This port abstracts the external release registry (GitHub releases via
/// the `gh` CLI) so the major version resolver can be tested without a
/// network or subprocess.
///
/// Implementations never return an error: every failure is reported as
/// [`ReleaseQueryOutcome::Failed`].
#[async_trait]
pub trait ReleaseRegistry: Send + Sync {
    /// Looks for any release of `repository` whose tag contains `v1.`
    async fn query_major_v1_release(&self, repository: &RepositorySlug) -> ReleaseQueryOutcome;
}
