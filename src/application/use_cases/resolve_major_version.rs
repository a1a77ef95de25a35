use crate::ports::outbound::{ProgressReporter, ReleaseQueryOutcome, ReleaseRegistry};
use crate::provider_project::domain::{MajorVersionDecision, RepositorySlug};
use crate::shared::error::ProviderProjectError;

/// MajorVersionResolver - decides the major version a provider package is pinned to
///
/// The intent is to land the very first release on major version 1 and then
/// leave later major bumps to the normal release workflow.
///
/// # Inherited behavior
/// Every registry outcome currently resolves to "unconstrained":
/// a repository with a `v1.` release, a repository with no `v1.` release
/// (brand new, or history without any v1 tag) and a failed query are all
/// treated alike. Pinning to 1 before the first release is not done. This
/// matches the generator the provider repositories were created with and
/// is kept until the release workflow is changed alongside it.
pub struct MajorVersionResolver<R> {
    registry: R,
}

impl<R: ReleaseRegistry> MajorVersionResolver<R> {
    pub fn new(registry: R) -> Self {
        Self { registry }
    }

    /// Resolves the major version for `repository`
    ///
    /// An override is returned verbatim without querying the registry.
    /// Registry failures are reported as a warning and degrade to
    /// "unconstrained"; this never fails.
    pub async fn resolve<PR: ProgressReporter>(
        &self,
        repository: &RepositorySlug,
        override_major: Option<u64>,
        progress_reporter: &PR,
    ) -> MajorVersionDecision {
        if let Some(major) = override_major {
            tracing::debug!(%repository, major, "major version forced by caller");
            return MajorVersionDecision::pinned(major);
        }

        progress_reporter.report_activity(&format!(
            "🔎 Checking release history of {}",
            repository
        ));

        match self.registry.query_major_v1_release(repository).await {
            ReleaseQueryOutcome::Failed(details) => {
                let error = ProviderProjectError::RegistryQueryFailed {
                    repository: repository.to_string(),
                    details,
                };
                tracing::warn!(%error, "continuing without a major version constraint");
                progress_reporter.report_error(&format!(
                    "⚠️  Warning: {}. Continuing without a major version constraint.",
                    error
                ));
                MajorVersionDecision::unconstrained()
            }
            outcome @ (ReleaseQueryOutcome::Found | ReleaseQueryOutcome::NotFound) => {
                tracing::debug!(%repository, ?outcome, "release history checked");
                progress_reporter.report_completion(&format!(
                    "✅ Release history checked: {}",
                    repository
                ));
                MajorVersionDecision::unconstrained()
            }
        }
    }
}
