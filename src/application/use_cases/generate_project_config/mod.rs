use crate::application::dto::{ProjectRequest, ProjectResponse};
use crate::application::use_cases::MajorVersionResolver;
use crate::ports::outbound::{ProgressReporter, ReleaseRegistry};
use crate::provider_project::domain::NamingConventions;
use crate::provider_project::services::{PackageIdentityResolver, PublishingConfigAssembler};
use crate::shared::error::ProviderProjectError;
use crate::shared::Result;

/// GenerateProjectConfigUseCase - Core use case for provider project configuration
///
/// Orchestrates identity resolution, the major version decision and config
/// assembly, with the release registry and progress reporter injected.
///
/// # Type Parameters
/// * `REG` - ReleaseRegistry implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateProjectConfigUseCase<REG, PR> {
    identity_resolver: PackageIdentityResolver,
    major_version_resolver: MajorVersionResolver<REG>,
    assembler: PublishingConfigAssembler,
    progress_reporter: PR,
}

impl<REG, PR> GenerateProjectConfigUseCase<REG, PR>
where
    REG: ReleaseRegistry,
    PR: ProgressReporter,
{
    /// Creates a new GenerateProjectConfigUseCase with injected dependencies
    pub fn new(naming: NamingConventions, release_registry: REG, progress_reporter: PR) -> Self {
        Self {
            identity_resolver: PackageIdentityResolver::new(naming.clone()),
            major_version_resolver: MajorVersionResolver::new(release_registry),
            assembler: PublishingConfigAssembler::new(naming),
            progress_reporter,
        }
    }

    /// Replaces the assembler, e.g. to pin the tool version in tests
    pub fn with_assembler(mut self, assembler: PublishingConfigAssembler) -> Self {
        self.assembler = assembler;
        self
    }

    /// Executes the configuration generation use case
    ///
    /// Fatal problems (bad reference, missing setting) are raised before the
    /// release registry is queried. Nothing is partially built: either the
    /// full configuration is returned or an error is.
    ///
    /// # Errors
    /// Returns `MissingConfiguration`, `InvalidReference` or
    /// `ReservedSuffixConflict`
    pub async fn execute(&self, request: ProjectRequest) -> Result<ProjectResponse> {
        // Step 1: Validate input
        let raw_reference = request
            .terraform_provider
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .ok_or_else(|| ProviderProjectError::MissingConfiguration {
                setting: "terraform_provider".to_string(),
            })?;
        PublishingConfigAssembler::check_required(&request.settings)?;

        // Step 2: Derive package identity
        let (reference, identity) = self.identity_resolver.resolve_str(raw_reference)?;
        let repository = self.identity_resolver.repository_slug(&reference);
        self.progress_reporter.report(&format!(
            "📦 Provider {} → {}",
            reference.short_name(),
            identity.npm().name
        ));
        tracing::debug!(
            provider = reference.short_name(),
            version = ?reference.version(),
            %repository,
            "resolved package identity"
        );

        // Step 3: Decide major version
        let major_version = self
            .major_version_resolver
            .resolve(
                &repository,
                request.force_major_version,
                &self.progress_reporter,
            )
            .await;
        self.progress_reporter
            .report(&format!("🔢 Major version: {}", major_version));

        // Step 4: Assemble
        let config =
            self.assembler
                .assemble(&reference, &identity, major_version, &request.settings)?;

        Ok(ProjectResponse::new(config, repository))
    }
}
