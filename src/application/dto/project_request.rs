use crate::provider_project::domain::ProviderSettings;

/// ProjectRequest - Internal request DTO for configuration generation
///
/// Carries the merged CLI and config-file input. Nothing here is validated
/// yet; the use case does that while building the configuration.
#[derive(Debug, Clone, Default)]
pub struct ProjectRequest {
    /// Terraform provider reference, e.g. `hashicorp/aws@5.42.0`
    pub terraform_provider: Option<String>,
    /// Scalar settings forwarded to the assembler
    pub settings: ProviderSettings,
    /// Major version override; skips the release registry when set
    pub force_major_version: Option<u64>,
}

impl ProjectRequest {
    pub fn new(
        terraform_provider: Option<String>,
        settings: ProviderSettings,
        force_major_version: Option<u64>,
    ) -> Self {
        Self {
            terraform_provider,
            settings,
            force_major_version,
        }
    }
}
