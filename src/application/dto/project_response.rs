use crate::provider_project::domain::{PublishingConfig, RepositorySlug};

/// ProjectResponse - Internal response DTO from configuration generation
#[derive(Debug, Clone)]
pub struct ProjectResponse {
    /// The assembled configuration for the scaffolding engine
    pub config: PublishingConfig,
    /// Repository whose release history decided the major version
    pub repository: RepositorySlug,
}

impl ProjectResponse {
    pub fn new(config: PublishingConfig, repository: RepositorySlug) -> Self {
        Self { config, repository }
    }
}
