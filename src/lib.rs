//! cdktf-provider-project - publishing configuration for prebuilt CDK for Terraform providers
//!
//! Derives, from one Terraform provider reference, the package identifiers of
//! every ecosystem the provider is published to (npm, PyPI, NuGet, Maven and
//! Go), decides the major version the package is pinned to, and assembles the
//! configuration consumed by the project scaffolding engine.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`provider_project`): Naming rules, identity and config models
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use cdktf_provider_project::prelude::*;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! // Create adapters
//! let release_registry = GhReleaseRegistry::new();
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = GenerateProjectConfigUseCase::new(
//!     NamingConventions::default(),
//!     release_registry,
//!     progress_reporter,
//! );
//!
//! // Execute
//! let settings = ProviderSettings {
//!     cdktf_version: Some("^0.20.0".to_string()),
//!     constructs_version: Some("^10.3.0".to_string()),
//!     ..ProviderSettings::default()
//! };
//! let request = ProjectRequest::new(Some("hashicorp/aws@5.42.0".to_string()), settings, None);
//! let response = use_case.execute(request).await?;
//!
//! // Format output
//! let formatter = JsonConfigFormatter::new();
//! println!("{}", formatter.format(&response.config)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod ports;
pub mod provider_project;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{JsonConfigFormatter, YamlConfigFormatter};
    pub use crate::adapters::outbound::registry::GhReleaseRegistry;
    pub use crate::application::dto::{OutputFormat, ProjectRequest, ProjectResponse};
    pub use crate::application::use_cases::{GenerateProjectConfigUseCase, MajorVersionResolver};
    pub use crate::ports::outbound::{
        ConfigFormatter, OutputPresenter, ProgressReporter, ReleaseQueryOutcome, ReleaseRegistry,
    };
    pub use crate::provider_project::domain::{
        ComponentReference, MajorVersionDecision, NamingConventions, PackageIdentity,
        ProviderSettings, PublishingConfig, RepositorySlug,
    };
    pub use crate::provider_project::policies::ReservedNameTable;
    pub use crate::provider_project::services::{
        IdentifierNormalizer, PackageIdentityResolver, PublishingConfigAssembler,
    };
    pub use crate::shared::error::ProviderProjectError;
    pub use crate::shared::Result;
}
