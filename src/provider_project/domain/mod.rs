pub mod component_reference;
pub mod major_version;
pub mod naming_conventions;
pub mod package_identity;
pub mod publishing_config;
pub mod repository_slug;

pub use component_reference::ComponentReference;
pub use major_version::MajorVersionDecision;
pub use naming_conventions::{GitIdentity, NamingConventions};
pub use package_identity::{
    GoIdentity, MavenIdentity, NpmIdentity, NugetIdentity, PackageIdentity, PythonIdentity,
};
pub use publishing_config::{
    AuthorInfo, AutomationSettings, CdktfSettings, EnvironmentSettings, ProviderSettings,
    PublishingConfig,
};
pub use repository_slug::RepositorySlug;
