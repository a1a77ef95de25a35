use crate::provider_project::domain::NamingConventions;

/// RepositorySlug value object naming a provider's GitHub repository
///
/// The repository name drops every `-` from the short name
/// (`google-beta` → `cdktf-provider-googlebeta`), which is how the
/// existing provider repositories are named.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositorySlug {
    organization: String,
    name: String,
}

impl RepositorySlug {
    pub fn new(organization: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            organization: organization.into(),
            name: name.into(),
        }
    }

    /// Derives the repository slug for a provider short name
    pub fn for_provider(short_name: &str, naming: &NamingConventions) -> Self {
        let compact: String = short_name.chars().filter(|c| *c != '-').collect();
        Self::new(
            naming.github_org.clone(),
            format!("{}{}", naming.repository_prefix, compact),
        )
    }

    pub fn organization(&self) -> &str {
        &self.organization
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Clone URL of the repository
    pub fn git_url(&self) -> String {
        format!("https://github.com/{}.git", self)
    }
}

impl std::fmt::Display for RepositorySlug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.organization, self.name)
    }
}
