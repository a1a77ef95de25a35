use crate::provider_project::policies::ReservedNameTable;
use serde::{Deserialize, Serialize};

/// Name and email used as a git author
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitIdentity {
    pub name: String,
    pub email: String,
}

impl GitIdentity {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// NamingConventions value object holding the organization-wide naming tokens
///
/// Every identifier derived for a provider is built from these tokens, so
/// they are injected into the normalizer, resolver and assembler rather than
/// read from constants. The defaults describe the HashiCorp prebuilt
/// providers; the config file can override any field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NamingConventions {
    /// Leading segment of the .NET namespace (`HashiCorp`)
    pub organization: String,
    /// Package namespace token (`cdktf`), used for the npm scope and Python prefix
    pub namespace: String,
    /// GitHub organization owning the provider repositories
    pub github_org: String,
    /// Prefix of every provider repository name
    pub repository_prefix: String,
    /// Segment between the namespace and the provider name in the PyPI names
    pub python_package_prefix: String,
    pub author_name: String,
    pub author_address: String,
    pub maven_endpoint: String,
    /// Author of the commits pushed to the Go module repositories
    pub go_git_identity: GitIdentity,
    /// Author of the commits made by generated workflows
    pub workflow_git_identity: GitIdentity,
    pub reserved_names: ReservedNameTable,
}

impl Default for NamingConventions {
    fn default() -> Self {
        Self {
            organization: "HashiCorp".to_string(),
            namespace: "cdktf".to_string(),
            github_org: "hashicorp".to_string(),
            repository_prefix: "cdktf-provider-".to_string(),
            python_package_prefix: "cdktf-provider-".to_string(),
            author_name: "HashiCorp".to_string(),
            author_address: "https://hashicorp.com".to_string(),
            maven_endpoint: "https://hashicorp.oss.sonatype.org".to_string(),
            go_git_identity: GitIdentity::new(
                "CDK for Terraform Team",
                "github-team-tf-cdk@hashicorp.com",
            ),
            workflow_git_identity: GitIdentity::new(
                "team-tf-cdk",
                "github-team-tf-cdk@hashicorp.com",
            ),
            reserved_names: ReservedNameTable::default(),
        }
    }
}

impl NamingConventions {
    /// Returns the names of fields that are empty or whitespace only
    pub fn blank_fields(&self) -> Vec<&'static str> {
        let fields = [
            ("organization", self.organization.as_str()),
            ("namespace", self.namespace.as_str()),
            ("github_org", self.github_org.as_str()),
            ("repository_prefix", self.repository_prefix.as_str()),
            ("python_package_prefix", self.python_package_prefix.as_str()),
            ("author_name", self.author_name.as_str()),
            ("author_address", self.author_address.as_str()),
            ("maven_endpoint", self.maven_endpoint.as_str()),
            ("go_git_identity.name", self.go_git_identity.name.as_str()),
            ("go_git_identity.email", self.go_git_identity.email.as_str()),
            (
                "workflow_git_identity.name",
                self.workflow_git_identity.name.as_str(),
            ),
            (
                "workflow_git_identity.email",
                self.workflow_git_identity.email.as_str(),
            ),
        ];

        fields
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| field)
            .collect()
    }
}
