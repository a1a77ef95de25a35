use crate::provider_project::domain::{
    GitIdentity, GoIdentity, MajorVersionDecision, MavenIdentity, NpmIdentity, NugetIdentity,
    PythonIdentity,
};
use serde::Serialize;
use std::collections::BTreeMap;

/// Scalar settings supplied by the caller for one provider project
///
/// `cdktf_version` and `constructs_version` are required; the assembler
/// rejects the build when either is missing or blank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderSettings {
    pub cdktf_version: Option<String>,
    pub constructs_version: Option<String>,
    pub jsii_version: Option<String>,
    pub min_node_version: Option<String>,
    pub workflow_container_image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorInfo {
    pub name: String,
    pub address: String,
    pub organization: bool,
}

/// Settings read by the generated `cdktf.json` and provider fetch step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CdktfSettings {
    pub terraform_provider: String,
    pub provider_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_version: Option<String>,
    pub cdktf_version: String,
    pub constructs_version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jsii_version: Option<String>,
}

/// Environment variables for project tasks and the build workflow
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentSettings {
    pub task: BTreeMap<String, String>,
    pub build: BTreeMap<String, String>,
}

/// Declarative attachments for the dependency-upgrade and auto-merge automation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AutomationSettings {
    pub dependency_upgrade_labels: Vec<String>,
    pub auto_merge_label: String,
    pub mergify: bool,
    pub pinned_dev_dependency: bool,
}

/// PublishingConfig: the complete configuration handed to the scaffolding engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishingConfig {
    pub name: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub license: String,
    pub author: AuthorInfo,
    pub repository_url: String,
    pub default_release_branch: String,
    pub workflow_container_image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_node_version: Option<String>,
    pub dev_deps: Vec<String>,
    #[serde(skip_serializing_if = "MajorVersionDecision::is_unconstrained")]
    pub major_version: MajorVersionDecision,
    pub npm: NpmIdentity,
    pub python: PythonIdentity,
    pub nuget: NugetIdentity,
    pub maven: MavenIdentity,
    pub go: GoIdentity,
    pub workflow_git_identity: GitIdentity,
    pub cdktf: CdktfSettings,
    pub environment: EnvironmentSettings,
    pub automation: AutomationSettings,
}
