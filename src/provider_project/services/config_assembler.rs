use crate::provider_project::domain::{
    AuthorInfo, AutomationSettings, CdktfSettings, ComponentReference, EnvironmentSettings,
    MajorVersionDecision, NamingConventions, PackageIdentity, ProviderSettings, PublishingConfig,
    RepositorySlug,
};
use crate::shared::error::ProviderProjectError;
use crate::shared::Result;
use std::collections::BTreeMap;

const LICENSE: &str = "MPL-2.0";
const DEFAULT_RELEASE_BRANCH: &str = "main";
const DEFAULT_WORKFLOW_CONTAINER_IMAGE: &str = "hashicorp/jsii-terraform";
const AUTOMERGE_LABEL: &str = "automerge";
const DOT_PROP_DEV_DEPENDENCY: &str = "dot-prop@^5.2.0";

/// Heap size for the build tasks; the Go bindings need more than the Node default
const NODE_OPTIONS: &str = "--max-old-space-size=7168";

/// Secret placeholder resolved by the CI system, never by us
const GITHUB_TOKEN_PLACEHOLDER: &str = "${{ secrets.GITHUB_TOKEN }}";

/// PublishingConfigAssembler service building the final configuration object
///
/// Pure composition. The only check is that the required scalar settings
/// are present and non-blank; the first missing one is reported by name.
#[derive(Debug, Clone)]
pub struct PublishingConfigAssembler {
    naming: NamingConventions,
    tool_version: String,
}

impl PublishingConfigAssembler {
    pub fn new(naming: NamingConventions) -> Self {
        Self {
            naming,
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Overrides the version written into the `provider-project` dev dependency
    pub fn with_tool_version(mut self, version: impl Into<String>) -> Self {
        self.tool_version = version.into();
        self
    }

    /// Checks that the required scalar settings are present
    ///
    /// # Errors
    /// Returns `MissingConfiguration` naming the first missing setting
    pub fn check_required(settings: &ProviderSettings) -> Result<()> {
        required("cdktf_version", settings.cdktf_version.as_deref())?;
        required("constructs_version", settings.constructs_version.as_deref())?;
        Ok(())
    }

    /// Assembles the configuration for one provider
    ///
    /// # Errors
    /// Returns `MissingConfiguration` when `cdktf_version` or
    /// `constructs_version` is absent or blank
    pub fn assemble(
        &self,
        reference: &ComponentReference,
        identity: &PackageIdentity,
        major_version: MajorVersionDecision,
        settings: &ProviderSettings,
    ) -> Result<PublishingConfig> {
        let cdktf_version = required("cdktf_version", settings.cdktf_version.as_deref())?;
        let constructs_version =
            required("constructs_version", settings.constructs_version.as_deref())?;

        let provider_name = identity.provider_name();
        let repository = RepositorySlug::for_provider(provider_name, &self.naming);

        Ok(PublishingConfig {
            name: identity.npm().name.clone(),
            description: format!(
                "Prebuilt {} Provider for Terraform CDK (cdktf)",
                provider_name
            ),
            keywords: ["cdktf", "terraform", "cdk", "provider", provider_name]
                .iter()
                .map(|k| k.to_string())
                .collect(),
            license: LICENSE.to_string(),
            author: AuthorInfo {
                name: self.naming.author_name.clone(),
                address: self.naming.author_address.clone(),
                organization: true,
            },
            repository_url: repository.git_url(),
            default_release_branch: DEFAULT_RELEASE_BRANCH.to_string(),
            workflow_container_image: optional(settings.workflow_container_image.as_deref())
                .unwrap_or(DEFAULT_WORKFLOW_CONTAINER_IMAGE)
                .to_string(),
            min_node_version: optional(settings.min_node_version.as_deref()).map(str::to_string),
            dev_deps: vec![
                format!(
                    "@{}/provider-project@^{}",
                    self.naming.namespace, self.tool_version
                ),
                DOT_PROP_DEV_DEPENDENCY.to_string(),
            ],
            major_version,
            npm: identity.npm().clone(),
            python: identity.python().clone(),
            nuget: identity.nuget().clone(),
            maven: identity.maven().clone(),
            go: identity.go().clone(),
            workflow_git_identity: self.naming.workflow_git_identity.clone(),
            cdktf: CdktfSettings {
                terraform_provider: reference.raw().to_string(),
                provider_name: provider_name.to_string(),
                provider_version: reference.version().map(str::to_string),
                cdktf_version: cdktf_version.to_string(),
                constructs_version: constructs_version.to_string(),
                jsii_version: optional(settings.jsii_version.as_deref()).map(str::to_string),
            },
            environment: Self::environment(),
            automation: AutomationSettings {
                dependency_upgrade_labels: vec![AUTOMERGE_LABEL.to_string()],
                auto_merge_label: AUTOMERGE_LABEL.to_string(),
                mergify: false,
                pinned_dev_dependency: false,
            },
        })
    }

    fn environment() -> EnvironmentSettings {
        let task = BTreeMap::from([
            ("CHECKPOINT_DISABLE".to_string(), "1".to_string()),
            ("NODE_OPTIONS".to_string(), NODE_OPTIONS.to_string()),
        ]);
        // the build runs `gh` and needs a token
        let build = BTreeMap::from([(
            "GH_TOKEN".to_string(),
            GITHUB_TOKEN_PLACEHOLDER.to_string(),
        )]);
        EnvironmentSettings { task, build }
    }
}

fn optional(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn required<'a>(setting: &str, value: Option<&'a str>) -> Result<&'a str> {
    optional(value).ok_or_else(|| {
        ProviderProjectError::MissingConfiguration {
            setting: setting.to_string(),
        }
        .into()
    })
}
