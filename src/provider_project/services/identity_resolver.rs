use crate::provider_project::domain::{
    ComponentReference, GoIdentity, MavenIdentity, NamingConventions, NpmIdentity, NugetIdentity,
    PackageIdentity, PythonIdentity, RepositorySlug,
};
use crate::provider_project::services::IdentifierNormalizer;
use crate::shared::Result;

/// PackageIdentityResolver service composing the per-ecosystem identifiers
///
/// The reference checks (`InvalidReference`, then `ReservedSuffixConflict`)
/// happen in `ComponentReference::parse`; once a reference exists every
/// identifier can be derived without further failure.
#[derive(Debug, Clone)]
pub struct PackageIdentityResolver {
    normalizer: IdentifierNormalizer,
}

impl PackageIdentityResolver {
    pub fn new(naming: NamingConventions) -> Self {
        Self {
            normalizer: IdentifierNormalizer::new(naming),
        }
    }

    pub fn naming(&self) -> &NamingConventions {
        self.normalizer.naming()
    }

    /// Parses `reference` and derives its identity
    ///
    /// # Errors
    /// Returns `InvalidReference` or `ReservedSuffixConflict` carrying the raw input
    pub fn resolve_str(&self, reference: &str) -> Result<(ComponentReference, PackageIdentity)> {
        let reference = ComponentReference::parse(reference)?;
        let identity = self.resolve(&reference);
        Ok((reference, identity))
    }

    /// Derives the identity of an already validated reference
    pub fn resolve(&self, reference: &ComponentReference) -> PackageIdentity {
        let name = reference.short_name();
        let n = &self.normalizer;
        let naming = n.naming();

        let dotnet = n.dotnet_namespace(name);

        PackageIdentity::new(
            name.to_string(),
            NpmIdentity {
                name: n.npm_name(name),
            },
            PythonIdentity {
                dist_name: n.python_dist_name(name),
                module: n.python_module(name),
            },
            NugetIdentity {
                dot_net_namespace: dotnet.clone(),
                package_id: dotnet,
            },
            MavenIdentity {
                java_package: n.java_package(name),
                maven_group_id: n.maven_group_id(),
                maven_artifact_id: n.maven_artifact_id(name),
                maven_endpoint: naming.maven_endpoint.clone(),
            },
            GoIdentity {
                module_name: n.go_module_path(name),
                package_name: name.to_string(),
                git_user_name: naming.go_git_identity.name.clone(),
                git_user_email: naming.go_git_identity.email.clone(),
            },
        )
    }

    /// The GitHub repository holding the provider's generated project
    pub fn repository_slug(&self, reference: &ComponentReference) -> RepositorySlug {
        RepositorySlug::for_provider(reference.short_name(), self.naming())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::error::ProviderProjectError;

    fn resolver() -> PackageIdentityResolver {
        PackageIdentityResolver::new(NamingConventions::default())
    }

    #[test]
    fn test_resolve_aws() {
        let (reference, identity) = resolver().resolve_str("hashicorp/aws@5.42.0").unwrap();
        assert_eq!(reference.version(), Some("5.42.0"));
        assert_eq!(identity.provider_name(), "aws");
        assert_eq!(identity.npm().name, "@cdktf/provider-aws");
        assert_eq!(identity.python().dist_name, "cdktf-cdktf-provider-aws");
        assert_eq!(identity.python().module, "cdktf_cdktf_provider_aws");
        assert_eq!(
            identity.nuget().dot_net_namespace,
            "HashiCorp.Cdktf.Providers.Aws"
        );
        assert_eq!(identity.nuget().package_id, "HashiCorp.Cdktf.Providers.Aws");
        assert_eq!(
            identity.maven().java_package,
            "com.hashicorp.cdktf.providers.aws"
        );
        assert_eq!(identity.maven().maven_group_id, "com.hashicorp");
        assert_eq!(identity.maven().maven_artifact_id, "cdktf-provider-aws");
        assert_eq!(
            identity.maven().maven_endpoint,
            "https://hashicorp.oss.sonatype.org"
        );
        assert_eq!(
            identity.go().module_name,
            "github.com/hashicorp/cdktf-provider-aws-go"
        );
        assert_eq!(identity.go().package_name, "aws");
        assert_eq!(identity.go().git_user_name, "CDK for Terraform Team");
        assert_eq!(
            identity.go().git_user_email,
            "github-team-tf-cdk@hashicorp.com"
        );
    }

    #[test]
    fn test_resolve_google_beta() {
        let (_, identity) = resolver().resolve_str("hashicorp/google-beta").unwrap();
        assert!(identity.python().module.ends_with("google_beta"));
        assert!(identity.go().module_name.ends_with("google-beta-go"));
        assert_eq!(
            identity.maven().java_package,
            "com.hashicorp.cdktf.providers.google_beta"
        );
        assert_eq!(
            identity.nuget().package_id,
            "HashiCorp.Cdktf.Providers.GoogleBeta"
        );
    }

    #[test]
    fn test_resolve_reserved_java_names() {
        let (_, null) = resolver().resolve_str("hashicorp/null@3.2.1").unwrap();
        assert_eq!(
            null.maven().java_package,
            "com.hashicorp.cdktf.providers.null_provider"
        );
        assert_eq!(null.maven().maven_artifact_id, "cdktf-provider-null");

        let (_, random) = resolver().resolve_str("hashicorp/random").unwrap();
        assert_eq!(
            random.maven().java_package,
            "com.hashicorp.cdktf.providers.random_provider"
        );
    }

    #[test]
    fn test_every_identifier_non_empty() {
        for reference in ["aws", "a", "google-beta", "null", "AzureRM", "x-y-z@1"] {
            let (_, identity) = resolver().resolve_str(reference).unwrap();
            for (field, value) in identity.identifiers() {
                assert!(!value.is_empty(), "{} empty for {}", field, reference);
            }
        }
    }

    #[test]
    fn test_no_dashes_where_forbidden() {
        let (_, identity) = resolver().resolve_str("a-b-c").unwrap();
        assert!(!identity.python().module.contains('-'));
        assert!(!identity.maven().java_package.contains('-'));
        assert!(!identity.nuget().package_id.contains('-'));
    }

    #[test]
    fn test_resolve_rejects_go_suffix() {
        let err = resolver().resolve_str("hashicorp/foo-go@1.0.0").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ProviderProjectError>(),
            Some(ProviderProjectError::ReservedSuffixConflict { .. })
        ));
    }

    #[test]
    fn test_resolve_rejects_empty_name() {
        let err = resolver().resolve_str("hashicorp/").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ProviderProjectError>(),
            Some(ProviderProjectError::InvalidReference { .. })
        ));
    }

    #[test]
    fn test_repository_slug() {
        let (reference, _) = resolver().resolve_str("hashicorp/google-beta@5.0.0").unwrap();
        assert_eq!(
            resolver().repository_slug(&reference).to_string(),
            "hashicorp/cdktf-provider-googlebeta"
        );
    }

    #[test]
    fn test_alternate_naming_injected() {
        let naming = NamingConventions {
            github_org: "acme".to_string(),
            namespace: "acmecdk".to_string(),
            ..NamingConventions::default()
        };
        let resolver = PackageIdentityResolver::new(naming);
        let (reference, identity) = resolver.resolve_str("acme/dns@1.0.0").unwrap();
        assert_eq!(identity.npm().name, "@acmecdk/provider-dns");
        assert_eq!(identity.maven().maven_group_id, "com.acme");
        assert_eq!(
            resolver.repository_slug(&reference).to_string(),
            "acme/cdktf-provider-dns"
        );
    }
}
