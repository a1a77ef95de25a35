use serde::Serialize;

/// npm package identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NpmIdentity {
    pub name: String,
}

/// PyPI distribution and import identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PythonIdentity {
    pub dist_name: String,
    pub module: String,
}

/// NuGet package identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NugetIdentity {
    pub dot_net_namespace: String,
    pub package_id: String,
}

/// Maven coordinates and Java package
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MavenIdentity {
    pub java_package: String,
    pub maven_group_id: String,
    pub maven_artifact_id: String,
    pub maven_endpoint: String,
}

/// Go module identity and the git author of the module repository commits
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoIdentity {
    pub module_name: String,
    pub package_name: String,
    pub git_user_name: String,
    pub git_user_email: String,
}

/// PackageIdentity value object: one identifier set per ecosystem
///
/// Built once per provider by the `PackageIdentityResolver` and never
/// modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageIdentity {
    provider_name: String,
    npm: NpmIdentity,
    python: PythonIdentity,
    nuget: NugetIdentity,
    maven: MavenIdentity,
    go: GoIdentity,
}

impl PackageIdentity {
    pub fn new(
        provider_name: String,
        npm: NpmIdentity,
        python: PythonIdentity,
        nuget: NugetIdentity,
        maven: MavenIdentity,
        go: GoIdentity,
    ) -> Self {
        Self {
            provider_name,
            npm,
            python,
            nuget,
            maven,
            go,
        }
    }

    /// The canonical short name the identity was derived from
    pub fn provider_name(&self) -> &str {
        &self.provider_name
    }

    pub fn npm(&self) -> &NpmIdentity {
        &self.npm
    }

    pub fn python(&self) -> &PythonIdentity {
        &self.python
    }

    pub fn nuget(&self) -> &NugetIdentity {
        &self.nuget
    }

    pub fn maven(&self) -> &MavenIdentity {
        &self.maven
    }

    pub fn go(&self) -> &GoIdentity {
        &self.go
    }

    /// Every identifier in the record, labelled by ecosystem field
    #[cfg(test)]
    pub fn identifiers(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("npm.name", self.npm.name.as_str()),
            ("python.distName", self.python.dist_name.as_str()),
            ("python.module", self.python.module.as_str()),
            ("nuget.dotNetNamespace", self.nuget.dot_net_namespace.as_str()),
            ("nuget.packageId", self.nuget.package_id.as_str()),
            ("maven.javaPackage", self.maven.java_package.as_str()),
            ("maven.mavenGroupId", self.maven.maven_group_id.as_str()),
            ("maven.mavenArtifactId", self.maven.maven_artifact_id.as_str()),
            ("go.moduleName", self.go.module_name.as_str()),
            ("go.packageName", self.go.package_name.as_str()),
        ]
    }
}
