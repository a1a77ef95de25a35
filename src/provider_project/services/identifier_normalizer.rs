use crate::provider_project::domain::NamingConventions;

/// IdentifierNormalizer service deriving ecosystem identifiers from a short name
///
/// Each method starts from the canonical short name and applies only its own
/// ecosystem's rules. Outputs are never fed into another method: the Python
/// and Java transforms both replace `-` with `_`, while the Go module keeps
/// the dashed form.
///
/// Input is assumed valid (non-empty, no `-go` suffix); see
/// `ComponentReference::parse`.
#[derive(Debug, Clone)]
pub struct IdentifierNormalizer {
    naming: NamingConventions,
}

impl IdentifierNormalizer {
    pub fn new(naming: NamingConventions) -> Self {
        Self { naming }
    }

    pub fn naming(&self) -> &NamingConventions {
        &self.naming
    }

    /// `@cdktf/provider-google-beta`
    pub fn npm_name(&self, short_name: &str) -> String {
        format!("@{}/provider-{}", self.naming.namespace, short_name)
    }

    /// `cdktf-cdktf-provider-google_beta`
    pub fn python_dist_name(&self, short_name: &str) -> String {
        format!(
            "{}-{}{}",
            self.naming.namespace,
            self.naming.python_package_prefix,
            underscored(short_name)
        )
    }

    /// `cdktf_cdktf_provider_google_beta`
    pub fn python_module(&self, short_name: &str) -> String {
        format!(
            "{}_{}{}",
            underscored(&self.naming.namespace),
            underscored(&self.naming.python_package_prefix),
            underscored(short_name)
        )
        .to_lowercase()
    }

    /// `HashiCorp.Cdktf.Providers.GoogleBeta`
    pub fn dotnet_namespace(&self, short_name: &str) -> String {
        format!(
            "{}.{}.Providers.{}",
            self.naming.organization,
            pascal_case(&self.naming.namespace),
            pascal_case(short_name)
        )
    }

    /// Last segment of the Java package
    ///
    /// Reserved names come from the table verbatim; everything else has
    /// `-` replaced with `_`.
    pub fn java_package_segment(&self, short_name: &str) -> String {
        match self.naming.reserved_names.lookup(short_name) {
            Some(replacement) => replacement.to_string(),
            None => underscored(short_name),
        }
    }

    /// `com.hashicorp.cdktf.providers.google_beta`
    ///
    /// Every segment is a Java identifier, so dashes in the organization
    /// and namespace tokens become `_` as well.
    pub fn java_package(&self, short_name: &str) -> String {
        format!(
            "com.{}.{}.providers.{}",
            underscored(&self.naming.github_org),
            underscored(&self.naming.namespace),
            self.java_package_segment(short_name)
        )
    }

    /// `com.hashicorp`
    pub fn maven_group_id(&self) -> String {
        format!("com.{}", self.naming.github_org)
    }

    /// `cdktf-provider-google-beta`
    pub fn maven_artifact_id(&self, short_name: &str) -> String {
        format!("{}{}", self.naming.repository_prefix, short_name)
    }

    /// `github.com/hashicorp/cdktf-provider-google-beta-go`
    pub fn go_module_path(&self, short_name: &str) -> String {
        format!(
            "github.com/{}/{}{}-go",
            self.naming.github_org, self.naming.repository_prefix, short_name
        )
    }
}

fn underscored(value: &str) -> String {
    value.replace('-', "_")
}

/// Converts a name to PascalCase
///
/// Words are split on any non-alphanumeric character, on a lower-case
/// letter or digit followed by an upper-case letter, and inside acronyms
/// before the last capital (`HTTPServer` → `Http`, `Server`). Each word is
/// capitalized and the rest lower-cased. A word after the first that starts
/// with a digit is prefixed with `_` so adjacent numbers stay readable.
pub fn pascal_case(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    for (index, word) in split_words(value).iter().enumerate() {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            if index > 0 && first.is_ascii_digit() {
                result.push('_');
            }
            result.extend(first.to_uppercase());
            result.push_str(&chars.as_str().to_lowercase());
        }
    }
    result
}

fn split_words(value: &str) -> Vec<String> {
    let mut words = Vec::new();

    for segment in value.split(|c: char| !c.is_alphanumeric()) {
        let chars: Vec<char> = segment.chars().collect();
        let mut current = String::new();

        for (i, &c) in chars.iter().enumerate() {
            if i > 0 && c.is_uppercase() {
                let prev = chars[i - 1];
                let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
                let boundary = prev.is_lowercase()
                    || prev.is_ascii_digit()
                    || (prev.is_uppercase() && next_is_lower);
                if boundary && !current.is_empty() {
                    words.push(std::mem::take(&mut current));
                }
            }
            current.push(c);
        }

        if !current.is_empty() {
            words.push(current);
        }
    }

    words
}
