use crate::shared::error::ProviderProjectError;
use crate::shared::Result;

/// Suffix reserved for the generated Go module repositories
pub const RESERVED_GO_SUFFIX: &str = "-go";

/// ComponentReference value object for a terraform provider reference
///
/// Parsed from `name@version` where `name` may carry a namespace
/// (`hashicorp/aws@5.42.0`). Only the last `/` segment is the canonical
/// short name used for every derived identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentReference {
    raw: String,
    name: String,
    short_name: String,
    version: Option<String>,
}

impl ComponentReference {
    /// Parses a provider reference
    ///
    /// The reference is split on the last `@`; an empty version counts as
    /// absent. Checks run in order and the first failure wins:
    /// 1. the short name must be non-empty (`InvalidReference`)
    /// 2. the short name must not end with `-go` (`ReservedSuffixConflict`)
    ///
    /// # Errors
    /// Returns a [`ProviderProjectError`] carrying the raw reference
    pub fn parse(reference: &str) -> Result<Self> {
        let raw = reference.trim();

        let (name, version) = match raw.rsplit_once('@') {
            Some((name, version)) => (name, Some(version)),
            None => (raw, None),
        };

        let short_name = name.rsplit('/').next().unwrap_or_default();
        if short_name.is_empty() {
            return Err(ProviderProjectError::InvalidReference {
                reference: reference.to_string(),
            }
            .into());
        }

        if short_name.ends_with(RESERVED_GO_SUFFIX) {
            return Err(ProviderProjectError::ReservedSuffixConflict {
                reference: reference.to_string(),
                name: short_name.to_string(),
            }
            .into());
        }

        Ok(Self {
            raw: raw.to_string(),
            name: name.to_string(),
            short_name: short_name.to_string(),
            version: version.filter(|v| !v.is_empty()).map(str::to_string),
        })
    }

    /// The reference as given, trimmed
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The fully qualified name, including any namespace
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The canonical short name (last `/` segment of the name)
    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }
}

impl std::fmt::Display for ComponentReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}
