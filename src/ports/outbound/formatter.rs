use crate::provider_project::domain::PublishingConfig;
use crate::shared::Result;

/// ConfigFormatter port for serializing the publishing configuration
///
/// This port abstracts the output format (JSON, YAML) handed to the
/// scaffolding engine.
pub trait ConfigFormatter {
    /// Formats the assembled configuration
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, config: &PublishingConfig) -> Result<String>;
}
