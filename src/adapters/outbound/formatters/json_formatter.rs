use crate::ports::outbound::ConfigFormatter;
use crate::provider_project::domain::PublishingConfig;
use crate::shared::Result;

/// JsonConfigFormatter adapter producing pretty-printed JSON
pub struct JsonConfigFormatter;

impl JsonConfigFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonConfigFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigFormatter for JsonConfigFormatter {
    fn format(&self, config: &PublishingConfig) -> Result<String> {
        let mut json = serde_json::to_string_pretty(config)?;
        json.push('\n');
        Ok(json)
    }
}
