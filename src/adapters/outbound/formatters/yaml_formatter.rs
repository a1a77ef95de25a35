use crate::ports::outbound::ConfigFormatter;
use crate::provider_project::domain::PublishingConfig;
use crate::shared::Result;

/// YamlConfigFormatter adapter producing YAML
pub struct YamlConfigFormatter;

impl YamlConfigFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for YamlConfigFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigFormatter for YamlConfigFormatter {
    fn format(&self, config: &PublishingConfig) -> Result<String> {
        Ok(serde_yaml_ng::to_string(config)?)
    }
}
