use crate::adapters::outbound::formatters::{JsonConfigFormatter, YamlConfigFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ConfigFormatter;

/// Factory for creating configuration formatters
///
/// Selects the formatter adapter for an output format. It belongs in the
/// application layer as it picks infrastructure based on application needs.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use cdktf_provider_project::application::dto::OutputFormat;
    /// use cdktf_provider_project::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Yaml);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn ConfigFormatter> {
        match format {
            OutputFormat::Json => Box::new(JsonConfigFormatter::new()),
            OutputFormat::Yaml => Box::new(YamlConfigFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use cdktf_provider_project::application::dto::OutputFormat;
    /// use cdktf_provider_project::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Json);
    /// assert_eq!(message, "📝 Generating JSON configuration...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Json => "📝 Generating JSON configuration...",
            OutputFormat::Yaml => "📝 Generating YAML configuration...",
        }
    }
}
