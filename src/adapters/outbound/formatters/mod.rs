/// Formatter adapters for the configuration output formats
mod json_formatter;
mod yaml_formatter;

pub use json_formatter::JsonConfigFormatter;
pub use yaml_formatter::YamlConfigFormatter;
