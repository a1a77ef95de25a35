/// ProgressReporter port for reporting progress during operations
///
/// This port abstracts progress reporting (e.g., to stderr)
/// so stdout stays reserved for the generated configuration.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports the start of a potentially slow activity (e.g., a registry query)
    ///
    /// The activity ends with the next `report_error` or `report_completion`.
    fn report_activity(&self, message: &str);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
