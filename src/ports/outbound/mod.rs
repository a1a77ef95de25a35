/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (release registry, console, file system).
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;
pub mod release_registry;

pub use formatter::ConfigFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use release_registry::{ReleaseQueryOutcome, ReleaseRegistry};
