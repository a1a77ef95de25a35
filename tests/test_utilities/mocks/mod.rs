/// Mock implementations for testing
mod mock_progress_reporter;
mod mock_release_registry;

pub use mock_progress_reporter::MockProgressReporter;
pub use mock_release_registry::MockReleaseRegistry;
