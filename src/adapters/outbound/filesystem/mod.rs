/// Filesystem adapters for writing the generated configuration
mod file_writer;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
