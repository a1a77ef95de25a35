use crate::shared::Result;

/// OutputPresenter port for delivering the rendered publishing configuration
///
/// Stdout or a file; the scaffolding engine reads whichever the caller chose.
pub trait OutputPresenter {
    /// Writes the rendered configuration to the destination
    ///
    /// # Errors
    /// Returns `FileWriteError` when the file destination cannot be written
    fn present(&self, content: &str) -> Result<()>;
}
