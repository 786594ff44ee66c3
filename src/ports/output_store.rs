//! Output file creation.

use std::io::Write;

use crate::domain::AppError;

/// Port for creating the generated file.
///
/// `path` is relative to the store root. Creating truncates any existing
/// file at that path; content is written through the returned handle.
pub trait OutputStore {
    type Writer: Write;

    /// Create or truncate the file and return an open handle to it.
    fn create(&self, path: &str) -> Result<Self::Writer, AppError>;
}
