//! Writing finished photos to disk.

use std::path::Path;

use crate::error::CaptureError;

/// Write `bytes` to `path`, creating missing parent directories and
/// replacing any existing file.
///
/// # Errors
///
/// Returns `CaptureError::FileError` naming the path on any I/O failure.
pub fn write_photo(path: &Path, bytes: &[u8]) -> Result<(), CaptureError> {
    let file_error = |source| CaptureError::FileError {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(file_error)?;
    }
    std::fs::write(path, bytes).map_err(file_error)?;

    tracing::trace!(path = %path.display(), bytes = bytes.len(), "Photo written");
    Ok(())
}
