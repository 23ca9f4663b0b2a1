use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Check that `path` names an existing, non-empty regular file.
///
/// Checks run in order — existence, file kind, size — and the first failure
/// wins; later checks are never evaluated. Returns the path in absolute form
/// so later stages are independent of the working directory.
pub fn validate_audio_file(path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(Error::AudioNotFound {
            path: path.to_path_buf(),
        });
    }

    if !path.is_file() {
        return Err(Error::NotAFile {
            path: path.to_path_buf(),
        });
    }

    if std::fs::metadata(path)?.len() == 0 {
        return Err(Error::EmptyAudio {
            path: path.to_path_buf(),
        });
    }

    Ok(path.canonicalize()?)
}
