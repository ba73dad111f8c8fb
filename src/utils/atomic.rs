//! Atomic file writes
//!
//! Content is written to a sibling `.tmp` file, synced to disk, then renamed
//! over the destination, so readers see either the old file or the new one.

use std::fs::{self, File};
use std::io;
use std::path::Path;

/// Result type for atomic operations
pub type AtomicResult<T> = Result<T, AtomicError>;

/// Errors that can occur during atomic operations
#[derive(Debug)]
pub enum AtomicError {
    Io(io::Error),
    TempFileExists(String),
}

impl std::fmt::Display for AtomicError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AtomicError::Io(e) => write!(f, "IO error: {}", e),
            AtomicError::TempFileExists(path) => write!(f, "Temp file already exists: {}", path),
        }
    }
}

impl std::error::Error for AtomicError {}

impl From<io::Error> for AtomicError {
    fn from(e: io::Error) -> Self {
        AtomicError::Io(e)
    }
}

/// Atomically write a file using a writer function
///
/// Fails with [`AtomicError::TempFileExists`] if another write to the same
/// path is in progress (or was interrupted and left its temp file behind).
///
/// ```ignore
/// atomic_write_with("indice_invertido.json", |file| {
///     writeln!(file, "{{}}")
/// })?;
/// ```
pub fn atomic_write_with<P, F>(path: P, write_fn: F) -> AtomicResult<()>
where
    P: AsRef<Path>,
    F: FnOnce(&mut File) -> io::Result<()>,
{
    let path = path.as_ref();
    let temp_path = path.with_extension("tmp");

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut file = match fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&temp_path)
    {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            return Err(AtomicError::TempFileExists(temp_path.display().to_string()));
        }
        Err(e) => return Err(e.into()),
    };

    if let Err(e) = write_fn(&mut file).and_then(|_| file.sync_all()) {
        let _ = fs::remove_file(&temp_path);
        return Err(e.into());
    }
    drop(file);

    fs::rename(&temp_path, path)?;

    Ok(())
}
