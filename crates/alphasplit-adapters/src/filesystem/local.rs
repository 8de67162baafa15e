//! Local filesystem adapter using std::fs.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::trace;

use alphasplit_core::{
    application::{ApplicationError, ports::Filesystem},
    error::CoreResult,
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn open_read(&self, path: &Path) -> CoreResult<Box<dyn BufRead>> {
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ApplicationError::InputNotFound {
                path: path.to_path_buf(),
            },
            _ => ApplicationError::Read {
                path: path.to_path_buf(),
                reason: e.to_string(),
            },
        })?;
        trace!(path = %path.display(), "Opened input");
        Ok(Box::new(BufReader::new(file)))
    }

    fn create_write(&self, path: &Path) -> CoreResult<Box<dyn Write>> {
        let file = File::create(path).map_err(|e| ApplicationError::CreateOutput {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(Box::new(BufWriter::new(file)))
    }

    fn create_dir_all(&self, path: &Path) -> CoreResult<()> {
        if path.as_os_str().is_empty() {
            return Ok(());
        }
        std::fs::create_dir_all(path).map_err(|e| {
            ApplicationError::CreateOutput {
                path: path.to_path_buf(),
                reason: format!("Failed to create directory: {e}"),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use alphasplit_core::error::CoreError;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn open_missing_file_is_not_found() {
        let temp = TempDir::new().unwrap();
        let err = LocalFilesystem::new()
            .open_read(&temp.path().join("missing.txt"))
            .err()
            .unwrap();
        assert!(err.is_not_found());
    }

    #[test]
    fn open_directory_is_read_error() {
        let temp = TempDir::new().unwrap();
        // Opening a directory succeeds on some platforms; reading it fails.
        let result = LocalFilesystem::new()
            .open_read(temp.path())
            .and_then(|mut r| {
                let mut line = String::new();
                r.read_line(&mut line).map_err(|e| {
                    ApplicationError::Read {
                        path: temp.path().to_path_buf(),
                        reason: e.to_string(),
                    }
                    .into()
                })
            });
        assert!(matches!(
            result,
            Err(CoreError::Application(ApplicationError::Read { .. }))
        ));
    }

    #[test]
    fn create_write_truncates() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("A.txt");
        fs::write(&path, "stale\nstale\n").unwrap();

        {
            let mut w = LocalFilesystem::new().create_write(&path).unwrap();
            w.write_all(b"apple\n").unwrap();
        }

        assert_eq!(fs::read_to_string(&path).unwrap(), "apple\n");
    }

    #[test]
    fn create_write_in_missing_dir_fails() {
        let temp = TempDir::new().unwrap();
        let err = LocalFilesystem::new()
            .create_write(&temp.path().join("nope").join("A.txt"))
            .err()
            .unwrap();
        assert!(matches!(
            err,
            CoreError::Application(ApplicationError::CreateOutput { .. })
        ));
    }

    #[test]
    fn create_dir_all_nested() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("a").join("b");
        LocalFilesystem::new().create_dir_all(&dir).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn create_dir_all_accepts_empty_path() {
        assert!(LocalFilesystem::new().create_dir_all(Path::new("")).is_ok());
    }
}
