//! In-memory filesystem adapter for testing.
//!
//! Besides file contents it records how many times each file was opened for
//! writing and closed, and can be told to fail writes to a given path.

use std::{
    collections::{HashMap, HashSet},
    io::{self, BufRead, Cursor, Write},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use alphasplit_core::{
    application::{ApplicationError, ports::Filesystem},
    error::CoreResult,
};

/// In-memory filesystem for testing.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, Vec<u8>>,
    directories: HashSet<PathBuf>,
    opens: HashMap<PathBuf, usize>,
    closes: HashMap<PathBuf, usize>,
    failing: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Seed a file (testing helper).
    pub fn insert_file(&self, path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.files.insert(path.into(), content.into());
        }
    }

    /// Read a file's content as text (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner
            .files
            .get(path)
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    /// Make every write to `path` fail with an I/O error.
    pub fn fail_writes_to(&self, path: impl Into<PathBuf>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.failing.insert(path.into());
        }
    }

    /// How many times `path` was opened for writing.
    pub fn open_count(&self, path: &Path) -> usize {
        self.inner
            .read()
            .map(|inner| inner.opens.get(path).copied().unwrap_or(0))
            .unwrap_or(0)
    }

    /// How many times a writer for `path` was closed (dropped).
    pub fn close_count(&self, path: &Path) -> usize {
        self.inner
            .read()
            .map(|inner| inner.closes.get(path).copied().unwrap_or(0))
            .unwrap_or(0)
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = self
            .inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default();
        files.sort();
        files
    }

    /// Check if a directory was created.
    pub fn dir_exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn open_read(&self, path: &Path) -> CoreResult<Box<dyn BufRead>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        let content = inner
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| ApplicationError::InputNotFound {
                path: path.to_path_buf(),
            })?;

        Ok(Box::new(Cursor::new(content)))
    }

    fn create_write(&self, path: &Path) -> CoreResult<Box<dyn Write>> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        inner.files.insert(path.to_path_buf(), Vec::new());
        *inner.opens.entry(path.to_path_buf()).or_default() += 1;

        Ok(Box::new(MemoryWriter {
            inner: Arc::clone(&self.inner),
            path: path.to_path_buf(),
        }))
    }

    fn create_dir_all(&self, path: &Path) -> CoreResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }
}

/// Appends straight into the shared file map; records a close on drop.
struct MemoryWriter {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
    path: PathBuf,
}

impl Write for MemoryWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| io::Error::other("memory filesystem lock poisoned"))?;

        if inner.failing.contains(&self.path) {
            return Err(io::Error::other("simulated write failure"));
        }
        inner
            .files
            .entry(self.path.clone())
            .or_default()
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for MemoryWriter {
    fn drop(&mut self) {
        if let Ok(mut inner) = self.inner.write() {
            *inner.closes.entry(self.path.clone()).or_default() += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_not_found() {
        let fs = MemoryFilesystem::new();
        let err = fs.open_read(Path::new("all-words.txt")).err().unwrap();
        assert!(err.is_not_found());
    }

    #[test]
    fn writer_appends_and_counts_close() {
        let fs = MemoryFilesystem::new();
        let path = Path::new("A.txt");
        {
            let mut w = fs.create_write(path).unwrap();
            w.write_all(b"apple\n").unwrap();
            w.write_all(b"ant\n").unwrap();
            assert_eq!(fs.close_count(path), 0);
        }
        assert_eq!(fs.read_file(path).as_deref(), Some("apple\nant\n"));
        assert_eq!(fs.open_count(path), 1);
        assert_eq!(fs.close_count(path), 1);
    }

    #[test]
    fn create_write_truncates() {
        let fs = MemoryFilesystem::new();
        fs.insert_file("B.txt", "stale\n");
        drop(fs.create_write(Path::new("B.txt")).unwrap());
        assert_eq!(fs.read_file(Path::new("B.txt")).as_deref(), Some(""));
    }

    #[test]
    fn failing_path_rejects_writes() {
        let fs = MemoryFilesystem::new();
        fs.fail_writes_to("C.txt");
        let mut w = fs.create_write(Path::new("C.txt")).unwrap();
        assert!(w.write_all(b"cherry\n").is_err());
    }

    #[test]
    fn create_dir_all_records_ancestors() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("out/letters")).unwrap();
        assert!(fs.dir_exists(Path::new("out")));
        assert!(fs.dir_exists(Path::new("out/letters")));
    }
}
