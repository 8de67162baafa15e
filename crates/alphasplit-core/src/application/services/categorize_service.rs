//! Categorize Service - main application orchestrator.
//!
//! Splits a word list into one file per leading letter:
//! 1. Open the input (a missing file aborts before anything is created)
//! 2. Route every qualifying line to its letter's file, verbatim
//! 3. Close every file and report what was created

use std::io::BufRead;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, instrument, trace};

use crate::{
    application::{ApplicationError, ports::Filesystem, services::groups::OpenGroups},
    domain::Letter,
    error::CoreResult,
};

/// One letter file produced by a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupSummary {
    pub letter: Letter,
    pub file_name: String,
    pub path: PathBuf,
    pub lines: usize,
}

/// Outcome of a successful run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategorizeReport {
    /// Created files, sorted by letter.
    pub groups: Vec<GroupSummary>,
    pub lines_read: usize,
    /// Blank lines and lines not starting with a letter.
    pub lines_skipped: usize,
}

impl CategorizeReport {
    /// File names in summary order, e.g. `["A.txt", "B.txt"]`.
    pub fn file_names(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.file_name.as_str())
    }
}

/// Main categorize service.
pub struct CategorizeService {
    filesystem: Box<dyn Filesystem>,
}

impl CategorizeService {
    /// Create a new service with the given filesystem adapter.
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Split `input` into `<LETTER>.txt` files inside `output_dir`.
    ///
    /// Any failure aborts the run. Files created before the failure keep
    /// what was written to them and are closed.
    #[instrument(
        skip_all,
        fields(
            input = %input.as_ref().display(),
            output_dir = %output_dir.as_ref().display()
        )
    )]
    pub fn categorize(
        &self,
        input: impl AsRef<Path>,
        output_dir: impl AsRef<Path>,
    ) -> CoreResult<CategorizeReport> {
        let input = input.as_ref();
        let output_dir = output_dir.as_ref();

        let mut reader = self.filesystem.open_read(input)?;
        self.filesystem.create_dir_all(output_dir)?;

        let mut groups = OpenGroups::new(self.filesystem.as_ref(), output_dir);
        let mut report = CategorizeReport::default();
        let mut line = String::new();

        loop {
            line.clear();
            let read = reader
                .read_line(&mut line)
                .map_err(|e| ApplicationError::Read {
                    path: input.to_path_buf(),
                    reason: e.to_string(),
                })?;
            if read == 0 {
                break;
            }
            report.lines_read += 1;

            match Letter::from_line(&line) {
                Some(letter) => groups.append(letter, &line)?,
                None => {
                    trace!(line = report.lines_read, "Skipped line");
                    report.lines_skipped += 1;
                }
            }
        }

        report.groups = groups.finish()?;

        info!(
            files = report.groups.len(),
            lines = report.lines_read,
            skipped = report.lines_skipped,
            "Categorize completed"
        );
        Ok(report)
    }
}
