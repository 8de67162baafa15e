//! Open letter files for the duration of one categorize run.
//!
//! `OpenGroups` owns every writer it creates. Writers are created lazily on
//! the first line for a letter and are closed exactly once: by
//! [`OpenGroups::finish`] on success, or by `Drop` when the run aborts.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::{
    application::{ApplicationError, ports::Filesystem, services::GroupSummary},
    domain::Letter,
    error::CoreResult,
};

struct GroupWriter {
    path: PathBuf,
    writer: Box<dyn Write>,
    lines: usize,
}

pub(crate) struct OpenGroups<'a> {
    filesystem: &'a dyn Filesystem,
    output_dir: &'a Path,
    writers: BTreeMap<Letter, GroupWriter>,
}

impl<'a> OpenGroups<'a> {
    pub(crate) fn new(filesystem: &'a dyn Filesystem, output_dir: &'a Path) -> Self {
        Self {
            filesystem,
            output_dir,
            writers: BTreeMap::new(),
        }
    }

    /// Append `line` verbatim to the group for `letter`, creating its file
    /// on first use.
    pub(crate) fn append(&mut self, letter: Letter, line: &str) -> CoreResult<()> {
        let group = match self.writers.entry(letter) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let path = self.output_dir.join(letter.file_name());
                let writer = self.filesystem.create_write(&path)?;
                debug!(letter = %letter, path = %path.display(), "Created letter file");
                entry.insert(GroupWriter {
                    path,
                    writer,
                    lines: 0,
                })
            }
        };

        group
            .writer
            .write_all(line.as_bytes())
            .map_err(|e| ApplicationError::Write {
                path: group.path.clone(),
                reason: e.to_string(),
            })?;
        group.lines += 1;
        Ok(())
    }

    /// Flush and close every file, returning one summary per letter in
    /// alphabetical order. Every file is closed even if an earlier flush
    /// failed; the first failure is returned.
    pub(crate) fn finish(mut self) -> CoreResult<Vec<GroupSummary>> {
        let writers = std::mem::take(&mut self.writers);
        let mut summaries = Vec::with_capacity(writers.len());
        let mut first_error = None;

        for (letter, mut group) in writers {
            if let Err(e) = group.writer.flush() {
                first_error.get_or_insert(ApplicationError::Write {
                    path: group.path.clone(),
                    reason: e.to_string(),
                });
            }
            summaries.push(GroupSummary {
                letter,
                file_name: letter.file_name(),
                path: group.path,
                lines: group.lines,
            });
            // `group.writer` is dropped here: the file is closed.
        }

        match first_error {
            Some(e) => Err(e.into()),
            None => Ok(summaries),
        }
    }
}

impl Drop for OpenGroups<'_> {
    fn drop(&mut self) {
        if self.writers.is_empty() {
            return;
        }
        debug!(open = self.writers.len(), "Closing letter files after aborted run");
        for group in self.writers.values_mut() {
            if let Err(e) = group.writer.flush() {
                warn!(path = %group.path.display(), error = %e, "Flush failed while closing");
            }
        }
    }
}
