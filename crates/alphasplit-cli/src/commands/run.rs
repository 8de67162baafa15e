//! The categorize run: split the word list and report the outcome.
//!
//! Responsibility: resolve paths from flags and config, call the core
//! service, and print either the summary or a single error line. A failed
//! run is reported here and does not change the exit status.

use tracing::{debug, error, instrument, warn};

use alphasplit_adapters::LocalFilesystem;
use alphasplit_core::{
    application::{CategorizeReport, CategorizeService},
    error::CoreError,
};

use crate::{
    cli::{OutputFormat, RunArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Header printed before the list of created files.
pub const SUCCESS_HEADER: &str = "Files created successfully:";

/// Execute the categorize run.
#[instrument(skip_all)]
pub fn execute(args: RunArgs, config: AppConfig, output: &OutputManager) -> CliResult<()> {
    let input = args.input.unwrap_or(config.input);
    let output_dir = args.output_dir.unwrap_or(config.output_dir);
    debug!(
        input = %input.display(),
        output_dir = %output_dir.display(),
        "Paths resolved"
    );

    let service = CategorizeService::new(Box::new(LocalFilesystem::new()));

    match service.categorize(&input, &output_dir) {
        Ok(report) => show_report(&report, output),
        Err(err) => {
            log_failure(&err);
            output.error(&failure_line(&err))?;
            Ok(())
        }
    }
}

/// The single console line reported for a failed run.
///
/// A missing input names the path; everything else is reported as
/// unexpected together with its detail.
fn failure_line(err: &CoreError) -> String {
    if err.is_not_found() {
        format!("Error: {err}")
    } else {
        format!("An unexpected error occurred: {err}")
    }
}

fn log_failure(err: &CoreError) {
    if err.is_not_found() {
        warn!("Input not found: {}", err);
    } else {
        error!(category = ?err.category(), "Categorize failed: {}", err);
    }
    for suggestion in err.suggestions() {
        debug!("Suggestion: {}", suggestion);
    }
}

fn show_report(report: &CategorizeReport, output: &OutputManager) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        output.json(report)?;
        return Ok(());
    }

    output.header(SUCCESS_HEADER)?;
    for line in summary_lines(report) {
        output.print(&line)?;
    }
    Ok(())
}

/// `- A.txt`, `- B.txt`, ... in letter order.
fn summary_lines(report: &CategorizeReport) -> Vec<String> {
    report
        .file_names()
        .map(|name| format!("- {name}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use alphasplit_core::{
        application::{ApplicationError, GroupSummary},
        domain::Letter,
    };

    use super::*;

    fn group(word: &str, lines: usize) -> GroupSummary {
        let letter = Letter::from_line(word).unwrap();
        GroupSummary {
            letter,
            file_name: letter.file_name(),
            path: PathBuf::from(letter.file_name()),
            lines,
        }
    }

    #[test]
    fn summary_lists_files_in_order() {
        let report = CategorizeReport {
            groups: vec![group("apple", 2), group("banana", 1), group("cherry", 1)],
            lines_read: 6,
            lines_skipped: 2,
        };
        assert_eq!(summary_lines(&report), ["- A.txt", "- B.txt", "- C.txt"]);
    }

    #[test]
    fn empty_report_has_no_lines() {
        assert!(summary_lines(&CategorizeReport::default()).is_empty());
    }

    #[test]
    fn missing_input_line_names_the_path() {
        let err = CoreError::from(ApplicationError::InputNotFound {
            path: PathBuf::from("missing.txt"),
        });
        assert_eq!(
            failure_line(&err),
            "Error: The file 'missing.txt' was not found."
        );
    }

    #[test]
    fn other_failures_are_unexpected_with_detail() {
        let err = CoreError::from(ApplicationError::Write {
            path: PathBuf::from("A.txt"),
            reason: "No space left on device".into(),
        });
        let line = failure_line(&err);
        assert!(line.starts_with("An unexpected error occurred: "));
        assert!(line.contains("No space left on device"));
    }
}
