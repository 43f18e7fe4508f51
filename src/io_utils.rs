use std::fmt;
use std::io;
use std::path::Path;

use crate::TableError;

#[derive(Debug)]
pub struct CliError {
    pub msg: String,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.msg.fmt(f)
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Format a user friendly I/O error message with suggestions.
pub fn format_io_error(operation: &str, path: &Path, err: &io::Error) -> String {
    use io::ErrorKind::*;
    let suggestion = match err.kind() {
        _ if err.raw_os_error() == Some(28) => "Disk may be full. Free up space and try again.",
        NotFound => "Check that the file exists and the path is correct.",
        PermissionDenied => "Check permissions or run as a different user.",
        WriteZero => "Disk may be full. Free up space and try again.",
        _ => "Check permissions or free up disk space.",
    };
    format!(
        "Error {} '{}': {}. {}",
        operation,
        path.display(),
        err,
        suggestion
    )
}

/// Convert an I/O error into a CLI error with context.
pub fn io_cli_error(operation: &str, path: &Path, err: io::Error) -> CliError {
    CliError {
        msg: format_io_error(operation, path, &err),
        source: Some(Box::new(err)),
    }
}

pub fn simple_cli_error(msg: &str) -> CliError {
    CliError {
        msg: msg.to_string(),
        source: None,
    }
}

/// Convert a table error into a CLI error. I/O failures get the same
/// suggestions as `io_cli_error`.
pub fn table_cli_error(operation: &str, path: &Path, err: TableError) -> CliError {
    match err {
        TableError::Io(io) => io_cli_error(operation, path, io),
        other => CliError {
            msg: format!("Error {} '{}': {}", operation, path.display(), cli_hint(&other)),
            source: Some(Box::new(other)),
        },
    }
}

/// Return an actionable hint for a table error variant.
pub fn cli_hint(err: &TableError) -> String {
    use crate::TableError::*;
    match err {
        Unmappable { .. } => format!("{err}. Rerun with --on-unmapped skip or placeholder."),
        InvalidCodePoint(_) => format!("{err}. This is a bug."),
        OutOfRange(_) => format!("{err}. Only U+4E00..U+9FA5 are listed."),
        Parse { .. } | Order { .. } => format!("{err}. Regenerate the table."),
        RoundTrip { .. } => format!("{err}. The table is corrupted, regenerate it."),
        Config(msg) => format!("{msg}. Invalid configuration."),
        Io(io) => format!("{io}"),
        Csv(csv) => format!("{csv}"),
    }
}
