use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::TableError;

/// File written when no output path is given.
pub const DEFAULT_OUTPUT: &str = "中文编码表.txt";

/// What to do with a code point GBK cannot represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnmappedPolicy {
    /// Stop the run with `TableError::Unmappable`.
    #[default]
    Abort,
    /// Leave the code point out of the table.
    Skip,
    /// Write the line with an empty GBK list.
    Placeholder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableFormat {
    /// `<char> [utf8..] [gbk..]` lines.
    #[default]
    Text,
    /// `code_point,char,utf8,gbk` rows with a header.
    Csv,
}

/// Runtime configuration of a generation run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Output file, created or truncated on each run.
    pub output: PathBuf,
    pub policy: UnmappedPolicy,
    pub format: TableFormat,
    /// Echo every line to stdout while writing.
    pub echo: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            policy: UnmappedPolicy::default(),
            format: TableFormat::default(),
            echo: true,
        }
    }
}

impl FromStr for UnmappedPolicy {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "abort" => Ok(Self::Abort),
            "skip" => Ok(Self::Skip),
            "placeholder" => Ok(Self::Placeholder),
            other => Err(TableError::Config(format!(
                "unknown unmapped policy '{other}' (expected abort, skip or placeholder)"
            ))),
        }
    }
}

impl fmt::Display for UnmappedPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Abort => "abort",
            Self::Skip => "skip",
            Self::Placeholder => "placeholder",
        })
    }
}

impl FromStr for TableFormat {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "csv" => Ok(Self::Csv),
            other => Err(TableError::Config(format!(
                "unknown table format '{other}' (expected text or csv)"
            ))),
        }
    }
}

impl fmt::Display for TableFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Text => "text",
            Self::Csv => "csv",
        })
    }
}
