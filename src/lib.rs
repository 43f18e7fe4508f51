//! UTF-8 / GBK code table for the CJK Unified Ideographs U+4E00..=U+9FA5.
//!
//! [`TableGenerator`] walks the range in ascending order and writes one line
//! per character, `中 [0xe4, 0xb8, 0xad] [0xd6, 0xd0]`, to a file while
//! echoing it to stdout. [`verify_table`] reads such a file back and checks
//! that every listed byte sequence decodes to its character.

pub mod codepoint;
pub mod config;
mod error;
pub mod generator;
pub mod io_utils;
pub mod record;
pub mod stats;
pub mod verify;

pub use codepoint::{code_points, in_table, to_char, CJK_FIRST, CJK_LAST, TABLE_LEN};
pub use config::{Config, TableFormat, UnmappedPolicy, DEFAULT_OUTPUT};
pub use error::{Result, TableError};
pub use generator::TableGenerator;
pub use record::{format_byte_list, gbk_bytes, utf8_bytes, CharRecord};
pub use stats::Summary;
pub use verify::{
    parse_byte_list, parse_line, verify_file, verify_line, verify_table, ParsedLine,
    VerifyReport,
};
