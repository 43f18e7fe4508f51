//! Per-character encodings and the text line they render to.

use std::fmt;

use encoding_rs::GBK;

use crate::codepoint::{in_table, to_char};
use crate::error::{Result, TableError};

/// One table row: a character with its UTF-8 and GBK byte sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharRecord {
    pub code_point: u32,
    pub ch: char,
    /// Three bytes for every character of the table.
    pub utf8: Vec<u8>,
    /// Two bytes, or empty when written as a placeholder.
    pub gbk: Vec<u8>,
}

impl CharRecord {
    /// Encode the character at `code_point`.
    pub fn encode(code_point: u32) -> Result<Self> {
        let ch = to_char(code_point)?;
        let gbk = gbk_bytes(ch).ok_or(TableError::Unmappable { code_point })?;
        Ok(Self {
            code_point,
            ch,
            utf8: utf8_bytes(ch),
            gbk,
        })
    }

    /// Encode a character of the table range.
    pub fn from_char(ch: char) -> Result<Self> {
        if !in_table(ch) {
            return Err(TableError::OutOfRange(ch));
        }
        Self::encode(ch as u32)
    }

    /// Record for a character without GBK bytes; renders an empty `[]` list.
    pub fn unmapped(ch: char) -> Self {
        Self {
            code_point: ch as u32,
            ch,
            utf8: utf8_bytes(ch),
            gbk: Vec::new(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.gbk.is_empty()
    }
}

impl fmt::Display for CharRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.ch,
            format_byte_list(&self.utf8),
            format_byte_list(&self.gbk)
        )
    }
}

pub fn utf8_bytes(ch: char) -> Vec<u8> {
    let mut buf = [0u8; 4];
    ch.encode_utf8(&mut buf).as_bytes().to_vec()
}

/// GBK bytes of `ch`, or `None` when GBK cannot represent it.
pub fn gbk_bytes(ch: char) -> Option<Vec<u8>> {
    let mut buf = [0u8; 4];
    let (bytes, _, had_unmappable) = GBK.encode(ch.encode_utf8(&mut buf));
    if had_unmappable {
        return None;
    }
    Some(bytes.into_owned())
}

/// Render bytes as `[0xe4, 0xb8, 0xad]`.
pub fn format_byte_list(bytes: &[u8]) -> String {
    let tokens: Vec<String> = bytes.iter().map(|b| format!("{b:#04x}")).collect();
    format!("[{}]", tokens.join(", "))
}
