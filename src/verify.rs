//! Reading a generated table back.
//!
//! Every line is parsed into its character and byte lists, and both lists
//! must decode to exactly that character. Lines must be strictly ascending
//! by code point.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use encoding_rs::GBK;

use crate::codepoint::{in_table, CJK_FIRST, CJK_LAST, TABLE_LEN};
use crate::error::{Result, TableError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub ch: char,
    pub utf8: Vec<u8>,
    pub gbk: Vec<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerifyReport {
    pub lines: usize,
    /// Lines written with an empty GBK list.
    pub placeholders: usize,
    pub first: Option<char>,
    pub last: Option<char>,
}

impl VerifyReport {
    /// True when the table lists the whole range from `一` to `龥`.
    pub fn is_complete(&self) -> bool {
        self.lines == TABLE_LEN
            && self.first.map(u32::from) == Some(CJK_FIRST)
            && self.last.map(u32::from) == Some(CJK_LAST)
    }
}

fn parse_error(line: usize, reason: impl Into<String>) -> TableError {
    TableError::Parse {
        line,
        reason: reason.into(),
    }
}

/// Parse `[0xe4, 0xb8, 0xad]` back into bytes. `[]` yields an empty list.
/// Only the lowercase two-digit form `format_byte_list` writes is accepted.
pub fn parse_byte_list(list: &str) -> Option<Vec<u8>> {
    let inner = list.strip_prefix('[')?.strip_suffix(']')?;
    if inner.is_empty() {
        return Some(Vec::new());
    }
    let mut bytes = Vec::new();
    for token in inner.split(", ") {
        let digits = token.strip_prefix("0x")?;
        if digits.len() != 2 || !digits.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')) {
            return None;
        }
        bytes.extend(hex::decode(digits).ok()?);
    }
    Some(bytes)
}

/// Split a leading `[...]` list off `s`.
fn split_list(s: &str) -> Option<(&str, &str)> {
    if !s.starts_with('[') {
        return None;
    }
    let end = s.find(']')?;
    Some(s.split_at(end + 1))
}

/// Parse one table line, `<char> [utf8..] [gbk..]`.
pub fn parse_line(line: usize, text: &str) -> Result<ParsedLine> {
    let text = text.strip_suffix('\r').unwrap_or(text);
    let (head, rest) = text
        .split_once(' ')
        .ok_or_else(|| parse_error(line, "missing byte lists"))?;

    let mut chars = head.chars();
    let ch = match (chars.next(), chars.next()) {
        (Some(ch), None) => ch,
        _ => return Err(parse_error(line, format!("expected one character, found '{head}'"))),
    };
    if !in_table(ch) {
        return Err(parse_error(line, format!("'{ch}' is outside the table range")));
    }

    let (utf8_list, rest) =
        split_list(rest).ok_or_else(|| parse_error(line, "malformed UTF-8 byte list"))?;
    let rest = rest
        .strip_prefix(' ')
        .ok_or_else(|| parse_error(line, "missing GBK byte list"))?;
    let (gbk_list, rest) =
        split_list(rest).ok_or_else(|| parse_error(line, "malformed GBK byte list"))?;
    if !rest.is_empty() {
        return Err(parse_error(line, format!("trailing text '{rest}'")));
    }

    let utf8 = parse_byte_list(utf8_list)
        .ok_or_else(|| parse_error(line, format!("bad UTF-8 bytes {utf8_list}")))?;
    let gbk = parse_byte_list(gbk_list)
        .ok_or_else(|| parse_error(line, format!("bad GBK bytes {gbk_list}")))?;

    Ok(ParsedLine { ch, utf8, gbk })
}

/// Check that both byte lists decode to the listed character. An empty GBK
/// list is a placeholder and is not decoded.
pub fn verify_line(line: usize, parsed: &ParsedLine) -> Result<()> {
    let mut buf = [0u8; 4];
    let expected: &str = parsed.ch.encode_utf8(&mut buf);

    if std::str::from_utf8(&parsed.utf8).ok() != Some(expected) {
        return Err(TableError::RoundTrip {
            line,
            ch: parsed.ch,
            encoding: "UTF-8",
        });
    }

    if !parsed.gbk.is_empty() {
        let decoded = GBK.decode_without_bom_handling_and_without_replacement(&parsed.gbk);
        if decoded.as_deref() != Some(expected) {
            return Err(TableError::RoundTrip {
                line,
                ch: parsed.ch,
                encoding: "GBK",
            });
        }
    }
    Ok(())
}

/// Verify a whole text table.
pub fn verify_table<R: BufRead>(reader: R) -> Result<VerifyReport> {
    let mut report = VerifyReport::default();
    let mut previous: Option<u32> = None;

    for (idx, text) in reader.lines().enumerate() {
        let line = idx + 1;
        let text = text?;
        let parsed = parse_line(line, &text)?;
        verify_line(line, &parsed)?;

        let found = u32::from(parsed.ch);
        if let Some(previous) = previous {
            if found <= previous {
                return Err(TableError::Order {
                    line,
                    previous,
                    found,
                });
            }
        }
        previous = Some(found);

        report.lines += 1;
        if parsed.gbk.is_empty() {
            report.placeholders += 1;
        }
        report.first.get_or_insert(parsed.ch);
        report.last = Some(parsed.ch);
    }

    log::debug!(
        "verified {} lines, {} placeholders, complete: {}",
        report.lines,
        report.placeholders,
        report.is_complete()
    );
    Ok(report)
}

pub fn verify_file<P: AsRef<Path>>(path: P) -> Result<VerifyReport> {
    let file = File::open(path)?;
    verify_table(BufReader::new(file))
}
