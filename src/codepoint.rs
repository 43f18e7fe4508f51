//! Fixed bounds of the table: the CJK Unified Ideographs block up to U+9FA5.

use std::ops::RangeInclusive;

use crate::error::{Result, TableError};

/// First code point of the table (`一`).
pub const CJK_FIRST: u32 = 0x4E00;
/// Last code point of the table (`龥`).
pub const CJK_LAST: u32 = 0x9FA5;
/// Number of code points covered.
pub const TABLE_LEN: usize = (CJK_LAST - CJK_FIRST + 1) as usize;

/// Ascending code points of the table.
pub fn code_points() -> RangeInclusive<u32> {
    CJK_FIRST..=CJK_LAST
}

pub fn to_char(code_point: u32) -> Result<char> {
    char::from_u32(code_point).ok_or(TableError::InvalidCodePoint(code_point))
}

/// Whether `ch` is one of the characters the table lists.
pub fn in_table(ch: char) -> bool {
    code_points().contains(&(ch as u32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds() {
        assert_eq!(TABLE_LEN, 20902);
        assert_eq!(code_points().count(), TABLE_LEN);
        assert_eq!(to_char(CJK_FIRST).unwrap(), '一');
        assert_eq!(to_char(CJK_LAST).unwrap(), '龥');
    }

    #[test]
    fn surrogates_rejected() {
        assert!(matches!(
            to_char(0xD800),
            Err(TableError::InvalidCodePoint(0xD800))
        ));
    }

    #[test]
    fn membership() {
        assert!(in_table('中'));
        assert!(in_table('龥'));
        assert!(!in_table('A'));
        assert!(!in_table('\u{9FA6}'));
        assert!(!in_table('\u{4DFF}'));
    }
}
