use cjk_table::{CharRecord, CJK_FIRST, CJK_LAST};

#[test]
fn zhong_line_is_exact() {
    let rec = CharRecord::from_char('中').unwrap();
    assert_eq!(rec.code_point, 0x4E2D);
    assert_eq!(rec.to_string(), "中 [0xe4, 0xb8, 0xad] [0xd6, 0xd0]");
}

#[test]
fn boundary_records() {
    let first = CharRecord::encode(CJK_FIRST).unwrap();
    assert_eq!(first.to_string(), "一 [0xe4, 0xb8, 0x80] [0xd2, 0xbb]");

    // U+9FA5 is the last character GBK maps in the URO block.
    let last = CharRecord::encode(CJK_LAST).unwrap();
    assert_eq!(last.to_string(), "龥 [0xe9, 0xbe, 0xa5] [0xfd, 0x9b]");
}

#[test]
fn guo_line() {
    let rec = CharRecord::from_char('国').unwrap();
    assert_eq!(rec.utf8, vec![0xe5, 0x9b, 0xbd]);
    assert_eq!(rec.gbk, vec![0xb9, 0xfa]);
}
