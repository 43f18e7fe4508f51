use std::fs;
use std::io;

use cjk_table::{verify_table, Config, TableGenerator, TABLE_LEN};

fn quiet_config() -> Config {
    Config {
        echo: false,
        ..Config::default()
    }
}

fn table_text() -> String {
    let mut out = Vec::new();
    TableGenerator::new(quiet_config())
        .write_to(&mut out, &mut io::sink())
        .unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn one_line_per_code_point() {
    let text = table_text();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), TABLE_LEN);
    assert_eq!(lines[0], "一 [0xe4, 0xb8, 0x80] [0xd2, 0xbb]");
    assert_eq!(lines[0x4E2D - 0x4E00], "中 [0xe4, 0xb8, 0xad] [0xd6, 0xd0]");
    assert_eq!(lines[TABLE_LEN - 1], "龥 [0xe9, 0xbe, 0xa5] [0xfd, 0x9b]");
    assert!(text.ends_with('\n'));
}

#[test]
fn lines_strictly_ascending() {
    let text = table_text();
    let code_points: Vec<u32> = text
        .lines()
        .map(|l| l.chars().next().unwrap() as u32)
        .collect();
    assert!(code_points.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn echo_matches_file() {
    let mut out = Vec::new();
    let mut echo = Vec::new();
    let summary = TableGenerator::new(quiet_config())
        .write_to(&mut out, &mut echo)
        .unwrap();
    assert_eq!(out, echo);
    assert_eq!(summary.written, TABLE_LEN as u64);
    assert_eq!(summary.skipped, 0);
    assert_eq!(summary.substituted, 0);
    assert_eq!(summary.first, Some('一'));
    assert_eq!(summary.last, Some('龥'));
}

#[test]
fn generated_table_verifies() {
    let text = table_text();
    let report = verify_table(text.as_bytes()).unwrap();
    assert!(report.is_complete());
    assert_eq!(report.placeholders, 0);
}

#[test]
fn repeated_runs_are_identical() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("table.txt");
    let generator = TableGenerator::new(Config {
        output: path.clone(),
        ..quiet_config()
    });

    generator.generate().unwrap();
    let first = fs::read(&path).unwrap();
    generator.generate().unwrap();
    let second = fs::read(&path).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, table_text().into_bytes());
}

#[test]
fn existing_file_is_truncated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("table.txt");
    fs::write(&path, "stale\n".repeat(30_000)).unwrap();
    TableGenerator::new(Config {
        output: path.clone(),
        ..quiet_config()
    })
    .generate()
    .unwrap();
    let text = fs::read_to_string(&path).unwrap();
    assert!(!text.contains("stale"));
    assert_eq!(text.lines().count(), TABLE_LEN);
}
