use std::fs;
use std::process::Command;

#[test]
fn unwritable_output_path() {
    let exe = env!("CARGO_BIN_EXE_cjk_table");
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("no_such_dir").join("table.txt");
    let output = Command::new(exe)
        .args(["--output", out.to_str().unwrap()])
        .output()
        .expect("run failed");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error writing table"));
    assert!(stderr.contains("Check that the file exists"));
}

#[test]
fn unknown_policy_rejected() {
    let exe = env!("CARGO_BIN_EXE_cjk_table");
    let output = Command::new(exe)
        .args(["--on-unmapped", "retry"])
        .output()
        .expect("run failed");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown unmapped policy"));
}

#[test]
fn missing_table_for_verify() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("missing.txt");
    let output = Command::new(env!("CARGO_BIN_EXE_table_verify"))
        .arg(input.to_str().unwrap())
        .output()
        .expect("run failed");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error verifying table"));
}

#[test]
fn corrupted_table_for_verify() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bad.txt");
    fs::write(&input, "中 [0xe4, 0xb8, 0xad] [0xd6, 0xd1]\n").unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_table_verify"))
        .arg(input.to_str().unwrap())
        .output()
        .expect("run failed");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("GBK bytes do not decode"));
    assert!(stderr.contains("regenerate it"));
}

#[test]
fn strict_verify_rejects_partial_table() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("partial.txt");
    fs::write(&input, "一 [0xe4, 0xb8, 0x80] [0xd2, 0xbb]\n").unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_table_verify"))
        .args([input.to_str().unwrap(), "--strict"])
        .output()
        .expect("run failed");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Incomplete table: 1 of 20902 lines"));
}
