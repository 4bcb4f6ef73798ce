use std::io::Write;
use std::process::{Command, Output, Stdio};

fn checksum(args: &[&str], stdin: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_checksum"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    // pi mode may exit before reading, so a broken pipe here is fine
    let _ = child.stdin.take().unwrap().write_all(stdin);

    child.wait_with_output().unwrap()
}

#[test]
fn crc32_ieee_empty_stdin() {
    let out = checksum(&["-algorithm=crc32/ieee"], b"");

    assert!(out.status.success());
    assert_eq!(out.stdout, b"0x00000000\n");
}

#[test]
fn default_algorithm_is_adler32() {
    let out = checksum(&[], b"");

    assert!(out.status.success());
    assert_eq!(out.stdout, b"0x00000001\n");
}

#[test]
fn xxhash64_prints_sixteen_digits() {
    let out = checksum(&["--algorithm=xxhash64"], b"abc");

    assert!(out.status.success());
    assert_eq!(out.stdout, b"0x44BC2CF5AD770999\n");
}

#[test]
fn unknown_algorithm_fails() {
    let out = checksum(&["-algorithm=md5"], b"abc");

    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());

    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("md5"));
    assert_eq!(stderr.lines().count(), 1);
}

#[test]
fn bad_flag_fails_with_one_line() {
    let out = checksum(&["-bogus"], b"");

    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert_eq!(String::from_utf8(out.stderr).unwrap().lines().count(), 1);
}

#[test]
fn help_exits_zero() {
    let out = checksum(&["--help"], b"");

    assert!(out.status.success());
    assert!(String::from_utf8(out.stdout).unwrap().contains("algorithm"));
}

#[test]
fn pi_mode_ignores_stdin() {
    let with_input = checksum(&["-pi", "-algorithm=xxhash32"], b"some bytes");
    let without_input = checksum(&["-pi", "-algorithm=xxhash32"], b"");

    assert!(with_input.status.success());
    assert_eq!(with_input.stdout, without_input.stdout);

    let text = String::from_utf8(with_input.stdout).unwrap();
    assert!(text.starts_with("0x02CC5D05,"));
    assert_eq!(text.matches(',').count(), 100);
    assert_eq!(text.matches('\n').count(), 12);
}
