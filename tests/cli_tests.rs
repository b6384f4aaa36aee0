//! Command-line behaviour of the `mdcat` binary.
//!
//! Output is captured through a pipe, so it is never a terminal and the
//! rendering is always plain.

use std::io::Write;
use std::process::{Command, Output, Stdio};

const SAMPLE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/sample.md");

fn mdcat() -> Command {
    Command::new(env!("CARGO_BIN_EXE_mdcat"))
}

fn run_with_stdin(args: &[&str], stdin: &str) -> Output {
    let mut child = mdcat()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn mdcat");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("failed to write stdin");
    child.wait_with_output().expect("failed to wait for mdcat")
}

fn sample_plain() -> String {
    let markdown = std::fs::read_to_string(SAMPLE).expect("sample fixture");
    mdcat::render_str(&markdown, &mdcat::Options { color: false })
}

#[test]
fn renders_named_file_without_color() {
    let output = mdcat().arg(SAMPLE).output().expect("failed to run mdcat");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, sample_plain());
    assert!(!stdout.contains('\x1b'));
    assert!(stdout.contains("│ a   │     1 │"));
}

#[test]
fn reads_stdin_without_arguments() {
    let output = run_with_stdin(&[], "- **item**\n");
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "  • item\n");
}

#[test]
fn dash_reads_stdin_between_files() {
    let output = run_with_stdin(&[SAMPLE, "-"], "---\n");
    assert!(output.status.success());
    let expected = format!("{}{}\n", sample_plain(), "─".repeat(60));
    assert_eq!(String::from_utf8(output.stdout).unwrap(), expected);
}

#[test]
fn inputs_do_not_share_state() {
    // The unterminated fence in stdin does not swallow the next file.
    let output = run_with_stdin(&["-", SAMPLE], "```\nx\n");
    let expected = format!("\n  x\n{}", sample_plain());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), expected);
}

#[test]
fn missing_file_fails_with_message() {
    let output = mdcat()
        .args([SAMPLE, "no/such/file.md", SAMPLE])
        .output()
        .expect("failed to run mdcat");
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(
        stderr.starts_with("mdcat: cannot open 'no/such/file.md': "),
        "{stderr}"
    );
    // The first file was rendered; the run stopped at the missing one.
    assert_eq!(String::from_utf8(output.stdout).unwrap(), sample_plain());
}

#[test]
fn version_flag() {
    let output = mdcat().arg("--version").output().expect("failed to run mdcat");
    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout).unwrap().starts_with("mdcat "));
}
