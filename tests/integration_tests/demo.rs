//! The `stepline-demo` binary end to end.

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_demo(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_stepline-demo"))
        .args(args)
        .env_remove("STEPLINE_DEBUG")
        .env_remove("STEPLINE_INTERACTIVE")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn stepline-demo");

    child
        .stdin
        .take()
        .expect("piped stdin")
        .write_all(stdin.as_bytes())
        .expect("failed to write stdin");

    child.wait_with_output().expect("failed to wait for stepline-demo")
}

const PREAMBLE: &str = concat!(
    "Looking for remote database on 172.187.10.23\n",
    "Accessing database...ok\n",
    "Checking database integrity...ok\n",
    "Synchronizing local store...ok\n",
    "  > Local store up to date with remote database\n",
    "Connecting to fallback database...ok\n",
);

const INSTALLED: &str = concat!(
    "Installation in progress...ok\n",
    "  > Installing with current database\n",
    "  > Connection to 172.187.10.23 secure\n",
    "  > Found 36 dependency requirements\n",
    "  > Dependencies resolved\n",
    "\u{2714} Installation successful\n",
);

#[test]
fn test_demo_non_interactive_success() {
    let output = run_demo(&["--yes", "--color", "never"], "");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        format!("{PREAMBLE}{INSTALLED}")
    );
    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        "Database connection lost\n"
    );
}

#[test]
fn test_demo_prompt_accepts_default() {
    let output = run_demo(&["--color", "never"], "\n");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        format!("{PREAMBLE}Install with current database? [Y/n] {INSTALLED}")
    );
}

#[test]
fn test_demo_debug_output() {
    let output = run_demo(&["--yes", "--debug", "--color", "never"], "");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(
        "Connecting to fallback database...ok\n  > Fallback selected from 3 candidates\n"
    ));
    assert!(stdout.contains("Dashboard deployed at https://172.187.10.23:37356/dashboard\n"));
}

#[test]
fn test_demo_declined_install_fails() {
    let output = run_demo(&["--color", "never"], "n\n");

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Installation in progress...ko\n"));
    assert!(stdout.ends_with("\u{2716} Installation failed\n"));
    assert!(!stdout.contains("Installing with current database"));
    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        "Database connection lost\nunable to install without a database\n"
    );
}

#[test]
fn test_demo_closed_stdin_reports_input_error() {
    let output = run_demo(&["--color", "never"], "");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unexpected user input: failed to read answer"));
}

#[test]
fn test_demo_forced_colors_style_statuses_only() {
    let output = run_demo(&["--yes", "--color", "always"], "");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Accessing database...\x1b[32mok\x1b[0m\n"));
    assert!(stdout.contains("  > \x1b[2mInstalling with current database\x1b[0m\n"));
    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        "\x1b[31mDatabase connection lost\x1b[0m\n"
    );
}
