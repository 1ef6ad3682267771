//! Step buffering through the public API.

use crate::common::Captured;
use stepline::{Console, Output, OutputLevel, errorln, infof, infoln};

#[test]
fn test_direct_output_appears_immediately_in_order() {
    let io = Captured::new();
    let mut console = io.console(true);

    console.info("plain");
    assert_eq!(io.stdout(), "plain");
    infoln!(console, "line", 2);
    console.debug("debug");
    infof!(console, "[{}]", "formatted");
    errorln!(console, "oops");

    assert_eq!(io.stdout(), "plainline 2\ndebug[formatted]");
    assert_eq!(io.stderr(), "oops\n");
}

#[test]
fn test_nothing_reaches_sinks_during_step() {
    let io = Captured::new();
    let mut console = io.console(true);

    console.start_step("Installation in progress");
    console.info_line("Installing with current database");
    console.debug_line("debug detail");
    console.error_line("warning detail");

    assert_eq!(io.stdout(), "Installation in progress...");
    assert!(io.err.is_empty());
    assert_eq!(console.step().map(|step| step.len()), Some(3));
    assert_eq!(
        console.step().map(|step| step.fragments()[2].level()),
        Some(OutputLevel::Error)
    );

    console.end_step();
    assert_eq!(
        io.stdout(),
        "Installation in progress...ok\n  > Installing with current database\n  > debug detail\n"
    );
    assert_eq!(io.stderr(), "  > warning detail\n");
}

#[test]
fn test_step_chain_like_an_installer() {
    let io = Captured::new();
    let mut console = io.console(false);

    infoln!(console, "Looking for remote database on", "172.187.10.23");
    console.start_step("Accessing database");
    console.start_step("Checking database integrity");
    console.start_step("Synchronizing local store");
    console.info_line("Local store up to date with remote database");
    console.end_step();
    console.error_line("Database connection lost");
    console.start_step("Connecting to fallback database");
    console.debug_line("hidden without debug");
    console.end_step();

    assert_eq!(
        io.stdout(),
        concat!(
            "Looking for remote database on 172.187.10.23\n",
            "Accessing database...ok\n",
            "Checking database integrity...ok\n",
            "Synchronizing local store...ok\n",
            "  > Local store up to date with remote database\n",
            "Connecting to fallback database...ok\n",
        )
    );
    assert_eq!(io.stderr(), "Database connection lost\n");
}

#[derive(Debug, PartialEq)]
struct TaskError(&'static str);

fn migrate(console: &mut Console) -> Result<(), TaskError> {
    console.start_step("Migrating");
    console.info_line("table 1 of 2");
    Err(console.fail_step(TaskError("table 2 locked")))
}

#[test]
fn test_failed_step_returns_caller_error() {
    let io = Captured::new();
    let mut console = io.console(false);

    assert_eq!(migrate(&mut console), Err(TaskError("table 2 locked")));
    assert_eq!(io.stdout(), "Migrating...ko\n  > table 1 of 2\n");
    assert!(!console.is_step_in_progress());
}

#[test]
fn test_idle_conclusions_write_nothing() {
    let io = Captured::new();
    let mut console = io.console(true);

    console.end_step();
    console.end_step();
    assert_eq!(console.fail_step(Option::<String>::None), None);

    assert!(io.out.is_empty());
    assert!(io.err.is_empty());
}

#[test]
fn test_multi_line_fragment_round_trip() {
    let io = Captured::new();
    let mut console = io.console(false);

    console.start_step("task");
    console.info("line1\nline2\n");
    console.error("first\nsecond");
    console.end_step();

    assert_eq!(io.stdout(), "task...ok\n  > line1\n    line2\n");
    assert_eq!(io.stderr(), "  > first\n    second\n");
}
