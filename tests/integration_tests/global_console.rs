//! The thread-local default console and prompter.
//!
//! Every test runs on its own thread, so each starts from fresh defaults.

use crate::common::Captured;
use stepline::{Confirmation, Output, debugln, global, infoln};

#[test]
fn test_global_console_routes_and_buffers() {
    let io = Captured::new();
    global::configure(io.console_options(false));

    infoln!(global::console(), "before");
    global::start_step("Deploying");
    infoln!(global::console(), "uploaded", 3, "files");
    debugln!(global::console(), "hidden");
    global::console().error_line("slow link");
    global::end_step();

    assert_eq!(io.stdout(), "before\nDeploying...ok\n  > uploaded 3 files\n");
    assert_eq!(io.stderr(), "  > slow link\n");
}

#[test]
fn test_global_fail_step_passes_error_through() {
    let io = Captured::new();
    global::configure(io.console_options(false));

    global::start_step("Deploying");
    let err = global::fail_step(std::io::Error::other("connection reset"));
    assert_eq!(err.to_string(), "connection reset");
    assert_eq!(io.stdout(), "Deploying...ko\n");
}

#[test]
fn test_worker_threads_do_not_share_steps() {
    let io = Captured::new();
    global::configure(io.console_options(false));
    global::start_step("main");

    let worker = std::thread::spawn(|| {
        let io = Captured::new();
        global::configure(io.console_options(false));
        global::start_step("worker");
        global::end_step();
        io.stdout()
    });
    assert_eq!(worker.join().unwrap(), "worker...ok\n");

    global::end_step();
    assert_eq!(io.stdout(), "main...ok\n");
}

#[test]
fn test_global_prompter() {
    let io = Captured::new();
    global::with_prompter(|prompter| *prompter = io.prompter("yes\n"));

    assert!(global::confirm(Confirmation::new("Continue?")).unwrap());
    assert_eq!(io.stdout(), "Continue? [y/n] ");
}
