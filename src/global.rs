//! Process-default console and prompter, using thread-local storage.
//!
//! This provides a logging-like API for application entry points: configure
//! once in `main()`, then print from anywhere without passing a [`Console`]
//! around. Library code should take a [`Console`] or `impl Output` instead.
//!
//! ```no_run
//! use stepline::{ConsoleOptions, global, infoln};
//!
//! global::configure(ConsoleOptions::from_env().debug(true));
//!
//! global::start_step("Accessing database");
//! infoln!(global::console(), "Connected to", "db-01");
//! global::end_step();
//! ```
//!
//! # Implementation
//!
//! Each thread gets its own console and prompter, lazily created on first use
//! from [`ConsoleOptions::from_env`] and [`PrompterOptions::from_env`]. Steps
//! started on one thread are invisible to the others, so concurrent callers
//! never share a step buffer and no locking is involved. Configure each thread
//! that prints.

use std::cell::RefCell;
use std::fmt::Display;

use crate::config::{ConsoleOptions, PrompterOptions};
use crate::console::{Console, Output};
use crate::error::PromptError;
use crate::prompt::{Confirmation, Prompter};
use crate::step::OutputLevel;

thread_local! {
    static CONSOLE: RefCell<Console> = RefCell::new(Console::new(ConsoleOptions::from_env()));
    static PROMPTER: RefCell<Prompter> = RefCell::new(Prompter::new(PrompterOptions::from_env()));
}

/// Handle to this thread's default console. Implements [`Output`].
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalConsole;

/// This thread's default console, for use with [`Output`] methods and the
/// write macros.
pub fn console() -> GlobalConsole {
    GlobalConsole
}

impl Output for GlobalConsole {
    fn write_level(&mut self, level: OutputLevel, text: &str) {
        with_console(|console| console.write_level(level, text));
    }
}

/// Run `f` against this thread's default console.
pub fn with_console<R>(f: impl FnOnce(&mut Console) -> R) -> R {
    CONSOLE.with(|console| f(&mut console.borrow_mut()))
}

/// Run `f` against this thread's default prompter.
pub fn with_prompter<R>(f: impl FnOnce(&mut Prompter) -> R) -> R {
    PROMPTER.with(|prompter| f(&mut prompter.borrow_mut()))
}

/// Apply `options` to this thread's default console. A step in progress
/// stays in progress.
pub fn configure(options: ConsoleOptions) {
    with_console(|console| console.reconfigure(options));
}

/// Replace this thread's default prompter.
pub fn configure_prompter(options: PrompterOptions) {
    with_prompter(|prompter| *prompter = Prompter::new(options));
}

/// See [`Console::start_step`].
pub fn start_step(label: impl Display) {
    // Rendered before borrowing: the label may itself print to this console.
    let label = label.to_string();
    with_console(|console| console.start_step(label));
}

/// See [`Console::end_step`].
pub fn end_step() {
    with_console(Console::end_step);
}

/// See [`Console::fail_step`].
pub fn fail_step<E>(err: E) -> E {
    with_console(|console| console.fail_step(err))
}

/// See [`Console::fail_step_with`].
pub fn fail_step_with(message: impl Display) -> anyhow::Error {
    let message = message.to_string();
    with_console(|console| console.fail_step_with(message))
}

/// See [`Console::colors`].
pub fn colors(level: OutputLevel) -> bool {
    with_console(|console| console.colors(level))
}

/// See [`Prompter::confirm`].
pub fn confirm(confirmation: Confirmation) -> Result<bool, PromptError> {
    with_prompter(|prompter| prompter.confirm(confirmation))
}
