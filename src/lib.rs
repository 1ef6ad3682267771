//! Leveled terminal output with buffered steps and confirmation prompts.
//!
//! - [`Console`] writes info, debug and error output to two sinks, and queues
//!   output produced during a *step* so it can be replayed, indented, after the
//!   step's `ok`/`ko` status:
//!
//!   ```text
//!   Installation in progress...ok
//!     > Installing with current database
//!     > Found 36 dependency requirements
//!   ```
//!
//! - [`Prompter`] asks yes/no questions with configurable choices, defaults
//!   and parsers.
//!
//! - [`global`] holds a thread-local default console and prompter for
//!   application entry points.
//!
//! Output is meant for humans. It is not structured logging, and the library's
//! own diagnostics go through the `log` facade instead.

mod macros;

pub mod config;
pub mod console;
pub mod error;
pub mod global;
pub mod prompt;
pub mod sink;
pub mod step;
pub mod styling;
pub mod text;

pub use config::{ConsoleOptions, PrompterOptions};
pub use console::{Console, Output};
pub use error::{ParseError, PromptError};
pub use prompt::{Confirmation, ConfirmationParser, Prompter, default_confirmation};
pub use sink::{CaptureBuffer, Sink};
pub use step::OutputLevel;
