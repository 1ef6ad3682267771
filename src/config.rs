//! Configuration for consoles and prompters.
//!
//! Both option types are plain values with documented defaults and chained
//! setters:
//!
//! ```
//! use stepline::{CaptureBuffer, ConsoleOptions, PrompterOptions};
//! use stepline::styling::ColorChoice;
//!
//! let console = ConsoleOptions::default()
//!     .debug(true)
//!     .colors(ColorChoice::Never)
//!     .stdout(CaptureBuffer::new());
//!
//! let prompter = PrompterOptions::default().interactive(false);
//! # let _ = (console, prompter);
//! ```
//!
//! # Environment
//!
//! [`ConsoleOptions::from_env`] and [`PrompterOptions::from_env`] start from the
//! defaults and apply:
//!
//! - `STEPLINE_DEBUG`: truthy (`1`, `true`, `yes`, `on`) enables debug output
//! - `STEPLINE_INTERACTIVE`: falsy (`0`, `false`, `no`, `off`) makes prompts
//!   return their default value without asking
//!
//! Colors follow the usual `NO_COLOR` / `CLICOLOR_FORCE` conventions through
//! [`ColorChoice::Auto`].

use std::fmt;
use std::io::{self, BufRead, BufReader, Write};

use crate::sink::Sink;
use crate::styling::ColorChoice;

/// Environment variable enabling debug output.
pub const DEBUG_ENV: &str = "STEPLINE_DEBUG";

/// Environment variable controlling whether prompts ask the user.
pub const INTERACTIVE_ENV: &str = "STEPLINE_INTERACTIVE";

/// Options for a [`Console`](crate::Console).
///
/// | Option   | Default          |
/// |----------|------------------|
/// | `debug`  | `false`          |
/// | `colors` | `Auto`           |
/// | `stdout` | process stdout   |
/// | `stderr` | process stderr   |
pub struct ConsoleOptions {
    debug: bool,
    colors: ColorChoice,
    stdout: Option<Box<dyn Write + Send>>,
    stderr: Option<Box<dyn Write + Send>>,
}

impl ConsoleOptions {
    /// Defaults overridden by `STEPLINE_DEBUG`.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Like [`from_env`](Self::from_env), reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut options = Self::default();
        if let Some(debug) = lookup(DEBUG_ENV).as_deref().and_then(parse_flag) {
            options.debug = debug;
        }
        options
    }

    /// Show debug output.
    pub fn debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }

    /// Color policy applied to both sinks.
    pub fn colors(mut self, choice: ColorChoice) -> Self {
        self.colors = choice;
        self
    }

    /// Destination for info and debug output.
    pub fn stdout(mut self, writer: impl Write + Send + 'static) -> Self {
        self.stdout = Some(Box::new(writer));
        self
    }

    /// Destination for error output.
    pub fn stderr(mut self, writer: impl Write + Send + 'static) -> Self {
        self.stderr = Some(Box::new(writer));
        self
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    pub(crate) fn into_parts(self) -> (Sink, Sink, bool) {
        let stdout = match self.stdout {
            Some(writer) => Sink::new(writer, self.colors),
            None => Sink::stdout(self.colors),
        };
        let stderr = match self.stderr {
            Some(writer) => Sink::new(writer, self.colors),
            None => Sink::stderr(self.colors),
        };
        (stdout, stderr, self.debug)
    }
}

impl Default for ConsoleOptions {
    fn default() -> Self {
        Self {
            debug: false,
            colors: ColorChoice::Auto,
            stdout: None,
            stderr: None,
        }
    }
}

impl fmt::Debug for ConsoleOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleOptions")
            .field("debug", &self.debug)
            .field("colors", &self.colors)
            .field("custom_stdout", &self.stdout.is_some())
            .field("custom_stderr", &self.stderr.is_some())
            .finish()
    }
}

/// Options for a [`Prompter`](crate::Prompter).
///
/// | Option        | Default                 |
/// |---------------|-------------------------|
/// | `interactive` | `true`                  |
/// | `colors`      | `Auto`                  |
/// | `input`       | buffered process stdin  |
/// | `output`      | process stdout          |
pub struct PrompterOptions {
    interactive: bool,
    colors: ColorChoice,
    input: Option<Box<dyn BufRead + Send>>,
    output: Option<Box<dyn Write + Send>>,
}

impl PrompterOptions {
    /// Defaults overridden by `STEPLINE_INTERACTIVE`.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Like [`from_env`](Self::from_env), reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut options = Self::default();
        if let Some(interactive) = lookup(INTERACTIVE_ENV).as_deref().and_then(parse_flag) {
            options.interactive = interactive;
        }
        options
    }

    /// When disabled, prompts never read input and return their default value.
    pub fn interactive(mut self, enabled: bool) -> Self {
        self.interactive = enabled;
        self
    }

    /// Color policy for the prompt output.
    pub fn colors(mut self, choice: ColorChoice) -> Self {
        self.colors = choice;
        self
    }

    /// Where answers are read from.
    pub fn input(mut self, reader: impl BufRead + Send + 'static) -> Self {
        self.input = Some(Box::new(reader));
        self
    }

    /// Where prompt labels and retry messages are written.
    pub fn output(mut self, writer: impl Write + Send + 'static) -> Self {
        self.output = Some(Box::new(writer));
        self
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    pub(crate) fn into_parts(self) -> (Box<dyn BufRead + Send>, Sink, bool) {
        let input = self
            .input
            .unwrap_or_else(|| Box::new(BufReader::new(io::stdin())));
        let output = match self.output {
            Some(writer) => Sink::new(writer, self.colors),
            None => Sink::stdout(self.colors),
        };
        (input, output, self.interactive)
    }
}

impl Default for PrompterOptions {
    fn default() -> Self {
        Self {
            interactive: true,
            colors: ColorChoice::Auto,
            input: None,
            output: None,
        }
    }
}

impl fmt::Debug for PrompterOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrompterOptions")
            .field("interactive", &self.interactive)
            .field("colors", &self.colors)
            .field("custom_input", &self.input.is_some())
            .field("custom_output", &self.output.is_some())
            .finish()
    }
}

/// Interpret an environment flag. Unrecognized values yield `None`.
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
