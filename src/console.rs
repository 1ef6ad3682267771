//! Leveled output and step lifecycle.
//!
//! A [`Console`] writes info and debug output to its standard sink and error
//! output to its error sink. Between [`start_step`](Console::start_step) and
//! [`end_step`](Console::end_step) / [`fail_step`](Console::fail_step), output
//! is queued instead and replayed, indented, once the step's status is known:
//!
//! ```text
//! Synchronizing local store...ok
//!   > Local store up to date with remote database
//! ```
//!
//! A console is not synchronized. Give each thread its own (the
//! [`global`](crate::global) console is thread-local for that reason) or wrap
//! a shared one in a `Mutex`.

use std::fmt::Display;

use crate::config::ConsoleOptions;
use crate::sink::Sink;
use crate::step::{OutputLevel, StepBuffer};
use crate::styling::{failure, success};

/// Marker written after a step label.
pub const STEP_ELLIPSIS: &str = "...";

/// Status token for a step that ended successfully.
pub const STEP_OK: &str = "ok";

/// Status token for a step that failed.
pub const STEP_KO: &str = "ko";

/// Something leveled output can be written to.
///
/// The provided methods implement the "plain" and "line" write variants on
/// top of [`write_level`](Output::write_level). Multi-argument and formatted
/// variants are available as macros ([`info!`](crate::info),
/// [`infoln!`](crate::infoln), [`infof!`](crate::infof), ...).
pub trait Output {
    /// Route already-rendered `text` at `level`.
    fn write_level(&mut self, level: OutputLevel, text: &str);

    /// Write `text` as is.
    fn info(&mut self, text: impl Display)
    where
        Self: Sized,
    {
        self.write_level(OutputLevel::Info, &text.to_string());
    }

    /// Write `text` followed by a newline.
    fn info_line(&mut self, text: impl Display)
    where
        Self: Sized,
    {
        self.write_level(OutputLevel::Info, &format!("{text}\n"));
    }

    /// Write `text` as is, if debug output is enabled.
    fn debug(&mut self, text: impl Display)
    where
        Self: Sized,
    {
        self.write_level(OutputLevel::Debug, &text.to_string());
    }

    /// Write `text` followed by a newline, if debug output is enabled.
    fn debug_line(&mut self, text: impl Display)
    where
        Self: Sized,
    {
        self.write_level(OutputLevel::Debug, &format!("{text}\n"));
    }

    /// Write `text` as is to the error sink.
    fn error(&mut self, text: impl Display)
    where
        Self: Sized,
    {
        self.write_level(OutputLevel::Error, &text.to_string());
    }

    /// Write `text` followed by a newline to the error sink.
    fn error_line(&mut self, text: impl Display)
    where
        Self: Sized,
    {
        self.write_level(OutputLevel::Error, &format!("{text}\n"));
    }
}

impl<T: Output + ?Sized> Output for &mut T {
    fn write_level(&mut self, level: OutputLevel, text: &str) {
        (**self).write_level(level, text);
    }
}

/// Leveled output with step buffering.
#[derive(Debug)]
pub struct Console {
    stdout: Sink,
    stderr: Sink,
    debug: bool,
    step: Option<StepBuffer>,
}

impl Console {
    pub fn new(options: ConsoleOptions) -> Self {
        let (stdout, stderr, debug) = options.into_parts();
        Self {
            stdout,
            stderr,
            debug,
            step: None,
        }
    }

    /// Replace sinks and debug setting. A step in progress stays in progress.
    pub fn reconfigure(&mut self, options: ConsoleOptions) {
        let (stdout, stderr, debug) = options.into_parts();
        self.stdout = stdout;
        self.stderr = stderr;
        self.debug = debug;
    }

    pub fn set_debug(&mut self, enabled: bool) {
        self.debug = enabled;
    }

    pub fn is_debug_enabled(&self) -> bool {
        self.debug
    }

    /// Whether the sink that output at `level` goes to has colors enabled.
    /// Pass this to the [`styling`](crate::styling) helpers when styling
    /// text for that level.
    pub fn colors(&self, level: OutputLevel) -> bool {
        match level {
            OutputLevel::Debug | OutputLevel::Info => self.stdout.colors(),
            OutputLevel::Error => self.stderr.colors(),
        }
    }

    pub fn is_step_in_progress(&self) -> bool {
        self.step.is_some()
    }

    /// Output queued by the step in progress.
    pub fn step(&self) -> Option<&StepBuffer> {
        self.step.as_ref()
    }

    /// Print `label...` and queue output until the step concludes.
    ///
    /// A step already in progress is ended successfully first. Use
    /// `format_args!` for formatted labels.
    pub fn start_step(&mut self, label: impl Display) {
        if self.step.is_some() {
            self.end_step();
        }

        let label = label.to_string();
        log::debug!("Starting step: {label}");
        self.stdout.write_str(&format!("{label}{STEP_ELLIPSIS}"));
        self.step = Some(StepBuffer::new());
    }

    /// Print `ok` and replay queued output. Does nothing without a step.
    pub fn end_step(&mut self) {
        self.conclude(success(STEP_OK, self.stdout.colors()));
    }

    /// Print `ko`, replay queued output and hand `err` back unchanged.
    ///
    /// Without a step in progress, nothing is printed. `err` can be any
    /// value, including `None` or `Ok(())`, so this fits at the end of a
    /// fallible chain:
    ///
    /// ```
    /// use stepline::{CaptureBuffer, Console, ConsoleOptions};
    ///
    /// let mut console = Console::new(ConsoleOptions::default().stdout(CaptureBuffer::new()));
    /// console.start_step("Connecting");
    /// let err = console.fail_step(std::io::Error::other("timed out"));
    /// assert_eq!(err.to_string(), "timed out");
    /// ```
    pub fn fail_step<E>(&mut self, err: E) -> E {
        self.conclude(failure(STEP_KO, self.stdout.colors()));
        err
    }

    /// [`fail_step`](Self::fail_step) with an error built from `message`.
    pub fn fail_step_with(&mut self, message: impl Display) -> anyhow::Error {
        let err = anyhow::anyhow!("{message}");
        self.fail_step(err)
    }

    fn conclude(&mut self, status: String) {
        let Some(step) = self.step.take() else {
            return;
        };

        log::debug!(
            "Concluding step with {} queued fragment(s)",
            step.len()
        );
        self.stdout.write_str(&format!("{status}\n"));

        for fragment in step.drain() {
            match fragment.level() {
                OutputLevel::Debug if !self.debug => {}
                OutputLevel::Debug | OutputLevel::Info => {
                    self.stdout.write_str(&fragment.render(self.stdout.colors()));
                }
                OutputLevel::Error => {
                    self.stderr.write_str(&fragment.render(self.stderr.colors()));
                }
            }
        }
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new(ConsoleOptions::default())
    }
}

impl Output for Console {
    fn write_level(&mut self, level: OutputLevel, text: &str) {
        if level == OutputLevel::Debug && !self.debug {
            return;
        }

        if let Some(step) = self.step.as_mut() {
            step.push(level, text);
            return;
        }

        match level {
            OutputLevel::Debug | OutputLevel::Info => self.stdout.write_str(text),
            OutputLevel::Error => self.stderr.write_str(text),
        }
    }
}
