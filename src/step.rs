//! Step buffering.
//!
//! While a step is in progress, leveled output is queued here instead of being
//! written, so the step's label and its `ok`/`ko` status stay on one line.
//! When the step concludes, each fragment is replayed indented under it.

use crate::styling::{failure, trace};

/// Prefix of every replayed fragment.
pub const REPLAY_PREFIX: &str = "  > ";

/// Indentation applied to continuation lines of a replayed fragment.
pub const CONTINUATION_INDENT: &str = "    ";

/// Classification of an output call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputLevel {
    /// Shown only when debug output is enabled. Goes to the standard sink.
    Debug,
    /// Goes to the standard sink.
    Info,
    /// Goes to the error sink.
    Error,
}

/// One piece of output captured during a step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    content: String,
    level: OutputLevel,
}

impl Fragment {
    pub fn new(level: OutputLevel, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            level,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn level(&self) -> OutputLevel {
        self.level
    }

    /// Render the fragment as it is replayed once its step concludes.
    ///
    /// One trailing newline is dropped, continuation lines are indented, and
    /// the result is prefixed with `"  > "` and terminated by a newline.
    /// With `colors`, errors are styled as failures and everything else as
    /// trace output. The content itself is never altered.
    pub fn render(&self, colors: bool) -> String {
        let body = indent_continuation_lines(&self.content);
        let styled = match self.level {
            OutputLevel::Error => failure(body, colors),
            OutputLevel::Debug | OutputLevel::Info => trace(body, colors),
        };
        format!("{REPLAY_PREFIX}{styled}\n")
    }
}

/// Strip exactly one trailing `\n`, then indent every remaining line break.
pub fn indent_continuation_lines(content: &str) -> String {
    let content = content.strip_suffix('\n').unwrap_or(content);
    content.replace('\n', &format!("\n{CONTINUATION_INDENT}"))
}

/// Insertion-ordered queue of fragments for the step in progress.
#[derive(Debug, Default)]
pub struct StepBuffer {
    queue: Vec<Fragment>,
}

impl StepBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, level: OutputLevel, content: impl Into<String>) {
        let fragment = Fragment::new(level, content);
        log::trace!("Queued {:?} fragment: {:?}", fragment.level, fragment.content);
        self.queue.push(fragment);
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.queue
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Consume the buffer, yielding fragments in the order they were pushed.
    pub fn drain(self) -> impl Iterator<Item = Fragment> {
        self.queue.into_iter()
    }
}
