//! Output destinations.
//!
//! A [`Sink`] pairs a writer with the color decision made for it. All text
//! written by a [`Console`](crate::Console) or [`Prompter`](crate::Prompter)
//! goes through one of these. The decision tells the writer's owner whether to
//! style text headed there; the sink itself writes bytes exactly as given.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

use crate::styling::{ColorChoice, RawStream, colors_enabled};

/// A destination for rendered text.
pub struct Sink {
    writer: Box<dyn Write + Send>,
    colors: bool,
}

impl Sink {
    /// Wrap a custom writer. `Auto` treats it as a non-terminal stream.
    pub fn new(writer: impl Write + Send + 'static, colors: ColorChoice) -> Self {
        let writer: Box<dyn Write + Send> = Box::new(writer);
        let colors = colors_enabled(colors, &writer);
        Self { writer, colors }
    }

    pub fn stdout(colors: ColorChoice) -> Self {
        Self::from_stream(io::stdout(), colors)
    }

    pub fn stderr(colors: ColorChoice) -> Self {
        Self::from_stream(io::stderr(), colors)
    }

    /// `Auto` is resolved against `stream` itself.
    fn from_stream<S: RawStream + Send + 'static>(stream: S, colors: ColorChoice) -> Self {
        let colors = colors_enabled(colors, &stream);
        Self {
            writer: Box::new(stream),
            colors,
        }
    }

    /// Whether text written here should be styled.
    pub fn colors(&self) -> bool {
        self.colors
    }

    /// Write `text` unchanged and flush.
    ///
    /// Write errors are logged and dropped: output helpers never fail on
    /// their own account.
    pub fn write_str(&mut self, text: &str) {
        let result = self.writer.write_all(text.as_bytes());
        if let Err(err) = result.and_then(|()| self.writer.flush()) {
            log::warn!("Failed to write to output sink: {err}");
        }
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink")
            .field("colors", &self.colors)
            .finish_non_exhaustive()
    }
}

/// An in-memory writer whose clones share the same buffer.
///
/// Hand one clone to a [`Console`](crate::Console) or
/// [`Prompter`](crate::Prompter) and keep another to inspect what was written.
///
/// ```
/// use stepline::{CaptureBuffer, Console, ConsoleOptions, Output};
///
/// let out = CaptureBuffer::new();
/// let mut console = Console::new(ConsoleOptions::default().stdout(out.clone()));
/// console.info_line("hello");
/// assert_eq!(out.contents(), "hello\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CaptureBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl CaptureBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8.
    pub fn contents(&self) -> String {
        let bytes = self.bytes.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&bytes).into_owned()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }

    pub fn clear(&self) {
        self.bytes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Write for CaptureBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
