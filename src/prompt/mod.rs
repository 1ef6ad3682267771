//! User prompts.
//!
//! A [`Prompter`] writes a question to its output, reads one line of input and
//! parses the answer. A non-interactive prompter never touches either stream
//! and answers with the prompt's default instead, which is what scripts and
//! CI runs want.

mod confirm;

pub use confirm::{
    Confirmation, ConfirmationParser, DEFAULT_CHOICES, default_confirmation, parse_bool_literal,
};

use std::fmt;
use std::io::{self, BufRead};

use crate::config::PrompterOptions;
use crate::error::PromptError;
use crate::sink::Sink;
use crate::styling::failure;

/// Asks users for confirmations.
pub struct Prompter {
    input: Box<dyn BufRead + Send>,
    output: Sink,
    interactive: bool,
}

impl Prompter {
    pub fn new(options: PrompterOptions) -> Self {
        let (input, output, interactive) = options.into_parts();
        Self {
            input,
            output,
            interactive,
        }
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    pub fn set_interactive(&mut self, enabled: bool) {
        self.interactive = enabled;
    }

    /// Ask for a yes/no answer.
    ///
    /// An empty answer (just enter) yields the default when the confirmation
    /// has one; otherwise the trimmed answer goes through the parser. With
    /// [`Confirmation::require_valid_input`], parse errors are shown and the
    /// question asked again; read errors always end the prompt.
    ///
    /// ```
    /// use std::io::Cursor;
    /// use stepline::{CaptureBuffer, Confirmation, Prompter, PrompterOptions};
    ///
    /// let mut prompter = Prompter::new(
    ///     PrompterOptions::default()
    ///         .input(Cursor::new("y\n"))
    ///         .output(CaptureBuffer::new()),
    /// );
    /// assert!(prompter.confirm(Confirmation::new("Continue?")).unwrap());
    /// ```
    pub fn confirm(&mut self, confirmation: Confirmation) -> Result<bool, PromptError> {
        if !self.interactive {
            log::debug!(
                "Not interactive, answering {:?} with {}",
                confirmation.label(),
                confirmation.default_answer()
            );
            return Ok(confirmation.default_answer());
        }

        loop {
            self.output.write_str(&confirmation.prompt_text());
            let line = self.read_line()?;

            if confirmation.has_default() && line == "\n" {
                return Ok(confirmation.default_answer());
            }

            match confirmation.parse(line.trim()) {
                Ok(answer) => return Ok(answer),
                Err(err) if confirmation.requires_valid_input() => {
                    log::debug!("Rejected answer, asking again: {err}");
                    let message = failure(&err, self.output.colors());
                    self.output.write_str(&format!("{message}\n"));
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    /// Read one line, delimiter included. Input ending before a newline is an
    /// error, even when some text was read.
    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        if !line.ends_with('\n') {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended before a full line was read",
            ));
        }
        Ok(line)
    }
}

impl Default for Prompter {
    fn default() -> Self {
        Self::new(PrompterOptions::default())
    }
}

impl fmt::Debug for Prompter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Prompter")
            .field("output", &self.output)
            .field("interactive", &self.interactive)
            .finish_non_exhaustive()
    }
}
