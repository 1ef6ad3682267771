//! Prompt error types
//!
//! - **`ParseError`** - the confirmation parser rejected an answer.
//! - **`PromptError`** - what [`Prompter::confirm`](crate::Prompter::confirm)
//!   returns on failure: either the input could not be read, or the answer
//!   could not be parsed.
//!
//! Both convert into `anyhow::Error` for application code.

use std::fmt;
use std::io;

/// A confirmation answer that could not be turned into yes or no.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    input: String,
    reason: String,
}

impl ParseError {
    /// Reject `input` with a custom reason. Intended for custom parsers.
    pub fn new(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// The default rejection: `input` is not a recognized yes/no answer.
    pub fn invalid_answer(input: impl Into<String>) -> Self {
        Self::new(input, "expected yes or no")
    }

    /// The (trimmed) answer that was rejected.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid answer {:?}: {}", self.input, self.reason)
    }
}

impl std::error::Error for ParseError {}

/// Failure of a confirmation prompt.
#[derive(Debug)]
pub enum PromptError {
    /// The input source could not produce a line (closed stream or I/O error).
    Read(io::Error),
    /// The answer was rejected by the confirmation parser.
    Parse(ParseError),
}

impl PromptError {
    /// Whether the input stream ended before a full line was read.
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, Self::Read(err) if err.kind() == io::ErrorKind::UnexpectedEof)
    }
}

impl fmt::Display for PromptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read(_) => write!(f, "failed to read answer"),
            Self::Parse(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl std::error::Error for PromptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read(err) => Some(err),
            // Display already renders the parse error.
            Self::Parse(_) => None,
        }
    }
}

impl From<io::Error> for PromptError {
    fn from(err: io::Error) -> Self {
        Self::Read(err)
    }
}

impl From<ParseError> for PromptError {
    fn from(err: ParseError) -> Self {
        Self::Parse(err)
    }
}
