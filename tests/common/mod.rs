// Not every integration module uses every helper.
#![allow(dead_code)]

//! # Test utilities for stepline
//!
//! `Captured` builds a console or prompter whose streams are in-memory
//! `CaptureBuffer`s with colors disabled, so assertions can compare exact
//! text.

use std::io::Cursor;

use stepline::styling::ColorChoice;
use stepline::{CaptureBuffer, Console, ConsoleOptions, Prompter, PrompterOptions};

/// In-memory standard and error streams.
#[derive(Debug, Clone, Default)]
pub struct Captured {
    pub out: CaptureBuffer,
    pub err: CaptureBuffer,
}

impl Captured {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn console_options(&self, debug: bool) -> ConsoleOptions {
        ConsoleOptions::default()
            .debug(debug)
            .colors(ColorChoice::Never)
            .stdout(self.out.clone())
            .stderr(self.err.clone())
    }

    pub fn console(&self, debug: bool) -> Console {
        Console::new(self.console_options(debug))
    }

    /// A prompter answering from `input` and writing its questions to `out`.
    pub fn prompter(&self, input: &str) -> Prompter {
        Prompter::new(
            PrompterOptions::default()
                .colors(ColorChoice::Never)
                .input(Cursor::new(input.to_string()))
                .output(self.out.clone()),
        )
    }

    pub fn stdout(&self) -> String {
        self.out.contents()
    }

    pub fn stderr(&self) -> String {
        self.err.contents()
    }
}
