//! Styling for terminal output.
//!
//! This module uses the anstyle ecosystem:
//! - anstyle for the semantic [`Style`] constants
//! - anstream for deciding whether a stream gets colors
//!
//! ## Colors are decided when text is styled
//!
//! Every helper takes the color flag of the sink the text is headed for
//! ([`Sink::colors`](crate::Sink::colors),
//! [`Console::colors`](crate::Console::colors)). With colors off the content
//! comes back untouched. Sinks never rewrite what they are given, so escape
//! sequences written by callers reach the writer as is.

mod constants;
pub mod symbols;

pub use anstream::ColorChoice;
pub use anstream::stream::RawStream;
pub use anstyle::Style;

pub use constants::*;

use std::fmt::Display;

/// Wrap `content` in `style` when `colors` is set.
pub fn paint(style: Style, content: impl Display, colors: bool) -> String {
    if colors {
        format!("{style}{content}{style:#}")
    } else {
        content.to_string()
    }
}

/// Green text, used for the `ok` step status.
pub fn success(content: impl Display, colors: bool) -> String {
    paint(SUCCESS, content, colors)
}

/// Red text, used for the `ko` step status, replayed errors and prompt failures.
pub fn failure(content: impl Display, colors: bool) -> String {
    paint(FAILURE, content, colors)
}

/// Dim text, used for info and debug output replayed under a step.
pub fn trace(content: impl Display, colors: bool) -> String {
    paint(TRACE, content, colors)
}

/// Underlined cyan text for URLs and addresses.
pub fn link(content: impl Display, colors: bool) -> String {
    paint(LINK, content, colors)
}

/// Bold text.
pub fn important(content: impl Display, colors: bool) -> String {
    paint(IMPORTANT, content, colors)
}

/// Resolve a [`ColorChoice`] for `stream`.
///
/// `Auto` follows the capabilities of that stream, including the `NO_COLOR`
/// and `CLICOLOR_FORCE` conventions handled by anstream. Writers that are not
/// terminals resolve to no colors unless forced.
pub fn colors_enabled<S: RawStream>(choice: ColorChoice, stream: &S) -> bool {
    match choice {
        ColorChoice::Auto => anstream::AutoStream::choice(stream) != ColorChoice::Never,
        ColorChoice::Never => false,
        _ => true,
    }
}
