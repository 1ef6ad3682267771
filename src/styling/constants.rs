//! Style constants for terminal output
//!
//! Semantic mapping:
//! - Success: green
//! - Failure: red
//! - Trace (replayed step output): dim
//! - Link: underlined cyan
//! - Important: bold
//!
//! The [`paint`](super::paint) helpers apply these only when the destination
//! has colors enabled.

use anstyle::{AnsiColor, Color, Style};

/// Success style (green)
pub const SUCCESS: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green)));

/// Failure style (red)
pub const FAILURE: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red)));

/// Trace style (dim) for content replayed under a step
pub const TRACE: Style = Style::new().dimmed();

/// Link style (underlined cyan)
pub const LINK: Style = Style::new()
    .fg_color(Some(Color::Ansi(AnsiColor::Cyan)))
    .underline();

/// Important style (bold)
pub const IMPORTANT: Style = Style::new().bold();
