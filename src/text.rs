//! Argument joining for the write macros.
//!
//! The "plain" write variants concatenate their arguments with no separator;
//! the "line" variants separate them with single spaces.

use std::fmt::{Display, Write as _};

/// `parts` back to back: `concat(&[&"a", &1])` is `"a1"`.
pub fn concat(parts: &[&dyn Display]) -> String {
    let mut out = String::new();
    for part in parts {
        let _ = write!(out, "{part}");
    }
    out
}

/// `parts` separated by single spaces: `join(&[&"a", &1])` is `"a 1"`.
pub fn join(parts: &[&dyn Display]) -> String {
    let mut out = String::new();
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{part}");
    }
    out
}

/// [`join`] followed by exactly one newline.
pub fn join_line(parts: &[&dyn Display]) -> String {
    let mut out = join(parts);
    out.push('\n');
    out
}
