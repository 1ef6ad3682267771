//! Cherry-picked single-width UTF-8 symbols for command-line interfaces.
//!
//! They carry no color so they can be combined with any of the
//! [`styling`](super) helpers:
//!
//! ```
//! use stepline::styling::{success, symbols::CHECK_MARK};
//!
//! let line = format!("{} Installation successful", success(CHECK_MARK, true));
//! # let _ = line;
//! ```

/// ✔
pub const CHECK_MARK: &str = "\u{2714}";

/// ✖
pub const CROSS_MARK: &str = "\u{2716}";

/// ❮
pub const LEFT_ARROW: &str = "\u{276e}";

/// ❯
pub const RIGHT_ARROW: &str = "\u{276f}";

/// ◀
pub const LEFT_TRIANGLE: &str = "\u{25c0}";

/// ▶
pub const RIGHT_TRIANGLE: &str = "\u{25b6}";
