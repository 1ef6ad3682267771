//! Multi-argument write macros.
//!
//! Each level has three forms, taking any [`Output`](crate::Output) target
//! first (a `Console`, `&mut Console`, or [`global::console()`](crate::global::console)):
//!
//! | Form        | Arguments                          | Example                               |
//! |-------------|------------------------------------|---------------------------------------|
//! | `info!`     | concatenated, no newline           | `info!(c, "a", 1)` writes `a1`        |
//! | `infoln!`   | space-separated, one newline       | `infoln!(c, "a", 1)` writes `a 1\n`   |
//! | `infof!`    | format string, no newline          | `infof!(c, "{}%", 25)` writes `25%`   |
//!
//! `debug!`, `debugln!`, `debugf!`, `error!`, `errorln!` and `errorf!` follow
//! the same pattern.

#[doc(hidden)]
#[macro_export]
macro_rules! __write_parts {
    ($method:ident, $join:ident, $target:expr $(, $part:expr)* $(,)?) => {{
        use $crate::Output as _;
        ($target).$method($crate::text::$join(&[$(&$part as &dyn ::core::fmt::Display),*]))
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __write_format {
    ($method:ident, $target:expr, $($arg:tt)+) => {{
        use $crate::Output as _;
        ($target).$method(::core::format_args!($($arg)+))
    }};
}

/// Write info output, arguments concatenated.
#[macro_export]
macro_rules! info {
    ($target:expr $(, $part:expr)* $(,)?) => {
        $crate::__write_parts!(info, concat, $target $(, $part)*)
    };
}

/// Write info output, arguments space-separated, followed by a newline.
#[macro_export]
macro_rules! infoln {
    ($target:expr $(, $part:expr)* $(,)?) => {
        $crate::__write_parts!(info, join_line, $target $(, $part)*)
    };
}

/// Write formatted info output.
#[macro_export]
macro_rules! infof {
    ($target:expr, $($arg:tt)+) => {
        $crate::__write_format!(info, $target, $($arg)+)
    };
}

/// Write debug output, arguments concatenated.
#[macro_export]
macro_rules! debug {
    ($target:expr $(, $part:expr)* $(,)?) => {
        $crate::__write_parts!(debug, concat, $target $(, $part)*)
    };
}

/// Write debug output, arguments space-separated, followed by a newline.
#[macro_export]
macro_rules! debugln {
    ($target:expr $(, $part:expr)* $(,)?) => {
        $crate::__write_parts!(debug, join_line, $target $(, $part)*)
    };
}

/// Write formatted debug output.
#[macro_export]
macro_rules! debugf {
    ($target:expr, $($arg:tt)+) => {
        $crate::__write_format!(debug, $target, $($arg)+)
    };
}

/// Write error output, arguments concatenated.
#[macro_export]
macro_rules! error {
    ($target:expr $(, $part:expr)* $(,)?) => {
        $crate::__write_parts!(error, concat, $target $(, $part)*)
    };
}

/// Write error output, arguments space-separated, followed by a newline.
#[macro_export]
macro_rules! errorln {
    ($target:expr $(, $part:expr)* $(,)?) => {
        $crate::__write_parts!(error, join_line, $target $(, $part)*)
    };
}

/// Write formatted error output.
#[macro_export]
macro_rules! errorf {
    ($target:expr, $($arg:tt)+) => {
        $crate::__write_format!(error, $target, $($arg)+)
    };
}
