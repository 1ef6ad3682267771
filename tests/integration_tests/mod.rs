#[cfg(feature = "cli")]
pub mod demo;
pub mod global_console;
pub mod steps;
