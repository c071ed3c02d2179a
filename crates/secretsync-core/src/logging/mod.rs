//! Diagnostic logging
//!
//! A small pluggable logging layer:
//! - `Logger` trait for implementing custom sinks
//! - `ConsoleLogger` for CLI use
//! - `NoOpLogger` for tests

mod console;
mod noop;
mod traits;

pub use console::ConsoleLogger;
pub use noop::NoOpLogger;
pub use traits::{Logger, SharedLogger};
