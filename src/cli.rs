//! Command-line interface components.

pub mod args;
pub mod commands;
pub mod input;

pub use args::{Args, OutputFormat};
pub use commands::{AppContext, execute, run};
