//! Command-line interface for `b3x`.

mod commands;
mod icons;

pub use commands::{is_verbose, run};
