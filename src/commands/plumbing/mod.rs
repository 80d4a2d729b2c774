//! Low-level commands
//!
//! - `diff_lines`: Print the classified diff parts of two documents

pub mod diff_lines;
