//! Data structures and algorithms
//!
//! - `core`: Shared utilities (pager wrapper)
//! - `diff`: Line diffing (Myers' diff), pair identities and worker messages
//! - `rows`: Row model with collapsible unchanged runs

pub mod core;
pub mod diff;
pub mod rows;
