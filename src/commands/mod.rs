//! Command implementations
//!
//! - `plumbing`: Raw engine output for two documents
//! - `porcelain`: The annotated, line-numbered listing with collapsed runs

pub mod plumbing;
pub mod porcelain;
