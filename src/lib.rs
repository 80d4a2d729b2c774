//! Pairwise comparison of up to three text documents.
//!
//! Two texts are diffed line by line into classified parts, every eligible pair of
//! documents is diffed off the control task, and each result is projected into a
//! numbered row model whose long unchanged runs can be revealed step by step.

pub mod areas;
pub mod artifacts;
pub mod commands;
