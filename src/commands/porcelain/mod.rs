//! User-facing commands
//!
//! - `compare`: Compare up to three documents pairwise

pub mod compare;
