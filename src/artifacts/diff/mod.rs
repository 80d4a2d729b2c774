//! Line diffing and the pairwise comparison vocabulary
//!
//! - `myers`: Myers' shortest edit script over arbitrary sequences
//! - `line_diff`: line-granularity diff of two texts into classified parts
//! - `pair`: document slots and the three pair identities
//! - `message`: request/response shapes crossing the worker boundary
//! - `error`: per-pair failure taxonomy

pub mod error;
pub mod line_diff;
pub mod message;
pub mod myers;
pub mod pair;
