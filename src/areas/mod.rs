//! Stateful components
//!
//! - `slots`: The three document slots and pair eligibility
//! - `worker`: Off-thread diff computation behind a request/response channel
//! - `orchestrator`: Dispatches one diff per eligible pair and drops stale results
//! - `loader`: Reads local files into document content
//! - `session`: Output writer plus the row model shown for every pair

pub mod loader;
pub mod orchestrator;
pub mod session;
pub mod slots;
pub mod worker;
