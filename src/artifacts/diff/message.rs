use crate::artifacts::diff::line_diff::DiffResult;
use derive_new::new;
use std::fmt::Display;
use std::sync::Arc;

/// Opaque identity of one diff request; echoed back unchanged in the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, new)]
pub struct RequestId(u64);

impl Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "req-{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct DiffRequest {
    pub request_id: RequestId,
    pub text1: Arc<str>,
    pub text2: Arc<str>,
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct DiffResponse {
    pub request_id: RequestId,
    pub outcome: Result<DiffResult, String>,
}
