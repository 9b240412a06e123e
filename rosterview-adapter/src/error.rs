use alloc::string::String;

use rosterview::DuplicateId;

/// Why a roster load failed.
///
/// A failed load is terminal for that attempt. The session keeps the previous roster (or the
/// empty one) and records the error; nothing is retried automatically.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LoadError {
    #[error("roster source rejected the request: {0}")]
    Rejected(String),
    #[error("roster load timed out after {after_ms} ms")]
    TimedOut { after_ms: u64 },
    #[error("roster contains duplicate developer id {id} (positions {first} and {second})")]
    DuplicateId {
        id: u64,
        first: usize,
        second: usize,
    },
}

impl LoadError {
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected(reason.into())
    }
}

impl From<DuplicateId> for LoadError {
    fn from(e: DuplicateId) -> Self {
        Self::DuplicateId {
            id: e.id.0,
            first: e.first,
            second: e.second,
        }
    }
}
