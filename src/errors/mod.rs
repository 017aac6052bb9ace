//! Error handling module for the census engine.
//!
//! Only malformed input is a hard failure; every windowing or matching
//! shortfall degrades to an absent or zero result at the call site.

use serde::{Deserialize, Serialize};

/// Engine error type.
#[derive(Debug)]
pub enum CensusError {
    /// A snapshot or user record is missing required fields. Treating such
    /// data as zero would corrupt every downstream delta, so this is the
    /// only error that propagates to callers.
    MalformedRecord(String),
    /// Offset 0 (the current snapshot) was requested against an empty
    /// snapshot series.
    UnresolvedIndex(String),
    /// A snapshot id unknown to the store was requested.
    SnapshotNotFound(String),
}

impl CensusError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            CensusError::MalformedRecord(_) => "MALFORMED_RECORD",
            CensusError::UnresolvedIndex(_) => "UNRESOLVED_INDEX",
            CensusError::SnapshotNotFound(_) => "SNAPSHOT_NOT_FOUND",
        }
    }

    /// Get the error message.
    pub fn message(&self) -> &str {
        match self {
            CensusError::MalformedRecord(msg) => msg,
            CensusError::UnresolvedIndex(msg) => msg,
            CensusError::SnapshotNotFound(msg) => msg,
        }
    }
}

impl std::fmt::Display for CensusError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for CensusError {}

impl From<serde_json::Error> for CensusError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("Malformed snapshot data: {:?}", err);
        CensusError::MalformedRecord(format!("Malformed snapshot data: {}", err))
    }
}

/// Error details for callers that surface engine failures to a UI.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetails {
    pub code: String,
    pub message: String,
}

impl From<&CensusError> for ErrorDetails {
    fn from(error: &CensusError) -> Self {
        Self {
            code: error.error_code().to_string(),
            message: error.message().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_details_carry_code_and_message() {
        let err = CensusError::SnapshotNotFound("Snapshot snap-9 not found".to_string());
        let details = ErrorDetails::from(&err);

        assert_eq!(details.code, "SNAPSHOT_NOT_FOUND");
        assert_eq!(details.message, "Snapshot snap-9 not found");
        assert_eq!(err.to_string(), "SNAPSHOT_NOT_FOUND: Snapshot snap-9 not found");
    }
}
