//! Error types for the remote booking service boundary.
//!
//! Implementations convert their transport-specific failures into
//! [`ServiceError`] so the application layer never depends on an HTTP
//! library. Payloads are carried as strings to keep the type `Clone` and
//! comparable in tests.

use thiserror::Error;

/// Failure of a call to the remote booking service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The request never produced a response (DNS, connect, reset, ...).
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with a non-success status code.
    #[error("service responded with status {status}")]
    Status {
        /// HTTP status code
        status: u16,
    },

    /// The response body could not be decoded into the expected type.
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Convert `serde_json` decode failures into `ServiceError`.
impl From<serde_json::Error> for ServiceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_errors_become_decode_errors() {
        let err = serde_json::from_str::<u32>("\"x\"").map_err(ServiceError::from);
        assert!(matches!(err, Err(ServiceError::Decode(_))));
    }
}
