use thiserror::Error;

/// Unified error type for the trip-planner-core library.
///
/// Deliberately small: the itinerary and ledger mutations follow a
/// silent no-op contract (see the service modules) and report their
/// outcome through return values, so only the operations that can
/// genuinely fail carry an error.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// Hand-off to the external map application failed. Callers log
    /// this and move on; it never reaches itinerary or ledger state.
    #[error("Navigation failed: {0}")]
    Navigation(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::Navigation(e.to_string())
    }
}
