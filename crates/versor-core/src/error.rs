//! Crate-level error type.

/// Errors produced by versor-core operations.
#[derive(Debug, thiserror::Error)]
pub enum VersorError {
    #[error("storage error: {0}")]
    Storage(String),

    #[error("invalid quaternion '{input}': {msg}")]
    InvalidQuaternion { input: String, msg: String },
}
