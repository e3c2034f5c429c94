//! Coarse error classification.

/// Broad error category, used by the CLI to pick user-facing guidance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Authentication,
    Validation,
    Network,
    Server,
    Serialization,
    Configuration,
    Unknown,
}
