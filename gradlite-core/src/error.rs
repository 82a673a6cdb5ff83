use thiserror::Error;

/// Custom error type for the gradlite engine.
///
/// Every variant is a domain error raised eagerly by the operation that was
/// asked to build a node. When one is returned, the offending node was never
/// allocated and the rest of the graph is untouched.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum AutogradError {
    #[error("Logarithm domain error: input must be > 0, got {value}")]
    LogDomain { value: f64 },

    #[error("Power domain error: {base} ** {exponent} is not a real number")]
    PowDomain { base: f64, exponent: f64 },

    #[error("Invalid exponent: expected a finite number, got {exponent}")]
    InvalidExponent { exponent: f64 },

    #[error("Predicted probability must be in [0, 1], got {value}")]
    ProbabilityOutOfRange { value: f64 },

    #[error("True label must be 0 or 1, got {label}")]
    InvalidLabel { label: f64 },

    #[error("Operands of '{operation}' belong to different graphs")]
    GraphMismatch { operation: String },

    #[error("Internal error: {0}")]
    InternalError(String),
}
