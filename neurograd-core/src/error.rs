use thiserror::Error;

/// Custom error type for the NeuroGrad engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum NeuroGradError {
    #[error("Shape mismatch: expected {expected} inputs, got {actual} during operation {operation}")]
    ShapeMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Domain error: {operation} is undefined for input {value}")]
    DomainError { operation: String, value: f64 },

    #[error("Cannot apply {operation} to an empty sequence of values")]
    EmptyInput { operation: String },
}
