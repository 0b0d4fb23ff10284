// neurograd-core/src/ops/math_elem/log.rs

use crate::autograd::BackwardOp;
use crate::error::NeuroGradError;
use crate::value::Value;

/// Computes the natural logarithm `ln(a)`.
///
/// Backward: `a.grad += c.grad / a.data`.
///
/// # Errors
/// Returns `NeuroGradError::DomainError` if `a.data <= 0`; no node is created in
/// that case.
pub fn log_op(a: &Value) -> Result<Value, NeuroGradError> {
    let x = a.data();
    if x <= 0.0 || x.is_nan() {
        return Err(NeuroGradError::DomainError {
            operation: "log".to_string(),
            value: x,
        });
    }
    Ok(Value::from_op(x.ln(), vec![a.clone()], BackwardOp::Log))
}

impl Value {
    /// Natural logarithm. See [`log_op`].
    pub fn log(&self) -> Result<Value, NeuroGradError> {
        log_op(self)
    }
}

#[cfg(test)]
#[path = "log_test.rs"]
mod tests;
