use crate::error::NeuroGradError;
use crate::value::Value;

/// Mean squared error `mean((p_i - t_i)^2)` over paired predictions and targets.
///
/// Returns a single differentiable value; call `backward()` on it to reach every
/// node the predictions were computed from.
///
/// # Errors
/// `ShapeMismatch` if the sequences differ in length, `EmptyInput` if both are
/// empty.
pub fn mse_loss(predictions: &[Value], targets: &[Value]) -> Result<Value, NeuroGradError> {
    if predictions.len() != targets.len() {
        return Err(NeuroGradError::ShapeMismatch {
            expected: predictions.len(),
            actual: targets.len(),
            operation: "mse_loss".to_string(),
        });
    }
    if predictions.is_empty() {
        return Err(NeuroGradError::EmptyInput {
            operation: "mse_loss".to_string(),
        });
    }
    let total: Value = predictions
        .iter()
        .zip(targets)
        .map(|(p, t)| (p - t).powf(2.0))
        .sum();
    Ok(total / predictions.len() as f64)
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
