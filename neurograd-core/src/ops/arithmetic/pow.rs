use crate::autograd::BackwardOp;
use crate::value::Value;

/// Computes `a ** exponent` for a constant `exponent`.
///
/// The exponent is not part of the graph and receives no gradient.
/// Backward: `a.grad += exponent * a.data**(exponent - 1) * c.grad`.
pub fn pow_op(a: &Value, exponent: f64) -> Value {
    Value::from_op(
        a.data().powf(exponent),
        vec![a.clone()],
        BackwardOp::Pow { exponent },
    )
}

impl Value {
    /// Raises this value to a constant power. See [`pow_op`].
    pub fn powf(&self, exponent: f64) -> Value {
        pow_op(self, exponent)
    }
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
