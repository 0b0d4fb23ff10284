use crate::autograd::BackwardOp;
use crate::value::Value;

/// Computes the rectified linear unit `max(a, 0)`.
///
/// Backward: `a.grad += c.grad` where `a.data > 0`, nothing otherwise (the
/// subgradient at exactly 0 is taken as 0).
pub fn relu_op(a: &Value) -> Value {
    Value::from_op(a.data().max(0.0), vec![a.clone()], BackwardOp::Relu)
}

impl Value {
    /// Rectified linear unit. See [`relu_op`].
    pub fn relu(&self) -> Value {
        relu_op(self)
    }
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
