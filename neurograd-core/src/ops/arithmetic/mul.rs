use crate::autograd::BackwardOp;
use crate::value::Value;

/// Computes `a * b`.
///
/// Backward: `a.grad += b.data * c.grad`, `b.grad += a.data * c.grad`.
pub fn mul_op(a: &Value, b: &Value) -> Value {
    Value::from_op(a.data() * b.data(), vec![a.clone(), b.clone()], BackwardOp::Mul)
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
