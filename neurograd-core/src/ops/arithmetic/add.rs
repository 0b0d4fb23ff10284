use crate::autograd::BackwardOp;
use crate::value::Value;

/// Computes `a + b`.
///
/// Backward: `a.grad += c.grad`, `b.grad += c.grad`.
pub fn add_op(a: &Value, b: &Value) -> Value {
    Value::from_op(a.data() + b.data(), vec![a.clone(), b.clone()], BackwardOp::Add)
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
