use crate::autograd::BackwardOp;
use crate::value::Value;

/// Computes the hyperbolic tangent `tanh(a)`, in `[-1, 1]`.
///
/// Backward: with `t = tanh(a.data)`, `a.grad += (1 - t^2) * c.grad`. The
/// forward value is reused, so the rule needs no extra state.
pub fn tanh_op(a: &Value) -> Value {
    Value::from_op(a.data().tanh(), vec![a.clone()], BackwardOp::Tanh)
}

impl Value {
    /// Hyperbolic tangent. See [`tanh_op`].
    pub fn tanh(&self) -> Value {
        tanh_op(self)
    }
}
