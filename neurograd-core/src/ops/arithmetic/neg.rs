use crate::ops::arithmetic::mul_op;
use crate::value::Value;

/// Computes `-a` as `a * -1`, so `a.grad += -1 * c.grad`.
pub fn neg_op(a: &Value) -> Value {
    mul_op(a, &Value::new(-1.0))
}
