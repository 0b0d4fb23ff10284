use crate::ops::arithmetic::{mul_op, pow_op};
use crate::value::Value;

/// Computes `a / b` as `a * b**-1`.
///
/// `b.data == 0` yields an infinite value, as float division does.
pub fn div_op(a: &Value, b: &Value) -> Value {
    mul_op(a, &pow_op(b, -1.0))
}

#[cfg(test)]
mod tests {
    use crate::value::Value;
    use approx::assert_relative_eq;

    #[test]
    fn test_div_forward_backward() {
        let a = Value::new(3.0);
        let b = Value::new(4.0);
        let c = &a / &b;
        assert_relative_eq!(c.data(), 0.75);
        c.backward();
        // dc/da = 1/b, dc/db = -a/b^2
        assert_relative_eq!(a.grad(), 0.25);
        assert_relative_eq!(b.grad(), -3.0 / 16.0);
    }

    #[test]
    fn test_float_over_value() {
        let b = Value::new(2.0);
        let c = 1.0 / &b;
        assert_relative_eq!(c.data(), 0.5);
        c.backward();
        assert_relative_eq!(b.grad(), -0.25);
    }
}
