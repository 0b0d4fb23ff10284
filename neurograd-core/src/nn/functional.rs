//! Stateless activation functions.
//!
//! Each function accepts a single value or a sequence of values and returns the
//! same shape: one value in, one value out; `n` values in, `n` values out in
//! the same order.

use crate::ops::activation::{relu_op, tanh_op};
use crate::value::Value;

/// Containers of values an element-wise function can be mapped over.
pub trait Elementwise {
    type Output;

    fn map_elementwise<F: Fn(&Value) -> Value>(self, f: F) -> Self::Output;
}

impl Elementwise for Value {
    type Output = Value;

    fn map_elementwise<F: Fn(&Value) -> Value>(self, f: F) -> Value {
        f(&self)
    }
}

impl Elementwise for &Value {
    type Output = Value;

    fn map_elementwise<F: Fn(&Value) -> Value>(self, f: F) -> Value {
        f(self)
    }
}

impl Elementwise for Vec<Value> {
    type Output = Vec<Value>;

    fn map_elementwise<F: Fn(&Value) -> Value>(self, f: F) -> Vec<Value> {
        self.iter().map(f).collect()
    }
}

impl Elementwise for &Vec<Value> {
    type Output = Vec<Value>;

    fn map_elementwise<F: Fn(&Value) -> Value>(self, f: F) -> Vec<Value> {
        self.iter().map(f).collect()
    }
}

impl Elementwise for &[Value] {
    type Output = Vec<Value>;

    fn map_elementwise<F: Fn(&Value) -> Value>(self, f: F) -> Vec<Value> {
        self.iter().map(f).collect()
    }
}

/// Applies `tanh` element-wise.
pub fn tanh<T: Elementwise>(x: T) -> T::Output {
    x.map_elementwise(tanh_op)
}

/// Applies the rectified linear unit element-wise.
pub fn relu<T: Elementwise>(x: T) -> T::Output {
    x.map_elementwise(relu_op)
}

#[cfg(test)]
mod tests {
    use super::{relu, tanh};
    use crate::value::{values, Value};

    #[test]
    fn test_single_in_single_out() {
        let x = Value::new(-0.5);
        let r: Value = relu(&x);
        let t: Value = tanh(x.clone());
        assert_eq!(r.data(), 0.0);
        assert_eq!(t.data(), (-0.5f64).tanh());
        assert_eq!(t.inputs(), vec![x]);
    }

    #[test]
    fn test_sequence_preserves_order() {
        let xs = values(&[3.0, -3.0, 0.5]);
        let out = relu(&xs);
        assert_eq!(out.len(), xs.len());
        for (o, x) in out.iter().zip(&xs) {
            assert_eq!(o.inputs(), vec![x.clone()]);
            assert_eq!(o.data(), x.data().max(0.0));
        }
        let owned = tanh(xs.clone());
        assert_eq!(owned.len(), 3);
        assert!(tanh(Vec::new()).is_empty());
    }

    #[test]
    fn test_backward_through_sequence() {
        let xs = values(&[1.0, -1.0]);
        let out = relu(xs.as_slice());
        let total = &out[0] + &out[1];
        total.backward();
        assert_eq!(xs[0].grad(), 1.0);
        assert_eq!(xs[1].grad(), 0.0);
    }
}
