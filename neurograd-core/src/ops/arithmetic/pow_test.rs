use super::pow_op;
use crate::autograd::grad_check::check_grad;
use crate::autograd::BackwardOp;
use crate::error::NeuroGradError;
use crate::value::{values, Value};
use approx::assert_relative_eq;

#[test]
fn test_pow_forward_records_exponent() {
    let a = Value::new(2.0);
    let b = pow_op(&a, 3.0);
    assert_relative_eq!(b.data(), 8.0);
    assert_eq!(b.op(), BackwardOp::Pow { exponent: 3.0 });
    assert_eq!(b.inputs(), vec![a]);
}

#[test]
fn test_pow_backward() {
    let a = Value::new(2.0);
    let b = a.powf(3.0);
    b.backward();
    // d/dx x^3 = 3x^2 = 12 at x=2
    assert_relative_eq!(a.grad(), 12.0);
}

#[test]
fn test_pow_negative_and_fractional() {
    let a = Value::new(4.0);
    let inv = a.powf(-1.0);
    let root = a.powf(0.5);
    let out = &inv + &root;
    assert_relative_eq!(out.data(), 0.25 + 2.0);
    out.backward();
    // -1/x^2 + 0.5/sqrt(x)
    assert_relative_eq!(a.grad(), -1.0 / 16.0 + 0.25);
}

#[test]
fn test_pow_grad_check() {
    let inputs = values(&[1.3]);
    let func = |xs: &[Value]| -> Result<Value, NeuroGradError> { Ok(xs[0].powf(2.5)) };
    check_grad(func, &inputs, 1e-6, 1e-5).unwrap();
}
