use super::relu_op;
use crate::value::Value;

#[test]
fn test_relu_forward() {
    let inputs = [-2.0, -1.0, 0.0, 1.0, 2.0];
    let expected = [0.0, 0.0, 0.0, 1.0, 2.0];
    for (x, e) in inputs.iter().zip(expected.iter()) {
        assert_eq!(relu_op(&Value::new(*x)).data(), *e);
    }
}

#[test]
fn test_relu_backward_positive() {
    let a = Value::new(1.5);
    let b = a.relu();
    b.backward();
    assert_eq!(a.grad(), 1.0);
}

#[test]
fn test_relu_backward_negative_and_zero() {
    let neg = Value::new(-0.5);
    let zero = Value::new(0.0);
    let out = neg.relu() + zero.relu();
    out.backward();
    assert_eq!(neg.grad(), 0.0);
    assert_eq!(zero.grad(), 0.0);
}

#[test]
fn test_relu_scales_upstream_grad() {
    let a = Value::new(3.0);
    let b = a.relu() * 4.0;
    b.backward();
    assert_eq!(a.grad(), 4.0);
}
