use super::mse_loss;
use crate::autograd::grad_check::check_grad;
use crate::error::NeuroGradError;
use crate::value::{values, Value};
use approx::assert_relative_eq;

#[test]
fn test_mse_forward() -> Result<(), NeuroGradError> {
    let preds = values(&[1.0, 2.0, 3.0]);
    let targets = values(&[1.0, 0.0, 5.0]);
    let loss = mse_loss(&preds, &targets)?;
    assert_relative_eq!(loss.data(), (0.0 + 4.0 + 4.0) / 3.0);
    Ok(())
}

#[test]
fn test_mse_backward() -> Result<(), NeuroGradError> {
    let preds = values(&[1.0, 2.0]);
    let targets = values(&[0.0, 4.0]);
    let loss = mse_loss(&preds, &targets)?;
    loss.backward();
    // d/dp_i = 2 (p_i - t_i) / n
    assert_relative_eq!(preds[0].grad(), 1.0);
    assert_relative_eq!(preds[1].grad(), -2.0);
    assert_relative_eq!(targets[1].grad(), 2.0);
    Ok(())
}

#[test]
fn test_mse_grad_check() {
    let inputs = values(&[0.3, -1.7, 2.2, 0.9]);
    let func = |xs: &[Value]| mse_loss(&xs[..2], &xs[2..]);
    check_grad(func, &inputs, 1e-6, 1e-5).unwrap();
}

#[test]
fn test_mse_errors() {
    let preds = values(&[1.0, 2.0]);
    let targets = values(&[1.0]);
    assert!(matches!(
        mse_loss(&preds, &targets),
        Err(NeuroGradError::ShapeMismatch { expected: 2, actual: 1, .. })
    ));
    assert_eq!(
        mse_loss(&[], &[]).unwrap_err(),
        NeuroGradError::EmptyInput {
            operation: "mse_loss".to_string()
        }
    );
}
