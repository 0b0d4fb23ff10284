use super::{mlp, Sequential};
use crate::error::NeuroGradError;
use crate::nn::layers::{Linear, Neuron, ReLU};
use crate::nn::module::Module;
use crate::utils::testing::check_values_near;
use crate::value::values;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn fixed_layer() -> Result<Linear, NeuroGradError> {
    Linear::from_neurons(
        2,
        vec![
            Neuron::from_weights(&[1.0, -1.0], 0.0),
            Neuron::from_weights(&[0.5, 0.5], -2.0),
        ],
    )
}

#[test]
fn test_forward_chains_children() -> Result<(), NeuroGradError> {
    let mut model = Sequential::new();
    model.add_module("fc", Box::new(fixed_layer()?));
    model.add_module("act", Box::new(ReLU));
    assert_eq!(model.len(), 2);

    let out = model.forward(&values(&[3.0, 1.0]))?;
    // fc: [2.0, 0.0] -> relu: [2.0, 0.0]
    check_values_near(&out, &[2.0, 0.0], 1e-12);
    Ok(())
}

#[test]
fn test_named_parameters_are_prefixed() -> Result<(), NeuroGradError> {
    let mut model = Sequential::new();
    model.push(Box::new(fixed_layer()?));
    model.push(Box::new(ReLU));
    let names: Vec<String> = model.named_parameters().into_iter().map(|(n, _)| n).collect();
    assert_eq!(
        names,
        vec![
            "0.neurons.0.w0",
            "0.neurons.0.w1",
            "0.neurons.0.b",
            "0.neurons.1.w0",
            "0.neurons.1.w1",
            "0.neurons.1.b",
        ]
    );
    Ok(())
}

#[test]
fn test_empty_sequential_is_identity() -> Result<(), NeuroGradError> {
    let model = Sequential::new();
    assert!(model.is_empty());
    let x = values(&[1.0, 2.0]);
    let out = model.forward(&x)?;
    assert_eq!(out, x);
    Ok(())
}

#[test]
fn test_forward_propagates_shape_errors() -> Result<(), NeuroGradError> {
    let mut model = Sequential::new();
    model.push(Box::new(fixed_layer()?));
    let result = model.forward(&values(&[1.0]));
    assert!(matches!(result, Err(NeuroGradError::ShapeMismatch { expected: 2, actual: 1, .. })));
    Ok(())
}

#[test]
fn test_mlp_layout() -> Result<(), NeuroGradError> {
    let mut rng = StdRng::seed_from_u64(7);
    let model = mlp(&[3, 4, 4, 1], &mut rng)?;
    // Linear, Tanh, Linear, Tanh, Linear
    assert_eq!(model.len(), 5);
    assert_eq!(model.num_parameters(), 4 * 4 + 4 * 5 + 1 * 5);
    let out = model.forward(&values(&[0.1, -0.2, 0.3]))?;
    assert_eq!(out.len(), 1);
    Ok(())
}

#[test]
fn test_mlp_is_deterministic_for_a_seed() -> Result<(), NeuroGradError> {
    let a = mlp(&[2, 3, 1], &mut StdRng::seed_from_u64(42))?;
    let b = mlp(&[2, 3, 1], &mut StdRng::seed_from_u64(42))?;
    let da: Vec<f64> = a.parameters().iter().map(|p| p.data()).collect();
    let db: Vec<f64> = b.parameters().iter().map(|p| p.data()).collect();
    assert_eq!(da, db);
    Ok(())
}

#[test]
fn test_mlp_rejects_short_layouts() {
    let mut rng = StdRng::seed_from_u64(0);
    assert!(matches!(mlp(&[3], &mut rng), Err(NeuroGradError::ConfigurationError(_))));
    assert!(matches!(mlp(&[], &mut rng), Err(NeuroGradError::ConfigurationError(_))));
}
