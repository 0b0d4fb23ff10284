use crate::error::NeuroGradError;
use crate::nn::init::Init;
use crate::nn::module::Module;
use crate::value::Value;
use rand::Rng;

/// A single unit computing `sum(w_i * x_i) + b`.
///
/// Owns one weight per input feature and one bias, all trainable leaves.
/// Cloning a neuron clones the handles: the clone shares its parameters.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<Value>,
    bias: Value,
}

impl Neuron {
    /// Creates a neuron with weights and bias drawn uniformly from `[-1, 1)`.
    pub fn new(in_features: usize) -> Result<Self, NeuroGradError> {
        Self::with_rng(in_features, &mut rand::thread_rng())
    }

    /// Like [`Neuron::new`], drawing from `rng`.
    pub fn with_rng<R: Rng + ?Sized>(in_features: usize, rng: &mut R) -> Result<Self, NeuroGradError> {
        Self::with_init(in_features, Init::default(), rng)
    }

    /// Creates a neuron whose weights and bias are drawn from `init`.
    pub fn with_init<R: Rng + ?Sized>(
        in_features: usize,
        init: Init,
        rng: &mut R,
    ) -> Result<Self, NeuroGradError> {
        let weights = init.values(in_features, rng)?;
        let bias = init.values(1, rng)?.remove(0);
        Ok(Neuron { weights, bias })
    }

    /// Creates a neuron with fixed weights and bias.
    pub fn from_weights(weights: &[f64], bias: f64) -> Self {
        Neuron {
            weights: weights.iter().copied().map(Value::new).collect(),
            bias: Value::new(bias),
        }
    }

    pub fn weights(&self) -> &[Value] {
        &self.weights
    }

    pub fn bias(&self) -> &Value {
        &self.bias
    }

    pub fn in_features(&self) -> usize {
        self.weights.len()
    }
}

impl Module for Neuron {
    type Output = Value;

    fn forward(&self, input: &[Value]) -> Result<Value, NeuroGradError> {
        if input.len() != self.weights.len() {
            return Err(NeuroGradError::ShapeMismatch {
                expected: self.weights.len(),
                actual: input.len(),
                operation: "Neuron::forward".to_string(),
            });
        }
        Ok(self
            .weights
            .iter()
            .zip(input)
            .fold(self.bias.clone(), |acc, (w, x)| acc + w * x))
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        self.weights
            .iter()
            .enumerate()
            .map(|(i, w)| (format!("w{}", i), w.clone()))
            .chain(std::iter::once(("b".to_string(), self.bias.clone())))
            .collect()
    }
}
