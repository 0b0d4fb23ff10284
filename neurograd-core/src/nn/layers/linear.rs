use crate::error::NeuroGradError;
use crate::nn::init::Init;
use crate::nn::layers::neuron::Neuron;
use crate::nn::module::Module;
use crate::value::Value;
use rand::Rng;

/// A layer of independent neurons applied to the same input.
///
/// Maps `in_features` inputs to `out_features` outputs, one per neuron, with no
/// interaction between neurons.
/// Cloning a layer ties its parameters to the original's.
#[derive(Debug, Clone)]
pub struct Linear {
    neurons: Vec<Neuron>,
    in_features: usize,
}

impl Linear {
    /// Creates a layer with parameters drawn uniformly from `[-1, 1)`.
    pub fn new(in_features: usize, out_features: usize) -> Result<Self, NeuroGradError> {
        Self::with_rng(in_features, out_features, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(
        in_features: usize,
        out_features: usize,
        rng: &mut R,
    ) -> Result<Self, NeuroGradError> {
        Self::with_init(in_features, out_features, Init::default(), rng)
    }

    pub fn with_init<R: Rng + ?Sized>(
        in_features: usize,
        out_features: usize,
        init: Init,
        rng: &mut R,
    ) -> Result<Self, NeuroGradError> {
        let neurons = (0..out_features)
            .map(|_| Neuron::with_init(in_features, init, &mut *rng))
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!("Linear layer created: {} -> {}", in_features, out_features);
        Ok(Linear {
            neurons,
            in_features,
        })
    }

    /// Builds a layer from existing neurons, which must all take `in_features`
    /// inputs.
    pub fn from_neurons(in_features: usize, neurons: Vec<Neuron>) -> Result<Self, NeuroGradError> {
        if let Some(bad) = neurons.iter().find(|n| n.in_features() != in_features) {
            return Err(NeuroGradError::ShapeMismatch {
                expected: in_features,
                actual: bad.in_features(),
                operation: "Linear::from_neurons".to_string(),
            });
        }
        Ok(Linear {
            neurons,
            in_features,
        })
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub fn in_features(&self) -> usize {
        self.in_features
    }

    pub fn out_features(&self) -> usize {
        self.neurons.len()
    }
}

impl Module for Linear {
    type Output = Vec<Value>;

    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, NeuroGradError> {
        // Checked up front so a bad input builds nothing, even with no neurons.
        if input.len() != self.in_features {
            return Err(NeuroGradError::ShapeMismatch {
                expected: self.in_features,
                actual: input.len(),
                operation: "Linear::forward".to_string(),
            });
        }
        self.neurons.iter().map(|n| n.forward(input)).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        self.neurons
            .iter()
            .enumerate()
            .flat_map(|(i, neuron)| {
                neuron
                    .named_parameters()
                    .into_iter()
                    .map(move |(name, p)| (format!("neurons.{}.{}", i, name), p))
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "linear_test.rs"]
mod tests;
