use crate::error::NeuroGradError;
use crate::nn::layers::{Linear, Tanh};
use crate::nn::module::Module;
use crate::value::Value;
use rand::Rng;

type Layer = Box<dyn Module<Output = Vec<Value>>>;

/// Chains layers: the output of each child is the input of the next.
#[derive(Debug, Default)]
pub struct Sequential {
    modules: Vec<(String, Layer)>,
}

impl Sequential {
    pub fn new() -> Self {
        Sequential {
            modules: Vec::new(),
        }
    }

    /// Appends `module` under `name`. Names prefix the child's parameter names.
    pub fn add_module(&mut self, name: &str, module: Layer) {
        if self.modules.iter().any(|(existing, _)| existing == name) {
            log::warn!(
                "Sequential already holds a module named '{}'; parameter names will collide",
                name
            );
        }
        self.modules.push((name.to_string(), module));
    }

    /// Appends `module` named after its position.
    pub fn push(&mut self, module: Layer) {
        let name = self.modules.len().to_string();
        self.add_module(&name, module);
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn modules_list(&self) -> impl Iterator<Item = (&str, &dyn Module<Output = Vec<Value>>)> {
        self.modules
            .iter()
            .map(|(name, module)| (name.as_str(), module.as_ref()))
    }
}

impl Module for Sequential {
    type Output = Vec<Value>;

    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, NeuroGradError> {
        let mut current = input.to_vec();
        for (_, module) in &self.modules {
            current = module.forward(&current)?;
        }
        Ok(current)
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        let mut params = Vec::new();
        for (name, module) in &self.modules {
            for (param_name, param) in module.named_parameters() {
                params.push((format!("{}.{}", name, param_name), param));
            }
        }
        params
    }
}

/// Builds a multi-layer perceptron: a `Linear` layer between every pair of
/// consecutive sizes, with `Tanh` after each one except the last.
///
/// `mlp(&[2, 4, 1], rng)` maps 2 inputs through 4 hidden units to 1 output.
///
/// # Errors
/// `ConfigurationError` if fewer than two sizes are given.
pub fn mlp<R: Rng + ?Sized>(layer_sizes: &[usize], rng: &mut R) -> Result<Sequential, NeuroGradError> {
    if layer_sizes.len() < 2 {
        return Err(NeuroGradError::ConfigurationError(format!(
            "mlp needs at least an input and an output size, got {:?}",
            layer_sizes
        )));
    }
    let mut model = Sequential::new();
    let last = layer_sizes.len() - 2;
    for (i, pair) in layer_sizes.windows(2).enumerate() {
        model.push(Box::new(Linear::with_rng(pair[0], pair[1], &mut *rng)?));
        if i < last {
            model.push(Box::new(Tanh));
        }
    }
    log::debug!("Built mlp {:?} with {} parameters", layer_sizes, model.num_parameters());
    Ok(model)
}

#[cfg(test)]
#[path = "sequential_test.rs"]
mod tests;
