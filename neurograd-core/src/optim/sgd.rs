use crate::error::NeuroGradError;
use crate::optim::optimizer_trait::Optimizer;
use crate::optim::param_group::ParamGroup;
use crate::value::Value;

/// Implements plain Stochastic Gradient Descent: `data -= lr * grad`.
#[derive(Debug)]
pub struct SgdOptimizer {
    param_group: ParamGroup,
}

impl SgdOptimizer {
    /// Creates a new `SgdOptimizer` over `params`.
    ///
    /// # Errors
    /// `ConfigurationError` for a negative or NaN learning rate.
    pub fn new(params: impl IntoIterator<Item = Value>, lr: f64) -> Result<Self, NeuroGradError> {
        Ok(SgdOptimizer {
            param_group: ParamGroup::new(params, lr, "SgdOptimizer")?,
        })
    }
}

impl Optimizer for SgdOptimizer {
    fn step(&mut self) -> Result<(), NeuroGradError> {
        let lr = self.param_group.lr();
        for param in &self.param_group.params {
            let mut node = param.write_data();
            node.data -= lr * node.grad;
        }
        Ok(())
    }

    fn parameters(&self) -> &[Value] {
        &self.param_group.params
    }

    fn lr(&self) -> f64 {
        self.param_group.lr()
    }

    fn set_lr(&mut self, lr: f64) -> Result<(), NeuroGradError> {
        self.param_group.set_lr(lr, "SgdOptimizer")
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
