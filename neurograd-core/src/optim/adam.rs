use crate::error::NeuroGradError;
use crate::optim::optimizer_trait::Optimizer;
use crate::optim::param_group::ParamGroup;
use crate::value::{NodeId, Value};
use std::collections::HashMap;

/// Hyper-parameters of [`AdamOptimizer`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AdamConfig {
    pub lr: f64,
    /// Decay rates of the first and second moment averages.
    pub betas: (f64, f64),
    /// Added to the denominator for numerical stability.
    pub eps: f64,
}

impl Default for AdamConfig {
    fn default() -> Self {
        AdamConfig {
            lr: 1e-3,
            betas: (0.9, 0.999),
            eps: 1e-8,
        }
    }
}

/// Represents the state for a single parameter in the Adam optimizer.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct AdamParamState {
    /// First moment (exponential moving average of gradients).
    pub m: f64,
    /// Second moment (exponential moving average of squared gradients).
    pub v: f64,
}

/// Adam optimizer.
///
/// Keeps bias-corrected running averages of each parameter's gradient and
/// squared gradient, keyed by node identity, and moves each parameter by
/// `lr * m_hat / (sqrt(v_hat) + eps)`.
#[derive(Debug)]
pub struct AdamOptimizer {
    param_group: ParamGroup,
    betas: (f64, f64),
    eps: f64,
    iterations: u64,
    state: HashMap<NodeId, AdamParamState>,
}

impl AdamOptimizer {
    /// Creates an Adam optimizer with the default betas and epsilon.
    pub fn new(params: impl IntoIterator<Item = Value>, lr: f64) -> Result<Self, NeuroGradError> {
        Self::with_config(
            params,
            AdamConfig {
                lr,
                ..AdamConfig::default()
            },
        )
    }

    /// # Errors
    /// `ConfigurationError` for a negative or NaN learning rate, betas outside
    /// `[0, 1)` or a non-positive epsilon.
    pub fn with_config(
        params: impl IntoIterator<Item = Value>,
        config: AdamConfig,
    ) -> Result<Self, NeuroGradError> {
        let (beta1, beta2) = config.betas;
        if !(0.0..1.0).contains(&beta1) {
            return Err(NeuroGradError::ConfigurationError(format!(
                "Beta1 must be in [0, 1), got {}",
                beta1
            )));
        }
        if !(0.0..1.0).contains(&beta2) {
            return Err(NeuroGradError::ConfigurationError(format!(
                "Beta2 must be in [0, 1), got {}",
                beta2
            )));
        }
        if config.eps.is_nan() || config.eps <= 0.0 {
            return Err(NeuroGradError::ConfigurationError(format!(
                "Epsilon must be positive, got {}",
                config.eps
            )));
        }
        Ok(AdamOptimizer {
            param_group: ParamGroup::new(params, config.lr, "AdamOptimizer")?,
            betas: config.betas,
            eps: config.eps,
            iterations: 0,
            state: HashMap::new(),
        })
    }

    /// Number of completed `step()` calls.
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Moment estimates for `param`, if it has been stepped.
    pub fn param_state(&self, param: &Value) -> Option<&AdamParamState> {
        self.state.get(&param.id())
    }
}

impl Optimizer for AdamOptimizer {
    fn step(&mut self) -> Result<(), NeuroGradError> {
        self.iterations += 1;
        let lr = self.param_group.lr();
        let (beta1, beta2) = self.betas;
        let t = i32::try_from(self.iterations).unwrap_or(i32::MAX);
        let bias_correction1 = 1.0 - beta1.powi(t);
        let bias_correction2 = 1.0 - beta2.powi(t);
        log::trace!(
            "Adam step {}: bias corrections ({}, {})",
            self.iterations,
            bias_correction1,
            bias_correction2
        );

        for param in &self.param_group.params {
            let mut node = param.write_data();
            let grad = node.grad;
            let state = self.state.entry(param.id()).or_default();
            state.m = beta1 * state.m + (1.0 - beta1) * grad;
            state.v = beta2 * state.v + (1.0 - beta2) * grad * grad;
            let m_hat = state.m / bias_correction1;
            let v_hat = state.v / bias_correction2;
            node.data -= lr * m_hat / (v_hat.sqrt() + self.eps);
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
        self.param_group.set_lr(lr, "AdamOptimizer")
    }
}

#[cfg(test)]
#[path = "adam_test.rs"]
mod tests;
