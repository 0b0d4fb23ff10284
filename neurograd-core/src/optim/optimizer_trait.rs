use crate::error::NeuroGradError;
use crate::value::Value;

/// Trait defining the common interface for all optimizers.
///
/// Optimizers are responsible for updating model parameters based on their gradients.
pub trait Optimizer {
    /// Performs a single optimization step, reading every parameter's `grad`
    /// and updating its `data` in place.
    fn step(&mut self) -> Result<(), NeuroGradError>;

    /// Clears the gradients of all parameters managed by the optimizer.
    ///
    /// Call it before each backward pass unless gradients should accumulate
    /// across passes.
    fn zero_grad(&mut self) {
        for param in self.parameters() {
            param.zero_grad();
        }
    }

    /// Parameters captured at construction, in the order they were given and
    /// without duplicates.
    fn parameters(&self) -> &[Value];

    fn lr(&self) -> f64;

    /// Changes the learning rate for subsequent steps.
    ///
    /// # Errors
    /// `ConfigurationError` for a negative or NaN rate. The previous rate is kept.
    fn set_lr(&mut self, lr: f64) -> Result<(), NeuroGradError>;
}
