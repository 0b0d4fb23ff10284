use crate::error::NeuroGradError;
use crate::nn::parameter::dedup_parameters;
use crate::value::Value;

/// The base trait for all neural network modules (neurons, layers, containers).
///
/// A module owns trainable parameter [`Value`]s and maps a sequence of input
/// values to `Self::Output`. Parameter discovery is explicit: every module
/// lists its own parameters and those of its children in
/// [`named_parameters`](Module::named_parameters), in declaration order.
pub trait Module: std::fmt::Debug {
    /// What a forward pass produces: a single value for a neuron, a sequence for
    /// layers.
    type Output;

    /// Performs a forward pass, building a fresh expression over `input`.
    ///
    /// # Errors
    /// Returns `NeuroGradError::ShapeMismatch` if `input` does not have the
    /// length the module expects. Nothing is built in that case.
    fn forward(&self, input: &[Value]) -> Result<Self::Output, NeuroGradError>;

    /// Returns every parameter owned directly or through children, with a
    /// hierarchical name (`"neurons.0.w1"`), in declaration order.
    fn named_parameters(&self) -> Vec<(String, Value)>;

    /// Returns every parameter once, in declaration order.
    ///
    /// A node reachable under several names (a shared parameter) is kept at its
    /// first position only. Uniqueness is by identity, never by value.
    fn parameters(&self) -> Vec<Value> {
        let (unique, _) = dedup_parameters(self.named_parameters().into_iter().map(|(_, p)| p));
        unique
    }

    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }

    /// Resets the gradient of every parameter to zero.
    fn zero_grad(&self) {
        for param in self.parameters() {
            param.zero_grad();
        }
    }
}
