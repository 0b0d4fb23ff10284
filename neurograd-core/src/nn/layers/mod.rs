pub mod activation;
pub mod linear;
pub mod neuron;

pub use activation::{ReLU, Tanh};
pub use linear::Linear;
pub use neuron::Neuron;
