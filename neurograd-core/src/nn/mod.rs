// src/nn/mod.rs
// Neural network building blocks on top of the scalar engine.

pub mod functional;
pub mod init;
pub mod layers;
pub mod losses;
pub mod module; // Trait Module
pub mod parameter; // Identity-based parameter de-duplication

// Re-export common items
pub use init::Init;
pub use layers::{Linear, Neuron, ReLU, Tanh};
pub use losses::mse_loss;
pub use module::Module;
