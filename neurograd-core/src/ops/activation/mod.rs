//! Activation functions on single values.
//!
//! The sequence-aware wrappers live in [`crate::nn::functional`].

pub mod relu;
pub mod tanh;

pub use relu::relu_op;
pub use tanh::tanh_op;
