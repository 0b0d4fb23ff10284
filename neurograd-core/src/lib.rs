//! # NeuroGrad Core
//!
//! A scalar reverse-mode automatic differentiation engine and the small neural
//! network layer built on top of it.
//!
//! Every arithmetic expression built from [`Value`]s records the graph it came
//! from. Calling [`Value::backward`] on an output walks that graph once in
//! reverse topological order and leaves `d(output)/d(node)` in the `grad` of
//! every node it reaches. [`nn::Module`]s compose values into neurons and
//! layers, and [`optim::Optimizer`]s update parameters from their gradients.
//!
//! ```
//! use neurograd_core::Value;
//!
//! let x = Value::new(2.0);
//! let y = &x * &x + 3.0;
//! y.backward();
//! assert_eq!(y.data(), 7.0);
//! assert_eq!(x.grad(), 4.0);
//! ```

pub mod autograd;
pub mod error;
pub mod model;
pub mod nn;
pub mod ops;
pub mod optim;
pub mod utils;
pub mod value;

pub use error::NeuroGradError;
pub use value::{values, NodeId, Value};
// Re-export traits required by the public operator surface
pub use num_traits;
