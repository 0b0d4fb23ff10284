// neurograd-core/src/optim/mod.rs

//! Optimizers for training neural networks.
//!
//! An optimizer captures a fixed list of parameter [`Value`](crate::Value)s at
//! construction and updates their `data` from their `grad` on every
//! [`step`](Optimizer::step).

pub mod adam;
pub mod optimizer_trait;
pub mod param_group;
pub mod sgd;

pub use adam::{AdamConfig, AdamOptimizer, AdamParamState};
pub use optimizer_trait::Optimizer;
pub use param_group::ParamGroup;
pub use sgd::SgdOptimizer;
