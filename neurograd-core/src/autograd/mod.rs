//! # Automatic Differentiation
//!
//! Graph machinery behind [`Value::backward`](crate::Value::backward):
//!
//! - [`backward_op`]: the per-node local gradient rule ([`BackwardOp`]).
//! - [`graph`]: topological ordering of the graph, plus tracing and DOT export
//!   for inspection.
//! - [`grad_check`]: finite-difference verification of analytic gradients.

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward_op::BackwardOp;
pub use grad_check::{check_grad, GradCheckError};
pub use graph::{to_dot, topological_sort, trace};
