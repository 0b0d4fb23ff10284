//! # Differentiable Operations (`ops`)
//!
//! Every operation is an `xxx_op` function that computes the forward value and
//! records a new node whose [`BackwardOp`](crate::autograd::BackwardOp) knows the
//! analytic local derivative. Operations never touch the `data` or `grad` of
//! existing nodes; they only allocate new ones, which keeps the graph acyclic.
//!
//! - [`arithmetic`]: `+ - * /`, negation and constant powers, with operator
//!   overloads over `Value`, `&Value` and `f64`.
//! - [`math_elem`]: element functions (`log`).
//! - [`activation`]: `tanh` and `relu`.

pub mod activation;
pub mod arithmetic;
pub mod math_elem;

pub use activation::{relu_op, tanh_op};
pub use arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op};
pub use math_elem::log_op;
