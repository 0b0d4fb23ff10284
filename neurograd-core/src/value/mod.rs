//! # Scalar Node (`Value`)
//!
//! A [`Value`] is a cheap, clonable handle to one node of the computation graph:
//! a scalar, its accumulated gradient, the nodes it was derived from and the
//! rule that pushes its gradient back into them.
//!
//! Cloning a `Value` clones the handle, not the node. Two handles compare equal
//! only when they point at the same node, whatever their `data`.

use crate::autograd::BackwardOp;
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

pub mod autograd_methods;
pub mod debug;
pub mod traits;

/// Internal state of a graph node.
pub(crate) struct ValueData {
    pub(crate) data: f64,
    pub(crate) grad: f64,
    /// Nodes this one was computed from, in operand order.
    pub(crate) inputs: Vec<Value>,
    /// Local gradient rule and diagnostic tag of the producing operation.
    pub(crate) op: BackwardOp,
}

// Releasing the last handle to a long expression would otherwise recurse once
// per level of the graph. Unwind uniquely owned inputs iteratively instead.
impl Drop for ValueData {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.inputs);
        while let Some(value) = pending.pop() {
            if let Ok(cell) = Rc::try_unwrap(value.node) {
                let mut data = cell.into_inner();
                pending.append(&mut data.inputs);
            }
        }
    }
}

/// Shared handle to a scalar node of the computation graph.
#[derive(Clone)]
pub struct Value {
    pub(crate) node: Rc<RefCell<ValueData>>,
}

/// Identity of a graph node, stable for as long as any handle to it is alive.
///
/// Used as the key of visited-sets and per-parameter optimizer state, never the
/// node's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl Value {
    /// Creates a leaf node (no inputs) holding `data`, with a zero gradient.
    pub fn new(data: f64) -> Self {
        Self::from_op(data, Vec::new(), BackwardOp::Leaf)
    }

    /// Creates a node produced by `op` applied to `inputs`.
    pub(crate) fn from_op(data: f64, inputs: Vec<Value>, op: BackwardOp) -> Self {
        Value {
            node: Rc::new(RefCell::new(ValueData {
                data,
                grad: 0.0,
                inputs,
                op,
            })),
        }
    }

    pub(crate) fn read_data(&self) -> Ref<'_, ValueData> {
        self.node.borrow()
    }

    pub(crate) fn write_data(&self) -> RefMut<'_, ValueData> {
        self.node.borrow_mut()
    }

    /// Current forward value.
    pub fn data(&self) -> f64 {
        self.read_data().data
    }

    /// Overwrites the forward value. Nodes already computed from this one keep
    /// their old value until the expression is rebuilt.
    pub fn set_data(&self, data: f64) {
        self.write_data().data = data;
    }

    /// Accumulated gradient of the last backward root with respect to this node.
    pub fn grad(&self) -> f64 {
        self.read_data().grad
    }

    pub fn set_grad(&self, grad: f64) {
        self.write_data().grad = grad;
    }

    /// Operation that produced this node ([`BackwardOp::Leaf`] for leaves).
    pub fn op(&self) -> BackwardOp {
        self.read_data().op
    }

    /// Handles to the nodes this one was computed from.
    pub fn inputs(&self) -> Vec<Value> {
        self.read_data().inputs.clone()
    }

    /// `true` for constants and trainable parameters.
    pub fn is_leaf(&self) -> bool {
        self.read_data().inputs.is_empty()
    }

    pub fn id(&self) -> NodeId {
        NodeId(Rc::as_ptr(&self.node) as *const () as usize)
    }
}

/// Lifts a slice of floats into fresh leaf values, preserving order.
pub fn values(data: &[f64]) -> Vec<Value> {
    data.iter().copied().map(Value::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_defaults() {
        let v = Value::new(3.5);
        assert_eq!(v.data(), 3.5);
        assert_eq!(v.grad(), 0.0);
        assert!(v.is_leaf());
        assert_eq!(v.op(), BackwardOp::Leaf);
        assert!(v.inputs().is_empty());
    }

    #[test]
    fn test_clone_shares_node() {
        let a = Value::new(1.0);
        let b = a.clone();
        b.set_data(4.0);
        b.set_grad(2.0);
        assert_eq!(a.data(), 4.0);
        assert_eq!(a.grad(), 2.0);
        assert_eq!(a.id(), b.id());
    }

    #[test]
    fn test_identity_not_value() {
        let a = Value::new(1.0);
        let b = Value::new(1.0);
        assert_ne!(a.id(), b.id());
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn test_values_lifts_in_order() {
        let xs = values(&[1.0, -2.0, 0.5]);
        let data: Vec<f64> = xs.iter().map(Value::data).collect();
        assert_eq!(data, vec![1.0, -2.0, 0.5]);
        assert!(xs.iter().all(Value::is_leaf));
    }
}
