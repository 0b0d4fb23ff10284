// src/value/debug.rs
use crate::autograd::BackwardOp;
use crate::value::Value;
use std::fmt;

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.node.try_borrow() {
            Ok(guard) => write!(
                f,
                "Value(data={}, grad={}, op={}, inputs={})",
                guard.data,
                guard.grad,
                guard.op,
                guard.inputs.len()
            ),
            // Only reachable while the node is mutably borrowed
            Err(_) => write!(f, "Value(<borrowed>)"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        match guard.op {
            BackwardOp::Leaf => write!(f, "Value(data={})", guard.data),
            op => write!(f, "Value(data={}, op={})", guard.data, op),
        }
    }
}
