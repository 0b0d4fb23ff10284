use crate::autograd::graph::topological_sort;
use crate::value::Value;

impl Value {
    /// Adds `delta` to this node's gradient.
    ///
    /// Every backward rule goes through here: a node consumed by several
    /// downstream nodes receives the sum of all their contributions.
    pub(crate) fn acc_grad(&self, delta: f64) {
        self.write_data().grad += delta;
    }

    /// Resets this node's gradient to zero.
    pub fn zero_grad(&self) {
        self.write_data().grad = 0.0;
    }

    /// Performs the backward pass starting from this node.
    ///
    /// Sorts the graph reachable from `self` topologically, seeds
    /// `self.grad = 1.0` and runs every node's local gradient rule from the root
    /// towards the leaves. Afterwards every reachable node holds
    /// `d(self)/d(node)`.
    ///
    /// Interior (non-leaf) gradients are reset before propagating, so they always
    /// describe this pass only. Leaf gradients are **not** reset: they accumulate
    /// across backward calls, which lets several losses sharing parameters add
    /// up. Call [`Value::zero_grad`] (or an optimizer's `zero_grad`) on the
    /// leaves before a pass that should start from scratch.
    ///
    /// The graph is left intact, so `backward` may be called again on the same
    /// root.
    pub fn backward(&self) {
        let order = topological_sort(self);
        log::debug!("backward: {} nodes reachable from root", order.len());

        for node in order.iter().filter(|node| !node.is_leaf()) {
            node.zero_grad();
        }
        self.set_grad(1.0);

        // Reverse post-order: every consumer runs before any of its inputs.
        for node in order.iter().rev() {
            let guard = node.read_data();
            guard.op.backward(&guard.inputs, guard.data, guard.grad);
        }
    }
}

#[cfg(test)]
#[path = "autograd_methods_test.rs"]
mod tests;
