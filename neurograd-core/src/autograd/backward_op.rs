use crate::value::Value;
use std::fmt;

/// Local gradient rule of a graph node, tagged by the operation that produced it.
///
/// Each non-leaf node stores one of these next to its inputs. During the backward
/// pass the rule receives the node's own (already final) gradient and adds its
/// share into the gradient of every input.
///
/// Subtraction, negation and division have no variant of their own: they are
/// built from `Add`, `Mul` and `Pow` and inherit their rules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackwardOp {
    /// Constant or parameter. Nothing to propagate.
    Leaf,
    /// `c = a + b`
    Add,
    /// `c = a * b`
    Mul,
    /// `c = a ** exponent`, the exponent being a constant.
    Pow { exponent: f64 },
    /// `c = ln(a)`
    Log,
    /// `c = tanh(a)`
    Tanh,
    /// `c = max(a, 0)`
    Relu,
}

impl BackwardOp {
    /// Pushes `grad_output` (dR/dc) into the gradients of `inputs`.
    ///
    /// `output_data` is the forward value `c` of the node owning this rule.
    pub(crate) fn backward(&self, inputs: &[Value], output_data: f64, grad_output: f64) {
        match (self, inputs) {
            (BackwardOp::Leaf, []) => {}
            (BackwardOp::Add, [a, b]) => {
                a.acc_grad(grad_output);
                b.acc_grad(grad_output);
            }
            (BackwardOp::Mul, [a, b]) => {
                // Read both before writing: `a` and `b` may be the same node.
                let (a_data, b_data) = (a.data(), b.data());
                a.acc_grad(b_data * grad_output);
                b.acc_grad(a_data * grad_output);
            }
            (BackwardOp::Pow { exponent }, [a]) => {
                let local = exponent * a.data().powf(exponent - 1.0);
                a.acc_grad(local * grad_output);
            }
            (BackwardOp::Log, [a]) => {
                a.acc_grad(grad_output / a.data());
            }
            (BackwardOp::Tanh, [a]) => {
                a.acc_grad((1.0 - output_data * output_data) * grad_output);
            }
            (BackwardOp::Relu, [a]) => {
                let local = if a.data() > 0.0 { 1.0 } else { 0.0 };
                a.acc_grad(local * grad_output);
            }
            (op, inputs) => unreachable!("{op} node recorded {} inputs", inputs.len()),
        }
    }

    /// Number of inputs a node produced by this operation records.
    pub fn arity(&self) -> usize {
        match self {
            BackwardOp::Leaf => 0,
            BackwardOp::Add | BackwardOp::Mul => 2,
            BackwardOp::Pow { .. } | BackwardOp::Log | BackwardOp::Tanh | BackwardOp::Relu => 1,
        }
    }
}

impl fmt::Display for BackwardOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackwardOp::Leaf => write!(f, "leaf"),
            BackwardOp::Add => write!(f, "+"),
            BackwardOp::Mul => write!(f, "*"),
            BackwardOp::Pow { exponent } => write!(f, "**{}", exponent),
            BackwardOp::Log => write!(f, "log"),
            BackwardOp::Tanh => write!(f, "tanh"),
            BackwardOp::Relu => write!(f, "relu"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::BackwardOp;
    use crate::value::Value;

    #[test]
    fn test_mul_rule_with_aliased_operands() {
        let a = Value::new(3.0);
        BackwardOp::Mul.backward(&[a.clone(), a.clone()], 9.0, 1.0);
        assert_eq!(a.grad(), 6.0);
    }

    #[test]
    fn test_rules_accumulate() {
        let a = Value::new(2.0);
        a.set_grad(1.0);
        BackwardOp::Pow { exponent: 3.0 }.backward(&[a.clone()], 8.0, 0.5);
        assert_eq!(a.grad(), 1.0 + 3.0 * 4.0 * 0.5);
    }

    #[test]
    fn test_arity_and_tags() {
        assert_eq!(BackwardOp::Leaf.arity(), 0);
        assert_eq!(BackwardOp::Mul.arity(), 2);
        assert_eq!(BackwardOp::Relu.arity(), 1);
        assert_eq!(BackwardOp::Pow { exponent: -1.0 }.to_string(), "**-1");
        assert_eq!(BackwardOp::Tanh.to_string(), "tanh");
    }
}
