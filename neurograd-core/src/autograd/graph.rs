use crate::value::{NodeId, Value};
use std::collections::{HashMap, HashSet};
use std::fmt::Write;

/// Builds a topological order of the graph reachable from `root`.
///
/// Depth-first over `inputs`, visiting each node once (keyed by identity) and
/// appending it only after all of its inputs: every node appears after
/// everything it depends on, and `root` comes last.
///
/// The traversal keeps its own stack, so graph depth is bounded by memory rather
/// than by the thread's call stack.
pub fn topological_sort(root: &Value) -> Vec<Value> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted_list: Vec<Value> = Vec::new();
    // (node, inputs already scheduled)
    let mut stack: Vec<(Value, bool)> = vec![(root.clone(), false)];

    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            sorted_list.push(node);
            continue;
        }
        if !visited.insert(node.id()) {
            continue;
        }
        let inputs = node.inputs();
        stack.push((node, true));
        // Reversed so the first operand is explored first.
        for input in inputs.into_iter().rev() {
            if !visited.contains(&input.id()) {
                stack.push((input, false));
            }
        }
    }
    sorted_list
}

/// Collects every node reachable from `root` and every `(input, consumer)` edge.
///
/// Nodes come in topological order. An operand used twice by the same node
/// (`x * x`) yields a single edge.
pub fn trace(root: &Value) -> (Vec<Value>, Vec<(Value, Value)>) {
    let nodes = topological_sort(root);
    let mut seen: HashSet<(NodeId, NodeId)> = HashSet::new();
    let mut edges = Vec::new();
    for node in &nodes {
        for input in node.inputs() {
            if seen.insert((input.id(), node.id())) {
                edges.push((input, node.clone()));
            }
        }
    }
    (nodes, edges)
}

/// Renders the graph reachable from `root` as Graphviz DOT text.
///
/// Each node is a record showing its data and gradient; each non-leaf node gets
/// an extra operation node feeding it. Node names follow topological order, so
/// the output is deterministic for a given expression.
pub fn to_dot(root: &Value) -> String {
    let (nodes, edges) = trace(root);
    let names: HashMap<NodeId, String> = nodes
        .iter()
        .enumerate()
        .map(|(i, node)| (node.id(), format!("n{}", i)))
        .collect();

    let mut dot = String::from("digraph G {\n  rankdir=LR;\n");
    for node in &nodes {
        let name = &names[&node.id()];
        // Writing into a String cannot fail.
        let _ = writeln!(
            dot,
            "  {} [label=\"{{ data {:.4} | grad {:.4} }}\", shape=record];",
            name,
            node.data(),
            node.grad()
        );
        if !node.is_leaf() {
            let _ = writeln!(dot, "  {}_op [label=\"{}\"];", name, node.op());
            let _ = writeln!(dot, "  {}_op -> {};", name, name);
        }
    }
    for (input, consumer) in &edges {
        let _ = writeln!(
            dot,
            "  {} -> {}_op;",
            names[&input.id()],
            names[&consumer.id()]
        );
    }
    dot.push_str("}\n");
    dot
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
