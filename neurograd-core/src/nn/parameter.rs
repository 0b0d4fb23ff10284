use crate::value::{NodeId, Value};
use std::collections::HashSet;

/// Keeps the first occurrence of every node, by identity, preserving order.
///
/// Returns the unique parameters and how many duplicates were dropped.
pub fn dedup_parameters(params: impl IntoIterator<Item = Value>) -> (Vec<Value>, usize) {
    let mut seen: HashSet<NodeId> = HashSet::new();
    let mut unique = Vec::new();
    let mut duplicates = 0;
    for param in params {
        if seen.insert(param.id()) {
            unique.push(param);
        } else {
            duplicates += 1;
        }
    }
    (unique, duplicates)
}
