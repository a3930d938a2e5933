use std::{cmp::Reverse, collections::BinaryHeap};

use crate::{
    error::EvalError,
    simulation::{ProviderKey, ProviderTable},
};

/// The order gates are settled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EvalOrder {
    /// Settle gates by ascending id; a reference to a gate that has not settled yet is treated as dangling.
    #[default]
    AscendingId,
    /// Settle every gate after the gates it reads, breaking ties by ascending id. Fails on cycles.
    Topological,
}

pub(crate) fn evaluation_order(table: &ProviderTable, order: EvalOrder) -> Result<Vec<ProviderKey>, Vec<EvalError>> {
    match order {
        EvalOrder::AscendingId => Ok(table.gates.clone()),
        EvalOrder::Topological => topological(table),
    }
}

// Kahn's algorithm over gate positions in ascending id order
fn topological(table: &ProviderTable) -> Result<Vec<ProviderKey>, Vec<EvalError>> {
    let gates = &table.gates;
    let mut pending = vec![0usize; gates.len()];
    let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); gates.len()];

    for (position, key) in gates.iter().enumerate() {
        let Some((kind, references)) = table.gate_kind(*key) else { continue };
        for reference in &references[..kind.arity()] {
            // inputs and dangling references never hold a gate back
            let Some(dependency) = table.lookup(*reference) else { continue };
            if let Some(dependency_position) = gates.iter().position(|gate| *gate == dependency) {
                pending[position] += 1;
                dependents[dependency_position].push(position);
            }
        }
    }

    let mut ready: BinaryHeap<Reverse<usize>> = pending.iter().enumerate().filter(|(_, count)| **count == 0).map(|(position, _)| Reverse(position)).collect();
    let mut sorted = Vec::with_capacity(gates.len());
    while let Some(Reverse(position)) = ready.pop() {
        sorted.push(gates[position]);
        for &dependent in &dependents[position] {
            pending[dependent] -= 1;
            if pending[dependent] == 0 {
                ready.push(Reverse(dependent));
            }
        }
    }

    if sorted.len() == gates.len() {
        Ok(sorted)
    } else {
        // every gate that could not be ordered: the cycles themselves and whatever depends on them
        let ids = pending.iter().zip(gates).filter(|(count, _)| **count > 0).map(|(_, key)| table.providers[*key].id).collect();
        Err(vec![EvalError::CyclicDependency { ids }])
    }
}
