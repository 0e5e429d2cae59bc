//! Module ordering
//!
//! Kahn's algorithm over internal edges. Ties are broken by declaration
//! position, so the same graph always yields the same order.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};

use crate::domain::entities::ModuleGraph;
use crate::domain::value_objects::{DependencyKind, ModuleName};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopologicalOrder {
    /// Dependencies before dependents.
    pub sorted: Vec<ModuleName>,
    /// Modules on a cycle, each with the cycle path starting at itself.
    pub cycles: Vec<(ModuleName, Vec<ModuleName>)>,
    /// Modules not on a cycle that depend on one.
    pub blocked: Vec<ModuleName>,
}

impl TopologicalOrder {
    pub fn is_acyclic(&self) -> bool {
        self.cycles.is_empty()
    }
}

/// Orders the graph over the internal edges whose kind passes `include`.
///
/// Edges to modules outside the graph are ignored here; binding reports them.
pub fn topological_order<F>(graph: &ModuleGraph, include: F) -> TopologicalOrder
where
    F: Fn(DependencyKind) -> bool,
{
    let modules: Vec<_> = graph.iter().collect();
    let n = modules.len();

    // edges[i] = positions module i depends on
    let mut edges: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); n];
    for (idx, module) in modules.iter().enumerate() {
        let mut seen = HashSet::new();
        for edge in module.dependencies.iter().filter(|e| include(e.kind)) {
            let Some(target) = edge.internal_target().and_then(|t| graph.position(t)) else {
                continue;
            };
            if seen.insert(target) {
                edges[idx].push(target);
                dependents[target].push(idx);
            }
        }
    }

    let mut in_degree: Vec<usize> = edges.iter().map(Vec::len).collect();
    let mut heap: BinaryHeap<Reverse<usize>> = (0..n)
        .filter(|&idx| in_degree[idx] == 0)
        .map(Reverse)
        .collect();

    let mut sorted = Vec::with_capacity(n);
    while let Some(Reverse(idx)) = heap.pop() {
        sorted.push(modules[idx].name.clone());
        for &dependent in &dependents[idx] {
            in_degree[dependent] -= 1;
            if in_degree[dependent] == 0 {
                heap.push(Reverse(dependent));
            }
        }
    }

    let remaining: HashSet<usize> = (0..n).filter(|&idx| in_degree[idx] > 0).collect();
    let mut cycles = Vec::new();
    let mut blocked = Vec::new();
    let mut leftover: Vec<usize> = remaining.iter().copied().collect();
    leftover.sort_unstable();
    for idx in leftover {
        let name = modules[idx].name.clone();
        match cycle_through(idx, &edges, &remaining) {
            Some(path) => {
                let cycle = path.into_iter().map(|i| modules[i].name.clone()).collect();
                cycles.push((name, cycle));
            }
            None => blocked.push(name),
        }
    }

    TopologicalOrder {
        sorted,
        cycles,
        blocked,
    }
}

/// Shortest path from `start` back to itself, restricted to `within`.
fn cycle_through(start: usize, edges: &[Vec<usize>], within: &HashSet<usize>) -> Option<Vec<usize>> {
    let mut previous: HashMap<usize, usize> = HashMap::new();
    let mut queue = VecDeque::from([start]);
    while let Some(current) = queue.pop_front() {
        for &next in &edges[current] {
            if !within.contains(&next) {
                continue;
            }
            if next == start {
                let mut path = vec![current];
                let mut node = current;
                while node != start {
                    node = previous[&node];
                    path.push(node);
                }
                path.reverse();
                return Some(path);
            }
            if let std::collections::hash_map::Entry::Vacant(slot) = previous.entry(next) {
                slot.insert(current);
                queue.push_back(next);
            }
        }
    }
    None
}

/// Order over export edges only; test-scoped loops are legal and ignored.
pub fn export_order(graph: &ModuleGraph) -> TopologicalOrder {
    topological_order(graph, |kind| kind.is_export())
}

/// Order in which modules are handed to the build executor.
///
/// Prefers an order where test-scoped dependencies are built first as well.
/// Modules caught in a test-scope loop fall back to export order.
pub fn execution_order(graph: &ModuleGraph) -> Vec<ModuleName> {
    let all = topological_order(graph, |_| true);
    let mut order = all.sorted;
    if order.len() == graph.len() {
        return order;
    }

    let placed: HashSet<ModuleName> = order.iter().cloned().collect();
    let exports = export_order(graph);
    order.extend(
        exports
            .sorted
            .into_iter()
            .chain(exports.cycles.into_iter().map(|(name, _)| name))
            .chain(exports.blocked)
            .filter(|name| !placed.contains(name)),
    );
    order
}
