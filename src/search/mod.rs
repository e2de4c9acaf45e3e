use crate::graphs::{path::Path, Cost};

pub mod astar;
pub mod astar_data;

/// Estimate of the remaining cost from a vertex to the target. The search is
/// only guaranteed to return minimum-cost paths if the estimate never
/// overestimates the true remaining cost.
pub trait CostHeuristic<V>: Send + Sync {
    /// Defaults to zero, which turns the search into uniform-cost
    /// (Dijkstra) behavior.
    fn estimate(&self, _vertex: &V, _target: &V) -> Cost {
        0.0
    }
}

pub struct ZeroHeuristic {}

impl<V> CostHeuristic<V> for ZeroHeuristic {}

/// Heuristic backed by a plain function.
pub struct FnHeuristic<F>(pub F);

impl<V, F> CostHeuristic<V> for FnHeuristic<F>
where
    F: Fn(&V, &V) -> Cost + Send + Sync,
{
    fn estimate(&self, vertex: &V, target: &V) -> Cost {
        (self.0)(vertex, target)
    }
}

pub trait PathSearch<V>: Send + Sync {
    fn shortest_path(&self, source: V, target: V) -> Option<Path<V>>;

    fn shortest_path_cost(&self, source: V, target: V) -> Option<Cost>;
}
