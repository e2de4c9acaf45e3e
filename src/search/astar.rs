use std::hash::Hash;

use super::{astar_data::AstarData, CostHeuristic, PathSearch};
use crate::{
    graphs::{path::Path, Cost, Graph},
    queue::{indexed_queue::IndexedQueue, TieBreak},
};

pub struct AStar<V> {
    pub graph: Box<dyn Graph<V>>,
    pub heuristic: Box<dyn CostHeuristic<V>>,
}

impl<V> AStar<V> {
    pub fn new(graph: Box<dyn Graph<V>>, heuristic: Box<dyn CostHeuristic<V>>) -> AStar<V> {
        AStar { graph, heuristic }
    }
}

impl<V: Eq + Hash + Clone> PathSearch<V> for AStar<V> {
    fn shortest_path(&self, source: V, target: V) -> Option<Path<V>> {
        astar_single_pair(&*self.graph, &*self.heuristic, source, target)
    }

    fn shortest_path_cost(&self, source: V, target: V) -> Option<Cost> {
        astar_single_pair_cost(&*self.graph, &*self.heuristic, source, target)
    }
}

/// Best-first search from `source` to `target`, expanding vertices in order
/// of best-known cost plus heuristic estimate. Returns `None` if the target
/// is unreachable from the source.
pub fn astar_single_pair<V: Eq + Hash + Clone>(
    graph: &dyn Graph<V>,
    heuristic: &dyn CostHeuristic<V>,
    source: V,
    target: V,
) -> Option<Path<V>> {
    let mut data = AstarData::new(source.clone());
    let mut queue = IndexedQueue::new(TieBreak::LeastRecentFirst);

    queue.push(checked_estimate(heuristic, &source, &target), source);

    while let Some((_, current)) = queue.pop() {
        if current == target {
            return Some(data.into_path(current));
        }
        data.close(current.clone());

        let cost_current = data.cost(&current);
        for neighbor in graph.neighbors(&current) {
            if data.is_closed(&neighbor) {
                continue;
            }

            let alternative_cost = cost_current + checked_edge_cost(graph, &current, &neighbor);
            if alternative_cost < data.cost(&neighbor) {
                data.set_predecessor(neighbor.clone(), current.clone());
                data.set_cost(neighbor.clone(), alternative_cost);
                let estimate = checked_estimate(heuristic, &neighbor, &target);
                queue.push(alternative_cost + estimate, neighbor);
            }
        }
    }

    None
}

pub fn astar_single_pair_cost<V: Eq + Hash + Clone>(
    graph: &dyn Graph<V>,
    heuristic: &dyn CostHeuristic<V>,
    source: V,
    target: V,
) -> Option<Cost> {
    astar_single_pair(graph, heuristic, source, target).map(|path| path.cost)
}

// A negative or non-finite cost would silently produce a wrong but
// plausible-looking path, so reject it at first use.
fn checked_edge_cost<V>(graph: &dyn Graph<V>, tail: &V, head: &V) -> Cost {
    let cost = graph.edge_cost(tail, head);
    assert!(
        cost >= 0.0 && cost.is_finite(),
        "edge cost must be non-negative and finite, got {}",
        cost
    );
    cost
}

fn checked_estimate<V>(heuristic: &dyn CostHeuristic<V>, vertex: &V, target: &V) -> Cost {
    let estimate = heuristic.estimate(vertex, target);
    assert!(
        estimate >= 0.0 && estimate.is_finite(),
        "heuristic estimate must be non-negative and finite, got {}",
        estimate
    );
    estimate
}
