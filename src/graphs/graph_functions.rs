use std::fmt::Debug;
use std::hash::Hash;

use ahash::{HashSet, HashSetExt};
use indicatif::ParallelProgressIterator;
use itertools::Itertools;
use rand::prelude::*;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::{hash_graph::HashGraph, path::Path, Cost, Graph};

/// A source/target pair together with the independently computed cost of a
/// shortest path between them, if there exists one.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ShortestPathTestCase<V> {
    pub source: V,
    pub target: V,
    pub cost: Option<Cost>,
}

/// Check if a path is correct for a given source/target pair.
pub fn validate_path<V>(
    graph: &dyn Graph<V>,
    source: &V,
    target: &V,
    path: &Path<V>,
) -> Result<(), String>
where
    V: Eq + Hash + Clone + Debug,
{
    if path.vertices.first() != Some(source) {
        return Err("first vertex of path is not the source".to_string());
    }
    if path.vertices.last() != Some(target) {
        return Err("last vertex of path is not the target".to_string());
    }

    // Check if there is an edge between consecutive path vertices, and sum
    // up the true cost along the way.
    let mut true_cost = 0.0;
    for (tail, head) in path.vertices.iter().tuple_windows() {
        if !graph.neighbors(tail).any(|neighbor| &neighbor == head) {
            return Err(format!("no edge between {:?} and {:?} found", tail, head));
        }
        true_cost += graph.edge_cost(tail, head);
    }

    if (true_cost - path.cost).abs() > 1e-9 {
        return Err(format!(
            "wrong path cost: stated {}, edges sum to {}",
            path.cost, true_cost
        ));
    }

    Ok(())
}

/// Minimum cost over all simple paths from `source` to `target`, found by
/// exhaustive enumeration. Only feasible on small graphs; used as an
/// independent oracle for the search implementations.
pub fn brute_force_shortest_path_cost<V>(
    graph: &dyn Graph<V>,
    source: &V,
    target: &V,
) -> Option<Cost>
where
    V: Eq + Hash + Clone,
{
    let mut visited = HashSet::new();
    visited.insert(source.clone());

    let mut best = None;
    descend(graph, source, target, 0.0, &mut visited, &mut best);

    best
}

fn descend<V>(
    graph: &dyn Graph<V>,
    current: &V,
    target: &V,
    cost_so_far: Cost,
    visited: &mut HashSet<V>,
    best: &mut Option<Cost>,
) where
    V: Eq + Hash + Clone,
{
    if current == target {
        if best.map_or(true, |best_cost| cost_so_far < best_cost) {
            *best = Some(cost_so_far);
        }
        return;
    }

    for neighbor in graph.neighbors(current) {
        if visited.contains(&neighbor) {
            continue;
        }

        let cost = cost_so_far + graph.edge_cost(current, &neighbor);
        visited.insert(neighbor.clone());
        descend(graph, &neighbor, target, cost, visited, best);
        visited.remove(&neighbor);
    }
}

/// Random directed graph over the vertices `0..number_of_vertices`, without
/// self loops. Parallel edges keep the cheaper cost.
pub fn random_graph<R: Rng>(
    number_of_vertices: u32,
    number_of_edges: u32,
    max_cost: Cost,
    rng: &mut R,
) -> HashGraph<u32> {
    assert!(number_of_vertices >= 2);

    let mut graph = HashGraph::new();

    for _ in 0..number_of_edges {
        let tail = rng.gen_range(0..number_of_vertices);
        let mut head = rng.gen_range(0..number_of_vertices);
        while head == tail {
            head = rng.gen_range(0..number_of_vertices);
        }
        graph.add_edge(tail, head, rng.gen_range(0.0..max_cost));
    }

    graph
}

/// Random source/target pairs with brute-forced shortest-path costs.
pub fn random_test_cases(
    graph: &HashGraph<u32>,
    number_of_test_cases: u32,
) -> Vec<ShortestPathTestCase<u32>> {
    let vertices = graph.vertices();

    (0..number_of_test_cases)
        .into_par_iter()
        .progress()
        .map_init(rand::thread_rng, |rng, _| {
            let source = *vertices.choose(rng).unwrap();
            let target = *vertices.choose(rng).unwrap();
            let cost = brute_force_shortest_path_cost(graph, &source, &target);

            ShortestPathTestCase {
                source,
                target,
                cost,
            }
        })
        .collect()
}
