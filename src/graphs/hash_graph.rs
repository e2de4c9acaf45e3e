use std::hash::Hash;

use ahash::{HashMap, HashMapExt, HashSet, HashSetExt};
use serde::{Deserialize, Serialize};

use super::{Cost, Graph};

/// Adjacency-map graph representation.
///
/// Vertices with no outgoing edges need no entry of their own; their
/// neighborhood is empty.
#[derive(Clone, Serialize, Deserialize)]
pub struct HashGraph<V: Eq + Hash> {
    out_edges: HashMap<V, HashMap<V, Cost>>,
}

impl<V: Eq + Hash + Clone> Default for HashGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Eq + Hash + Clone> HashGraph<V> {
    pub fn new() -> HashGraph<V> {
        HashGraph {
            out_edges: HashMap::new(),
        }
    }

    pub fn from_edges(edges: &[(V, V, Cost)]) -> HashGraph<V> {
        let mut graph = HashGraph::new();

        edges.iter().for_each(|(tail, head, cost)| {
            graph.add_edge(tail.clone(), head.clone(), *cost);
        });

        graph
    }

    /// Adds the edge, keeping the cheaper cost if the edge already exists.
    pub fn add_edge(&mut self, tail: V, head: V, cost: Cost) {
        let entry = self
            .out_edges
            .entry(tail)
            .or_default()
            .entry(head)
            .or_insert(cost);
        if cost < *entry {
            *entry = cost;
        }
    }

    /// All vertices that appear as tail or head of some edge.
    pub fn vertices(&self) -> Vec<V> {
        let mut vertices = HashSet::new();

        for (tail, heads) in self.out_edges.iter() {
            vertices.insert(tail.clone());
            for head in heads.keys() {
                vertices.insert(head.clone());
            }
        }

        vertices.into_iter().collect()
    }

    pub fn number_of_edges(&self) -> usize {
        self.out_edges.values().map(HashMap::len).sum()
    }
}

impl<V: Eq + Hash + Clone + Send + Sync> Graph<V> for HashGraph<V> {
    fn neighbors(&self, vertex: &V) -> Box<dyn Iterator<Item = V> + '_> {
        Box::new(
            self.out_edges
                .get(vertex)
                .into_iter()
                .flat_map(|heads| heads.keys().cloned()),
        )
    }

    fn edge_cost(&self, tail: &V, head: &V) -> Cost {
        *self
            .out_edges
            .get(tail)
            .and_then(|heads| heads.get(head))
            .expect("edge cost queried for a pair that is not an edge")
    }
}
