use std::hash::Hash;

use ahash::{HashMap, HashMapExt, HashSet, HashSetExt};

use crate::graphs::{path::Path, Cost};

/// Bookkeeping for a single search invocation. Constructed fresh per call,
/// consumed by path reconstruction; nothing survives across searches.
pub struct AstarData<V> {
    predecessors: HashMap<V, V>,
    costs: HashMap<V, Cost>,
    closed: HashSet<V>,
}

impl<V: Eq + Hash + Clone> AstarData<V> {
    pub fn new(source: V) -> AstarData<V> {
        let mut data = AstarData {
            predecessors: HashMap::new(),
            costs: HashMap::new(),
            closed: HashSet::new(),
        };

        data.costs.insert(source, 0.0);

        data
    }

    /// Best known cost from the source. Vertices without an entry have not
    /// been reached and compare as positive infinity.
    pub fn cost(&self, vertex: &V) -> Cost {
        self.costs.get(vertex).copied().unwrap_or(Cost::INFINITY)
    }

    pub fn set_cost(&mut self, vertex: V, cost: Cost) {
        self.costs.insert(vertex, cost);
    }

    pub fn set_predecessor(&mut self, vertex: V, predecessor: V) {
        self.predecessors.insert(vertex, predecessor);
    }

    pub fn close(&mut self, vertex: V) {
        self.closed.insert(vertex);
    }

    pub fn is_closed(&self, vertex: &V) -> bool {
        self.closed.contains(vertex)
    }

    /// Walks the predecessor tree backward from `target`, then reverses.
    /// Terminates because predecessors always point at vertices discovered
    /// strictly earlier in cost order.
    pub fn into_path(self, target: V) -> Path<V> {
        let cost = self.cost(&target);

        let mut vertices = vec![target.clone()];
        let mut current = target;
        while let Some(predecessor) = self.predecessors.get(&current) {
            current = predecessor.clone();
            vertices.push(current.clone());
        }
        vertices.reverse();

        Path { vertices, cost }
    }
}
