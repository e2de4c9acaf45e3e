use super::{Cost, Graph};

/// Graph access backed by plain functions, for callers that keep their
/// adjacency in some structure of their own (or none at all).
pub struct FnGraph<N, D> {
    neighbors: N,
    edge_cost: D,
}

impl<N, D> FnGraph<N, D> {
    pub fn new(neighbors: N, edge_cost: D) -> FnGraph<N, D> {
        FnGraph {
            neighbors,
            edge_cost,
        }
    }
}

impl<V: 'static, N, D> Graph<V> for FnGraph<N, D>
where
    N: Fn(&V) -> Vec<V> + Send + Sync,
    D: Fn(&V, &V) -> Cost + Send + Sync,
{
    fn neighbors(&self, vertex: &V) -> Box<dyn Iterator<Item = V> + '_> {
        Box::new((self.neighbors)(vertex).into_iter())
    }

    fn edge_cost(&self, tail: &V, head: &V) -> Cost {
        (self.edge_cost)(tail, head)
    }
}
