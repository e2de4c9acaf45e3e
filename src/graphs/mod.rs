pub mod fn_graph;
pub mod graph_functions;
pub mod hash_graph;
pub mod path;

pub type Cost = f64;

/// Access to a graph as the search engine sees it: a neighbor relation and an
/// edge-cost lookup. Nothing about the underlying representation leaks
/// through this trait.
pub trait Graph<V>: Send + Sync {
    fn neighbors(&self, vertex: &V) -> Box<dyn Iterator<Item = V> + '_>;

    /// Cost of the edge from `tail` to `head`. Only called for pairs the
    /// neighbor relation produced; querying a non-edge is a contract
    /// violation of the caller.
    fn edge_cost(&self, tail: &V, head: &V) -> Cost;
}
