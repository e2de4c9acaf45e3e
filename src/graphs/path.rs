use serde::{Deserialize, Serialize};

use super::Cost;

/// Represents a path in a graph.
///
/// This struct encapsulates the vertices that form a path in the graph and
/// the total cost associated with traversing this path.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Path<V> {
    pub vertices: Vec<V>,
    pub cost: Cost,
}
