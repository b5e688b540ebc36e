use crate::graph::node::INNER_CAPACITY;
use ahash::RandomState;
use indexmap::IndexMap;
use std::hash::Hash;

/// Adjacency of one node in an undirected graph.
///
/// Undirected edges have no direction, so a single map from neighbor to edge value
/// serves as predecessors, successors and adjacent nodes at once.
#[derive(Debug, Clone)]
pub(crate) struct UndirectedConnections<N, V> {
    adjacent_node_values: IndexMap<N, V, RandomState>,
}

impl<N, V> UndirectedConnections<N, V>
where
    N: Hash + Eq,
{
    pub(crate) fn new() -> Self {
        Self {
            adjacent_node_values: IndexMap::with_capacity_and_hasher(
                INNER_CAPACITY,
                RandomState::new(),
            ),
        }
    }

    pub(crate) fn entries(&self) -> &IndexMap<N, V, RandomState> {
        &self.adjacent_node_values
    }

    pub(crate) fn value(&self, node: &N) -> Option<&V> {
        self.adjacent_node_values.get(node)
    }

    pub(crate) fn add_successor(&mut self, node: N, value: V) -> Option<V> {
        self.adjacent_node_values.insert(node, value)
    }

    pub(crate) fn remove_successor(&mut self, node: &N) -> Option<V> {
        self.adjacent_node_values.shift_remove(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_map_for_both_sides() {
        let mut c = UndirectedConnections::new();
        assert_eq!(c.add_successor('b', 1), None);
        assert_eq!(c.add_successor('b', 2), Some(1));
        assert_eq!(c.value(&'b'), Some(&2));
        assert_eq!(c.remove_successor(&'b'), Some(2));
        assert_eq!(c.remove_successor(&'b'), None);
        assert!(c.entries().is_empty());
    }
}
