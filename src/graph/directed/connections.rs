use crate::graph::node::INNER_CAPACITY;
use ahash::RandomState;
use indexmap::IndexMap;
use std::hash::Hash;

/// How a neighbor relates to the node owning a [DirectedConnections].
///
/// Only successor edges carry values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum NeighborRole<V> {
    PredecessorOnly,
    SuccessorOnly(V),
    Both(V),
}

impl<V> NeighborRole<V> {
    pub(crate) fn is_predecessor(&self) -> bool {
        matches!(self, Self::PredecessorOnly | Self::Both(_))
    }

    pub(crate) fn is_successor(&self) -> bool {
        matches!(self, Self::SuccessorOnly(_) | Self::Both(_))
    }

    pub(crate) fn successor_value(&self) -> Option<&V> {
        match self {
            Self::PredecessorOnly => None,
            Self::SuccessorOnly(v) | Self::Both(v) => Some(v),
        }
    }
}

/// Adjacency of one node in a directed graph.
///
/// Every neighbor occupies a single slot tagged with its [NeighborRole].
/// A self-loop is the owning node tagged `Both`.
/// Counters are maintained on every transition and never recomputed.
#[derive(Debug, Clone)]
pub(crate) struct DirectedConnections<N, V> {
    adjacent_node_values: IndexMap<N, NeighborRole<V>, RandomState>,
    predecessor_count: usize,
    successor_count: usize,
}

impl<N, V> DirectedConnections<N, V>
where
    N: Hash + Eq,
{
    pub(crate) fn new() -> Self {
        Self {
            adjacent_node_values: IndexMap::with_capacity_and_hasher(
                INNER_CAPACITY,
                RandomState::new(),
            ),
            predecessor_count: 0,
            successor_count: 0,
        }
    }

    pub(crate) fn entries(&self) -> &IndexMap<N, NeighborRole<V>, RandomState> {
        &self.adjacent_node_values
    }

    pub(crate) fn predecessor_count(&self) -> usize {
        self.predecessor_count
    }

    pub(crate) fn successor_count(&self) -> usize {
        self.successor_count
    }

    pub(crate) fn value(&self, node: &N) -> Option<&V> {
        self.adjacent_node_values
            .get(node)
            .and_then(NeighborRole::successor_value)
    }

    pub(crate) fn add_predecessor(&mut self, node: N) {
        match self.adjacent_node_values.get_mut(&node) {
            None => {
                self.adjacent_node_values
                    .insert(node, NeighborRole::PredecessorOnly);
                self.predecessor_count += 1;
            }
            Some(role) => {
                let promoted = match std::mem::replace(role, NeighborRole::PredecessorOnly) {
                    NeighborRole::SuccessorOnly(v) => {
                        self.predecessor_count += 1;
                        NeighborRole::Both(v)
                    }
                    unchanged => unchanged,
                };
                *role = promoted;
            }
        }
        self.check_counts();
    }

    /// Returns the previous successor value.
    pub(crate) fn add_successor(&mut self, node: N, value: V) -> Option<V> {
        let res = match self.adjacent_node_values.get_mut(&node) {
            None => {
                self.adjacent_node_values
                    .insert(node, NeighborRole::SuccessorOnly(value));
                self.successor_count += 1;
                None
            }
            Some(role) => match std::mem::replace(role, NeighborRole::PredecessorOnly) {
                NeighborRole::PredecessorOnly => {
                    *role = NeighborRole::Both(value);
                    self.successor_count += 1;
                    None
                }
                NeighborRole::SuccessorOnly(prev) => {
                    *role = NeighborRole::SuccessorOnly(value);
                    Some(prev)
                }
                NeighborRole::Both(prev) => {
                    *role = NeighborRole::Both(value);
                    Some(prev)
                }
            },
        };
        self.check_counts();
        res
    }

    pub(crate) fn remove_predecessor(&mut self, node: &N) {
        let demoted = match self.adjacent_node_values.get_mut(node) {
            None => return,
            Some(role) => match std::mem::replace(role, NeighborRole::PredecessorOnly) {
                NeighborRole::PredecessorOnly => None,
                NeighborRole::Both(v) => {
                    *role = NeighborRole::SuccessorOnly(v);
                    Some(true)
                }
                succ @ NeighborRole::SuccessorOnly(_) => {
                    *role = succ;
                    Some(false)
                }
            },
        };
        match demoted {
            None => {
                self.adjacent_node_values.shift_remove(node);
                self.predecessor_count = decrement(self.predecessor_count, "predecessor");
            }
            Some(true) => {
                self.predecessor_count = decrement(self.predecessor_count, "predecessor");
            }
            Some(false) => {}
        }
    }

    /// Returns the value of the removed successor edge.
    pub(crate) fn remove_successor(&mut self, node: &N) -> Option<V> {
        let role = self.adjacent_node_values.get_mut(node)?;
        match std::mem::replace(role, NeighborRole::PredecessorOnly) {
            NeighborRole::PredecessorOnly => None,
            NeighborRole::Both(v) => {
                self.successor_count = decrement(self.successor_count, "successor");
                Some(v)
            }
            NeighborRole::SuccessorOnly(v) => {
                self.adjacent_node_values.shift_remove(node);
                self.successor_count = decrement(self.successor_count, "successor");
                Some(v)
            }
        }
    }

    fn check_counts(&self) {
        debug_assert!(self.predecessor_count <= self.adjacent_node_values.len());
        debug_assert!(self.successor_count <= self.adjacent_node_values.len());
    }
}

fn decrement(count: usize, what: &str) -> usize {
    match count.checked_sub(1) {
        Some(n) => n,
        None => panic!("{} count gone negative", what),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preds(c: &DirectedConnections<u8, &'static str>) -> Vec<u8> {
        c.entries()
            .iter()
            .filter(|(_, r)| r.is_predecessor())
            .map(|(n, _)| *n)
            .collect()
    }

    fn succs(c: &DirectedConnections<u8, &'static str>) -> Vec<u8> {
        c.entries()
            .iter()
            .filter(|(_, r)| r.is_successor())
            .map(|(n, _)| *n)
            .collect()
    }

    #[test]
    fn successor_then_predecessor_keeps_value() {
        let mut c = DirectedConnections::new();
        assert_eq!(c.add_successor(1, "x"), None);
        c.add_predecessor(1);
        assert_eq!(c.value(&1), Some(&"x"));
        assert_eq!(c.predecessor_count(), 1);
        assert_eq!(c.successor_count(), 1);
        assert_eq!(c.entries().len(), 1);
    }

    #[test]
    fn predecessor_then_successor() {
        let mut c = DirectedConnections::new();
        c.add_predecessor(1);
        assert_eq!(c.value(&1), None);
        assert_eq!(c.add_successor(1, "x"), None);
        assert_eq!(c.value(&1), Some(&"x"));
        assert_eq!(preds(&c), vec![1]);
        assert_eq!(succs(&c), vec![1]);
    }

    #[test]
    fn overwrite_returns_previous() {
        let mut c = DirectedConnections::new();
        c.add_successor(1, "x");
        assert_eq!(c.add_successor(1, "y"), Some("x"));
        assert_eq!(c.successor_count(), 1);
        c.add_predecessor(1);
        assert_eq!(c.add_successor(1, "z"), Some("y"));
        assert_eq!(c.successor_count(), 1);
        assert_eq!(c.predecessor_count(), 1);
    }

    #[test]
    fn repeated_predecessor_is_idempotent() {
        let mut c: DirectedConnections<u8, &'static str> = DirectedConnections::new();
        c.add_predecessor(1);
        c.add_predecessor(1);
        assert_eq!(c.predecessor_count(), 1);
    }

    #[test]
    fn removing_predecessor_of_both_keeps_successor() {
        let mut c = DirectedConnections::new();
        c.add_successor(2, "v");
        c.add_predecessor(2);
        c.remove_predecessor(&2);
        assert_eq!(c.value(&2), Some(&"v"));
        assert_eq!(preds(&c), Vec::<u8>::new());
        assert_eq!(succs(&c), vec![2]);
        assert_eq!(c.predecessor_count(), 0);
    }

    #[test]
    fn removing_successor_of_both_forgets_value() {
        let mut c = DirectedConnections::new();
        c.add_successor(2, "v");
        c.add_predecessor(2);
        assert_eq!(c.remove_successor(&2), Some("v"));
        assert_eq!(c.value(&2), None);
        assert_eq!(preds(&c), vec![2]);
        assert_eq!(c.successor_count(), 0);
        c.remove_predecessor(&2);
        assert!(c.entries().is_empty());
        assert_eq!(c.predecessor_count(), 0);
    }

    #[test]
    fn removing_absent_roles_is_noop() {
        let mut c: DirectedConnections<u8, &'static str> = DirectedConnections::new();
        assert_eq!(c.remove_successor(&1), None);
        c.remove_predecessor(&1);
        c.add_predecessor(1);
        assert_eq!(c.remove_successor(&1), None);
        assert_eq!(c.predecessor_count(), 1);
        c.add_successor(3, "w");
        c.remove_predecessor(&3);
        assert_eq!(c.successor_count(), 1);
        assert_eq!(c.predecessor_count(), 1);
    }
}
