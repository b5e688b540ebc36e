use crate::graph::{directed::DirectedConnections, undirected::UndirectedConnections};
use crate::graph::{directed::NeighborRole, Node};

/// Per-node adjacency record, owned by the graph container.
///
/// The directed and undirected variants share one surface; the few places where their
/// semantics differ are the `match` arms below.
#[derive(Debug, Clone)]
pub(crate) enum GraphConnections<N, V> {
    Directed(DirectedConnections<N, V>),
    Undirected(UndirectedConnections<N, V>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Role {
    Adjacent,
    Predecessors,
    Successors,
}

impl<N: Node, V> GraphConnections<N, V> {
    pub(crate) fn new(directed: bool) -> Self {
        if directed {
            Self::Directed(DirectedConnections::new())
        } else {
            Self::Undirected(UndirectedConnections::new())
        }
    }

    pub(crate) fn adjacent_nodes(&self) -> NodeView<'_, N, V> {
        NodeView {
            connections: self,
            role: Role::Adjacent,
        }
    }

    pub(crate) fn predecessors(&self) -> NodeView<'_, N, V> {
        NodeView {
            connections: self,
            role: Role::Predecessors,
        }
    }

    pub(crate) fn successors(&self) -> NodeView<'_, N, V> {
        NodeView {
            connections: self,
            role: Role::Successors,
        }
    }

    pub(crate) fn value(&self, node: &N) -> Option<&V> {
        match self {
            Self::Directed(c) => c.value(node),
            Self::Undirected(c) => c.value(node),
        }
    }

    /// `value` is only stored by undirected connections;
    /// directed ones keep values on the successor side and pass `None`.
    pub(crate) fn add_predecessor(&mut self, node: N, value: Option<V>) {
        match self {
            Self::Directed(c) => c.add_predecessor(node),
            Self::Undirected(c) => match value {
                Some(value) => {
                    c.add_successor(node, value);
                }
                None => panic!("undirected predecessor added without a value"),
            },
        }
    }

    pub(crate) fn add_successor(&mut self, node: N, value: V) -> Option<V> {
        match self {
            Self::Directed(c) => c.add_successor(node, value),
            Self::Undirected(c) => c.add_successor(node, value),
        }
    }

    pub(crate) fn remove_predecessor(&mut self, node: &N) {
        match self {
            Self::Directed(c) => c.remove_predecessor(node),
            Self::Undirected(c) => {
                c.remove_successor(node);
            }
        }
    }

    pub(crate) fn remove_successor(&mut self, node: &N) -> Option<V> {
        match self {
            Self::Directed(c) => c.remove_successor(node),
            Self::Undirected(c) => c.remove_successor(node),
        }
    }
}

/// A live, read-only set of neighbors of one node.
///
/// The view borrows the graph, so it always reflects the current state and the graph
/// cannot change while the view is alive.
/// Iteration is restartable: every call to [NodeView::iter] walks the adjacency anew.
pub struct NodeView<'a, N, V> {
    connections: &'a GraphConnections<N, V>,
    role: Role,
}

impl<'a, N, V> Clone for NodeView<'a, N, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, N, V> Copy for NodeView<'a, N, V> {}

impl<'a, N: Node, V> NodeView<'a, N, V> {
    pub fn len(&self) -> usize {
        match (self.connections, self.role) {
            (GraphConnections::Directed(c), Role::Adjacent) => c.entries().len(),
            (GraphConnections::Directed(c), Role::Predecessors) => c.predecessor_count(),
            (GraphConnections::Directed(c), Role::Successors) => c.successor_count(),
            (GraphConnections::Undirected(c), _) => c.entries().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, node: &N) -> bool {
        match (self.connections, self.role) {
            (GraphConnections::Directed(c), Role::Adjacent) => c.entries().contains_key(node),
            (GraphConnections::Directed(c), Role::Predecessors) => c
                .entries()
                .get(node)
                .map_or(false, NeighborRole::is_predecessor),
            (GraphConnections::Directed(c), Role::Successors) => c
                .entries()
                .get(node)
                .map_or(false, NeighborRole::is_successor),
            (GraphConnections::Undirected(c), _) => c.entries().contains_key(node),
        }
    }

    pub fn iter(&self) -> NodeIter<'a, N, V> {
        let inner = match self.connections {
            GraphConnections::Directed(c) => NodeIterInner::Directed(c.entries().iter()),
            GraphConnections::Undirected(c) => NodeIterInner::Undirected(c.entries().keys()),
        };
        NodeIter {
            inner,
            role: self.role,
            remaining: self.len(),
        }
    }
}

impl<'a, N: Node, V> IntoIterator for NodeView<'a, N, V> {
    type Item = &'a N;
    type IntoIter = NodeIter<'a, N, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, N: Node, V> std::fmt::Debug for NodeView<'a, N, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Iterator over a [NodeView].
pub struct NodeIter<'a, N, V> {
    inner: NodeIterInner<'a, N, V>,
    role: Role,
    remaining: usize,
}

enum NodeIterInner<'a, N, V> {
    Directed(indexmap::map::Iter<'a, N, NeighborRole<V>>),
    Undirected(indexmap::map::Keys<'a, N, V>),
}

impl<'a, N, V> Iterator for NodeIter<'a, N, V> {
    type Item = &'a N;

    fn next(&mut self) -> Option<Self::Item> {
        let res = match &mut self.inner {
            NodeIterInner::Undirected(keys) => keys.next(),
            NodeIterInner::Directed(entries) => match self.role {
                Role::Adjacent => entries.next().map(|(n, _)| n),
                Role::Predecessors => entries.find(|(_, r)| r.is_predecessor()).map(|(n, _)| n),
                Role::Successors => entries.find(|(_, r)| r.is_successor()).map(|(n, _)| n),
            },
        };
        if res.is_some() {
            self.remaining -= 1;
        }
        res
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, N, V> ExactSizeIterator for NodeIter<'a, N, V> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directed_views() {
        let mut c = GraphConnections::new(true);
        c.add_successor(2, 'a');
        c.add_predecessor(3, None);
        c.add_successor(4, 'c');
        c.add_predecessor(4, None);
        let succs: Vec<_> = c.successors().iter().copied().collect();
        let preds: Vec<_> = c.predecessors().iter().copied().collect();
        let adj: Vec<_> = c.adjacent_nodes().iter().copied().collect();
        assert_eq!(succs, vec![2, 4]);
        assert_eq!(preds, vec![3, 4]);
        assert_eq!(adj, vec![2, 3, 4]);
        assert_eq!(c.successors().len(), 2);
        assert_eq!(c.predecessors().len(), 2);
        assert!(c.successors().contains(&4));
        assert!(!c.successors().contains(&3));
        assert!(c.predecessors().contains(&3));
        assert_eq!(c.value(&3), None);
        assert_eq!(c.value(&4), Some(&'c'));
    }

    #[test]
    fn undirected_views_coincide() {
        let mut c = GraphConnections::new(false);
        c.add_successor(2, 'a');
        c.add_predecessor(3, Some('b'));
        for view in [c.adjacent_nodes(), c.predecessors(), c.successors()] {
            assert_eq!(view.iter().copied().collect::<Vec<_>>(), vec![2, 3]);
            assert_eq!(view.len(), 2);
        }
        assert_eq!(c.value(&3), Some(&'b'));
        c.remove_predecessor(&2);
        assert!(!c.successors().contains(&2));
    }

    #[test]
    fn views_are_restartable() {
        let mut c = GraphConnections::new(true);
        c.add_successor(1, ());
        c.add_successor(2, ());
        let view = c.successors();
        assert_eq!(view.iter().count(), 2);
        assert_eq!(view.iter().count(), 2);
        assert_eq!(view.iter().len(), 2);
    }
}
