use crate::graph::connections::GraphConnections;
use crate::graph::*;
use tracing::trace;

/// A mutable value graph whose directedness, self-loop policy and node order are fixed by
/// the [ValueGraphBuilder] that built it.
///
/// Missing endpoints are added on the fly by `put_edge_value`.
/// All accessors are $O(1)$ except `remove_node`, which is linear in the degree of the node.
#[derive(Clone)]
pub struct ConfigurableMutableValueGraph<N, V> {
    graph: ConfigurableValueGraph<N, V>,
}

impl<N: Node, V> ConfigurableMutableValueGraph<N, V> {
    pub(crate) fn new(config: &GraphConfig<N>) -> Self {
        Self {
            graph: ConfigurableValueGraph::new(config),
        }
    }

    /// The read-only core, e.g. to freeze this graph without copying.
    pub fn into_inner(self) -> ConfigurableValueGraph<N, V> {
        self.graph
    }

    fn connections_mut(&mut self, node: N) -> &mut GraphConnections<N, V> {
        let directed = self.graph.is_directed();
        self.graph
            .node_connections
            .get_or_insert_with(node, || GraphConnections::new(directed))
    }

    /// Skips the self-loop policy check.
    pub(crate) fn put_edge_value_unchecked(&mut self, node_u: N, node_v: N, value: V) -> Option<V>
    where
        V: Clone,
    {
        let mirrored = (!self.graph.is_directed()).then(|| value.clone());
        let previous = self
            .connections_mut(node_u.clone())
            .add_successor(node_v.clone(), value);
        self.connections_mut(node_v).add_predecessor(node_u, mirrored);
        if previous.is_none() {
            self.graph.edge_count += 1;
        }
        previous
    }

    fn decrement_edge_count(&mut self, by: usize) {
        match self.graph.edge_count.checked_sub(by) {
            Some(n) => self.graph.edge_count = n,
            None => panic!(
                "edge count gone negative: {} - {}",
                self.graph.edge_count, by
            ),
        }
    }
}

crate::graph::r#trait::forward_base_graph!(
    [N: Node, V] ConfigurableMutableValueGraph<N, V> => graph, Value = V
);

impl<N: Node, V> ValueGraph<N> for ConfigurableMutableValueGraph<N, V> {
    fn edge_value(&self, node_u: &N, node_v: &N) -> Option<&V> {
        self.graph.edge_value(node_u, node_v)
    }
}

impl<N: Node, V: Clone> MutableValueGraph<N> for ConfigurableMutableValueGraph<N, V> {
    fn add_node(&mut self, node: N) -> bool {
        if self.graph.contains(&node) {
            return false;
        }
        self.connections_mut(node);
        true
    }

    fn put_edge_value(&mut self, node_u: N, node_v: N, value: V) -> Result<Option<V>, GraphError> {
        if !self.graph.allows_self_loops() && node_u == node_v {
            return Err(GraphError::self_loop_not_allowed(&node_u));
        }
        Ok(self.put_edge_value_unchecked(node_u, node_v, value))
    }

    fn remove_node(&mut self, node: &N) -> bool {
        let Some(connections) = self.graph.node_connections.remove(node) else {
            return false;
        };
        let mut dropped = 0;
        if self.graph.allows_self_loops() && connections.successors().contains(node) {
            // lives in the removed record only
            dropped += 1;
        }
        for succ in connections.successors().iter().filter(|s| *s != node) {
            if let Some(c) = self.graph.node_connections.get_mut(succ) {
                c.remove_predecessor(node);
            }
            dropped += 1;
        }
        if self.graph.is_directed() {
            for pred in connections.predecessors().iter().filter(|p| *p != node) {
                if let Some(c) = self.graph.node_connections.get_mut(pred) {
                    c.remove_successor(node);
                }
                dropped += 1;
            }
        }
        trace!(?node, dropped, "removed node and its incident edges");
        self.decrement_edge_count(dropped);
        true
    }

    fn remove_edge(&mut self, node_u: &N, node_v: &N) -> Option<V> {
        if !self.graph.contains(node_v) {
            return None;
        }
        let previous = self
            .graph
            .node_connections
            .get_mut(node_u)?
            .remove_successor(node_v)?;
        if let Some(c) = self.graph.node_connections.get_mut(node_v) {
            c.remove_predecessor(node_u);
        }
        self.decrement_edge_count(1);
        Some(previous)
    }
}

impl<N: Node, V: PartialEq> PartialEq for ConfigurableMutableValueGraph<N, V> {
    fn eq(&self, other: &Self) -> bool {
        self.graph == other.graph
    }
}

impl<N: Node, V: Eq> Eq for ConfigurableMutableValueGraph<N, V> {}

impl<N: Node, V: std::fmt::Debug> std::fmt::Debug for ConfigurableMutableValueGraph<N, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", GraphDebug::with_values(self))
    }
}
