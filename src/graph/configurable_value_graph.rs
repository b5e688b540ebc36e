use crate::graph::connections::GraphConnections;
use crate::graph::*;

/// Read-only core shared by the configurable containers.
///
/// Every node maps to its [GraphConnections]; edges live twice, once in each endpoint's
/// record, and the edge counter is kept in step by the mutable containers.
#[derive(Clone)]
pub struct ConfigurableValueGraph<N, V> {
    is_directed: bool,
    allows_self_loops: bool,
    pub(crate) node_connections: NodeMap<N, GraphConnections<N, V>>,
    pub(crate) edge_count: usize,
}

impl<N: Node, V> ConfigurableValueGraph<N, V> {
    pub(crate) fn new(config: &GraphConfig<N>) -> Self {
        Self {
            is_directed: config.directed,
            allows_self_loops: config.allows_self_loops,
            node_connections: config.node_order.create_map(config.expected_node_count),
            edge_count: 0,
        }
    }

    pub(crate) fn checked_connections(
        &self,
        node: &N,
    ) -> Result<&GraphConnections<N, V>, GraphError> {
        self.node_connections
            .get(node)
            .ok_or_else(|| GraphError::node_not_in_graph(node))
    }

    pub(crate) fn contains(&self, node: &N) -> bool {
        self.node_connections.contains_key(node)
    }
}

impl<N: Node, V> BaseGraph<N> for ConfigurableValueGraph<N, V> {
    type Value = V;

    fn nodes(&self) -> Nodes<'_, N, V> {
        Nodes::new(&self.node_connections)
    }

    fn is_directed(&self) -> bool {
        self.is_directed
    }

    fn allows_self_loops(&self) -> bool {
        self.allows_self_loops
    }

    fn node_order(&self) -> ElementOrder<N> {
        self.node_connections.order()
    }

    fn adjacent_nodes(&self, node: &N) -> Result<NodeView<'_, N, V>, GraphError> {
        Ok(self.checked_connections(node)?.adjacent_nodes())
    }

    fn predecessors(&self, node: &N) -> Result<NodeView<'_, N, V>, GraphError> {
        Ok(self.checked_connections(node)?.predecessors())
    }

    fn successors(&self, node: &N) -> Result<NodeView<'_, N, V>, GraphError> {
        Ok(self.checked_connections(node)?.successors())
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn contains_node(&self, node: &N) -> bool {
        self.contains(node)
    }

    fn has_edge(&self, node_u: &N, node_v: &N) -> bool {
        self.node_connections
            .get(node_u)
            .map_or(false, |c| c.successors().contains(node_v))
    }
}

impl<N: Node, V> ValueGraph<N> for ConfigurableValueGraph<N, V> {
    fn edge_value(&self, node_u: &N, node_v: &N) -> Option<&V> {
        self.node_connections.get(node_u)?.value(node_v)
    }
}

crate::graph::r#trait::impl_relations!([N: Node, V] ConfigurableValueGraph<N, V>);

impl<N: Node, V: PartialEq> PartialEq for ConfigurableValueGraph<N, V> {
    fn eq(&self, other: &Self) -> bool {
        value_graphs_equal::<N, _, _>(self, other)
    }
}

impl<N: Node, V: Eq> Eq for ConfigurableValueGraph<N, V> {}

impl<N: Node, V: std::fmt::Debug> std::fmt::Debug for ConfigurableValueGraph<N, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", GraphDebug::with_values(self))
    }
}
