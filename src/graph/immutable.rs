use crate::graph::*;

/// A value graph which cannot change after construction.
///
/// It owns its storage: [From] takes the storage of a mutable graph without copying,
/// [ImmutableValueGraph::copy_of] deep-copies any value graph.
#[derive(Clone)]
pub struct ImmutableValueGraph<N, V> {
    graph: ConfigurableValueGraph<N, V>,
}

impl<N: Node, V: Clone> ImmutableValueGraph<N, V> {
    /// Copies nodes, edges and values of `graph`, keeping its configuration.
    pub fn copy_of<G>(graph: &G) -> Self
    where
        G: ValueGraph<N, Value = V> + ?Sized,
    {
        let mut copy = ValueGraphBuilder::from(graph)
            .expected_node_count(graph.nodes().len())
            .build::<V>();
        for node in graph.nodes() {
            copy.add_node(node.clone());
        }
        for edge in graph.edges() {
            let (node_u, node_v) = edge.into_nodes();
            if let Some(value) = graph.edge_value(&node_u, &node_v) {
                copy.put_edge_value_unchecked(node_u, node_v, value.clone());
            }
        }
        Self {
            graph: copy.into_inner(),
        }
    }
}

impl<N: Node, V> From<ConfigurableMutableValueGraph<N, V>> for ImmutableValueGraph<N, V> {
    fn from(graph: ConfigurableMutableValueGraph<N, V>) -> Self {
        Self {
            graph: graph.into_inner(),
        }
    }
}

crate::graph::r#trait::forward_base_graph!(
    [N: Node, V] ImmutableValueGraph<N, V> => graph, Value = V
);

impl<N: Node, V> ValueGraph<N> for ImmutableValueGraph<N, V> {
    fn edge_value(&self, node_u: &N, node_v: &N) -> Option<&V> {
        self.graph.edge_value(node_u, node_v)
    }
}

impl<N: Node, V: PartialEq> PartialEq for ImmutableValueGraph<N, V> {
    fn eq(&self, other: &Self) -> bool {
        self.graph == other.graph
    }
}

impl<N: Node, V: Eq> Eq for ImmutableValueGraph<N, V> {}

impl<N: Node, V: std::fmt::Debug> std::fmt::Debug for ImmutableValueGraph<N, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", GraphDebug::with_values(self))
    }
}

/// A graph which cannot change after construction. See [ImmutableValueGraph].
#[derive(Clone)]
pub struct ImmutableGraph<N> {
    graph: ConfigurableValueGraph<N, Presence>,
}

impl<N: Node> ImmutableGraph<N> {
    /// Copies nodes and edges of `graph`, keeping its configuration.
    pub fn copy_of<G>(graph: &G) -> Self
    where
        G: BaseGraph<N> + ?Sized,
    {
        let mut copy = ValueGraphBuilder::from(graph)
            .expected_node_count(graph.nodes().len())
            .build::<Presence>();
        for node in graph.nodes() {
            copy.add_node(node.clone());
        }
        for edge in graph.edges() {
            let (node_u, node_v) = edge.into_nodes();
            copy.put_edge_value_unchecked(node_u, node_v, Presence);
        }
        Self {
            graph: copy.into_inner(),
        }
    }
}

impl<N: Node> From<ConfigurableMutableGraph<N>> for ImmutableGraph<N> {
    fn from(graph: ConfigurableMutableGraph<N>) -> Self {
        Self {
            graph: graph.into_inner(),
        }
    }
}

crate::graph::r#trait::forward_base_graph!(
    [N: Node] ImmutableGraph<N> => graph, Value = Presence
);

impl<N: Node> PartialEq for ImmutableGraph<N> {
    fn eq(&self, other: &Self) -> bool {
        graphs_equal::<N, _, _>(self, other)
    }
}

impl<N: Node> Eq for ImmutableGraph<N> {}

impl<N: Node> std::fmt::Debug for ImmutableGraph<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", GraphDebug::new(self))
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::*;

    #[test]
    fn freezing_keeps_content_and_configuration() {
        let mut g = GraphBuilder::undirected()
            .allows_self_loops(true)
            .node_order(ElementOrder::natural())
            .build();
        g.put_edge(3, 1).unwrap();
        g.put_edge(2, 2).unwrap();
        let copy = ImmutableGraph::copy_of(&g);
        let frozen = ImmutableGraph::from(g.clone());
        assert_eq!(copy, frozen);
        assert!(graphs_equal(&frozen, &g));
        assert!(frozen.allows_self_loops());
        assert!(!frozen.is_directed());
        assert_eq!(frozen.edge_count(), 2);
        assert_eq!(frozen.nodes().iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(copy.nodes().iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn copy_does_not_alias_source() {
        let mut g = ValueGraphBuilder::directed().build();
        g.put_edge_value("a", "b", 1).unwrap();
        let copy = ImmutableValueGraph::copy_of(&g);
        g.put_edge_value("a", "b", 2).unwrap();
        g.remove_node(&"b");
        assert_eq!(copy.edge_value(&"a", &"b"), Some(&1));
        assert_eq!(copy.edge_count(), 1);
        assert!(copy.successors(&"a").unwrap().contains(&"b"));
    }

    #[test]
    fn value_graph_round_trip() {
        let mut g = ValueGraphBuilder::undirected().build();
        g.put_edge_value(1, 2, 'x').unwrap();
        g.put_edge_value(2, 3, 'y').unwrap();
        let copy = ImmutableValueGraph::copy_of(&g);
        assert_eq!(copy, ImmutableValueGraph::from(g));
        assert_eq!(copy.edge_value(&3, &2), Some(&'y'));
    }

    #[test]
    fn copy_of_plain_view() {
        let mut g = ValueGraphBuilder::directed().build();
        g.put_edge_value(1, 2, 0.5).unwrap();
        let plain = ImmutableGraph::copy_of(&g.as_graph());
        assert!(plain.has_edge(&1, &2));
        assert_eq!(plain.edges().len(), 1);
    }
}
