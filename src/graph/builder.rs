use crate::graph::*;
use tracing::debug;

/// Configuration a container is built with. Fixed for the lifetime of the graph.
#[derive(Debug, PartialEq, Eq)]
pub struct GraphConfig<N> {
    pub directed: bool,
    pub allows_self_loops: bool,
    pub node_order: ElementOrder<N>,
    pub expected_node_count: usize,
}

impl<N> Clone for GraphConfig<N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N> Copy for GraphConfig<N> {}

impl<N> GraphConfig<N> {
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            allows_self_loops: false,
            node_order: ElementOrder::insertion(),
            expected_node_count: DEFAULT_NODE_COUNT,
        }
    }

    /// Same directedness, self-loop policy and node order as `graph`.
    pub fn of<G>(graph: &G) -> Self
    where
        N: Node,
        G: BaseGraph<N> + ?Sized,
    {
        Self {
            directed: graph.is_directed(),
            allows_self_loops: graph.allows_self_loops(),
            node_order: graph.node_order(),
            expected_node_count: DEFAULT_NODE_COUNT,
        }
    }
}

macro_rules! builder_setters {
    () => {
        /// Whether edges from a node to itself are accepted. Defaults to `false`.
        pub fn allows_self_loops(mut self, allows_self_loops: bool) -> Self {
            self.config.allows_self_loops = allows_self_loops;
            self
        }

        /// Iteration order of [BaseGraph::nodes]. Defaults to insertion order.
        pub fn node_order(mut self, node_order: ElementOrder<N>) -> Self {
            self.config.node_order = node_order;
            self
        }

        /// A capacity hint; the graph still grows past it.
        pub fn expected_node_count(mut self, expected_node_count: usize) -> Self {
            self.config.expected_node_count = expected_node_count;
            self
        }

        pub fn config(&self) -> &GraphConfig<N> {
            &self.config
        }
    };
}

/// Builds [ConfigurableMutableGraph]s.
///
/// ```
/// use configraph::graph::*;
///
/// let mut g = GraphBuilder::undirected().allows_self_loops(true).build();
/// g.put_edge("a", "a").unwrap();
/// assert_eq!(g.degree(&"a").unwrap(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct GraphBuilder<N> {
    config: GraphConfig<N>,
}

impl<N: Node> GraphBuilder<N> {
    pub fn directed() -> Self {
        Self {
            config: GraphConfig::new(true),
        }
    }

    pub fn undirected() -> Self {
        Self {
            config: GraphConfig::new(false),
        }
    }

    /// A builder configured like `graph`. Nodes and edges are not copied.
    #[allow(clippy::should_implement_trait)]
    pub fn from<G: BaseGraph<N> + ?Sized>(graph: &G) -> Self {
        Self {
            config: GraphConfig::of(graph),
        }
    }

    builder_setters!();

    pub fn build(&self) -> ConfigurableMutableGraph<N> {
        log_build(&self.config, "graph");
        ConfigurableMutableGraph::new(&self.config)
    }
}

/// Builds [ConfigurableMutableValueGraph]s. The value type is picked at [ValueGraphBuilder::build].
#[derive(Debug, Clone)]
pub struct ValueGraphBuilder<N> {
    config: GraphConfig<N>,
}

impl<N: Node> ValueGraphBuilder<N> {
    pub fn directed() -> Self {
        Self {
            config: GraphConfig::new(true),
        }
    }

    pub fn undirected() -> Self {
        Self {
            config: GraphConfig::new(false),
        }
    }

    /// A builder configured like `graph`. Nodes and edges are not copied.
    #[allow(clippy::should_implement_trait)]
    pub fn from<G: BaseGraph<N> + ?Sized>(graph: &G) -> Self {
        Self {
            config: GraphConfig::of(graph),
        }
    }

    builder_setters!();

    pub fn build<V>(&self) -> ConfigurableMutableValueGraph<N, V> {
        log_build(&self.config, "value graph");
        ConfigurableMutableValueGraph::new(&self.config)
    }
}

fn log_build<N>(config: &GraphConfig<N>, kind: &str) {
    debug!(
        kind,
        directed = config.directed,
        allows_self_loops = config.allows_self_loops,
        node_order = ?config.node_order.order_type(),
        expected_node_count = config.expected_node_count,
        "building graph"
    );
}

#[cfg(test)]
mod tests {
    use crate::graph::*;

    #[test]
    fn defaults() {
        let g = GraphBuilder::<u32>::directed().build();
        assert!(g.is_directed());
        assert!(!g.allows_self_loops());
        assert_eq!(g.node_order(), ElementOrder::insertion());
        assert_eq!(
            GraphBuilder::<u32>::undirected().config().expected_node_count,
            DEFAULT_NODE_COUNT
        );
    }

    #[test]
    fn from_copies_configuration_but_not_content() {
        let mut g = GraphBuilder::undirected()
            .allows_self_loops(true)
            .node_order(ElementOrder::natural())
            .build();
        g.put_edge(2, 1).unwrap();
        let h = GraphBuilder::from(&g).build();
        assert!(!h.is_directed());
        assert!(h.allows_self_loops());
        assert_eq!(h.node_order().order_type(), OrderType::Sorted);
        assert_eq!(h.node_order(), g.node_order());
        assert!(h.nodes().is_empty());

        let v = ValueGraphBuilder::from(&g).build::<String>();
        assert!(!v.is_directed());
        assert!(v.allows_self_loops());
    }

    #[test]
    fn sorted_node_order_is_honoured() {
        let mut g = ValueGraphBuilder::directed()
            .node_order(ElementOrder::natural())
            .expected_node_count(3)
            .build();
        g.put_edge_value(5, 1, "x").unwrap();
        g.add_node(3);
        let nodes: Vec<_> = g.nodes().iter().copied().collect();
        assert_eq!(nodes, vec![1, 3, 5]);
    }

    #[test]
    fn unordered_node_order_keeps_membership() {
        let mut g = GraphBuilder::directed()
            .node_order(ElementOrder::unordered())
            .build();
        for i in 0..5 {
            g.add_node(i);
        }
        g.remove_node(&1);
        let mut nodes: Vec<_> = g.nodes().iter().copied().collect();
        nodes.sort();
        assert_eq!(nodes, vec![0, 2, 3, 4]);
    }
}
