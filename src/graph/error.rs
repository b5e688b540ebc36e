use thiserror::Error;

/// Failures reported by graph accessors, mutators and traversals.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("node {0} is not an element of this graph")]
    NodeNotInGraph(String),

    #[error(
        "cannot add self-loop edge on node {0}, as self-loops are not allowed; \
         build the graph with allows_self_loops(true) to permit them"
    )]
    SelfLoopNotAllowed(String),

    #[error("mismatch: unordered endpoints cannot be used with directed graphs")]
    EndpointsMismatch,

    #[error(
        "cannot call source()/target() on an endpoint pair from an undirected graph; \
         consider adjacent_node(node) or node_u()/node_v() instead"
    )]
    UnsupportedOnUndirected,

    #[error("undirected graphs can never be trees")]
    UndirectedTree,

    #[error("endpoint pair {pair} does not contain node {node}")]
    NodeNotInEndpointPair { pair: String, node: String },
}

impl GraphError {
    pub(crate) fn node_not_in_graph<N: std::fmt::Debug>(node: &N) -> Self {
        Self::NodeNotInGraph(format!("{:?}", node))
    }

    pub(crate) fn self_loop_not_allowed<N: std::fmt::Debug>(node: &N) -> Self {
        Self::SelfLoopNotAllowed(format!("{:?}", node))
    }
}
