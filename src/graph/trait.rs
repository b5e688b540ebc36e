use crate::graph::*;
use std::marker::PhantomData;

/// The read contract shared by every graph.
///
/// Collection-returning accessors return live views borrowed from the graph.
/// Accessors taking a node fail with [GraphError::NodeNotInGraph] when the node is unknown,
/// rather than pretending it has no neighbors.
pub trait BaseGraph<N: Node> {
    /// Type of values stored on edges. [Presence] for plain graphs.
    type Value;

    /// All nodes, in [BaseGraph::node_order].
    fn nodes(&self) -> Nodes<'_, N, Self::Value>;
    fn is_directed(&self) -> bool;
    fn allows_self_loops(&self) -> bool;
    fn node_order(&self) -> ElementOrder<N>;

    /// Nodes sharing an edge with `node`, in either direction.
    fn adjacent_nodes(&self, node: &N) -> Result<NodeView<'_, N, Self::Value>, GraphError>;
    /// Nodes having an edge to `node`. Same as adjacent nodes for undirected graphs.
    fn predecessors(&self, node: &N) -> Result<NodeView<'_, N, Self::Value>, GraphError>;
    /// Nodes `node` has an edge to. Same as adjacent nodes for undirected graphs.
    fn successors(&self, node: &N) -> Result<NodeView<'_, N, Self::Value>, GraphError>;

    /// Number of edges.
    ///
    /// By default, half of the sum of degrees.
    /// Implementations keeping a counter override this.
    fn edge_count(&self) -> usize {
        let degree_sum: usize = self
            .nodes()
            .iter()
            .map(|n| self.degree(n).unwrap_or_default())
            .sum();
        degree_sum / 2
    }

    /// All edges, as a live view. Every edge is produced exactly once.
    fn edges(&self) -> Edges<'_, N, Self> {
        Edges::new(self)
    }

    /// Edges touching `node`.
    fn incident_edges(&self, node: &N) -> Result<IncidentEdges<'_, N, Self>, GraphError> {
        if !self.contains_node(node) {
            return Err(GraphError::node_not_in_graph(node));
        }
        Ok(IncidentEdges::new(self, node.clone()))
    }

    /// Number of times edges touch `node`.
    ///
    /// A self-loop touches its node twice: for directed graphs it is both a predecessor
    /// and a successor; for undirected graphs it is counted once more on top of its
    /// single entry in the adjacent nodes.
    fn degree(&self, node: &N) -> Result<usize, GraphError> {
        if self.is_directed() {
            Ok(self.predecessors(node)?.len() + self.successors(node)?.len())
        } else {
            let neighbors = self.adjacent_nodes(node)?;
            let self_loop = usize::from(self.allows_self_loops() && neighbors.contains(node));
            Ok(neighbors.len() + self_loop)
        }
    }

    fn in_degree(&self, node: &N) -> Result<usize, GraphError> {
        if self.is_directed() {
            Ok(self.predecessors(node)?.len())
        } else {
            self.degree(node)
        }
    }

    fn out_degree(&self, node: &N) -> Result<usize, GraphError> {
        if self.is_directed() {
            Ok(self.successors(node)?.len())
        } else {
            self.degree(node)
        }
    }

    fn contains_node(&self, node: &N) -> bool {
        self.nodes().contains(node)
    }

    /// `node_u` is in the graph and `node_v` is one of its successors.
    fn has_edge(&self, node_u: &N, node_v: &N) -> bool {
        self.successors(node_u)
            .map_or(false, |succs| succs.contains(node_v))
    }

    /// Like [BaseGraph::has_edge], but an unordered pair on a directed graph is simply
    /// reported as absent.
    fn has_edge_connecting(&self, endpoints: &EndpointPair<N>) -> bool {
        self.is_ordering_compatible(endpoints)
            && self.has_edge(endpoints.node_u(), endpoints.node_v())
    }

    /// Unordered pairs never fit directed graphs.
    /// Ordered pairs fit undirected graphs, where their order is ignored.
    fn is_ordering_compatible(&self, endpoints: &EndpointPair<N>) -> bool {
        endpoints.is_ordered() || !self.is_directed()
    }

    fn validate_endpoints(&self, endpoints: &EndpointPair<N>) -> Result<(), GraphError> {
        if self.is_ordering_compatible(endpoints) {
            Ok(())
        } else {
            Err(GraphError::EndpointsMismatch)
        }
    }
}

/// Read contract of graphs whose edges carry values.
pub trait ValueGraph<N: Node>: BaseGraph<N> {
    /// The value on the edge from `node_u` to `node_v`, if there is such an edge.
    fn edge_value(&self, node_u: &N, node_v: &N) -> Option<&Self::Value>;

    fn edge_value_connecting(
        &self,
        endpoints: &EndpointPair<N>,
    ) -> Result<Option<&Self::Value>, GraphError> {
        self.validate_endpoints(endpoints)?;
        Ok(self.edge_value(endpoints.node_u(), endpoints.node_v()))
    }

    fn edge_value_or_default(&self, node_u: &N, node_v: &N, default: Self::Value) -> Self::Value
    where
        Self::Value: Clone,
    {
        self.edge_value(node_u, node_v).cloned().unwrap_or(default)
    }

    fn edge_value_connecting_or_default(
        &self,
        endpoints: &EndpointPair<N>,
        default: Self::Value,
    ) -> Result<Self::Value, GraphError>
    where
        Self::Value: Clone,
    {
        Ok(self
            .edge_value_connecting(endpoints)?
            .cloned()
            .unwrap_or(default))
    }

    /// A live, read-only view of this graph without its values.
    fn as_graph(&self) -> AsGraph<'_, Self>
    where
        Self: Sized,
    {
        AsGraph(self)
    }
}

/// Mutations of plain graphs.
pub trait MutableGraph<N: Node>: BaseGraph<N> {
    /// Returns `false` if `node` is already present.
    fn add_node(&mut self, node: N) -> bool;

    /// Adds an edge, adding missing endpoints too.
    /// Returns `false` if the edge was already present.
    fn put_edge(&mut self, node_u: N, node_v: N) -> Result<bool, GraphError>;

    fn put_edge_connecting(&mut self, endpoints: EndpointPair<N>) -> Result<bool, GraphError> {
        self.validate_endpoints(&endpoints)?;
        let (node_u, node_v) = endpoints.into_nodes();
        self.put_edge(node_u, node_v)
    }

    /// Removes `node` and every edge touching it. Returns `false` if it was absent.
    fn remove_node(&mut self, node: &N) -> bool;

    /// Returns `false` if there was no such edge.
    fn remove_edge(&mut self, node_u: &N, node_v: &N) -> bool;

    fn remove_edge_connecting(&mut self, endpoints: &EndpointPair<N>) -> Result<bool, GraphError> {
        self.validate_endpoints(endpoints)?;
        Ok(self.remove_edge(endpoints.node_u(), endpoints.node_v()))
    }
}

/// Mutations of value graphs.
pub trait MutableValueGraph<N: Node>: ValueGraph<N> {
    /// Returns `false` if `node` is already present.
    fn add_node(&mut self, node: N) -> bool;

    /// Sets the value on the edge from `node_u` to `node_v`, adding missing endpoints and
    /// the edge itself. Returns the value it replaced.
    fn put_edge_value(
        &mut self,
        node_u: N,
        node_v: N,
        value: Self::Value,
    ) -> Result<Option<Self::Value>, GraphError>;

    fn put_edge_value_connecting(
        &mut self,
        endpoints: EndpointPair<N>,
        value: Self::Value,
    ) -> Result<Option<Self::Value>, GraphError> {
        self.validate_endpoints(&endpoints)?;
        let (node_u, node_v) = endpoints.into_nodes();
        self.put_edge_value(node_u, node_v, value)
    }

    /// Removes `node` and every edge touching it. Returns `false` if it was absent.
    fn remove_node(&mut self, node: &N) -> bool;

    /// Returns the value of the removed edge, `None` if there was no such edge.
    fn remove_edge(&mut self, node_u: &N, node_v: &N) -> Option<Self::Value>;

    fn remove_edge_connecting(
        &mut self,
        endpoints: &EndpointPair<N>,
    ) -> Result<Option<Self::Value>, GraphError> {
        self.validate_endpoints(endpoints)?;
        Ok(self.remove_edge(endpoints.node_u(), endpoints.node_v()))
    }
}

/// A relation which knows, for every node, the nodes it leads to.
///
/// This is all traversals need. Every graph is one; so is any closure wrapped by
/// [successors_fn].
pub trait SuccessorsFunction<N> {
    type Successors<'a>: Iterator<Item = N>
    where
        Self: 'a,
        N: 'a;

    /// Fails if `node` is not an element of the relation.
    fn successor_iter<'a>(&'a self, node: &N) -> Result<Self::Successors<'a>, GraphError>
    where
        N: 'a;

    /// Whether tree traversals may run over this relation.
    fn can_be_tree(&self) -> bool {
        true
    }
}

/// A relation which knows, for every node, the nodes leading to it.
pub trait PredecessorsFunction<N> {
    type Predecessors<'a>: Iterator<Item = N>
    where
        Self: 'a,
        N: 'a;

    /// Fails if `node` is not an element of the relation.
    fn predecessor_iter<'a>(&'a self, node: &N) -> Result<Self::Predecessors<'a>, GraphError>
    where
        N: 'a;
}

/// Implements [SuccessorsFunction] and [PredecessorsFunction] for a graph type by
/// reading its [BaseGraph] views. The node parameter must be named `N`.
macro_rules! impl_relations {
    ([$($generics:tt)*] $ty:ty $(where $($bounds:tt)+)?) => {
        impl<$($generics)*> $crate::graph::SuccessorsFunction<N> for $ty
        $(where $($bounds)+)?
        {
            type Successors<'s> = std::iter::Cloned<
                $crate::graph::NodeIter<'s, N, <Self as $crate::graph::BaseGraph<N>>::Value>,
            >
            where
                Self: 's,
                N: 's;

            fn successor_iter<'s>(
                &'s self,
                node: &N,
            ) -> Result<Self::Successors<'s>, $crate::graph::GraphError>
            where
                N: 's,
            {
                Ok($crate::graph::BaseGraph::successors(self, node)?.iter().cloned())
            }

            fn can_be_tree(&self) -> bool {
                $crate::graph::BaseGraph::is_directed(self)
            }
        }

        impl<$($generics)*> $crate::graph::PredecessorsFunction<N> for $ty
        $(where $($bounds)+)?
        {
            type Predecessors<'s> = std::iter::Cloned<
                $crate::graph::NodeIter<'s, N, <Self as $crate::graph::BaseGraph<N>>::Value>,
            >
            where
                Self: 's,
                N: 's;

            fn predecessor_iter<'s>(
                &'s self,
                node: &N,
            ) -> Result<Self::Predecessors<'s>, $crate::graph::GraphError>
            where
                N: 's,
            {
                Ok($crate::graph::BaseGraph::predecessors(self, node)?.iter().cloned())
            }
        }
    };
}
pub(crate) use impl_relations;

/// Implements [BaseGraph] for a wrapper by forwarding to one of its fields.
macro_rules! forward_base_graph {
    ([$($generics:tt)*] $ty:ty => $field:ident, Value = $value:ty) => {
        impl<$($generics)*> $crate::graph::BaseGraph<N> for $ty {
            type Value = $value;

            fn nodes(&self) -> $crate::graph::Nodes<'_, N, $value> {
                self.$field.nodes()
            }

            fn is_directed(&self) -> bool {
                self.$field.is_directed()
            }

            fn allows_self_loops(&self) -> bool {
                self.$field.allows_self_loops()
            }

            fn node_order(&self) -> $crate::graph::ElementOrder<N> {
                self.$field.node_order()
            }

            fn adjacent_nodes(
                &self,
                node: &N,
            ) -> Result<$crate::graph::NodeView<'_, N, $value>, $crate::graph::GraphError> {
                self.$field.adjacent_nodes(node)
            }

            fn predecessors(
                &self,
                node: &N,
            ) -> Result<$crate::graph::NodeView<'_, N, $value>, $crate::graph::GraphError> {
                self.$field.predecessors(node)
            }

            fn successors(
                &self,
                node: &N,
            ) -> Result<$crate::graph::NodeView<'_, N, $value>, $crate::graph::GraphError> {
                self.$field.successors(node)
            }

            fn edge_count(&self) -> usize {
                self.$field.edge_count()
            }

            fn contains_node(&self, node: &N) -> bool {
                self.$field.contains_node(node)
            }

            fn has_edge(&self, node_u: &N, node_v: &N) -> bool {
                self.$field.has_edge(node_u, node_v)
            }
        }

        $crate::graph::r#trait::impl_relations!([$($generics)*] $ty);
    };
}
pub(crate) use forward_base_graph;

/// A [SuccessorsFunction] backed by a closure.
pub struct FromFn<F, I> {
    f: F,
    _successors: PhantomData<fn() -> I>,
}

/// Wraps a closure listing the successors of a node, e.g. the children in a hand-built tree.
///
/// The closure cannot fail, so every node is considered an element of the relation.
pub fn successors_fn<N, F, I>(f: F) -> FromFn<F, I>
where
    F: Fn(&N) -> I,
    I: IntoIterator<Item = N>,
{
    FromFn {
        f,
        _successors: PhantomData,
    }
}

impl<N, F, I> SuccessorsFunction<N> for FromFn<F, I>
where
    F: Fn(&N) -> I,
    I: IntoIterator<Item = N>,
{
    type Successors<'a> = I::IntoIter
    where
        Self: 'a,
        N: 'a;

    fn successor_iter<'a>(&'a self, node: &N) -> Result<Self::Successors<'a>, GraphError>
    where
        N: 'a,
    {
        Ok((self.f)(node).into_iter())
    }
}

/// Whether two graphs have the same directedness, nodes and edges.
///
/// Self-loop policy and node order are configuration, not content, and are ignored.
pub fn graphs_equal<N, G1, G2>(a: &G1, b: &G2) -> bool
where
    N: Node,
    G1: BaseGraph<N> + ?Sized,
    G2: BaseGraph<N> + ?Sized,
{
    a.is_directed() == b.is_directed()
        && a.nodes().len() == b.nodes().len()
        && a.nodes().iter().all(|n| b.contains_node(n))
        && a.edge_count() == b.edge_count()
        && a.edges().iter().all(|e| b.has_edge_connecting(&e))
}

/// Like [graphs_equal], additionally requiring equal values on every edge.
pub fn value_graphs_equal<N, G1, G2>(a: &G1, b: &G2) -> bool
where
    N: Node,
    G1: ValueGraph<N> + ?Sized,
    G2: ValueGraph<N, Value = G1::Value> + ?Sized,
    G1::Value: PartialEq,
{
    graphs_equal(a, b)
        && a.edges()
            .iter()
            .all(|e| a.edge_value(e.node_u(), e.node_v()) == b.edge_value(e.node_u(), e.node_v()))
}
