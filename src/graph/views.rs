use crate::graph::connections::GraphConnections;
use crate::graph::*;
use std::marker::PhantomData;

/// Live view of the nodes of a graph.
pub struct Nodes<'a, N, V> {
    map: &'a NodeMap<N, GraphConnections<N, V>>,
}

impl<'a, N, V> Clone for Nodes<'a, N, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, N, V> Copy for Nodes<'a, N, V> {}

impl<'a, N: Node, V> Nodes<'a, N, V> {
    pub(crate) fn new(map: &'a NodeMap<N, GraphConnections<N, V>>) -> Self {
        Self { map }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn contains(&self, node: &N) -> bool {
        self.map.contains_key(node)
    }

    pub fn iter(&self) -> NodesIter<'a, N, V> {
        NodesIter(self.map.keys())
    }
}

impl<'a, N: Node, V> IntoIterator for Nodes<'a, N, V> {
    type Item = &'a N;
    type IntoIter = NodesIter<'a, N, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over [Nodes].
pub struct NodesIter<'a, N, V>(indexmap::map::Keys<'a, N, GraphConnections<N, V>>);

impl<'a, N, V> Iterator for NodesIter<'a, N, V> {
    type Item = &'a N;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, N, V> ExactSizeIterator for NodesIter<'a, N, V> {}

impl<'a, N: Node, V> std::fmt::Debug for Nodes<'a, N, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Live view of all edges of a graph.
///
/// Nothing is materialized: `len` asks the graph, `contains` is a successor lookup and
/// every call to `iter` starts a fresh [EndpointPairIterator].
pub struct Edges<'a, N, G: ?Sized> {
    graph: &'a G,
    _node: PhantomData<&'a N>,
}

impl<'a, N, G: ?Sized> Clone for Edges<'a, N, G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, N, G: ?Sized> Copy for Edges<'a, N, G> {}

impl<'a, N, G> Edges<'a, N, G>
where
    N: Node,
    G: BaseGraph<N> + ?Sized,
{
    pub(crate) fn new(graph: &'a G) -> Self {
        Self {
            graph,
            _node: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, endpoints: &EndpointPair<N>) -> bool {
        self.graph.has_edge_connecting(endpoints)
    }

    pub fn iter(&self) -> EndpointPairIterator<'a, N, G> {
        EndpointPairIterator::new(self.graph)
    }
}

impl<'a, N, G> IntoIterator for Edges<'a, N, G>
where
    N: Node,
    G: BaseGraph<N> + ?Sized,
{
    type Item = EndpointPair<N>;
    type IntoIter = EndpointPairIterator<'a, N, G>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, N, G> std::fmt::Debug for Edges<'a, N, G>
where
    N: Node,
    G: BaseGraph<N> + ?Sized,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Live view of the edges touching one node.
///
/// For directed graphs, edges from predecessors come first, then edges to successors;
/// a self-loop shows up once.
pub struct IncidentEdges<'a, N, G: ?Sized> {
    graph: &'a G,
    node: N,
}

impl<'a, N, G> IncidentEdges<'a, N, G>
where
    N: Node,
    G: BaseGraph<N> + ?Sized,
{
    pub(crate) fn new(graph: &'a G, node: N) -> Self {
        Self { graph, node }
    }

    pub fn node(&self) -> &N {
        &self.node
    }

    pub fn len(&self) -> usize {
        if self.graph.is_directed() {
            let self_loop = usize::from(self.graph.has_edge(&self.node, &self.node));
            self.graph.in_degree(&self.node).unwrap_or_default()
                + self.graph.out_degree(&self.node).unwrap_or_default()
                - self_loop
        } else {
            self.graph
                .adjacent_nodes(&self.node)
                .map_or(0, |adj| adj.len())
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, endpoints: &EndpointPair<N>) -> bool {
        let node = &self.node;
        match endpoints {
            EndpointPair::Ordered { source, target } if self.graph.is_directed() => {
                (node == source && self.graph.has_edge(node, target))
                    || (node == target && self.graph.has_edge(source, node))
            }
            EndpointPair::Unordered { node_u, node_v } if !self.graph.is_directed() => {
                (node == node_v && self.graph.has_edge(node, node_u))
                    || (node == node_u && self.graph.has_edge(node, node_v))
            }
            _ => false,
        }
    }

    pub fn iter(&self) -> Box<dyn Iterator<Item = EndpointPair<N>> + '_> {
        let node = &self.node;
        if self.graph.is_directed() {
            let ins = self
                .graph
                .predecessors(node)
                .into_iter()
                .flat_map(|preds| preds.iter())
                .map(move |p| EndpointPair::ordered(p.clone(), node.clone()));
            let outs = self
                .graph
                .successors(node)
                .into_iter()
                .flat_map(|succs| succs.iter())
                .filter(move |s| *s != node)
                .map(move |s| EndpointPair::ordered(node.clone(), s.clone()));
            Box::new(ins.chain(outs))
        } else {
            let it = self
                .graph
                .adjacent_nodes(node)
                .into_iter()
                .flat_map(|adj| adj.iter())
                .map(move |a| EndpointPair::unordered(node.clone(), a.clone()));
            Box::new(it)
        }
    }
}

impl<'a, N, G> std::fmt::Debug for IncidentEdges<'a, N, G>
where
    N: Node,
    G: BaseGraph<N> + ?Sized,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// A value graph seen as a plain graph. See [ValueGraph::as_graph].
pub struct AsGraph<'a, G: ?Sized>(pub(crate) &'a G);

impl<'a, N, G> BaseGraph<N> for AsGraph<'a, G>
where
    N: Node,
    G: ValueGraph<N> + ?Sized,
{
    type Value = G::Value;

    fn nodes(&self) -> Nodes<'_, N, Self::Value> {
        self.0.nodes()
    }

    fn is_directed(&self) -> bool {
        self.0.is_directed()
    }

    fn allows_self_loops(&self) -> bool {
        self.0.allows_self_loops()
    }

    fn node_order(&self) -> ElementOrder<N> {
        self.0.node_order()
    }

    fn adjacent_nodes(&self, node: &N) -> Result<NodeView<'_, N, Self::Value>, GraphError> {
        self.0.adjacent_nodes(node)
    }

    fn predecessors(&self, node: &N) -> Result<NodeView<'_, N, Self::Value>, GraphError> {
        self.0.predecessors(node)
    }

    fn successors(&self, node: &N) -> Result<NodeView<'_, N, Self::Value>, GraphError> {
        self.0.successors(node)
    }

    fn edge_count(&self) -> usize {
        self.0.edge_count()
    }
}

crate::graph::r#trait::impl_relations!(['a, N, G] AsGraph<'a, G> where N: Node, G: ValueGraph<N> + ?Sized);
