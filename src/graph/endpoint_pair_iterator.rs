use crate::graph::*;
use ahash::RandomState;
use std::collections::HashSet;

/// Walks every edge of a graph exactly once.
///
/// Nodes are visited in [BaseGraph::node_order]; for each node, its successors are
/// walked in adjacency order.
/// In undirected graphs, an edge is produced from whichever endpoint is visited first
/// and skipped from the other one.
pub struct EndpointPairIterator<'a, N: Node, G: BaseGraph<N> + ?Sized> {
    graph: &'a G,
    nodes: NodesIter<'a, N, G::Value>,
    current: Option<(&'a N, NodeIter<'a, N, G::Value>)>,
    visited: Option<HashSet<&'a N, RandomState>>,
}

impl<'a, N, G> EndpointPairIterator<'a, N, G>
where
    N: Node,
    G: BaseGraph<N> + ?Sized,
{
    pub fn new(graph: &'a G) -> Self {
        let visited = if graph.is_directed() {
            None
        } else {
            Some(HashSet::with_capacity_and_hasher(
                graph.nodes().len(),
                RandomState::new(),
            ))
        };
        Self {
            graph,
            nodes: graph.nodes().iter(),
            current: None,
            visited,
        }
    }

    /// Moves to the next node with a successor view.
    /// Returns `false` when nodes are exhausted.
    fn advance(&mut self) -> bool {
        if let (Some(visited), Some((node, _))) = (self.visited.as_mut(), self.current.as_ref()) {
            // marked only after its own successors are walked, so a self-loop survives
            visited.insert(*node);
        }
        loop {
            let Some(node) = self.nodes.next() else {
                self.current = None;
                return false;
            };
            match self.graph.successors(node) {
                Ok(succs) => {
                    self.current = Some((node, succs.iter()));
                    return true;
                }
                Err(_) => continue,
            }
        }
    }
}

impl<'a, N, G> Iterator for EndpointPairIterator<'a, N, G>
where
    N: Node,
    G: BaseGraph<N> + ?Sized,
{
    type Item = EndpointPair<N>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((node, succs)) = self.current.as_mut() {
                for succ in succs.by_ref() {
                    match &self.visited {
                        None => return Some(EndpointPair::ordered(node.clone(), succ.clone())),
                        Some(visited) if !visited.contains(succ) => {
                            return Some(EndpointPair::unordered(node.clone(), succ.clone()))
                        }
                        Some(_) => {}
                    }
                }
            }
            if !self.advance() {
                return None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::*;

    #[test]
    fn directed_edges_follow_node_then_adjacency_order() {
        let mut g = GraphBuilder::directed().allows_self_loops(true).build();
        g.put_edge(1, 2).unwrap();
        g.put_edge(3, 1).unwrap();
        g.put_edge(1, 1).unwrap();
        g.put_edge(2, 3).unwrap();
        let edges: Vec<_> = EndpointPairIterator::new(&g).collect();
        assert_eq!(
            edges,
            vec![
                EndpointPair::ordered(1, 2),
                EndpointPair::ordered(1, 1),
                EndpointPair::ordered(2, 3),
                EndpointPair::ordered(3, 1),
            ]
        );
    }

    #[test]
    fn undirected_edges_once_each() {
        let mut g = GraphBuilder::undirected().allows_self_loops(true).build();
        g.put_edge(1, 2).unwrap();
        g.put_edge(2, 3).unwrap();
        g.put_edge(2, 2).unwrap();
        g.put_edge(3, 1).unwrap();
        let edges: Vec<_> = EndpointPairIterator::new(&g).collect();
        assert_eq!(edges.len(), g.edge_count());
        assert_eq!(edges.len(), 4);
        for (a, b) in [(1, 2), (2, 3), (2, 2), (1, 3)] {
            assert_eq!(
                edges
                    .iter()
                    .filter(|e| **e == EndpointPair::unordered(a, b))
                    .count(),
                1
            );
        }
        assert!(edges.iter().all(|e| !e.is_ordered()));
    }

    #[test]
    fn isolated_nodes_yield_nothing() {
        let mut g = GraphBuilder::undirected().build();
        g.add_node('x');
        g.add_node('y');
        assert_eq!(EndpointPairIterator::new(&g).count(), 0);
    }
}
