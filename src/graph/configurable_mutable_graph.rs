use crate::graph::*;

/// A mutable graph without edge values, configured by a [GraphBuilder].
///
/// Backed by a [ConfigurableMutableValueGraph] whose every edge holds [Presence].
#[derive(Clone)]
pub struct ConfigurableMutableGraph<N> {
    graph: ConfigurableMutableValueGraph<N, Presence>,
}

impl<N: Node> ConfigurableMutableGraph<N> {
    pub(crate) fn new(config: &GraphConfig<N>) -> Self {
        Self {
            graph: ConfigurableMutableValueGraph::new(config),
        }
    }

    pub(crate) fn into_inner(self) -> ConfigurableValueGraph<N, Presence> {
        self.graph.into_inner()
    }
}

crate::graph::r#trait::forward_base_graph!(
    [N: Node] ConfigurableMutableGraph<N> => graph, Value = Presence
);

impl<N: Node> MutableGraph<N> for ConfigurableMutableGraph<N> {
    fn add_node(&mut self, node: N) -> bool {
        self.graph.add_node(node)
    }

    fn put_edge(&mut self, node_u: N, node_v: N) -> Result<bool, GraphError> {
        Ok(self.graph.put_edge_value(node_u, node_v, Presence)?.is_none())
    }

    fn remove_node(&mut self, node: &N) -> bool {
        self.graph.remove_node(node)
    }

    fn remove_edge(&mut self, node_u: &N, node_v: &N) -> bool {
        self.graph.remove_edge(node_u, node_v).is_some()
    }
}

impl<N: Node> PartialEq for ConfigurableMutableGraph<N> {
    fn eq(&self, other: &Self) -> bool {
        graphs_equal::<N, _, _>(self, other)
    }
}

impl<N: Node> Eq for ConfigurableMutableGraph<N> {}

impl<N: Node> std::fmt::Debug for ConfigurableMutableGraph<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", GraphDebug::new(self))
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::*;
    use petgraph::graphmap::{DiGraphMap, UnGraphMap};
    use petgraph::Direction;
    use quickcheck_macros::*;
    use std::collections::BTreeSet;

    fn set<'a, I: IntoIterator<Item = &'a u8>>(it: I) -> BTreeSet<u8> {
        it.into_iter().copied().collect()
    }

    fn check_directed(ops: &Ops) {
        let mut trial = GraphBuilder::directed().allows_self_loops(true).build();
        let mut oracle = DiGraphMap::<u8, ()>::new();
        for op in ops.iter() {
            match *op {
                Op::AddNode(n) => {
                    let fresh = !oracle.contains_node(n);
                    oracle.add_node(n);
                    assert_eq!(trial.add_node(n), fresh);
                }
                Op::RemoveNode(n) => {
                    assert_eq!(trial.remove_node(&n), oracle.remove_node(n));
                }
                Op::PutEdge(u, v) => {
                    let fresh = oracle.add_edge(u, v, ()).is_none();
                    assert_eq!(trial.put_edge(u, v), Ok(fresh));
                }
                Op::RemoveEdge(u, v) => {
                    assert_eq!(trial.remove_edge(&u, &v), oracle.remove_edge(u, v).is_some());
                }
            }
        }
        assert_eq!(set(trial.nodes()), oracle.nodes().collect());
        assert_eq!(trial.edge_count(), oracle.edge_count());
        assert_eq!(trial.edges().iter().count(), oracle.edge_count());
        for n in oracle.nodes() {
            assert_eq!(
                set(trial.successors(&n).unwrap()),
                oracle.neighbors_directed(n, Direction::Outgoing).collect()
            );
            assert_eq!(
                set(trial.predecessors(&n).unwrap()),
                oracle.neighbors_directed(n, Direction::Incoming).collect()
            );
        }
        for (u, v, _) in oracle.all_edges() {
            assert!(trial.has_edge(&u, &v));
            assert!(trial.edges().contains(&EndpointPair::ordered(u, v)));
        }
    }

    fn check_undirected(ops: &Ops) {
        let mut trial = GraphBuilder::undirected().allows_self_loops(true).build();
        let mut oracle = UnGraphMap::<u8, ()>::new();
        for op in ops.iter() {
            match *op {
                Op::AddNode(n) => {
                    let fresh = !oracle.contains_node(n);
                    oracle.add_node(n);
                    assert_eq!(trial.add_node(n), fresh);
                }
                Op::RemoveNode(n) => {
                    assert_eq!(trial.remove_node(&n), oracle.remove_node(n));
                }
                Op::PutEdge(u, v) => {
                    let fresh = oracle.add_edge(u, v, ()).is_none();
                    assert_eq!(trial.put_edge(u, v), Ok(fresh));
                }
                Op::RemoveEdge(u, v) => {
                    assert_eq!(trial.remove_edge(&u, &v), oracle.remove_edge(u, v).is_some());
                }
            }
        }
        assert_eq!(set(trial.nodes()), oracle.nodes().collect());
        assert_eq!(trial.edge_count(), oracle.edge_count());
        assert_eq!(trial.edges().iter().count(), oracle.edge_count());
        let degree_sum: usize = trial.nodes().iter().map(|n| trial.degree(n).unwrap()).sum();
        assert_eq!(degree_sum, 2 * trial.edge_count());
        for n in oracle.nodes() {
            assert_eq!(set(trial.adjacent_nodes(&n).unwrap()), oracle.neighbors(n).collect());
        }
        for (u, v, _) in oracle.all_edges() {
            assert!(trial.has_edge(&u, &v));
            assert!(trial.has_edge(&v, &u));
            assert!(trial.edges().contains(&EndpointPair::unordered(v, u)));
        }
    }

    #[quickcheck]
    fn directed_matches_oracle(ops: Ops) {
        check_directed(&ops);
    }

    #[quickcheck]
    fn undirected_matches_oracle(ops: Ops) {
        check_undirected(&ops);
    }

    #[test]
    fn put_edge_reports_novelty() {
        let mut g = GraphBuilder::directed().build();
        assert_eq!(g.put_edge(1, 2), Ok(true));
        assert_eq!(g.put_edge(1, 2), Ok(false));
        assert_eq!(g.put_edge(2, 1), Ok(true));
        assert_eq!(
            g.put_edge(3, 3),
            Err(GraphError::SelfLoopNotAllowed("3".to_string()))
        );
        assert!(g.remove_edge(&1, &2));
        assert!(!g.remove_edge(&1, &2));
        assert_eq!(
            g.put_edge_connecting(EndpointPair::unordered(1, 2)),
            Err(GraphError::EndpointsMismatch)
        );
        assert_eq!(g.remove_edge_connecting(&EndpointPair::ordered(2, 1)), Ok(true));
    }

    fn check_predecessor_relation(mut g: ConfigurableMutableGraph<u8>) {
        g.put_edge(1, 2).unwrap();
        g.put_edge(3, 2).unwrap();
        g.add_node(4);
        assert_eq!(g.predecessor_iter(&2).unwrap().collect::<Vec<_>>(), vec![1, 3]);
        for n in [1, 2, 3, 4] {
            let relation: Vec<_> = g.predecessor_iter(&n).unwrap().collect();
            let view: Vec<_> = g.predecessors(&n).unwrap().iter().copied().collect();
            assert_eq!(relation, view);
        }
        assert!(matches!(
            g.predecessor_iter(&9),
            Err(GraphError::NodeNotInGraph(_))
        ));
    }

    #[test]
    fn predecessor_relation_matches_predecessors() {
        check_predecessor_relation(GraphBuilder::directed().build());
        check_predecessor_relation(GraphBuilder::undirected().build());
    }

    #[test]
    fn endpoint_pair_of_follows_directedness() {
        let d = GraphBuilder::<u8>::directed().build();
        let u = GraphBuilder::<u8>::undirected().build();
        assert!(EndpointPair::of(&d, 1, 2).is_ordered());
        assert!(!EndpointPair::of(&u, 1, 2).is_ordered());
    }

    #[test]
    fn debug_lists_nodes_and_edges() {
        let mut g = GraphBuilder::directed().build();
        g.put_edge('a', 'b').unwrap();
        assert_eq!(format!("{:?}", g), "'a'\n  --> 'b'\n'b'\n");
    }
}
