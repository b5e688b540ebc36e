use crate::graph::*;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// The two endpoints of an edge.
///
/// An ordered pair denotes a directed edge from `source` to `target`;
/// an unordered pair denotes an undirected edge.
/// Pairs know nothing about graphs: a pair whose ordered-ness does not match a graph's
/// directedness is rejected when it is used with that graph.
#[derive(Debug, Clone)]
pub enum EndpointPair<N> {
    Ordered { source: N, target: N },
    Unordered { node_u: N, node_v: N },
}

impl<N> EndpointPair<N> {
    pub fn ordered(source: N, target: N) -> Self {
        Self::Ordered { source, target }
    }

    pub fn unordered(node_u: N, node_v: N) -> Self {
        Self::Unordered { node_u, node_v }
    }

    /// An ordered pair if `graph` is directed, an unordered one otherwise.
    pub fn of<G>(graph: &G, node_u: N, node_v: N) -> Self
    where
        N: Node,
        G: BaseGraph<N> + ?Sized,
    {
        if graph.is_directed() {
            Self::ordered(node_u, node_v)
        } else {
            Self::unordered(node_u, node_v)
        }
    }

    pub fn is_ordered(&self) -> bool {
        matches!(self, Self::Ordered { .. })
    }

    /// The first node. For ordered pairs, the source.
    pub fn node_u(&self) -> &N {
        match self {
            Self::Ordered { source, .. } => source,
            Self::Unordered { node_u, .. } => node_u,
        }
    }

    /// The second node. For ordered pairs, the target.
    pub fn node_v(&self) -> &N {
        match self {
            Self::Ordered { target, .. } => target,
            Self::Unordered { node_v, .. } => node_v,
        }
    }

    pub fn source(&self) -> Result<&N, GraphError> {
        match self {
            Self::Ordered { source, .. } => Ok(source),
            Self::Unordered { .. } => Err(GraphError::UnsupportedOnUndirected),
        }
    }

    pub fn target(&self) -> Result<&N, GraphError> {
        match self {
            Self::Ordered { target, .. } => Ok(target),
            Self::Unordered { .. } => Err(GraphError::UnsupportedOnUndirected),
        }
    }

    /// The endpoint opposite to `node`.
    pub fn adjacent_node(&self, node: &N) -> Result<&N, GraphError>
    where
        N: PartialEq + std::fmt::Debug,
    {
        if node == self.node_u() {
            Ok(self.node_v())
        } else if node == self.node_v() {
            Ok(self.node_u())
        } else {
            Err(GraphError::NodeNotInEndpointPair {
                pair: format!("{:?}", self),
                node: format!("{:?}", node),
            })
        }
    }

    /// Both endpoints, `node_u` first.
    pub fn iter(&self) -> impl Iterator<Item = &N> + '_ {
        [self.node_u(), self.node_v()].into_iter()
    }

    pub fn into_nodes(self) -> (N, N) {
        match self {
            Self::Ordered { source, target } => (source, target),
            Self::Unordered { node_u, node_v } => (node_u, node_v),
        }
    }
}

impl<N: PartialEq> PartialEq for EndpointPair<N> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Self::Ordered { source, target },
                Self::Ordered {
                    source: other_source,
                    target: other_target,
                },
            ) => source == other_source && target == other_target,
            (
                Self::Unordered { node_u, node_v },
                Self::Unordered {
                    node_u: other_u,
                    node_v: other_v,
                },
            ) => {
                // If the first nodes match, the second must match too; otherwise check crosswise.
                if node_u == other_u {
                    node_v == other_v
                } else {
                    node_u == other_v && node_v == other_u
                }
            }
            _ => false,
        }
    }
}

impl<N: Eq> Eq for EndpointPair<N> {}

impl<N: Hash> Hash for EndpointPair<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Ordered { source, target } => {
                true.hash(state);
                source.hash(state);
                target.hash(state);
            }
            Self::Unordered { node_u, node_v } => {
                false.hash(state);
                let hash_of = |n: &N| {
                    let mut h = DefaultHasher::new();
                    n.hash(&mut h);
                    h.finish()
                };
                hash_of(node_u).wrapping_add(hash_of(node_v)).hash(state);
            }
        }
    }
}

impl<N: std::fmt::Display> std::fmt::Display for EndpointPair<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ordered { source, target } => write!(f, "<{} -> {}>", source, target),
            Self::Unordered { node_u, node_v } => write!(f, "[{}, {}]", node_u, node_v),
        }
    }
}

impl<'a, N> IntoIterator for &'a EndpointPair<N> {
    type Item = &'a N;
    type IntoIter = std::array::IntoIter<&'a N, 2>;

    fn into_iter(self) -> Self::IntoIter {
        [self.node_u(), self.node_v()].into_iter()
    }
}
