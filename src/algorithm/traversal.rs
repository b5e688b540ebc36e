use crate::graph::*;
use ahash::RandomState;
use std::collections::{HashSet, VecDeque};
use std::marker::PhantomData;
use tracing::warn;

/// Entry point of traversals over a [SuccessorsFunction].
///
/// In graph mode, a visited set guarantees that every reachable node is produced exactly
/// once, whatever cycles or converging paths the relation has.
/// In tree mode no visited set is kept.
/// The caller promises that the relation is a tree or a forest: no cycles, and at most one
/// path from the start nodes to any node.
/// On other relations, tree traversals may repeat nodes or never end.
pub struct Traverser<'g, N, S: ?Sized> {
    successors: &'g S,
    tree: bool,
    _node: PhantomData<fn() -> N>,
}

impl<'g, N, S> Traverser<'g, N, S>
where
    N: Node + 'g,
    S: SuccessorsFunction<N> + ?Sized + 'g,
{
    pub fn for_graph(successors: &'g S) -> Self {
        Self {
            successors,
            tree: false,
            _node: PhantomData,
        }
    }

    /// Fails with [GraphError::UndirectedTree] on undirected graphs, where every edge is
    /// a two-node cycle.
    pub fn for_tree(successors: &'g S) -> Result<Self, GraphError> {
        if !successors.can_be_tree() {
            return Err(GraphError::UndirectedTree);
        }
        Ok(Self {
            successors,
            tree: true,
            _node: PhantomData,
        })
    }

    pub fn breadth_first(&self, start: N) -> Result<Traversal<'g, N, S>, GraphError> {
        self.breadth_first_from([start])
    }

    /// Nodes in order of their distance from the closest start node.
    pub fn breadth_first_from<I>(&self, starts: I) -> Result<Traversal<'g, N, S>, GraphError>
    where
        I: IntoIterator<Item = N>,
    {
        self.traversal(starts, Order::BreadthFirst)
    }

    pub fn depth_first_pre_order(&self, start: N) -> Result<Traversal<'g, N, S>, GraphError> {
        self.depth_first_pre_order_from([start])
    }

    /// Every node before its descendants.
    pub fn depth_first_pre_order_from<I>(
        &self,
        starts: I,
    ) -> Result<Traversal<'g, N, S>, GraphError>
    where
        I: IntoIterator<Item = N>,
    {
        self.traversal(starts, Order::PreOrder)
    }

    pub fn depth_first_post_order(&self, start: N) -> Result<Traversal<'g, N, S>, GraphError> {
        self.depth_first_post_order_from([start])
    }

    /// Every node after its descendants.
    pub fn depth_first_post_order_from<I>(
        &self,
        starts: I,
    ) -> Result<Traversal<'g, N, S>, GraphError>
    where
        I: IntoIterator<Item = N>,
    {
        self.traversal(starts, Order::PostOrder)
    }

    fn traversal<I>(&self, starts: I, order: Order) -> Result<Traversal<'g, N, S>, GraphError>
    where
        I: IntoIterator<Item = N>,
    {
        let starts: Vec<N> = starts.into_iter().collect();
        for start in starts.iter() {
            self.successors.successor_iter(start).map(drop)?;
        }
        Ok(Traversal {
            successors: self.successors,
            starts,
            order,
            tree: self.tree,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Order {
    BreadthFirst,
    PreOrder,
    PostOrder,
}

/// A lazy, restartable sequence of nodes.
///
/// Nothing is computed until iteration; every call to [Traversal::iter] starts over.
pub struct Traversal<'g, N, S: ?Sized> {
    successors: &'g S,
    starts: Vec<N>,
    order: Order,
    tree: bool,
}

impl<'g, N, S> Traversal<'g, N, S>
where
    N: Node + 'g,
    S: SuccessorsFunction<N> + ?Sized + 'g,
{
    pub fn iter(&self) -> TraversalIter<'g, N, S> {
        TraversalIter::new(self.successors, self.starts.clone(), self.order, self.tree)
    }
}

impl<'g, N, S> IntoIterator for Traversal<'g, N, S>
where
    N: Node + 'g,
    S: SuccessorsFunction<N> + ?Sized + 'g,
{
    type Item = N;
    type IntoIter = TraversalIter<'g, N, S>;

    fn into_iter(self) -> Self::IntoIter {
        TraversalIter::new(self.successors, self.starts, self.order, self.tree)
    }
}

impl<'t, 'g, N, S> IntoIterator for &'t Traversal<'g, N, S>
where
    N: Node + 'g,
    S: SuccessorsFunction<N> + ?Sized + 'g,
{
    type Item = N;
    type IntoIter = TraversalIter<'g, N, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The successors still to be explored below one node.
enum Children<'g, N: 'g, S: SuccessorsFunction<N> + ?Sized + 'g> {
    Roots(std::vec::IntoIter<N>),
    Successors(S::Successors<'g>),
    Leaf,
}

impl<'g, N, S> Children<'g, N, S>
where
    N: Node + 'g,
    S: SuccessorsFunction<N> + ?Sized + 'g,
{
    fn of(successors: &'g S, node: &N) -> Self {
        match successors.successor_iter(node) {
            Ok(it) => Self::Successors(it),
            Err(err) => {
                warn!(?node, %err, "successor lookup failed mid-traversal, treating node as a leaf");
                Self::Leaf
            }
        }
    }
}

impl<'g, N, S> Iterator for Children<'g, N, S>
where
    N: Node + 'g,
    S: SuccessorsFunction<N> + ?Sized + 'g,
{
    type Item = N;

    fn next(&mut self) -> Option<N> {
        match self {
            Self::Roots(it) => it.next(),
            Self::Successors(it) => it.next(),
            Self::Leaf => None,
        }
    }
}

/// Iterator over a [Traversal].
pub struct TraversalIter<'g, N: 'g, S: SuccessorsFunction<N> + ?Sized + 'g> {
    successors: &'g S,
    /// `None` in tree mode.
    visited: Option<HashSet<N, RandomState>>,
    kind: IterKind<'g, N, S>,
}

enum IterKind<'g, N: 'g, S: SuccessorsFunction<N> + ?Sized + 'g> {
    BreadthFirst {
        queue: VecDeque<N>,
    },
    /// Frames of a node and its unexplored successors.
    /// The bottom frame has no node; its successors are the start nodes.
    DepthFirst {
        stack: Vec<(Option<N>, Children<'g, N, S>)>,
        post_order: bool,
    },
}

impl<'g, N, S> TraversalIter<'g, N, S>
where
    N: Node + 'g,
    S: SuccessorsFunction<N> + ?Sized + 'g,
{
    fn new(successors: &'g S, starts: Vec<N>, order: Order, tree: bool) -> Self {
        let mut visited = if tree {
            None
        } else {
            Some(HashSet::with_hasher(RandomState::new()))
        };
        let kind = match order {
            Order::BreadthFirst => {
                let queue = starts
                    .into_iter()
                    .filter(|n| first_visit(&mut visited, n))
                    .collect();
                IterKind::BreadthFirst { queue }
            }
            Order::PreOrder | Order::PostOrder => IterKind::DepthFirst {
                stack: vec![(None, Children::Roots(starts.into_iter()))],
                post_order: order == Order::PostOrder,
            },
        };
        Self {
            successors,
            visited,
            kind,
        }
    }
}

/// Marks `node` visited, returning whether it was new. Always new in tree mode.
fn first_visit<N: Node>(visited: &mut Option<HashSet<N, RandomState>>, node: &N) -> bool {
    match visited {
        None => true,
        Some(visited) => visited.insert(node.clone()),
    }
}

impl<'g, N, S> Iterator for TraversalIter<'g, N, S>
where
    N: Node + 'g,
    S: SuccessorsFunction<N> + ?Sized + 'g,
{
    type Item = N;

    fn next(&mut self) -> Option<N> {
        match &mut self.kind {
            IterKind::BreadthFirst { queue } => {
                let node = queue.pop_front()?;
                for child in Children::of(self.successors, &node) {
                    if first_visit(&mut self.visited, &child) {
                        queue.push_back(child);
                    }
                }
                Some(node)
            }
            IterKind::DepthFirst { stack, post_order } => loop {
                let next_child = match stack.last_mut() {
                    None => return None,
                    Some((_, children)) => children.next(),
                };
                match next_child {
                    Some(child) => {
                        if first_visit(&mut self.visited, &child) {
                            let grandchildren = Children::of(self.successors, &child);
                            if *post_order {
                                stack.push((Some(child), grandchildren));
                            } else {
                                stack.push((Some(child.clone()), grandchildren));
                                return Some(child);
                            }
                        }
                    }
                    None => {
                        if let Some((Some(node), _)) = stack.pop() {
                            if *post_order {
                                return Some(node);
                            }
                        }
                    }
                }
            },
        }
    }
}
