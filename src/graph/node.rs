use std::fmt::Debug;
use std::hash::Hash;

/// Requirements on node types.
///
/// Nodes are used as map keys, so equality and hashing must be cheap and consistent.
/// `Debug` lets errors name the node involved.
pub trait Node: Clone + Eq + Hash + Debug {}

impl<T> Node for T where T: Clone + Eq + Hash + Debug {}

/// Edge value of graphs that carry no values.
///
/// A plain graph is a value graph whose every edge holds `Presence`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Presence;

/// Expected node count when a builder is not told otherwise.
pub const DEFAULT_NODE_COUNT: usize = 10;

/// Initial capacity of per-node adjacency maps.
pub(crate) const INNER_CAPACITY: usize = 2;
