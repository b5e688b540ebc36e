//! Graph traits, configurable containers and the views they hand out.
//!
//! # Graphs and value graphs
//!
//! A graph is a set of nodes and a set of edges between them.
//! Nodes are caller-provided values of any type implementing [Node].
//! Edges may carry values; plain graphs are value graphs whose every edge carries
//! the zero-sized [Presence], so both share one container implementation.
//!
//! # Configuration
//!
//! Whether a graph is directed, whether it accepts self-loops and in which order its
//! nodes are iterated are fixed when it is built by a [GraphBuilder] or [ValueGraphBuilder].
//!
//! # Views
//!
//! Accessors such as [BaseGraph::successors] or [BaseGraph::edges] return live views
//! borrowed from the graph.
//! They are recomputed on every iteration and never buffer.
//! Borrowing rules make it impossible to mutate a graph while a view of it is alive.

mod node;
pub use self::node::*;
mod error;
pub use self::error::*;
mod element_order;
pub use self::element_order::*;
mod endpoint_pair;
pub use self::endpoint_pair::*;
mod endpoint_pair_iterator;
pub use self::endpoint_pair_iterator::*;
mod connections;
pub use self::connections::{NodeIter, NodeView};
mod views;
pub use self::views::*;
mod r#trait;
pub use self::r#trait::*;
mod builder;
pub use self::builder::*;
mod configurable_value_graph;
pub use self::configurable_value_graph::*;
mod configurable_mutable_value_graph;
pub use self::configurable_mutable_value_graph::*;
mod configurable_mutable_graph;
pub use self::configurable_mutable_graph::*;
mod immutable;
pub use self::immutable::*;
mod graph_debug;
pub use self::graph_debug::*;

mod directed;
mod undirected;

#[cfg(test)]
pub use self::tests::*;
