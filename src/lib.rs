//! In-memory graphs, directed or undirected, with optional values on edges,
//! and lazy traversals over any successor relation.
//!
//! ```rust
//! use configraph::{algorithm::Traverser, graph::*};
//!
//! let mut g = GraphBuilder::directed().build();
//! g.put_edge(1, 3).unwrap();
//! g.put_edge(1, 4).unwrap();
//! g.put_edge(2, 5).unwrap();
//! g.put_edge(4, 5).unwrap();
//!
//! let bfs: Vec<_> = Traverser::for_graph(&g)
//!     .breadth_first_from([1, 2])
//!     .unwrap()
//!     .iter()
//!     .collect();
//! assert_eq!(bfs, vec![1, 2, 3, 4, 5]);
//! ```
pub mod algorithm;
pub mod graph;
