//! Algorithms over graphs and successor relations.
mod traversal;
pub use self::traversal::*;
