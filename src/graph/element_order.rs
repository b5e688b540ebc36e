use ahash::RandomState;
use indexmap::IndexMap;
use std::cmp::Ordering;
use std::hash::Hash;

/// The kind of iteration order a node collection follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderType {
    /// No guarantee at all. Removal may reshuffle remaining nodes.
    Unordered,
    /// Nodes come out in the order they were first added.
    Insertion,
    /// Nodes come out sorted by a comparator.
    Sorted,
}

/// Iteration-order policy of the node collection of a graph.
///
/// It is fixed when the graph is built and decides how the node map stores its entries.
pub struct ElementOrder<N> {
    order_type: OrderType,
    comparator: Option<fn(&N, &N) -> Ordering>,
}

impl<N> Clone for ElementOrder<N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N> Copy for ElementOrder<N> {}

impl<N> PartialEq for ElementOrder<N> {
    fn eq(&self, other: &Self) -> bool {
        self.order_type == other.order_type
            && self.comparator.map(|c| c as usize) == other.comparator.map(|c| c as usize)
    }
}

impl<N> Eq for ElementOrder<N> {}

impl<N> std::fmt::Debug for ElementOrder<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut s = f.debug_struct("ElementOrder");
        s.field("type", &self.order_type);
        if let Some(c) = self.comparator {
            s.field("comparator", &(c as usize as *const ()));
        }
        s.finish()
    }
}

impl<N> Default for ElementOrder<N> {
    fn default() -> Self {
        Self::insertion()
    }
}

impl<N> ElementOrder<N> {
    pub fn unordered() -> Self {
        Self {
            order_type: OrderType::Unordered,
            comparator: None,
        }
    }

    pub fn insertion() -> Self {
        Self {
            order_type: OrderType::Insertion,
            comparator: None,
        }
    }

    /// Sorted by the natural ordering of nodes.
    pub fn natural() -> Self
    where
        N: Ord,
    {
        Self::sorted(<N as Ord>::cmp)
    }

    pub fn sorted(comparator: fn(&N, &N) -> Ordering) -> Self {
        Self {
            order_type: OrderType::Sorted,
            comparator: Some(comparator),
        }
    }

    pub fn order_type(&self) -> OrderType {
        self.order_type
    }

    /// The comparator of a sorted order, `None` for other orders.
    pub fn comparator(&self) -> Option<fn(&N, &N) -> Ordering> {
        self.comparator
    }

    /// Creates an empty map whose key iteration realises this order.
    pub fn create_map<T>(&self, expected_size: usize) -> NodeMap<N, T>
    where
        N: Hash + Eq,
    {
        NodeMap {
            order: *self,
            entries: IndexMap::with_capacity_and_hasher(expected_size, RandomState::new()),
        }
    }
}

/// A map keyed by nodes whose iteration follows an [ElementOrder].
///
/// | order       | `insert`                 | `remove`     |
/// | ----------- | ------------------------ | ------------ |
/// | `Unordered` | $O(1)$                   | $O(1)$       |
/// | `Insertion` | $O(1)$                   | $O(n)$       |
/// | `Sorted`    | $O(\log n)$ search + $O(n)$ shift | $O(n)$ |
#[derive(Clone)]
pub struct NodeMap<N, T> {
    order: ElementOrder<N>,
    entries: IndexMap<N, T, RandomState>,
}

impl<N, T> NodeMap<N, T>
where
    N: Hash + Eq,
{
    pub fn order(&self) -> ElementOrder<N> {
        self.order
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &N) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &N) -> Option<&T> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &N) -> Option<&mut T> {
        self.entries.get_mut(key)
    }

    /// Inserts or replaces; a replaced entry keeps its position.
    pub fn insert(&mut self, key: N, value: T) -> Option<T> {
        match self.order.comparator {
            Some(cmp) if !self.entries.contains_key(&key) => {
                let pos = self.sorted_position(cmp, &key);
                self.entries.shift_insert(pos, key, value);
                None
            }
            _ => self.entries.insert(key, value),
        }
    }

    /// The entry of `key`, inserting `default()` at its ordered position first if absent.
    pub fn get_or_insert_with<F>(&mut self, key: N, default: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        let index = match (self.entries.get_index_of(&key), self.order.comparator) {
            (Some(index), _) => index,
            (None, Some(cmp)) => {
                let pos = self.sorted_position(cmp, &key);
                self.entries.shift_insert(pos, key, default());
                pos
            }
            (None, None) => self.entries.insert_full(key, default()).0,
        };
        &mut self.entries[index]
    }

    fn sorted_position(&self, cmp: fn(&N, &N) -> Ordering, key: &N) -> usize {
        self.entries
            .binary_search_by(|k, _| cmp(k, key))
            .unwrap_or_else(|pos| pos)
    }

    pub fn remove(&mut self, key: &N) -> Option<T> {
        match self.order.order_type {
            OrderType::Unordered => self.entries.swap_remove(key),
            OrderType::Insertion | OrderType::Sorted => self.entries.shift_remove(key),
        }
    }

    pub fn keys(&self) -> indexmap::map::Keys<'_, N, T> {
        self.entries.keys()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, N, T> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    fn by_reverse(a: &i32, b: &i32) -> Ordering {
        b.cmp(a)
    }

    #[test]
    fn insertion_keeps_first_insertion_position() {
        let mut m = ElementOrder::insertion().create_map(4);
        m.insert(3, "c");
        m.insert(1, "a");
        m.insert(2, "b");
        m.insert(3, "cc");
        assert_eq!(m.keys().copied().collect::<Vec<_>>(), vec![3, 1, 2]);
        assert_eq!(m.get(&3), Some(&"cc"));
        m.remove(&1);
        assert_eq!(m.keys().copied().collect::<Vec<_>>(), vec![3, 2]);
    }

    #[test]
    fn sorted_with_comparator() {
        let mut m = ElementOrder::sorted(by_reverse).create_map(4);
        for x in [2, 7, 1, 5] {
            m.insert(x, ());
        }
        assert_eq!(m.keys().copied().collect::<Vec<_>>(), vec![7, 5, 2, 1]);
    }

    #[test]
    fn get_or_insert_with_respects_order() {
        let mut m = ElementOrder::natural().create_map(4);
        *m.get_or_insert_with(5, || 0) += 1;
        *m.get_or_insert_with(2, || 0) += 1;
        *m.get_or_insert_with(5, || 0) += 1;
        assert_eq!(m.iter().map(|(k, v)| (*k, *v)).collect::<Vec<_>>(), vec![(2, 1), (5, 2)]);
    }

    #[test]
    fn comparator_only_for_sorted() {
        assert!(ElementOrder::<i32>::insertion().comparator().is_none());
        assert!(ElementOrder::<i32>::unordered().comparator().is_none());
        assert!(ElementOrder::<i32>::natural().comparator().is_some());
        assert_eq!(ElementOrder::<i32>::natural().order_type(), OrderType::Sorted);
    }

    #[test]
    fn orders_compare_by_type_and_comparator() {
        assert_eq!(ElementOrder::<i32>::insertion(), ElementOrder::insertion());
        assert_ne!(ElementOrder::<i32>::insertion(), ElementOrder::unordered());
        assert_ne!(ElementOrder::<i32>::natural(), ElementOrder::insertion());
    }

    #[quickcheck]
    fn natural_order_is_sorted(xs: Vec<i16>) {
        let mut m = ElementOrder::natural().create_map(xs.len());
        for x in xs.iter() {
            m.insert(*x, ());
        }
        let trial: Vec<_> = m.keys().copied().collect();
        let mut oracle = xs.clone();
        oracle.sort();
        oracle.dedup();
        assert_eq!(trial, oracle);
    }

    #[quickcheck]
    fn unordered_keeps_membership(xs: Vec<u8>, removed: Vec<u8>) {
        let mut m = ElementOrder::unordered().create_map(0);
        for x in xs.iter() {
            m.insert(*x, ());
        }
        for x in removed.iter() {
            m.remove(x);
        }
        for x in xs.iter() {
            assert_eq!(m.contains_key(x), !removed.contains(x));
        }
    }
}
