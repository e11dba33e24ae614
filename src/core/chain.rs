//! Owned singly-linked chain.
//!
//! A [`Chain`] exclusively owns its nodes through `head`; every `next` edge
//! is an owning `Box`. Removal splices a node out by moving its successor
//! edge into the predecessor and dropping the node on the spot, so no
//! released node is ever reachable afterwards.

use crate::core::node::{Link, Node, splice_matching};
use crate::error::ChainError;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::iter::FusedIterator;
use tracing::{debug, trace};

/// An ordered, singly-linked sequence of values.
///
/// # Examples
///
/// ```
/// use linkchain::core::Chain;
///
/// let mut chain = Chain::new();
/// for value in [10, 20, 10, 10, 30, 10, 30, 17] {
///     chain.append_to_end(value);
/// }
/// chain.remove_duplicates();
/// assert_eq!(chain.to_vec(), vec![10, 20, 30, 17]);
/// assert_eq!(chain.kth_from_end(1), Ok(&17));
/// ```
pub struct Chain<T> {
    /// First node, or `None` when empty.
    head: Link<T>,

    /// Number of nodes reachable from `head`.
    len: usize,
}

impl<T> Chain<T> {
    /// Creates an empty chain.
    #[must_use]
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Returns the number of elements.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the chain holds no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the first value, if any.
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    /// Returns the last value, if any.
    #[must_use]
    pub fn back(&self) -> Option<&T> {
        self.iter().last()
    }

    /// Appends `value` after the current tail.
    ///
    /// Walks from `head` to the last node, so this is O(n) in the current
    /// length. All existing nodes keep their order.
    pub fn append_to_end(&mut self, value: T) {
        *self.tail_link() = Some(Box::new(Node::new(value)));
        self.len += 1;
    }

    /// Inserts `value` before the current head.
    pub fn push_front(&mut self, value: T) {
        let mut node = Box::new(Node::new(value));
        node.next = self.head.take();
        self.head = Some(node);
        self.len += 1;
    }

    /// Detaches the head node and returns its value.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::EmptyStructure`] if the chain is empty.
    pub fn pop_front(&mut self) -> Result<T, ChainError> {
        self.take_front().ok_or(ChainError::EmptyStructure)
    }

    /// Releases every node.
    pub fn clear(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        self.len = 0;
    }

    /// Removes every element equal to `value`, keeping survivors in order.
    ///
    /// Runs in O(n) time with O(1) extra space. Calling it again with the
    /// same value is a no-op. Returns the number of elements removed.
    pub fn remove_element(&mut self, value: &T) -> usize
    where
        T: PartialEq,
    {
        let removed = splice_matching(&mut self.head, |candidate| candidate == value);
        self.len -= removed;
        debug!(removed, remaining = self.len, "removed matching elements");
        removed
    }

    /// Removes every element whose value already appeared earlier in the chain.
    ///
    /// The first occurrence of each distinct value survives and relative order
    /// is preserved. Uses a set of seen values, so extra space is O(d) for d
    /// distinct values. Returns the number of elements removed.
    pub fn remove_duplicates(&mut self) -> usize
    where
        T: Eq + Hash + Clone,
    {
        let Some(head) = self.head.as_deref_mut() else {
            return 0;
        };

        let mut seen = HashSet::new();
        seen.insert(head.value.clone());

        let mut removed = 0;
        let mut cursor = Some(head);
        while let Some(node) = cursor {
            if let Some(mut duplicate) = node.next.take_if(|next| seen.contains(&next.value)) {
                node.next = duplicate.next.take();
                removed += 1;
                cursor = Some(node);
            } else {
                if let Some(next) = node.next.as_deref() {
                    seen.insert(next.value.clone());
                }
                cursor = node.next.as_deref_mut();
            }
        }

        self.len -= removed;
        debug!(
            removed,
            distinct = seen.len(),
            "removed duplicate elements"
        );
        removed
    }

    /// Removes duplicates without auxiliary storage.
    ///
    /// For each node a runner sweeps the remainder of the chain and splices
    /// out later nodes with an equal value. O(n²) time, O(1) space.
    pub fn remove_duplicates_unbuffered(&mut self) -> usize
    where
        T: PartialEq,
    {
        let mut removed = 0;
        let mut current = self.head.as_deref_mut();
        while let Some(Node { value, next }) = current {
            let value = &*value;
            removed += splice_matching(next, |candidate| candidate == value);
            current = next.as_deref_mut();
        }

        self.len -= removed;
        debug!(removed, "removed duplicate elements without buffer");
        removed
    }

    /// Returns the value `k` positions before the tail (`k = 1` is the last).
    ///
    /// Uses a lead cursor advanced `k` nodes ahead of a lag cursor, then moves
    /// both until the lead runs off the end. Single pass, O(1) space.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::IndexOutOfRange`] if `k` is zero or larger than
    /// the number of elements (which covers every `k` on an empty chain).
    pub fn kth_from_end(&self, k: usize) -> Result<&T, ChainError> {
        let out_of_range = || ChainError::IndexOutOfRange { k, len: self.len };
        if k == 0 {
            return Err(out_of_range());
        }

        let mut lead = self.head.as_deref();
        for _ in 0..k {
            lead = lead.ok_or_else(out_of_range)?.next.as_deref();
        }

        let mut lag = self.head.as_deref();
        while let Some(node) = lead {
            lead = node.next.as_deref();
            lag = lag.and_then(|node| node.next.as_deref());
        }

        trace!(k, "resolved position from end");
        lag.map(|node| &node.value).ok_or_else(out_of_range)
    }

    /// Returns a fresh front-to-back iterator over the values.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }

    /// Copies the values into a `Vec` in chain order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Returns the empty edge after the last node.
    fn tail_link(&mut self) -> &mut Link<T> {
        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        link
    }

    fn take_front(&mut self) -> Option<T> {
        self.head.take().map(|mut node| {
            self.head = node.next.take();
            self.len -= 1;
            node.value
        })
    }
}

impl<T> Default for Chain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Chain<T> {
    // Iterative so long chains don't recurse through nested Box drops.
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for Chain<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for Chain<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Chain<T> {}

impl<T: fmt::Debug> fmt::Debug for Chain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders the chain as `1 -> 2 -> NULL`.
impl<T: fmt::Display> fmt::Display for Chain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self {
            write!(f, "{value} -> ")?;
        }
        f.write_str("NULL")
    }
}

impl<T> Extend<T> for Chain<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut added = 0;
        let mut link = self.tail_link();
        for value in iter {
            let node = link.insert(Box::new(Node::new(value)));
            link = &mut node.next;
            added += 1;
        }
        self.len += added;
    }
}

impl<T> FromIterator<T> for Chain<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut chain = Self::new();
        chain.extend(iter);
        chain
    }
}

impl<T> From<Vec<T>> for Chain<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Serialize> Serialize for Chain<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Chain<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Self::from)
    }
}

/// Borrowing iterator over a [`Chain`].
#[derive(Debug)]
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    remaining: usize,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            next: self.next,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            self.remaining -= 1;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a Chain<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator over a [`Chain`].
#[derive(Debug)]
pub struct IntoIter<T>(Chain<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.take_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for Chain<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn chain_of(values: &[i64]) -> Chain<i64> {
        let mut chain = Chain::new();
        for &value in values {
            chain.append_to_end(value);
        }
        chain
    }

    #[test]
    fn test_new_chain_is_empty() {
        let chain: Chain<i64> = Chain::new();
        assert!(chain.is_empty());
        assert_eq!(chain.len(), 0);
        assert_eq!(chain.iter().count(), 0);
        assert!(chain.front().is_none());
        assert!(chain.back().is_none());
    }

    #[test]
    fn test_append_preserves_order() {
        let chain = chain_of(&[10, 20, 10, 10, 30, 10, 30, 17]);
        assert_eq!(chain.to_vec(), vec![10, 20, 10, 10, 30, 10, 30, 17]);
        assert_eq!(chain.len(), 8);
        assert_eq!(chain.front(), Some(&10));
        assert_eq!(chain.back(), Some(&17));
    }

    #[test]
    fn test_remove_duplicates_scenario() {
        let mut chain = chain_of(&[10, 20, 10, 10, 30, 10, 30, 17]);
        assert_eq!(chain.remove_duplicates(), 4);
        assert_eq!(chain.to_vec(), vec![10, 20, 30, 17]);
        assert_eq!(chain.len(), 4);
    }

    #[test]
    fn test_remove_duplicates_empty_and_single() {
        let mut empty: Chain<i64> = Chain::new();
        assert_eq!(empty.remove_duplicates(), 0);
        assert!(empty.is_empty());

        let mut single = chain_of(&[4]);
        assert_eq!(single.remove_duplicates(), 0);
        assert_eq!(single.to_vec(), vec![4]);
    }

    #[test]
    fn test_remove_duplicates_unbuffered_matches_buffered() {
        let input = [3, 1, 3, 3, 2, 1, 5, 2, 3];
        let mut buffered = chain_of(&input);
        let mut unbuffered = chain_of(&input);
        assert_eq!(buffered.remove_duplicates(), unbuffered.remove_duplicates_unbuffered());
        assert_eq!(buffered, unbuffered);
        assert_eq!(unbuffered.to_vec(), vec![3, 1, 2, 5]);
    }

    #[test]
    fn test_remove_element_all_matching() {
        let mut chain = chain_of(&[5, 5, 5]);
        assert_eq!(chain.remove_element(&5), 3);
        assert!(chain.is_empty());
        assert_eq!(chain.remove_element(&5), 0);
        assert!(chain.is_empty());
    }

    #[test]
    fn test_remove_element_mixed() {
        let mut chain = chain_of(&[10, 20, 10, 10, 30, 10, 30, 17]);
        assert_eq!(chain.remove_element(&10), 4);
        assert_eq!(chain.to_vec(), vec![20, 30, 30, 17]);
        assert_eq!(chain.len(), 4);
    }

    #[test]
    fn test_remove_element_tail_match() {
        let mut chain = chain_of(&[1, 2, 3, 3]);
        chain.remove_element(&3);
        assert_eq!(chain.to_vec(), vec![1, 2]);
        chain.append_to_end(4);
        assert_eq!(chain.to_vec(), vec![1, 2, 4]);
    }

    #[test]
    fn test_remove_element_absent() {
        let mut chain = chain_of(&[1, 2, 3]);
        assert_eq!(chain.remove_element(&9), 0);
        assert_eq!(chain.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_kth_from_end_scenario() {
        let chain = chain_of(&[1, 2, 3, 4, 5]);
        assert_eq!(chain.kth_from_end(3), Ok(&3));
        assert_eq!(chain.kth_from_end(1), Ok(&5));
        assert_eq!(chain.kth_from_end(5), Ok(&1));
    }

    #[test]
    fn test_kth_from_end_out_of_range() {
        let chain = chain_of(&[1, 2, 3]);
        assert_eq!(
            chain.kth_from_end(4),
            Err(ChainError::IndexOutOfRange { k: 4, len: 3 })
        );
        assert_eq!(
            chain.kth_from_end(0),
            Err(ChainError::IndexOutOfRange { k: 0, len: 3 })
        );
    }

    #[test]
    fn test_kth_from_end_empty() {
        let chain: Chain<i64> = Chain::new();
        assert_eq!(
            chain.kth_from_end(1),
            Err(ChainError::IndexOutOfRange { k: 1, len: 0 })
        );
    }

    #[test]
    fn test_push_and_pop_front() {
        let mut chain = chain_of(&[2, 3]);
        chain.push_front(1);
        assert_eq!(chain.to_vec(), vec![1, 2, 3]);
        assert_eq!(chain.pop_front(), Ok(1));
        assert_eq!(chain.pop_front(), Ok(2));
        assert_eq!(chain.pop_front(), Ok(3));
        assert_eq!(chain.pop_front(), Err(ChainError::EmptyStructure));
        assert!(chain.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut chain = chain_of(&[1, 2, 3]);
        chain.clear();
        assert!(chain.is_empty());
        assert_eq!(chain.len(), 0);
        chain.append_to_end(8);
        assert_eq!(chain.to_vec(), vec![8]);
    }

    #[test]
    fn test_display() {
        assert_eq!(chain_of(&[1, 2, 3]).to_string(), "1 -> 2 -> 3 -> NULL");
        assert_eq!(Chain::<i64>::new().to_string(), "NULL");
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", chain_of(&[1, 2])), "[1, 2]");
    }

    #[test]
    fn test_iter_is_restartable() {
        let chain = chain_of(&[4, 5, 6]);
        let first: Vec<_> = chain.iter().copied().collect();
        let second: Vec<_> = chain.iter().copied().collect();
        assert_eq!(first, second);
        assert_eq!(chain.iter().len(), 3);
    }

    #[test]
    fn test_extend_and_collect() {
        let mut chain: Chain<i64> = (1..=3).collect();
        chain.extend([4, 5]);
        assert_eq!(chain.len(), 5);
        assert_eq!(chain.to_vec(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_into_iter_owned() {
        let chain = chain_of(&[7, 8, 9]);
        let mut iter = chain.into_iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next(), Some(7));
        assert_eq!(iter.collect::<Vec<_>>(), vec![8, 9]);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = chain_of(&[1, 1, 2]);
        let mut copy = original.clone();
        copy.remove_duplicates();
        assert_eq!(original.to_vec(), vec![1, 1, 2]);
        assert_eq!(copy.to_vec(), vec![1, 2]);
    }

    #[test]
    fn test_generic_payload() {
        let mut chain: Chain<String> = ["a", "b", "a"].into_iter().map(String::from).collect();
        chain.remove_element(&"a".to_string());
        assert_eq!(chain.to_vec(), vec!["b".to_string()]);
    }

    #[test]
    fn test_serde_roundtrip_as_sequence() {
        let chain = chain_of(&[3, 1, 2]);
        let json = serde_json::to_string(&chain).unwrap();
        assert_eq!(json, "[3,1,2]");
        let back: Chain<i64> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, chain);
    }

    /// Payload that bumps a shared counter when dropped. Clones get a
    /// counter of their own, so copies held by a seen-set are not counted.
    #[derive(Debug)]
    struct Tracked(i64, Rc<Cell<usize>>);

    impl Tracked {
        fn untracked(value: i64) -> Self {
            Self(value, Rc::new(Cell::new(0)))
        }
    }

    impl Clone for Tracked {
        fn clone(&self) -> Self {
            Self::untracked(self.0)
        }
    }

    impl PartialEq for Tracked {
        fn eq(&self, other: &Self) -> bool {
            self.0 == other.0
        }
    }

    impl Eq for Tracked {}

    impl Hash for Tracked {
        fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
            self.0.hash(state);
        }
    }

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.1.set(self.1.get() + 1);
        }
    }

    fn tracked_chain(values: &[i64], drops: &Rc<Cell<usize>>) -> Chain<Tracked> {
        values
            .iter()
            .map(|&value| Tracked(value, Rc::clone(drops)))
            .collect()
    }

    fn values_of(chain: &Chain<Tracked>) -> Vec<i64> {
        chain.iter().map(|tracked| tracked.0).collect()
    }

    #[test]
    fn test_removed_nodes_are_dropped_on_removal() {
        let drops = Rc::new(Cell::new(0));
        let mut chain = tracked_chain(&[5, 1, 5, 5, 2, 5], &drops);

        let removed = chain.remove_element(&Tracked::untracked(5));
        assert_eq!(removed, 4);
        assert_eq!(drops.get(), 4);
        assert_eq!(values_of(&chain), vec![1, 2]);

        assert_eq!(chain.remove_duplicates_unbuffered(), 0);
        assert_eq!(drops.get(), 4);

        drop(chain);
        assert_eq!(drops.get(), 6);
    }

    #[test]
    fn test_unbuffered_dedup_drops_each_duplicate_once() {
        let drops = Rc::new(Cell::new(0));
        let mut chain = tracked_chain(&[3, 1, 3, 3, 1, 2], &drops);

        let removed = chain.remove_duplicates_unbuffered();
        assert_eq!(removed, 3);
        assert_eq!(drops.get(), 3);
        assert_eq!(values_of(&chain), vec![3, 1, 2]);

        drop(chain);
        assert_eq!(drops.get(), 6);
    }

    #[test]
    fn test_buffered_dedup_drops_each_duplicate_once() {
        let drops = Rc::new(Cell::new(0));
        let mut chain = tracked_chain(&[7, 8, 7, 9, 8, 7], &drops);

        let removed = chain.remove_duplicates();
        assert_eq!(removed, 3);
        assert_eq!(drops.get(), 3);
        assert_eq!(values_of(&chain), vec![7, 8, 9]);

        drop(chain);
        assert_eq!(drops.get(), 6);
    }

    #[test]
    fn test_long_chain_drops_without_overflow() {
        let chain: Chain<u32> = (0..200_000).collect();
        assert_eq!(chain.len(), 200_000);
        drop(chain);
    }
}
