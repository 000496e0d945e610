//! Ordered sequence used as the priority queue for Huffman tree construction.
//!
//! `OrderedList` keeps its elements in ascending order and supports positional
//! removal and lookup. It is a doubly-linked list stored in an arena: slot 0 is
//! a sentinel that never holds a value, and freed slots are recycled.
//!
//! # Stability
//!
//! A new element is placed before the first element strictly greater than it,
//! so elements that compare equal stay in insertion order. The Huffman tree
//! builder depends on this for a reproducible merge order.
//!
//! # Example
//!
//! ```
//! use oxihuff_core::ordered::OrderedList;
//!
//! let mut list = OrderedList::new();
//! for value in [5, 3, 8, 3] {
//!     list.insert(value);
//! }
//!
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![3, 3, 5, 8]);
//! assert_eq!(list.remove_at(0).unwrap(), 3);
//! assert!(list.remove_at(10).is_err());
//! ```

use crate::error::{OxiHuffError, Result};

/// Arena index of the sentinel slot.
const SENTINEL: usize = 0;

/// Arena slot: a value plus links to its neighbours.
#[derive(Debug, Clone)]
struct Slot<T> {
    /// `None` for the sentinel and for freed slots.
    value: Option<T>,
    prev: usize,
    next: usize,
}

/// A circular doubly-linked list holding values in ascending order.
///
/// Ranking uses `Ord`; equality lookups (`contains`, `remove_value`,
/// `index_of`) use `PartialEq`. The two may disagree for element types whose
/// ordering is only a ranking key, and the list honours both as written.
#[derive(Debug, Clone)]
pub struct OrderedList<T> {
    slots: Vec<Slot<T>>,
    free: Vec<usize>,
    len: usize,
}

impl<T: Ord> OrderedList<T> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty list with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity + 1);
        slots.push(Slot {
            value: None,
            prev: SENTINEL,
            next: SENTINEL,
        });
        Self {
            slots,
            free: Vec::new(),
            len: 0,
        }
    }

    /// Number of elements in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check whether the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert a value, keeping ascending order.
    ///
    /// The value goes immediately before the first element strictly greater
    /// than it, i.e. after any equal elements already present. O(n).
    pub fn insert(&mut self, value: T) {
        let mut prev = SENTINEL;
        loop {
            let next = self.slots[prev].next;
            match &self.slots[next].value {
                Some(existing) if *existing <= value => prev = next,
                _ => break,
            }
        }
        self.link_after(prev, value);
    }

    /// Remove and return the element at `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        let slot = self.slot_at(index)?;
        let len = self.len;
        self.unlink(slot)
            .ok_or_else(|| OxiHuffError::out_of_range(index, len))
    }

    /// Remove and return the lowest element, if any.
    pub fn pop_first(&mut self) -> Option<T> {
        self.remove_at(0).ok()
    }

    /// Borrow the element at `index`.
    pub fn peek_at(&self, index: usize) -> Result<&T> {
        let slot = self.slot_at(index)?;
        self.slots[slot]
            .value
            .as_ref()
            .ok_or_else(|| OxiHuffError::out_of_range(index, self.len))
    }

    /// Remove the first element equal to `value`.
    ///
    /// The scan stops early once it passes an element greater than `value`.
    pub fn remove_value(&mut self, value: &T) -> Result<T> {
        let (_, slot) = self.find(value).ok_or(OxiHuffError::NotFound)?;
        self.unlink(slot).ok_or(OxiHuffError::NotFound)
    }

    /// Check whether an element equal to `value` is present.
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Position of the first element equal to `value`.
    pub fn index_of(&self, value: &T) -> Result<usize> {
        self.find(value)
            .map(|(position, _)| position)
            .ok_or(OxiHuffError::NotFound)
    }

    /// Iterate over the elements in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.slots[SENTINEL].next,
            remaining: self.len,
        }
    }

    /// Early-terminating scan: `(position, slot)` of the first equal element.
    fn find(&self, value: &T) -> Option<(usize, usize)> {
        let mut slot = self.slots[SENTINEL].next;
        let mut position = 0;
        while let Some(existing) = &self.slots[slot].value {
            if existing == value {
                return Some((position, slot));
            }
            if existing > value {
                return None;
            }
            slot = self.slots[slot].next;
            position += 1;
        }
        None
    }

    /// Arena slot holding the element at `index`.
    fn slot_at(&self, index: usize) -> Result<usize> {
        if index >= self.len {
            return Err(OxiHuffError::out_of_range(index, self.len));
        }
        let mut slot = self.slots[SENTINEL].next;
        for _ in 0..index {
            slot = self.slots[slot].next;
        }
        Ok(slot)
    }

    fn link_after(&mut self, prev: usize, value: T) {
        let next = self.slots[prev].next;
        let node = Slot {
            value: Some(value),
            prev,
            next,
        };
        let slot = match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = node;
                slot
            }
            None => {
                self.slots.push(node);
                self.slots.len() - 1
            }
        };
        self.slots[prev].next = slot;
        self.slots[next].prev = slot;
        self.len += 1;
    }

    fn unlink(&mut self, slot: usize) -> Option<T> {
        let value = self.slots[slot].value.take()?;
        let (prev, next) = (self.slots[slot].prev, self.slots[slot].next);
        self.slots[prev].next = next;
        self.slots[next].prev = prev;
        self.free.push(slot);
        self.len -= 1;
        Some(value)
    }
}

impl<T: Ord> Default for OrderedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for OrderedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T: Ord> Extend<T> for OrderedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T: Ord> IntoIterator for &'a OrderedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Ascending iterator over an [`OrderedList`].
#[derive(Debug)]
pub struct Iter<'a, T> {
    list: &'a OrderedList<T>,
    cursor: usize,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let slot = &self.list.slots[self.cursor];
        let value = slot.value.as_ref()?;
        self.cursor = slot.next;
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    /// Ranked by `key` only; `tag` tells equal-ranked elements apart.
    #[derive(Debug, Clone, Copy)]
    struct Tagged {
        key: i32,
        tag: char,
    }

    impl PartialEq for Tagged {
        fn eq(&self, other: &Self) -> bool {
            self.key == other.key
        }
    }

    impl Eq for Tagged {}

    impl PartialOrd for Tagged {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Tagged {
        fn cmp(&self, other: &Self) -> Ordering {
            self.key.cmp(&other.key)
        }
    }

    fn values(list: &OrderedList<i32>) -> Vec<i32> {
        list.iter().copied().collect()
    }

    #[test]
    fn test_insert_orders_values() {
        let list: OrderedList<i32> = [5, 3, 8, 3].into_iter().collect();
        assert_eq!(values(&list), vec![3, 3, 5, 8]);
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn test_insert_is_stable() {
        let mut list = OrderedList::new();
        list.insert(Tagged { key: 5, tag: 'a' });
        list.insert(Tagged { key: 3, tag: 'b' });
        list.insert(Tagged { key: 8, tag: 'c' });
        list.insert(Tagged { key: 3, tag: 'd' });
        list.insert(Tagged { key: 3, tag: 'e' });

        let tags: String = list.iter().map(|t| t.tag).collect();
        assert_eq!(tags, "bdeac");
    }

    #[test]
    fn test_remove_at() {
        let mut list: OrderedList<i32> = [10, 20, 30].into_iter().collect();
        assert_eq!(list.remove_at(1).unwrap(), 20);
        assert_eq!(values(&list), vec![10, 30]);
        assert_eq!(list.remove_at(0).unwrap(), 10);
        assert_eq!(list.remove_at(0).unwrap(), 30);
        assert!(list.is_empty());
    }

    #[test]
    fn test_remove_at_out_of_range() {
        let mut list: OrderedList<i32> = [1, 2].into_iter().collect();
        let err = list.remove_at(2).unwrap_err();
        assert!(matches!(err, OxiHuffError::OutOfRange { index: 2, len: 2 }));

        let mut empty: OrderedList<i32> = OrderedList::new();
        assert!(matches!(
            empty.remove_at(0),
            Err(OxiHuffError::OutOfRange { .. })
        ));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_pop_first() {
        let mut list: OrderedList<i32> = [3, 1, 2].into_iter().collect();
        assert_eq!(list.pop_first(), Some(1));
        assert_eq!(list.pop_first(), Some(2));
        assert_eq!(list.pop_first(), Some(3));
        assert_eq!(list.pop_first(), None);
    }

    #[test]
    fn test_peek_at() {
        let list: OrderedList<i32> = [4, 2, 9].into_iter().collect();
        assert_eq!(*list.peek_at(0).unwrap(), 2);
        assert_eq!(*list.peek_at(2).unwrap(), 9);
        assert!(matches!(
            list.peek_at(3),
            Err(OxiHuffError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_remove_value() {
        let mut list: OrderedList<i32> = [1, 3, 5, 7].into_iter().collect();
        assert_eq!(list.remove_value(&5).unwrap(), 5);
        assert_eq!(values(&list), vec![1, 3, 7]);

        assert!(matches!(list.remove_value(&4), Err(OxiHuffError::NotFound)));
        assert!(matches!(list.remove_value(&99), Err(OxiHuffError::NotFound)));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_remove_value_takes_first_equal() {
        let mut list = OrderedList::new();
        list.insert(Tagged { key: 1, tag: 'x' });
        list.insert(Tagged { key: 1, tag: 'y' });

        let removed = list.remove_value(&Tagged { key: 1, tag: '?' }).unwrap();
        assert_eq!(removed.tag, 'x');
        assert_eq!(list.peek_at(0).unwrap().tag, 'y');
    }

    #[test]
    fn test_insert_equal_goes_after_existing() {
        let mut list = OrderedList::new();
        list.insert(Tagged { key: 3, tag: 'a' });
        list.insert(Tagged { key: 1, tag: 'b' });
        list.insert(Tagged { key: 3, tag: 'c' });
        list.insert(Tagged { key: 9, tag: 'd' });
        list.insert(Tagged { key: 3, tag: 'e' });

        let tags: String = list.iter().map(|t| t.tag).collect();
        assert_eq!(tags, "bacde");

        let first_three = Tagged { key: 3, tag: '?' };
        assert_eq!(list.index_of(&first_three).unwrap(), 1);
        assert_eq!(list.peek_at(1).unwrap().tag, 'a');
        assert_eq!(list.remove_value(&first_three).unwrap().tag, 'a');
        assert_eq!(list.remove_value(&first_three).unwrap().tag, 'c');
        assert_eq!(list.peek_at(1).unwrap().tag, 'e');
    }

    #[test]
    fn test_contains_and_index_of() {
        let list: OrderedList<i32> = [2, 4, 4, 6].into_iter().collect();
        assert!(list.contains(&4));
        assert!(!list.contains(&5));
        assert!(!list.contains(&0));
        assert!(!list.contains(&7));

        assert_eq!(list.index_of(&4).unwrap(), 1);
        assert_eq!(list.index_of(&6).unwrap(), 3);
        assert!(matches!(list.index_of(&3), Err(OxiHuffError::NotFound)));
    }

    #[test]
    fn test_slot_reuse() {
        let mut list = OrderedList::with_capacity(4);
        for round in 0..100 {
            list.insert(round);
            list.insert(round + 1);
            list.remove_at(0).unwrap();
        }
        assert_eq!(list.len(), 100);
        // Every round frees one slot that the next round reuses.
        assert!(list.slots.len() <= 102);

        let collected = values(&list);
        assert!(collected.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_iter_exact_size() {
        let list: OrderedList<i32> = (0..10).rev().collect();
        let iter = list.iter();
        assert_eq!(iter.len(), 10);
        assert_eq!((&list).into_iter().next(), Some(&0));
    }
}
