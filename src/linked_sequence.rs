//! Singly-linked sequence implementation.
//!
//! This module provides the core [`LinkedSequence`] type and related
//! functionality. The sequence is a forward-only chain of nodes anchored by a
//! value-less sentinel, with O(1) insertion and removal relative to a [`Ptr`]
//! handle.
//!
//! # Examples
//!
//! ```
//! use strand::linked_sequence::LinkedSequence;
//!
//! let mut seq = LinkedSequence::new();
//! seq.push_front(2);
//! seq.push_front(1);
//!
//! // Iteration starts at the front
//! let values: Vec<_> = seq.iter().copied().collect();
//! assert_eq!(values, [1, 2]);
//! ```

use core::cmp::Ordering;
use core::marker::PhantomData;
use core::ops::Index;
use core::ops::IndexMut;

use crate::Ptr;
use crate::arena::Arena;

mod cursor;
mod iter;

pub use cursor::CursorMut;
pub use iter::IntoIter;
pub use iter::Iter;
pub use iter::IterMut;

#[cold]
#[inline(never)]
fn bad_anchor() -> ! {
    panic!("Position does not reference the sentinel or a live node");
}

#[cold]
#[inline(never)]
fn empty_pop() -> ! {
    panic!("Called pop_front on an empty sequence");
}

#[cold]
#[inline(never)]
fn erase_past_end() -> ! {
    panic!("Called erase_after at the last node of the sequence");
}

/// A singly-linked sequence with stable cursor handles.
///
/// Nodes live in a slot arena owned by the sequence; each node holds one
/// value and the handle of its successor. A value-less sentinel node anchors
/// the chain, so inserting or erasing at the very front uses the same
/// operations as any other position: [`insert_after`](Self::insert_after)
/// and [`erase_after`](Self::erase_after), anchored at
/// [`before_begin`](Self::before_begin).
///
/// The generic parameter `T` is unconstrained; bounds appear only on the
/// operations that need them (`Clone` for copying the sequence, `PartialEq`
/// and `PartialOrd` for the comparison operators).
///
/// # Examples
///
/// ```
/// use strand::LinkedSequence;
///
/// let mut seq = LinkedSequence::new();
/// seq.push_front("world");
/// seq.push_front("hello");
///
/// for value in seq.iter() {
///     println!("{value}");
/// }
/// // Prints: hello, world
/// ```
pub struct LinkedSequence<T> {
    nodes: Arena<T>,
    len: usize,
}

impl<T> LinkedSequence<T> {
    /// Creates a new, empty sequence.
    ///
    /// Allocates the sentinel slot and nothing else.
    ///
    /// # Examples
    ///
    /// ```
    /// use strand::LinkedSequence;
    ///
    /// let mut seq: LinkedSequence<i32> = LinkedSequence::new();
    /// assert!(seq.is_empty());
    /// seq.push_front(1);
    /// assert!(!seq.is_empty());
    /// ```
    pub fn new() -> Self {
        LinkedSequence {
            nodes: Arena::with_sentinel(),
            len: 0,
        }
    }

    /// Returns the number of values in the sequence. The sentinel does not
    /// count.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the sequence holds no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the handle of the sentinel, the position just before the
    /// first value.
    ///
    /// The sentinel holds no value and can never be dereferenced
    /// ([`get`](Self::get) returns `None` for it); it exists purely as a
    /// uniform anchor for [`insert_after`](Self::insert_after) and
    /// [`erase_after`](Self::erase_after). It remains valid for the whole
    /// lifetime of the sequence, across [`clear`](Self::clear) included.
    ///
    /// # Examples
    ///
    /// ```
    /// use strand::LinkedSequence;
    ///
    /// let mut seq = LinkedSequence::new();
    /// seq.insert_after(seq.before_begin(), 1);
    /// assert_eq!(seq.get(seq.before_begin()), None);
    /// assert_eq!(seq.len(), 1);
    /// ```
    pub fn before_begin(&self) -> Ptr {
        Arena::<T>::sentinel()
    }

    /// Returns the handle of the first value, or `None` if the sequence is
    /// empty.
    pub fn first_ptr(&self) -> Option<Ptr> {
        self.nodes.slot(self.before_begin()).next()
    }

    /// Advances a handle to the next position.
    ///
    /// Returns `None` when `pos` is the last node (the position after it is
    /// the end), or when `pos` does not reference the sentinel or a live
    /// node.
    ///
    /// # Examples
    ///
    /// ```
    /// use strand::LinkedSequence;
    ///
    /// let seq: LinkedSequence<i32> = [1, 2].into();
    /// let first = seq.first_ptr().unwrap();
    /// let second = seq.next_ptr(first).unwrap();
    /// assert_eq!(seq.get(second), Some(&2));
    /// assert_eq!(seq.next_ptr(second), None);
    /// ```
    pub fn next_ptr(&self, pos: Ptr) -> Option<Ptr> {
        if !self.nodes.is_anchor(pos) {
            return None;
        }
        self.nodes.slot(pos).next()
    }

    /// Returns a reference to the value at `pos`.
    ///
    /// Returns `None` for the sentinel and for handles whose node has been
    /// erased (as long as the slot has not been reused — see the [`Ptr`]
    /// documentation on handle reuse).
    pub fn get(&self, pos: Ptr) -> Option<&T> {
        self.nodes.get(pos)
    }

    /// Returns a mutable reference to the value at `pos`, or `None` under
    /// the same conditions as [`get`](Self::get).
    pub fn get_mut(&mut self, pos: Ptr) -> Option<&mut T> {
        self.nodes.get_mut(pos)
    }

    /// Inserts `value` at the front of the sequence. O(1).
    ///
    /// # Examples
    ///
    /// ```
    /// use strand::LinkedSequence;
    ///
    /// let mut seq = LinkedSequence::new();
    /// seq.push_front(2);
    /// seq.push_front(1);
    /// assert_eq!(seq.iter().copied().collect::<Vec<_>>(), [1, 2]);
    /// ```
    pub fn push_front(&mut self, value: T) {
        let anchor = self.before_begin();
        self.insert_after(anchor, value);
    }

    /// Inserts `value` immediately after the node at `pos` and returns the
    /// new node's handle. O(1).
    ///
    /// `pos` must be [`before_begin`](Self::before_begin) or the handle of a
    /// live node of this sequence.
    ///
    /// # Panics
    ///
    /// Panics if `pos` does not reference the sentinel or a live node.
    ///
    /// # Examples
    ///
    /// ```
    /// use strand::LinkedSequence;
    ///
    /// let mut seq: LinkedSequence<i32> = [1, 3].into();
    /// let first = seq.first_ptr().unwrap();
    /// let two = seq.insert_after(first, 2);
    /// assert_eq!(seq.get(two), Some(&2));
    /// assert_eq!(seq.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
    /// ```
    pub fn insert_after(&mut self, pos: Ptr, value: T) -> Ptr {
        if !self.nodes.is_anchor(pos) {
            bad_anchor();
        }
        let next = self.nodes.slot(pos).next();
        let ptr = self.nodes.alloc(value, next);
        *self.nodes.slot_mut(pos).next_mut() = Some(ptr);
        self.len += 1;
        ptr
    }

    /// Removes the first value and returns it. O(1).
    ///
    /// # Panics
    ///
    /// Panics if the sequence is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use strand::LinkedSequence;
    ///
    /// let mut seq: LinkedSequence<i32> = [1, 2].into();
    /// assert_eq!(seq.pop_front(), 1);
    /// assert_eq!(seq.pop_front(), 2);
    /// assert!(seq.is_empty());
    /// ```
    pub fn pop_front(&mut self) -> T {
        let anchor = self.before_begin();
        match self.take_after(anchor) {
            Some((value, _)) => value,
            None => empty_pop(),
        }
    }

    /// Removes the node immediately after `pos`, dropping its value, and
    /// returns the handle of the node that now follows `pos` (or `None` if
    /// `pos` is now last). O(1).
    ///
    /// # Panics
    ///
    /// Panics if `pos` does not reference the sentinel or a live node, or if
    /// there is no node after `pos`.
    ///
    /// # Examples
    ///
    /// ```
    /// use strand::LinkedSequence;
    ///
    /// let mut seq: LinkedSequence<i32> = [1, 2, 3].into();
    /// let after = seq.erase_after(seq.before_begin()).unwrap();
    /// assert_eq!(seq.get(after), Some(&2));
    /// assert_eq!(seq.iter().copied().collect::<Vec<_>>(), [2, 3]);
    /// ```
    pub fn erase_after(&mut self, pos: Ptr) -> Option<Ptr> {
        match self.take_after(pos) {
            Some((_, after)) => after,
            None => erase_past_end(),
        }
    }

    /// Removes the node after `pos` and hands back its value plus the handle
    /// now following `pos`. `None` when `pos` has no successor.
    fn take_after(&mut self, pos: Ptr) -> Option<(T, Option<Ptr>)> {
        if !self.nodes.is_anchor(pos) {
            bad_anchor();
        }
        let victim = self.nodes.slot(pos).next()?;
        let after = self.nodes.slot(victim).next();
        *self.nodes.slot_mut(pos).next_mut() = after;
        self.len -= 1;
        Some((self.nodes.free(victim), after))
    }

    /// Drops every value, front to back, and leaves the sequence empty.
    ///
    /// The sentinel survives, so [`before_begin`](Self::before_begin) stays
    /// valid; handles to erased nodes do not. Slot capacity is retained for
    /// reuse. Calling `clear` on an empty sequence is a no-op.
    ///
    /// # Examples
    ///
    /// ```
    /// use strand::LinkedSequence;
    ///
    /// let mut seq: LinkedSequence<i32> = [1, 2, 3].into();
    /// seq.clear();
    /// assert!(seq.is_empty());
    /// seq.push_front(4);
    /// assert_eq!(seq.len(), 1);
    /// ```
    pub fn clear(&mut self) {
        let anchor = self.before_begin();
        let mut next = self.nodes.slot(anchor).next();
        *self.nodes.slot_mut(anchor).next_mut() = None;
        while let Some(ptr) = next {
            next = self.nodes.slot(ptr).next();
            self.nodes.free(ptr);
        }
        self.len = 0;
    }

    /// Exchanges the contents of two sequences in O(1), without touching any
    /// node.
    ///
    /// Never panics. Handles are not invalidated: a handle obtained from
    /// `self` before the swap addresses the same node afterwards, which now
    /// belongs to `other` (and vice versa). `core::mem::swap` on two
    /// sequences has the same effect and the same contract.
    ///
    /// # Examples
    ///
    /// ```
    /// use strand::LinkedSequence;
    ///
    /// let mut a: LinkedSequence<i32> = [1].into();
    /// let mut b: LinkedSequence<i32> = [2, 3].into();
    /// a.swap(&mut b);
    /// assert_eq!(a.len(), 2);
    /// assert_eq!(b.iter().copied().collect::<Vec<_>>(), [1]);
    /// ```
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.nodes, &mut other.nodes);
        core::mem::swap(&mut self.len, &mut other.len);
    }

    /// Returns a forward iterator over references to the values.
    ///
    /// # Examples
    ///
    /// ```
    /// use strand::LinkedSequence;
    ///
    /// let seq: LinkedSequence<i32> = [1, 2, 3].into();
    /// assert_eq!(seq.iter().sum::<i32>(), 6);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.first_ptr(),
            remaining: self.len,
            nodes: &self.nodes,
        }
    }

    /// Returns a forward iterator over mutable references to the values.
    ///
    /// # Examples
    ///
    /// ```
    /// use strand::LinkedSequence;
    ///
    /// let mut seq: LinkedSequence<i32> = [1, 2, 3].into();
    /// for value in seq.iter_mut() {
    ///     *value *= 10;
    /// }
    /// assert_eq!(seq.iter().copied().collect::<Vec<_>>(), [10, 20, 30]);
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let next = self.first_ptr();
        let remaining = self.len;
        IterMut {
            next,
            remaining,
            base: self.nodes.base_ptr(),
            _nodes: PhantomData,
        }
    }

    /// Returns a mutable cursor positioned at
    /// [`before_begin`](Self::before_begin).
    ///
    /// # Examples
    ///
    /// ```
    /// use strand::LinkedSequence;
    ///
    /// let mut seq = LinkedSequence::new();
    /// let mut cursor = seq.cursor_mut();
    /// cursor.insert_after_move_to(1);
    /// cursor.insert_after_move_to(2);
    /// assert_eq!(seq.iter().copied().collect::<Vec<_>>(), [1, 2]);
    /// ```
    pub fn cursor_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut {
            ptr: self.before_begin(),
            seq: self,
        }
    }
}

impl<T> Default for LinkedSequence<T> {
    fn default() -> Self {
        LinkedSequence::new()
    }
}

impl<T> Drop for LinkedSequence<T> {
    fn drop(&mut self) {
        // Values drop in traversal order, front to back.
        self.clear();
    }
}

impl<T: Clone> Clone for LinkedSequence<T> {
    fn clone(&self) -> Self {
        let mut copy = LinkedSequence::new();
        let mut cursor = copy.cursor_mut();
        for value in self.iter() {
            cursor.insert_after_move_to(value.clone());
        }
        copy
    }

    /// Copy-and-swap: the full clone of `source` is built first, then takes
    /// the place of `self`. If an element's `Clone` panics mid-way, `self`
    /// is left untouched and the partial clone is released during unwind.
    fn clone_from(&mut self, source: &Self) {
        let copy = source.clone();
        *self = copy;
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for LinkedSequence<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for LinkedSequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedSequence<T> {}

impl<T: PartialOrd> PartialOrd for LinkedSequence<T> {
    /// Lexicographic comparison of the two value sequences.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for LinkedSequence<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T> Index<Ptr> for LinkedSequence<T> {
    type Output = T;

    fn index(&self, index: Ptr) -> &Self::Output {
        self.nodes.slot(index).value()
    }
}

impl<T> IndexMut<Ptr> for LinkedSequence<T> {
    fn index_mut(&mut self, index: Ptr) -> &mut Self::Output {
        self.nodes.slot_mut(index).value_mut()
    }
}

impl<T> FromIterator<T> for LinkedSequence<T> {
    /// Builds the sequence in source order by walking a cursor forward, one
    /// insert-after per value.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut seq = LinkedSequence::new();
        let mut cursor = seq.cursor_mut();
        for value in iter {
            cursor.insert_after_move_to(value);
        }
        seq
    }
}

impl<T, const N: usize> From<[T; N]> for LinkedSequence<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> Extend<T> for LinkedSequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut cursor = self.cursor_mut();
        while cursor.move_next() {}
        for value in iter {
            cursor.insert_after_move_to(value);
        }
    }
}

impl<T> IntoIterator for LinkedSequence<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { seq: self }
    }
}

impl<'a, T> IntoIterator for &'a LinkedSequence<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedSequence<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
