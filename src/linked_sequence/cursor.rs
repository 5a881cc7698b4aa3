use crate::Ptr;
use crate::linked_sequence::LinkedSequence;

#[derive(Debug)]
/// A cursor for walking and splicing a `LinkedSequence`.
///
/// A `CursorMut` is like an iterator, except that it holds a mutable borrow
/// of the sequence and can insert or remove nodes relative to its position
/// while walking. It starts at [`before_begin`](LinkedSequence::before_begin)
/// and only ever moves forward.
///
/// # Examples
///
/// ```
/// use strand::LinkedSequence;
///
/// let mut seq: LinkedSequence<i32> = [1, 3].into();
/// let mut cursor = seq.cursor_mut();
/// cursor.move_next();
/// cursor.insert_after(2);
/// assert_eq!(seq.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
/// ```
pub struct CursorMut<'m, T> {
    pub(crate) ptr: Ptr,
    pub(crate) seq: &'m mut LinkedSequence<T>,
}

impl<'m, T> CursorMut<'m, T> {
    /// Returns the handle of the cursor's current position. This is the
    /// sentinel handle while the cursor sits at before-begin.
    #[inline]
    pub fn ptr(&self) -> Ptr {
        self.ptr
    }

    /// Returns `true` while the cursor sits at before-begin.
    #[inline]
    pub fn at_before_begin(&self) -> bool {
        self.ptr == self.seq.before_begin()
    }

    /// Returns the value at the cursor's position, or `None` at
    /// before-begin.
    #[inline]
    pub fn current(&self) -> Option<&T> {
        self.seq.get(self.ptr)
    }

    /// Returns the value at the cursor's position mutably, or `None` at
    /// before-begin.
    #[inline]
    pub fn current_mut(&mut self) -> Option<&mut T> {
        self.seq.get_mut(self.ptr)
    }

    /// Returns the value of the node after the cursor, without moving.
    #[inline]
    pub fn peek_next(&self) -> Option<&T> {
        let next = self.seq.next_ptr(self.ptr)?;
        self.seq.get(next)
    }

    /// Advances the cursor to the next node.
    ///
    /// Returns `false` and stays put when there is no next node, so
    /// `while cursor.move_next() {}` parks the cursor on the last node (or at
    /// before-begin for an empty sequence).
    #[inline]
    pub fn move_next(&mut self) -> bool {
        match self.seq.next_ptr(self.ptr) {
            Some(next) => {
                self.ptr = next;
                true
            }
            None => false,
        }
    }

    /// Inserts `value` immediately after the cursor and returns the new
    /// node's handle. The cursor does not move.
    #[inline]
    pub fn insert_after(&mut self, value: T) -> Ptr {
        self.seq.insert_after(self.ptr, value)
    }

    /// Inserts `value` immediately after the cursor and moves the cursor to
    /// the inserted node.
    ///
    /// Repeated calls therefore append in call order, which is how
    /// [`FromIterator`] and `Clone` build a sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use strand::LinkedSequence;
    ///
    /// let mut seq = LinkedSequence::new();
    /// let mut cursor = seq.cursor_mut();
    /// for i in 1..=3 {
    ///     cursor.insert_after_move_to(i);
    /// }
    /// assert_eq!(seq.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
    /// ```
    #[inline]
    pub fn insert_after_move_to(&mut self, value: T) {
        self.ptr = self.seq.insert_after(self.ptr, value);
    }

    /// Removes the node immediately after the cursor and returns its value,
    /// or `None` when the cursor is at the last node. The cursor does not
    /// move.
    #[inline]
    pub fn remove_next(&mut self) -> Option<T> {
        let (value, _) = self.seq.take_after(self.ptr)?;
        Some(value)
    }
}
