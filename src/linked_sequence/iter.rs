use core::iter::FusedIterator;
use core::marker::PhantomData;

use crate::Ptr;
use crate::arena::Arena;
use crate::arena::Slot;
use crate::linked_sequence::LinkedSequence;

#[derive(Debug, Clone, Copy)]
/// A forward iterator over the values of a `LinkedSequence`.
///
/// This struct is created by the [`iter`] method on [`LinkedSequence`]. See
/// its documentation for more.
///
/// [`iter`]: LinkedSequence::iter
///
/// # Examples
///
/// ```
/// use strand::LinkedSequence;
///
/// let seq: LinkedSequence<i32> = [1, 2].into();
/// for value in seq.iter() {
///     println!("{value}");
/// }
/// ```
pub struct Iter<'a, T> {
    pub(crate) next: Option<Ptr>,
    pub(crate) remaining: usize,
    pub(crate) nodes: &'a Arena<T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let ptr = self.next?;
        let slot = self.nodes.slot(ptr);
        self.next = slot.next();
        self.remaining -= 1;

        Some(slot.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

#[derive(Debug)]
/// A forward iterator over mutable references to the values of a
/// `LinkedSequence`.
///
/// This struct is created by the [`iter_mut`] method on [`LinkedSequence`].
/// See its documentation for more.
///
/// [`iter_mut`]: LinkedSequence::iter_mut
///
/// # Examples
///
/// ```
/// use strand::LinkedSequence;
///
/// let mut seq: LinkedSequence<i32> = [1, 2].into();
/// for value in seq.iter_mut() {
///     *value *= 2;
/// }
/// assert_eq!(seq.iter().copied().collect::<Vec<_>>(), [2, 4]);
/// ```
pub struct IterMut<'a, T> {
    pub(crate) next: Option<Ptr>,
    pub(crate) remaining: usize,
    pub(crate) base: *mut Slot<T>,
    pub(crate) _nodes: PhantomData<&'a mut Arena<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let ptr = self.next?;
        // SAFETY: The chain is acyclic and every live slot appears in it at
        // most once, so we yield at most one mutable reference per slot. The
        // arena is not resized while we hold its base pointer, since the
        // sequence is mutably borrowed for 'a. We tie the yielded lifetime to
        // that borrow.
        let slot = unsafe { &mut *self.base.add(ptr.unchecked_get()) };
        self.next = slot.next();
        self.remaining -= 1;

        Some(slot.value_mut())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

#[derive(Debug)]
/// An owning iterator over the values of a `LinkedSequence`.
///
/// This struct is created by the [`into_iter`] method on [`LinkedSequence`]
/// (provided by the [`IntoIterator`] trait). See its documentation for more.
///
/// [`into_iter`]: IntoIterator::into_iter
/// [`IntoIterator`]: core::iter::IntoIterator
///
/// # Examples
///
/// ```
/// use strand::LinkedSequence;
///
/// let seq: LinkedSequence<i32> = [1, 2].into();
/// let values: Vec<i32> = seq.into_iter().collect();
/// assert_eq!(values, [1, 2]);
/// ```
pub struct IntoIter<T> {
    pub(crate) seq: LinkedSequence<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.seq.is_empty() {
            return None;
        }
        Some(self.seq.pop_front())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.seq.len(), Some(self.seq.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
