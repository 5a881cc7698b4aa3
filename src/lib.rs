#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

mod arena;
pub mod linked_sequence;

extern crate alloc;

pub use linked_sequence::CursorMut;
pub use linked_sequence::IntoIter;
pub use linked_sequence::Iter;
pub use linked_sequence::IterMut;
pub use linked_sequence::LinkedSequence;
use core::num::NonZeroU32;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
/// A handle identifying a node of a [`LinkedSequence`].
///
/// This is an opaque, copyable handle that names a position in the sequence
/// without borrowing it. It is used both for direct O(1) access to a node's
/// value and as the anchor for the splicing operations
/// [`insert_after`](LinkedSequence::insert_after) and
/// [`erase_after`](LinkedSequence::erase_after). It is **non-generational**,
/// meaning that once a node is erased, its handle may be re-used for a node
/// inserted later.
///
/// "One past the end" has no handle of its own; operations that may run off
/// the chain yield `Option<Ptr>`, with `None` playing the role of the end
/// position.
///
/// # Examples
///
/// ```
/// use strand::LinkedSequence;
/// use strand::Ptr;
///
/// let mut seq = LinkedSequence::new();
/// seq.push_front("b");
/// let a: Ptr = seq.insert_after(seq.before_begin(), "a");
///
/// // Use the handle for direct access.
/// assert_eq!(seq.get(a), Some(&"a"));
/// assert_eq!(seq.first_ptr(), Some(a));
/// ```
pub struct Ptr(NonZeroU32);

impl core::fmt::Debug for Ptr {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Ptr({})", self.0.get() - 1)
    }
}

impl Ptr {
    pub(crate) fn unchecked_from(index: usize) -> Self {
        debug_assert!(
            index < u32::MAX as usize,
            "Index too large to fit in Ptr: {index}"
        );
        Ptr(NonZeroU32::new((index as u32).saturating_add(1)).unwrap())
    }

    pub(crate) fn unchecked_get(self) -> usize {
        self.0.get() as usize - 1
    }
}
