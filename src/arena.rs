use alloc::vec::Vec;

use crate::Ptr;

#[cold]
#[inline(never)]
fn assert_value() -> ! {
    panic!("Attempted to read the value of a slot that holds none");
}

/// Payload state of a slot. The sentinel slot carries no value and is never
/// freed; free slots sit on the free list, chained through `Slot::next`.
#[derive(Debug, Clone)]
pub(crate) enum SlotState<T> {
    Free,
    Sentinel,
    Value(T),
}

#[derive(Debug, Clone)]
pub(crate) struct Slot<T> {
    next: Option<Ptr>,
    state: SlotState<T>,
}

impl<T> Slot<T> {
    pub(crate) fn next(&self) -> Option<Ptr> {
        self.next
    }

    pub(crate) fn next_mut(&mut self) -> &mut Option<Ptr> {
        &mut self.next
    }

    pub(crate) fn value(&self) -> &T {
        match &self.state {
            SlotState::Value(value) => value,
            _ => assert_value(),
        }
    }

    pub(crate) fn value_mut(&mut self) -> &mut T {
        match &mut self.state {
            SlotState::Value(value) => value,
            _ => assert_value(),
        }
    }
}

/// Slot storage for a linked sequence.
///
/// Slot 0 is always the sentinel: it exists from construction, anchors the
/// chain, and never enters the free list. Freed slots are recycled in LIFO
/// order before the backing vector grows.
#[derive(Debug, Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<Ptr>,
}

impl<T> Arena<T> {
    pub(crate) fn with_sentinel() -> Self {
        let mut slots = Vec::with_capacity(1);
        slots.push(Slot {
            next: None,
            state: SlotState::Sentinel,
        });
        Arena {
            slots,
            free_head: None,
        }
    }

    pub(crate) fn sentinel() -> Ptr {
        Ptr::unchecked_from(0)
    }

    pub(crate) fn slot(&self, ptr: Ptr) -> &Slot<T> {
        &self.slots[ptr.unchecked_get()]
    }

    pub(crate) fn slot_mut(&mut self, ptr: Ptr) -> &mut Slot<T> {
        &mut self.slots[ptr.unchecked_get()]
    }

    /// Checked value access. `None` for the sentinel, free slots, and
    /// out-of-bounds handles.
    pub(crate) fn get(&self, ptr: Ptr) -> Option<&T> {
        match &self.slots.get(ptr.unchecked_get())?.state {
            SlotState::Value(value) => Some(value),
            _ => None,
        }
    }

    pub(crate) fn get_mut(&mut self, ptr: Ptr) -> Option<&mut T> {
        match &mut self.slots.get_mut(ptr.unchecked_get())?.state {
            SlotState::Value(value) => Some(value),
            _ => None,
        }
    }

    /// True if `ptr` names a live value-holding slot.
    pub(crate) fn is_live(&self, ptr: Ptr) -> bool {
        matches!(
            self.slots.get(ptr.unchecked_get()),
            Some(Slot {
                state: SlotState::Value(_),
                ..
            })
        )
    }

    /// True if `ptr` may anchor an insert-after or erase-after: a live node
    /// or the sentinel.
    pub(crate) fn is_anchor(&self, ptr: Ptr) -> bool {
        matches!(
            self.slots.get(ptr.unchecked_get()),
            Some(Slot {
                state: SlotState::Value(_) | SlotState::Sentinel,
                ..
            })
        )
    }

    pub(crate) fn alloc(&mut self, value: T, next: Option<Ptr>) -> Ptr {
        if let Some(free) = self.free_head {
            let old = core::mem::replace(
                &mut self.slots[free.unchecked_get()],
                Slot {
                    next,
                    state: SlotState::Value(value),
                },
            );
            self.free_head = old.next;
            free
        } else {
            let ptr = Ptr::unchecked_from(self.slots.len());
            self.slots.push(Slot {
                next,
                state: SlotState::Value(value),
            });
            ptr
        }
    }

    /// Returns the freed slot's value and pushes the slot onto the free
    /// list. Relinking the chain around the slot is the caller's job.
    pub(crate) fn free(&mut self, ptr: Ptr) -> T {
        assert!(self.is_live(ptr), "Pointer to free must hold a value");
        let old = core::mem::replace(
            &mut self.slots[ptr.unchecked_get()],
            Slot {
                next: self.free_head,
                state: SlotState::Free,
            },
        );
        self.free_head = Some(ptr);

        match old.state {
            SlotState::Value(value) => value,
            // Unreachable per the assert above.
            _ => assert_value(),
        }
    }

    pub(crate) fn base_ptr(&mut self) -> *mut Slot<T> {
        self.slots.as_mut_ptr()
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::assert_eq;

    use super::*;

    #[test]
    fn test_arena_starts_with_sentinel() {
        let arena: Arena<i32> = Arena::with_sentinel();
        assert_eq!(arena.slots.len(), 1);
        assert!(arena.free_head.is_none());
        assert!(arena.is_anchor(Arena::<i32>::sentinel()));
        assert!(!arena.is_live(Arena::<i32>::sentinel()));
        assert_eq!(arena.get(Arena::<i32>::sentinel()), None);
    }

    #[test]
    fn test_arena_alloc_single() {
        let mut arena = Arena::with_sentinel();
        let ptr = arena.alloc(vec![1, 2, 3, 4, 5], None);

        assert_ne!(ptr, Arena::<Vec<i32>>::sentinel());
        assert!(arena.is_live(ptr));
        assert!(arena.is_anchor(ptr));
        assert_eq!(arena.slots.len(), 2);
        assert_eq!(arena.get(ptr), Some(&vec![1, 2, 3, 4, 5]));
        assert_eq!(arena.slot(ptr).next(), None);
    }

    #[test]
    fn test_arena_alloc_multiple() {
        let mut arena = Arena::with_sentinel();
        let ptr1 = arena.alloc("one".to_string(), None);
        let ptr2 = arena.alloc("two".to_string(), Some(ptr1));
        let ptr3 = arena.alloc("three".to_string(), Some(ptr2));

        assert_ne!(ptr1, ptr2);
        assert_ne!(ptr2, ptr3);
        assert_ne!(ptr1, ptr3);

        assert_eq!(arena.get(ptr1), Some(&"one".to_string()));
        assert_eq!(arena.get(ptr2), Some(&"two".to_string()));
        assert_eq!(arena.get(ptr3), Some(&"three".to_string()));

        assert_eq!(arena.slot(ptr3).next(), Some(ptr2));
        assert_eq!(arena.slot(ptr2).next(), Some(ptr1));
        assert_eq!(arena.slot(ptr1).next(), None);
    }

    #[test]
    fn test_arena_free_and_reuse() {
        let mut arena = Arena::with_sentinel();
        let ptr1 = arena.alloc("one".to_string(), None);
        let ptr2 = arena.alloc("two".to_string(), None);

        let value = arena.free(ptr1);
        assert_eq!(value, "one");
        assert!(!arena.is_live(ptr1));
        assert!(!arena.is_anchor(ptr1));
        assert_eq!(arena.get(ptr1), None);
        assert!(arena.is_live(ptr2));

        let ptr3 = arena.alloc("three".to_string(), None);
        assert_eq!(ptr3, ptr1);
        assert_eq!(arena.get(ptr3), Some(&"three".to_string()));
        assert_eq!(arena.slots.len(), 3);
    }

    #[test]
    fn test_arena_free_lifo_order() {
        let mut arena = Arena::with_sentinel();
        let ptr1 = arena.alloc(1, None);
        let ptr2 = arena.alloc(2, None);

        arena.free(ptr1);
        arena.free(ptr2);

        assert_eq!(arena.alloc(3, None), ptr2);
        assert_eq!(arena.alloc(4, None), ptr1);
        assert_eq!(arena.slots.len(), 3);
    }

    #[test]
    fn test_arena_get_mut() {
        let mut arena = Arena::with_sentinel();
        let ptr = arena.alloc("hello".to_string(), None);

        *arena.get_mut(ptr).unwrap() = "world".to_string();
        assert_eq!(arena.get(ptr), Some(&"world".to_string()));
        assert_eq!(arena.get_mut(Arena::<String>::sentinel()), None);
    }

    #[test]
    fn test_arena_next_mut() {
        let mut arena = Arena::with_sentinel();
        let ptr = arena.alloc(42, None);

        *arena.slot_mut(Arena::<i32>::sentinel()).next_mut() = Some(ptr);
        assert_eq!(arena.slot(Arena::<i32>::sentinel()).next(), Some(ptr));
    }

    #[test]
    #[should_panic]
    fn test_arena_value_of_sentinel() {
        let arena: Arena<i32> = Arena::with_sentinel();
        let _ = arena.slot(Arena::<i32>::sentinel()).value();
    }

    #[test]
    #[should_panic]
    fn test_arena_value_of_freed_slot() {
        let mut arena = Arena::with_sentinel();
        let ptr = arena.alloc(1, None);
        arena.free(ptr);
        let _ = arena.slot(ptr).value();
    }

    #[test]
    #[should_panic]
    fn test_arena_free_sentinel() {
        let mut arena: Arena<i32> = Arena::with_sentinel();
        arena.free(Arena::<i32>::sentinel());
    }

    #[test]
    #[should_panic]
    fn test_arena_double_free() {
        let mut arena = Arena::with_sentinel();
        let ptr = arena.alloc(1, None);
        arena.free(ptr);
        arena.free(ptr);
    }
}
