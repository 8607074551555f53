use alloc::vec::Vec;

use super::handle::Handle;

/// Slab of nodes addressed by [`Handle`].
///
/// Vacant slots form an intrusive free list, so freeing and reusing a slot is O(1) and needs no
/// side allocation. A handle stays valid until its slot is taken; after that it may be handed out
/// again for an unrelated element.
#[derive(Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    next_free: Option<Handle>,
    len: usize,
}

#[derive(Clone)]
enum Slot<T> {
    Occupied(T),
    Vacant(Option<Handle>),
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            next_free: None,
            len: 0,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            next_free: None,
            len: 0,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn alloc(&mut self, element: T) -> Handle {
        self.len += 1;
        if let Some(handle) = self.next_free {
            let slot = &mut self.slots[handle.to_index()];
            let Slot::Vacant(next) = *slot else {
                unreachable!("`Arena::alloc()` - free list points at an occupied slot!");
            };
            self.next_free = next;
            *slot = Slot::Occupied(element);
            handle
        } else {
            // Strict less-than keeps every handle (and every subtree size) representable.
            assert!(
                self.slots.len() < Handle::MAX,
                "`Arena::alloc()` - arena is at maximum capacity ({})",
                Handle::MAX
            );
            self.slots.push(Slot::Occupied(element));
            Handle::from_index(self.slots.len() - 1)
        }
    }

    #[inline]
    pub(crate) fn get(&self, handle: Handle) -> &T {
        match &self.slots[handle.to_index()] {
            Slot::Occupied(element) => element,
            Slot::Vacant(_) => panic!("`Arena::get()` - `handle` is invalid!"),
        }
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, handle: Handle) -> &mut T {
        match &mut self.slots[handle.to_index()] {
            Slot::Occupied(element) => element,
            Slot::Vacant(_) => panic!("`Arena::get_mut()` - `handle` is invalid!"),
        }
    }

    pub(crate) fn take(&mut self, handle: Handle) -> T {
        let slot = core::mem::replace(&mut self.slots[handle.to_index()], Slot::Vacant(self.next_free));
        match slot {
            Slot::Occupied(element) => {
                self.next_free = Some(handle);
                self.len -= 1;
                element
            }
            Slot::Vacant(next) => {
                // Put the free list back the way it was before reporting the misuse.
                self.slots[handle.to_index()] = Slot::Vacant(next);
                panic!("`Arena::take()` - `handle` is invalid!");
            }
        }
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.next_free = None;
        self.len = 0;
    }
}
