use std::any::type_name;

use crate::{Error, Placement, Result, Slot};

/// This is the backing storage of a `Pool`, shared by every reuse policy.
///
/// A fixed-capacity heap-allocated array of slots, allocated once at construction. The array is
/// never resized or moved, so the address of every slot (and of the value inside it) is stable
/// for as long as the storage exists.
///
/// Vacant slots are threaded into a singly linked list through their `next_free_index` field.
/// Think of this as a virtual stack of vacant slots, with the stack entries stored in the slots
/// themselves. Also known as intrusive freelist. Links are indexes, with `capacity` meaning
/// "no next slot".
#[derive(Debug)]
pub(crate) struct SlotStorage<T> {
    slots: Box<[Slot<T>]>,

    /// Index of the first vacant slot. This will point out of bounds if every slot is active.
    first_available: usize,

    active_count: usize,
}

impl<T> SlotStorage<T> {
    /// Creates storage for `capacity` slots, each holding a default-constructed value.
    pub(crate) fn new(capacity: usize) -> Result<Self>
    where
        T: Default,
    {
        if capacity == 0 {
            return Err(Error::InvalidArgument {
                problem: format!(
                    "pool of {} must have a capacity greater than zero",
                    type_name::<T>()
                ),
            });
        }

        let slots = (0..capacity)
            .map(|index| Slot {
                active: false,
                index,
                // For the last slot, this will point out of bounds, which is fine.
                // It means the free list ends there.
                next_free_index: index
                    .checked_add(1)
                    .expect("a slice of capacity items cannot have an index of usize::MAX"),
                value: T::default(),
            })
            .collect::<Box<[_]>>();

        Ok(Self {
            slots,
            first_available: 0,
            active_count: 0,
        })
    }

    /// Storage without any slots. This is what remains after the contents of a pool have been
    /// taken out of it. Every slot-touching operation on it sees an empty, full collection.
    pub(crate) fn detached() -> Self {
        Self {
            slots: Box::default(),
            first_available: 0,
            active_count: 0,
        }
    }

    #[must_use]
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub(crate) fn active_count(&self) -> usize {
        self.active_count
    }

    #[must_use]
    pub(crate) fn slots(&self) -> &[Slot<T>] {
        &self.slots
    }

    #[must_use]
    pub(crate) fn slot(&self, index: usize) -> Option<&Slot<T>> {
        self.slots.get(index)
    }

    #[must_use]
    pub(crate) fn slot_mut(&mut self, index: usize) -> Option<&mut Slot<T>> {
        self.slots.get_mut(index)
    }

    /// Index of the slot the next activation will hand out, if any.
    #[must_use]
    pub(crate) fn free_head(&self) -> Option<usize> {
        (self.first_available < self.capacity()).then_some(self.first_available)
    }

    /// Pops the head of the free list and marks that slot active.
    ///
    /// Returns `None` if every slot is already active.
    pub(crate) fn pop_free(&mut self) -> Option<usize> {
        let index = self.free_head()?;

        let slot = self
            .slots
            .get_mut(index)
            .expect("free_head() only returns in-bounds indexes");

        debug_assert!(
            !slot.active,
            "free list head {index} was active in pool of {}",
            type_name::<T>()
        );

        slot.active = true;
        self.first_available = slot.next_free_index;

        self.active_count = self
            .active_count
            .checked_add(1)
            .expect("active count cannot exceed capacity, which fits in usize");

        Some(index)
    }

    /// Marks an active slot inactive and links it into the free list at `placement`.
    pub(crate) fn release(&mut self, index: usize, placement: Placement) -> Result<()> {
        let capacity = self.capacity();

        let Some(slot) = self.slots.get(index) else {
            return Err(Error::OutOfRange { index, capacity });
        };

        if !slot.active {
            return Err(Error::NotActive { index });
        }

        match (placement, self.free_head()) {
            (Placement::AfterHead, Some(head)) => {
                let head_slot = self
                    .slots
                    .get_mut(head)
                    .expect("free_head() only returns in-bounds indexes");
                let after_head = head_slot.next_free_index;
                head_slot.next_free_index = index;

                let slot = self.slot_mut_in_bounds(index);
                slot.active = false;
                slot.next_free_index = after_head;
            }
            // An empty free list has no head to insert after, so the slot becomes the head.
            (Placement::Front | Placement::AfterHead, _) => {
                let first_available = self.first_available;

                let slot = self.slot_mut_in_bounds(index);
                slot.active = false;
                slot.next_free_index = first_available;

                self.first_available = index;
            }
        }

        self.active_count = self
            .active_count
            .checked_sub(1)
            .expect("we verified above that the slot was active so count must be non-zero");

        Ok(())
    }

    /// Marks every slot inactive and rebuilds the free list in ascending index order.
    /// Stored values are left as they are.
    pub(crate) fn clear(&mut self) {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            slot.active = false;
            slot.index = index;
            slot.next_free_index = index
                .checked_add(1)
                .expect("a slice of capacity items cannot have an index of usize::MAX");
        }

        self.first_available = 0;
        self.active_count = 0;
    }

    fn slot_mut_in_bounds(&mut self, index: usize) -> &mut Slot<T> {
        self.slots
            .get_mut(index)
            .expect("caller already verified that the index is in bounds")
    }

    /// Number of slots reachable by walking the free list from its head.
    #[cfg(test)]
    pub(crate) fn free_list_len(&self) -> usize {
        let mut len: usize = 0;
        let mut cursor = self.first_available;

        while let Some(slot) = self.slots.get(cursor) {
            len = len.checked_add(1).expect("free list cannot exceed capacity");
            cursor = slot.next_free_index;
        }

        len
    }

    #[cfg_attr(test, mutants::skip)] // This is essentially test logic, mutation is meaningless.
    #[cfg(test)]
    pub(crate) fn integrity_check(&self) {
        let capacity = self.capacity();

        let mut observed_active_count: usize = 0;

        for (position, slot) in self.slots.iter().enumerate() {
            assert!(
                slot.index == position,
                "slot at position {position} claims index {} in pool of {}",
                slot.index,
                type_name::<T>()
            );

            if slot.active {
                observed_active_count = observed_active_count
                    .checked_add(1)
                    .expect("guarded by slice length");
            }
        }

        assert!(
            self.active_count == observed_active_count,
            "self.active_count {} does not match the observed active count {} in pool of {}",
            self.active_count,
            observed_active_count,
            type_name::<T>()
        );

        let mut visited = vec![false; capacity];
        let mut free_count: usize = 0;
        let mut cursor = self.first_available;

        while cursor != capacity {
            let slot = self.slots.get(cursor).unwrap_or_else(|| {
                panic!(
                    "free list link {cursor} is out of bounds for capacity {capacity} in pool of {}",
                    type_name::<T>()
                )
            });

            assert!(
                !slot.active,
                "free list contains active slot {cursor} in pool of {}",
                type_name::<T>()
            );

            let seen = visited.get_mut(cursor).expect("guarded by slot lookup above");
            assert!(
                !*seen,
                "free list visits slot {cursor} twice in pool of {}",
                type_name::<T>()
            );
            *seen = true;

            free_count = free_count.checked_add(1).expect("guarded by visited set");
            cursor = slot.next_free_index;
        }

        assert!(
            free_count
                == capacity
                    .checked_sub(self.active_count)
                    .expect("active count cannot exceed capacity"),
            "free list holds {free_count} slots but capacity {capacity} minus active count {} disagrees in pool of {}",
            self.active_count,
            type_name::<T>()
        );
    }
}
