/// One fixed storage cell of a pool.
///
/// Every slot owns a value that was default-constructed when the pool was created. Activating
/// or deactivating a slot never constructs, resets or drops that value - it only changes whether
/// the slot is handed out. A freshly activated slot therefore still holds whatever value the
/// previous user of the slot left behind.
///
/// Slots are obtained via [`Pool::at()`][crate::Pool::at] and
/// [`Pool::at_mut()`][crate::Pool::at_mut].
#[derive(Debug)]
pub struct Slot<T> {
    pub(crate) active: bool,

    /// Position of the slot in the storage. Assigned at construction and never changes.
    pub(crate) index: usize,

    /// Link to the next vacant slot. Only meaningful while the slot is inactive. A value equal
    /// to the pool capacity means "end of the free list".
    pub(crate) next_free_index: usize,

    pub(crate) value: T,
}

impl<T> Slot<T> {
    /// The fixed position of this slot in the pool.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether the slot is currently handed out.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The value stored in the slot, regardless of whether the slot is active.
    #[must_use]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Exclusive access to the value stored in the slot, regardless of whether the slot is active.
    #[must_use]
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }
}
