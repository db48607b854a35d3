use std::any::type_name;
use std::fmt;
use std::mem;
use std::ops::{Deref, DerefMut, Index, IndexMut};

use tracing::{debug, trace};

use crate::{
    Error, LastFreedFirst, LowestIndexFirst, PoolBuilder, Result, ReusePolicy, Slot, SlotStorage,
};

/// A fixed-capacity object pool with constant-time activation and deactivation.
///
/// The pool allocates all of its slots once, when it is created, and default-constructs a value
/// in each of them. After that, the pool never allocates, reallocates or moves its storage:
///
/// * [`activate()`][1] hands out a vacant slot and returns an [`Activated`] handle to its value.
/// * [`deactivate()`][2] returns a slot to the pool by its index.
///
/// Activating and deactivating only change whether a slot is handed out. They do not construct,
/// reset or drop values, so a reused slot contains whatever its previous user left in it.
///
/// The order in which vacant slots are reused is decided by the [`ReusePolicy`] `P`. You will
/// usually use one of the two aliases:
///
/// * [`ObjectPool`] - the most recently freed slot is reused first.
/// * [`IndexedObjectPool`] - low indexes are reused first and the highest active index is
///   tracked, which allows traversals to stop early.
///
/// # Address stability
///
/// The address of every slot's value is stable for the lifetime of the pool, across any
/// sequence of activations, deactivations and [`clear()`][3] calls.
///
/// # Thread safety
///
/// The pool does no internal synchronization. It can be moved between threads if `T` can, and
/// shared between threads if `T` can, but mutating operations require exclusive access as usual.
///
/// # Example
///
/// ```rust
/// use slot_pool::ObjectPool;
///
/// let mut pool = ObjectPool::<String>::with_capacity(2)?;
///
/// let mut greeting = pool.activate().expect("pool has room");
/// greeting.push_str("Hello");
/// let index = greeting.index();
///
/// assert_eq!(pool.active_count(), 1);
/// assert_eq!(pool[index], "Hello");
///
/// pool.deactivate(index)?;
/// assert_eq!(pool.active_count(), 0);
/// # Ok::<(), slot_pool::Error>(())
/// ```
///
/// [1]: Self::activate
/// [2]: Self::deactivate
/// [3]: Self::clear
pub struct Pool<T, P = LastFreedFirst> {
    storage: SlotStorage<T>,
    policy: P,
}

/// A pool that reuses the most recently freed slot first.
pub type ObjectPool<T> = Pool<T, LastFreedFirst>;

/// A pool that reuses low slot indexes first and tracks the highest active index.
///
/// # Example
///
/// ```rust
/// use slot_pool::IndexedObjectPool;
///
/// let mut pool = IndexedObjectPool::<u32>::with_capacity(8)?;
///
/// for _ in 0..3 {
///     pool.activate().expect("pool has room");
/// }
///
/// assert_eq!(pool.highest_active_index(), 2);
///
/// pool.deactivate(2)?;
/// assert_eq!(pool.highest_active_index(), 1);
/// # Ok::<(), slot_pool::Error>(())
/// ```
pub type IndexedObjectPool<T> = Pool<T, LowestIndexFirst>;

impl<T, P> Pool<T, P>
where
    T: Default,
    P: ReusePolicy,
{
    pub(crate) fn new_inner(capacity: usize) -> Result<Self> {
        let storage = SlotStorage::new(capacity)?;

        debug!(
            capacity,
            item_type = type_name::<T>(),
            policy = type_name::<P>(),
            "created pool"
        );

        Ok(Self {
            storage,
            policy: P::default(),
        })
    }

    /// Creates a pool with room for `capacity` items, each slot holding `T::default()`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `capacity` is zero.
    ///
    /// # Example
    ///
    /// ```rust
    /// use slot_pool::{Error, ObjectPool};
    ///
    /// let pool = ObjectPool::<u64>::with_capacity(16)?;
    /// assert_eq!(pool.capacity(), 16);
    /// assert_eq!(pool.active_count(), 0);
    ///
    /// assert!(matches!(
    ///     ObjectPool::<u64>::with_capacity(0),
    ///     Err(Error::InvalidArgument { .. })
    /// ));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::builder().capacity(capacity).build()
    }
}

impl<T, P> Pool<T, P>
where
    P: ReusePolicy,
{
    /// Starts building a new [`Pool`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use slot_pool::IndexedObjectPool;
    ///
    /// let pool = IndexedObjectPool::<u32>::builder().capacity(100).build()?;
    /// assert_eq!(pool.capacity(), 100);
    /// # Ok::<(), slot_pool::Error>(())
    /// ```
    pub fn builder() -> PoolBuilder<T, P> {
        PoolBuilder::new()
    }

    /// The number of slots the pool was created with.
    ///
    /// Zero only for a pool whose contents were moved out via [`take()`][Self::take].
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// The number of slots currently handed out.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.storage.active_count()
    }

    /// Whether no slot is currently handed out.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.storage.active_count() == 0
    }

    /// Whether every slot is currently handed out, so [`activate()`][Self::activate] would
    /// return `None`.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.storage.free_head().is_none()
    }

    /// Hands out a vacant slot, returning a handle to the value stored in it.
    ///
    /// The value is not reset - it is either the default value the pool was created with or
    /// whatever the previous user of the slot left behind.
    ///
    /// Returns `None` if every slot is already active. This is an expected condition that the
    /// caller must handle, not an error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use slot_pool::ObjectPool;
    ///
    /// let mut pool = ObjectPool::<u32>::with_capacity(1)?;
    ///
    /// let mut item = pool.activate().expect("pool has room");
    /// *item = 42;
    ///
    /// assert!(pool.activate().is_none());
    /// # Ok::<(), slot_pool::Error>(())
    /// ```
    #[must_use]
    pub fn activate(&mut self) -> Option<Activated<'_, T>> {
        let Some(index) = self.storage.pop_free() else {
            trace!(
                capacity = self.storage.capacity(),
                item_type = type_name::<T>(),
                "pool exhausted"
            );
            return None;
        };

        self.policy.activated(index);

        let slot = self
            .storage
            .slot_mut(index)
            .expect("pop_free() only returns in-bounds indexes");

        Some(Activated {
            index,
            value: &mut slot.value,
        })
    }

    /// Returns the slot at `index` to the pool.
    ///
    /// The stored value is left as it is and will be handed out again by a later activation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index` is not below the capacity and
    /// [`Error::NotActive`] if the slot is not currently active. The pool is unchanged in both
    /// cases.
    pub fn deactivate(&mut self, index: usize) -> Result<()> {
        let placement = self.policy.placement(index, self.storage.free_head());

        self.storage.release(index, placement)?;

        let slots = self.storage.slots();
        self.policy
            .deactivated(index, |i| slots.get(i).is_some_and(Slot::is_active));

        Ok(())
    }

    /// Whether the slot at `index` is currently active.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index` is not below the capacity.
    pub fn active(&self, index: usize) -> Result<bool> {
        self.storage
            .slot(index)
            .map(Slot::is_active)
            .ok_or(Error::OutOfRange {
                index,
                capacity: self.storage.capacity(),
            })
    }

    /// The slot at `index`, whether active or not, or `None` if `index` is out of range.
    #[must_use]
    pub fn at(&self, index: usize) -> Option<&Slot<T>> {
        self.storage.slot(index)
    }

    /// Exclusive access to the slot at `index`, whether active or not, or `None` if `index`
    /// is out of range.
    #[must_use]
    pub fn at_mut(&mut self, index: usize) -> Option<&mut Slot<T>> {
        self.storage.slot_mut(index)
    }

    /// Iterates over the active slots in ascending index order, yielding each index together
    /// with the stored value.
    ///
    /// With [`LowestIndexFirst`] the scan stops after the highest active index instead of
    /// visiting every slot.
    pub fn iter_active(&self) -> impl Iterator<Item = (usize, &T)> {
        let end = self
            .policy
            .scan_end(self.storage.active_count(), self.storage.capacity());

        self.storage
            .slots()
            .iter()
            .take(end)
            .filter(|slot| slot.is_active())
            .map(|slot| (slot.index(), slot.value()))
    }

    /// Deactivates every slot and rebuilds the free list in ascending index order.
    ///
    /// No memory is allocated or released and stored values are left as they are.
    pub fn clear(&mut self) {
        self.storage.clear();
        self.policy.cleared();

        debug!(
            capacity = self.storage.capacity(),
            item_type = type_name::<T>(),
            "cleared pool"
        );
    }

    /// Moves the storage of this pool into a new pool, leaving this one detached.
    ///
    /// The returned pool has exactly the capacity, active slots and values this pool had. The
    /// detached pool that remains has a capacity of zero: it never hands out slots and every
    /// index-taking operation reports [`Error::OutOfRange`]. It is safe to keep using, drop or
    /// overwrite.
    ///
    /// # Example
    ///
    /// ```rust
    /// use slot_pool::ObjectPool;
    ///
    /// let mut a = ObjectPool::<u32>::with_capacity(4)?;
    /// _ = a.activate();
    ///
    /// let b = a.take();
    ///
    /// assert_eq!(a.capacity(), 0);
    /// assert!(a.activate().is_none());
    /// assert_eq!(b.capacity(), 4);
    /// assert_eq!(b.active_count(), 1);
    /// # Ok::<(), slot_pool::Error>(())
    /// ```
    #[must_use]
    pub fn take(&mut self) -> Self {
        mem::replace(
            self,
            Self {
                storage: SlotStorage::detached(),
                policy: P::default(),
            },
        )
    }

    #[cfg(test)]
    pub(crate) fn storage(&self) -> &SlotStorage<T> {
        &self.storage
    }
}

impl<T> Pool<T, LowestIndexFirst> {
    /// The highest index among active slots.
    ///
    /// **Zero is ambiguous**: it is returned both when slot 0 is the only active slot and when
    /// no slot is active at all. Check [`active_count()`][Self::active_count] or use
    /// [`highest_active()`][Self::highest_active] to tell the two apart.
    #[must_use]
    pub fn highest_active_index(&self) -> usize {
        self.policy.highest_active_index()
    }

    /// The highest index among active slots, or `None` if no slot is active.
    #[must_use]
    pub fn highest_active(&self) -> Option<usize> {
        (self.storage.active_count() > 0).then(|| self.policy.highest_active_index())
    }
}

/// Direct access to the value in a slot, without consulting whether the slot is active.
///
/// This is meant for callers that already know the index is valid, typically because they
/// obtained it from [`Activated::index()`]. Reading an inactive slot is not a memory safety
/// problem but yields a value that nobody owns at the moment.
///
/// # Panics
///
/// Panics if `index` is out of range.
impl<T, P> Index<usize> for Pool<T, P> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        let capacity = self.storage.capacity();

        let Some(slot) = self.storage.slot(index) else {
            panic!(
                "index {index} out of bounds in pool of {} with capacity {capacity}",
                type_name::<T>()
            );
        };

        &slot.value
    }
}

/// # Panics
///
/// Panics if `index` is out of range.
impl<T, P> IndexMut<usize> for Pool<T, P> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        let capacity = self.storage.capacity();

        let Some(slot) = self.storage.slot_mut(index) else {
            panic!(
                "index {index} out of bounds in pool of {} with capacity {capacity}",
                type_name::<T>()
            );
        };

        &mut slot.value
    }
}

impl<T, P> fmt::Debug for Pool<T, P>
where
    P: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(type_name::<Self>())
            .field("capacity", &self.storage.capacity())
            .field("active_count", &self.storage.active_count())
            .field("free_head", &self.storage.free_head())
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

/// Exclusive handle to the value in a freshly activated slot.
///
/// Returned by [`Pool::activate()`]. Dereferences to the stored value and knows the index of
/// its slot, which is what [`Pool::deactivate()`] needs to give the slot back.
///
/// The handle borrows the pool. Keep the index if you need to find the value again later.
pub struct Activated<'p, T> {
    index: usize,
    value: &'p mut T,
}

impl<'p, T> Activated<'p, T> {
    /// The index of the activated slot.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Converts the handle into a plain exclusive reference with the lifetime of the pool borrow.
    #[must_use]
    pub fn into_mut(self) -> &'p mut T {
        self.value
    }
}

impl<T> Deref for Activated<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.value
    }
}

impl<T> DerefMut for Activated<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.value
    }
}

impl<T> fmt::Debug for Activated<'_, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(type_name::<Self>())
            .field("index", &self.index)
            .field("value", &self.value)
            .finish()
    }
}
