use std::any::type_name;
use std::fmt;
use std::marker::PhantomData;

use crate::{Error, LastFreedFirst, Pool, Result, ReusePolicy};

/// Builder for creating an instance of [`Pool`].
///
/// The capacity is mandatory. It is fixed for the lifetime of the pool.
///
/// # Examples
///
/// ```
/// use slot_pool::ObjectPool;
///
/// let pool = ObjectPool::<u32>::builder().capacity(64).build()?;
/// assert_eq!(pool.capacity(), 64);
/// # Ok::<(), slot_pool::Error>(())
/// ```
#[must_use]
pub struct PoolBuilder<T, P = LastFreedFirst> {
    capacity: Option<usize>,

    _item: PhantomData<T>,
    _policy: PhantomData<P>,
}

impl<T, P> fmt::Debug for PoolBuilder<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PoolBuilder")
            .field("item_type", &format_args!("{}", type_name::<T>()))
            .field("policy", &format_args!("{}", type_name::<P>()))
            .field("capacity", &self.capacity)
            .finish()
    }
}

impl<T, P> PoolBuilder<T, P>
where
    P: ReusePolicy,
{
    pub(crate) fn new() -> Self {
        Self {
            capacity: None,
            _item: PhantomData,
            _policy: PhantomData,
        }
    }

    /// Sets the number of slots in the pool. Must be greater than zero.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Builds the pool with the specified configuration, default-constructing every slot value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the capacity was not set or is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_pool::{Error, IndexedObjectPool};
    ///
    /// let result = IndexedObjectPool::<u32>::builder().build();
    /// assert!(matches!(result, Err(Error::InvalidArgument { .. })));
    /// ```
    pub fn build(self) -> Result<Pool<T, P>>
    where
        T: Default,
    {
        let Some(capacity) = self.capacity else {
            return Err(Error::InvalidArgument {
                problem: format!(
                    "capacity of pool of {} must be specified",
                    type_name::<T>()
                ),
            });
        };

        Pool::new_inner(capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{IndexedObjectPool, ObjectPool};

    #[test]
    fn builds_with_capacity() {
        let pool = ObjectPool::<u8>::builder().capacity(3).build().unwrap();

        assert_eq!(pool.capacity(), 3);
        assert!(pool.is_empty());
    }

    #[test]
    fn missing_capacity_is_error() {
        assert!(matches!(
            ObjectPool::<u8>::builder().build(),
            Err(Error::InvalidArgument { .. })
        ));
    }

    #[test]
    fn zero_capacity_is_error() {
        assert!(matches!(
            IndexedObjectPool::<u8>::builder().capacity(0).build(),
            Err(Error::InvalidArgument { .. })
        ));
    }

    #[test]
    fn debug_names_types() {
        let builder = IndexedObjectPool::<u16>::builder().capacity(5);
        let output = format!("{builder:?}");

        assert!(output.contains("u16"));
        assert!(output.contains("LowestIndexFirst"));
        assert!(output.contains("Some(5)"));
    }
}
