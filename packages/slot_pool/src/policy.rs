use std::fmt::Debug;

use tracing::trace;

/// Where a freed slot is linked into the free list of a pool.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Placement {
    /// The freed slot becomes the head of the free list and is handed out by the next activation.
    Front,

    /// The freed slot is linked directly after the current head. If the free list is empty,
    /// the freed slot becomes the head.
    AfterHead,
}

/// Decides the order in which a [`Pool`][crate::Pool] reuses freed slots and maintains any
/// bookkeeping derived from which slots are active.
///
/// Every hook is called after the pool has validated the operation, so a policy only ever sees
/// in-bounds indexes of slots that really changed state.
///
/// Two policies are provided:
///
/// * [`LastFreedFirst`] - the most recently freed slot is reused first.
/// * [`LowestIndexFirst`] - reuse is biased toward low indexes and the highest active index
///   is tracked, so traversals can stop early.
pub trait ReusePolicy: Debug + Default {
    /// Chooses where in the free list the slot at `freed_index` is linked.
    ///
    /// `free_head` is the index of the current head of the free list, if the list is not empty.
    fn placement(&self, freed_index: usize, free_head: Option<usize>) -> Placement;

    /// Called after the slot at `index` has been activated.
    fn activated(&mut self, index: usize);

    /// Called after the slot at `index` has been deactivated.
    ///
    /// `is_active` reports the current activity of any slot in the pool.
    fn deactivated(&mut self, index: usize, is_active: impl Fn(usize) -> bool);

    /// Called after every slot of the pool has been deactivated at once.
    fn cleared(&mut self);

    /// Every active slot has an index below the returned value.
    #[must_use]
    fn scan_end(&self, active_count: usize, capacity: usize) -> usize;
}

/// Reuses the most recently freed slot first (LIFO) and tracks nothing else.
///
/// This is the policy of [`ObjectPool`][crate::ObjectPool].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct LastFreedFirst;

impl ReusePolicy for LastFreedFirst {
    fn placement(&self, _freed_index: usize, _free_head: Option<usize>) -> Placement {
        Placement::Front
    }

    fn activated(&mut self, _index: usize) {}

    fn deactivated(&mut self, _index: usize, _is_active: impl Fn(usize) -> bool) {}

    fn cleared(&mut self) {}

    fn scan_end(&self, _active_count: usize, capacity: usize) -> usize {
        capacity
    }
}

/// Biases reuse toward low slot indexes and tracks the highest active index.
///
/// A freed slot is linked in front of the free list head if its index is lower than the head's,
/// otherwise directly after the head. This keeps every deactivation O(1) while steering the
/// next activations toward the low end of the pool, so active items stay densely packed and a
/// traversal can stop at the highest active index.
///
/// This is the policy of [`IndexedObjectPool`][crate::IndexedObjectPool].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct LowestIndexFirst {
    /// Highest index among active slots. Zero if no slot is active, which is indistinguishable
    /// from only slot 0 being active without also checking the active count.
    highest_active_index: usize,
}

impl LowestIndexFirst {
    /// The highest index among active slots, or zero if no slot is active.
    #[must_use]
    pub fn highest_active_index(&self) -> usize {
        self.highest_active_index
    }
}

impl ReusePolicy for LowestIndexFirst {
    fn placement(&self, freed_index: usize, free_head: Option<usize>) -> Placement {
        match free_head {
            Some(head) if head < freed_index => Placement::AfterHead,
            _ => Placement::Front,
        }
    }

    fn activated(&mut self, index: usize) {
        if index > self.highest_active_index {
            self.highest_active_index = index;
        }
    }

    fn deactivated(&mut self, index: usize, is_active: impl Fn(usize) -> bool) {
        if index != self.highest_active_index {
            return;
        }

        // Only path that is not O(1): walk down to the next active slot, if any.
        self.highest_active_index = (0..index).rev().find(|&i| is_active(i)).unwrap_or(0);

        trace!(
            deactivated = index,
            highest_active_index = self.highest_active_index,
            "recomputed highest active index"
        );
    }

    fn cleared(&mut self) {
        self.highest_active_index = 0;
    }

    fn scan_end(&self, active_count: usize, _capacity: usize) -> usize {
        if active_count == 0 {
            0
        } else {
            self.highest_active_index
                .checked_add(1)
                .expect("an active slot index is always below capacity")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_freed_first_always_in_front() {
        let policy = LastFreedFirst;

        assert_eq!(policy.placement(3, None), Placement::Front);
        assert_eq!(policy.placement(3, Some(1)), Placement::Front);
        assert_eq!(policy.placement(1, Some(3)), Placement::Front);
        assert_eq!(policy.scan_end(0, 10), 10);
    }

    #[test]
    fn lowest_index_first_placement() {
        let policy = LowestIndexFirst::default();

        assert_eq!(policy.placement(3, None), Placement::Front);
        assert_eq!(policy.placement(1, Some(3)), Placement::Front);
        assert_eq!(policy.placement(3, Some(1)), Placement::AfterHead);
    }

    #[test]
    fn activation_raises_highest() {
        let mut policy = LowestIndexFirst::default();

        policy.activated(2);
        assert_eq!(policy.highest_active_index(), 2);

        policy.activated(1);
        assert_eq!(policy.highest_active_index(), 2);

        policy.activated(5);
        assert_eq!(policy.highest_active_index(), 5);
    }

    #[test]
    fn deactivating_highest_scans_down() {
        let mut policy = LowestIndexFirst::default();
        policy.activated(1);
        policy.activated(4);

        let active = [false, true, false, false, false];
        policy.deactivated(4, |i| active[i]);

        assert_eq!(policy.highest_active_index(), 1);
        assert_eq!(policy.scan_end(1, 5), 2);
    }

    #[test]
    fn deactivating_below_highest_is_noop() {
        let mut policy = LowestIndexFirst::default();
        policy.activated(1);
        policy.activated(4);

        policy.deactivated(1, |_| panic!("no scan expected"));

        assert_eq!(policy.highest_active_index(), 4);
    }

    #[test]
    fn deactivating_last_active_resets_to_zero() {
        let mut policy = LowestIndexFirst::default();
        policy.activated(3);

        policy.deactivated(3, |_| false);

        assert_eq!(policy.highest_active_index(), 0);
        assert_eq!(policy.scan_end(0, 5), 0);
    }

    #[test]
    fn cleared_resets() {
        let mut policy = LowestIndexFirst::default();
        policy.activated(3);

        policy.cleared();

        assert_eq!(policy.highest_active_index(), 0);
    }
}
