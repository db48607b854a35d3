//! Basic usage of the `slot_pool` crate:
//!
//! * Creating a pool.
//! * Activating slots.
//! * Accessing values by index.
//! * Deactivating slots and observing reuse.

use slot_pool::ObjectPool;

fn main() -> Result<(), slot_pool::Error> {
    let mut pool = ObjectPool::<String>::with_capacity(3)?;

    // Activating a slot hands out the value already stored in it. Remember the index,
    // it is what you give back to the pool later.
    let mut alice = pool.activate().expect("pool has room for three");
    alice.push_str("Alice");
    let alice = alice.index();

    let mut bob = pool.activate().expect("pool has room for three");
    bob.push_str("Bob");
    let bob = bob.index();

    println!(
        "Pool has {} of {} slots active",
        pool.active_count(),
        pool.capacity()
    );

    // Indexing is fast, similar to `Vec[index]`.
    println!("Slot {alice} contains {}", pool[alice]);

    pool.deactivate(bob)?;

    // The most recently freed slot is handed out next. Its old value is still there -
    // the pool never resets values on its own.
    let mut reused = pool.activate().expect("a slot was just freed");
    println!(
        "Reused slot {} still contains {:?}",
        reused.index(),
        *reused
    );
    reused.clear();
    reused.push_str("Charlie");

    // Exhaustion is signaled by `None`, not by an error.
    _ = pool.activate();
    assert!(pool.activate().is_none());
    println!("Pool is full: {}", pool.is_full());

    Ok(())
}
