//! Fixed-capacity object pools with constant-time activation and stable item addresses.
//!
//! A pool allocates all of its slots once, when it is created, default-constructing a value in
//! each. Items are then handed out and returned without any further allocation: vacant slots are
//! threaded into an intrusive free list, so both [`activate()`](Pool::activate) and
//! [`deactivate()`](Pool::deactivate) are O(1).
//!
//! Two flavors are provided, differing only in their [`ReusePolicy`]:
//!
//! * [`ObjectPool`] reuses the most recently freed slot first.
//! * [`IndexedObjectPool`] reuses low slot indexes first and tracks the highest active index,
//!   keeping active items densely packed at the start of the pool so that traversals over
//!   active items can stop early.
//!
//! # Key Features
//!
//! - **Fixed capacity**: storage is allocated once and never grows, shrinks or moves
//! - **Stable memory addresses**: a value stays at the same address for the life of the pool
//! - **No per-item construction**: activation hands out the value already in the slot
//! - **Explicit errors**: every index-taking operation is bounds-checked
//! - **Exhaustion is not an error**: a full pool simply returns `None` from `activate()`
//!
//! # Example
//!
//! ```rust
//! use slot_pool::IndexedObjectPool;
//!
//! #[derive(Default)]
//! struct Particle {
//!     x: f32,
//!     speed: f32,
//! }
//!
//! let mut particles = IndexedObjectPool::<Particle>::with_capacity(1000)?;
//!
//! for n in 0..3 {
//!     let Some(mut particle) = particles.activate() else {
//!         break;
//!     };
//!     particle.x = 0.0;
//!     particle.speed = n as f32;
//! }
//!
//! // Only the first three slots are visited, not all 1000.
//! for (_, particle) in particles.iter_active() {
//!     assert!(particle.speed < 3.0);
//! }
//!
//! particles.deactivate(2)?;
//! assert_eq!(particles.highest_active(), Some(1));
//! # Ok::<(), slot_pool::Error>(())
//! ```

mod builder;
mod error;
mod policy;
mod pool;
mod slot;
mod slot_storage;

pub use builder::*;
pub use error::Error;
pub(crate) use error::Result;
pub use policy::*;
pub use pool::*;
pub use slot::*;
pub(crate) use slot_storage::*;
