//! Showcases the `IndexedObjectPool`, which keeps active items packed at low indexes and
//! tracks the highest active index so that traversals can stop early.

use slot_pool::IndexedObjectPool;

#[derive(Debug, Default)]
struct Bullet {
    y: f32,
    velocity: f32,
}

fn main() -> Result<(), slot_pool::Error> {
    let mut bullets = IndexedObjectPool::<Bullet>::with_capacity(10_000)?;

    for n in 0..5_u8 {
        let mut bullet = bullets.activate().expect("pool has plenty of room");
        bullet.y = 0.0;
        bullet.velocity = f32::from(n) + 1.0;
    }

    println!(
        "Highest active index after spawning: {:?}",
        bullets.highest_active()
    );

    // Bullets 1 and 3 leave the screen.
    bullets.deactivate(3)?;
    bullets.deactivate(1)?;

    // New bullets fill the lowest freed slots first.
    let first = bullets.activate().expect("slots were freed").index();
    let second = bullets.activate().expect("slots were freed").index();
    println!("New bullets landed in slots {first} and {second}");

    // Only the first few slots are visited, not all 10 000.
    for (index, bullet) in bullets.iter_active() {
        println!("Bullet {index}: {bullet:?}");
    }

    for index in 0..5 {
        bullets.deactivate(index)?;
    }

    // Zero is ambiguous on its own, so ask for the Option-returning flavor.
    println!(
        "After removing everything: highest_active_index() = {}, highest_active() = {:?}",
        bullets.highest_active_index(),
        bullets.highest_active()
    );

    Ok(())
}
