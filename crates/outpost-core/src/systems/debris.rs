//! Debris placement - materializing spawn table selections into the world.

use hecs::{Entity, World};
use log::{debug, info};
use rand::Rng;

use crate::components::DebrisSelector;
use crate::host::EntityFactory;

/// Sample `n` debris prototypes from the selector on `field`.
///
/// Returns an empty list when the entity has no selector or its table has
/// no positive-weight entries.
pub fn select_debris(
    world: &World,
    field: Entity,
    rng: &mut impl Rng,
    n: usize,
) -> Vec<String> {
    let selector = match world.get::<&DebrisSelector>(field) {
        Ok(selector) => selector,
        Err(_) => {
            debug!("debris selection skipped: {field:?} has no selector");
            return Vec::new();
        }
    };

    let picks = match selector.table().sample_many(rng, n) {
        Ok(draws) => draws.map(|entry| entry.prototype.clone()).collect(),
        Err(_) => {
            debug!("debris selection skipped: {field:?} table is empty");
            Vec::new()
        }
    };
    picks
}

/// Place debris at each of the given points: one table draw per point, the
/// entry's amount rolled per draw, instantiation delegated to the host's
/// entity factory. Returns the number of entities spawned.
pub fn place_debris(
    world: &World,
    field: Entity,
    points: &[(f32, f32)],
    factory: &mut dyn EntityFactory,
    rng: &mut impl Rng,
) -> usize {
    let selector = match world.get::<&DebrisSelector>(field) {
        Ok(selector) => selector,
        Err(_) => {
            debug!("debris placement skipped: {field:?} has no selector");
            return 0;
        }
    };

    let table = selector.table();
    if table.is_empty() {
        debug!("debris placement skipped: {field:?} table is empty");
        return 0;
    }

    let mut spawned = 0;
    for &(x, y) in points {
        let entry = match table.sample(rng) {
            Ok(entry) => entry,
            Err(_) => break,
        };
        for _ in 0..entry.amount.roll(rng) {
            factory.spawn(&entry.prototype, x, y);
            spawned += 1;
        }
    }

    info!("placed {spawned} debris entities across {} points", points.len());
    spawned
}
