//! Neighbor Search
//!
//! Capped linear scan over the population. Deliberately *not* a nearest-k
//! query: the scan walks the population in index order from a starting
//! offset (random when `random_neighbors` is set), appends every boid
//! strictly inside `max_radius`, and stops as soon as the cap is reached.
//! In a dense flock the result is an arbitrary capped subset of the boids in
//! range, in discovery order. The arbitrariness is intentional: a bounded
//! scan keeps the per-tick cost flat and the flock's structure loose.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::agent::Boid;
use crate::config::FlockSettings;

/// Finds up to `max_neighbors` members of `flock` within `max_radius` of
/// `boid`, excluding `boid` itself. Returns indices into `flock` in
/// discovery order.
///
/// The RNG is only consulted when `random_neighbors` is enabled, so
/// sequential-scan runs stay bit-reproducible regardless of the flag's
/// effect on the RNG stream elsewhere.
pub fn find_neighbors(
    boid: &Boid,
    flock: &[Boid],
    settings: &FlockSettings,
    rng: &mut SmallRng,
) -> Vec<usize> {
    let mut neighbors = Vec::with_capacity(settings.max_neighbors);
    if flock.is_empty() || settings.max_neighbors == 0 {
        return neighbors;
    }

    let offset = if settings.random_neighbors {
        rng.gen_range(0..flock.len())
    } else {
        0
    };

    for i in 0..flock.len() {
        let index = (i + offset) % flock.len();
        let other = &flock[index];
        if other.id == boid.id {
            continue;
        }
        if boid.position.distance(other.position) < settings.max_radius {
            neighbors.push(index);
        }
        if neighbors.len() >= settings.max_neighbors {
            break;
        }
    }

    neighbors
}
