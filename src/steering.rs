//! Steering Model
//!
//! Five weighted contributions summed into one acceleration: edge avoidance,
//! separation, alignment, cohesion and noise-driven wander. Each rule is
//! guarded so that degenerate inputs (empty neighbor sets, zero-length
//! sums, coincident positions) contribute a zero vector instead of a NaN.
//!
//! `compute_acceleration` is a pure function of its inputs. The one position
//! mutation in this module, the containment correction in [`contain`], is a
//! separate step the caller runs *before* computing the acceleration.

use glam::Vec3;

use crate::agent::Boid;
use crate::config::FlockSettings;
use crate::noise_field::NoiseField;

/// Hard containment correction. A boid found outside the containment sphere
/// is pulled back onto the shell at `max_radius - avoidance_radius / 2`.
/// Must run before [`compute_acceleration`] for the same boid.
pub fn contain(boid: &mut Boid, settings: &FlockSettings) {
    let distance = boid.position.length();
    if distance > settings.max_radius {
        tracing::debug!(id = boid.id, distance, "boid crossed the containment boundary");
        boid.position =
            boid.position / distance * (settings.max_radius - settings.avoidance_radius / 2.0);
    }
}

/// Sums the five steering contributions for one boid and clamps the result's
/// magnitude to `max_accel`. `neighbors` holds indices into `flock`.
pub fn compute_acceleration(
    boid: &Boid,
    neighbors: &[usize],
    flock: &[Boid],
    noise: &NoiseField,
    settings: &FlockSettings,
) -> Vec3 {
    let acceleration = edge_avoidance(boid, settings)
        + separation(boid, neighbors, flock, settings)
        + alignment(neighbors, flock, settings)
        + cohesion(boid, neighbors, flock, settings)
        + wander(boid, noise, settings);

    clamp_magnitude(acceleration, settings.max_accel)
}

/// Inward push that ramps up as a boid approaches the containment boundary.
/// Zero everywhere inside the avoidance shell.
fn edge_avoidance(boid: &Boid, settings: &FlockSettings) -> Vec3 {
    let distance = boid.position.length();
    if distance > 0.0 && distance > settings.max_radius - settings.avoidance_radius {
        // A boid sitting exactly on the boundary would divide by zero.
        let remaining = (settings.max_radius - distance).max(f32::EPSILON);
        let strength = falloff(remaining, settings);
        let inward = -boid.position / distance;
        return inward * settings.avoidance_weight * strength;
    }
    Vec3::ZERO
}

/// Short-range repulsion from neighbors inside `avoidance_radius`, weighted
/// by proximity.
fn separation(boid: &Boid, neighbors: &[usize], flock: &[Boid], settings: &FlockSettings) -> Vec3 {
    let mut sum = Vec3::ZERO;
    for &index in neighbors {
        let away = boid.position - flock[index].position;
        let distance = away.length();
        if distance > 0.0 && distance < settings.avoidance_radius {
            sum += away / distance * falloff(distance, settings);
        }
    }
    match sum.try_normalize() {
        Some(dir) => dir * settings.separation_weight,
        None => Vec3::ZERO,
    }
}

/// Pull toward the neighbors' average heading. All neighbors count,
/// regardless of distance.
fn alignment(neighbors: &[usize], flock: &[Boid], settings: &FlockSettings) -> Vec3 {
    if neighbors.is_empty() {
        return Vec3::ZERO;
    }
    let sum: Vec3 = neighbors.iter().map(|&i| flock[i].velocity).sum();
    let average = sum / neighbors.len() as f32;
    match average.try_normalize() {
        Some(dir) => dir * settings.alignment_weight,
        None => Vec3::ZERO,
    }
}

/// Pull toward the neighbors' centroid. All neighbors count, regardless of
/// distance.
fn cohesion(boid: &Boid, neighbors: &[usize], flock: &[Boid], settings: &FlockSettings) -> Vec3 {
    if neighbors.is_empty() {
        return Vec3::ZERO;
    }
    let centroid =
        neighbors.iter().map(|&i| flock[i].position).sum::<Vec3>() / neighbors.len() as f32;
    match (centroid - boid.position).try_normalize() {
        Some(dir) => dir * settings.cohesion_weight,
        None => Vec3::ZERO,
    }
}

/// Ambient wander from the noise field.
fn wander(boid: &Boid, noise: &NoiseField, settings: &FlockSettings) -> Vec3 {
    noise.wander(boid.position) * settings.noise_weight
}

/// `1/d` or `1/d²` depending on the configured falloff variant.
fn falloff(distance: f32, settings: &FlockSettings) -> f32 {
    if settings.inverse_square_falloff {
        1.0 / (distance * distance)
    } else {
        1.0 / distance
    }
}

/// Scales `v` down to magnitude `max` when it exceeds it; direction is
/// preserved and a zero vector stays zero.
fn clamp_magnitude(v: Vec3, max: f32) -> Vec3 {
    let length = v.length();
    if length > max && length > 0.0 {
        v * (max / length)
    } else {
        v
    }
}
