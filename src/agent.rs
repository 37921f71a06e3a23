//! Boid State
//!
//! One boid per simulated agent: a stable id, a position, a velocity and an
//! orientation derived from the velocity. Boids are created once at
//! initialization and mutated only by the integrator and the containment
//! correction.

use glam::{Quat, Vec3};
use rand::rngs::SmallRng;
use rand::Rng;

use crate::config::FlockSettings;

/// One flocking agent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boid {
    /// Stable identity; used for equality only, never for ordering
    pub id: u32,
    pub position: Vec3,
    pub velocity: Vec3,
    /// Facing along the velocity; derived, never independently authored
    pub orientation: Quat,
}

impl Boid {
    /// Creates a boid at an explicit pose, facing along `velocity`.
    pub fn new(id: u32, position: Vec3, velocity: Vec3) -> Self {
        Self {
            id,
            position,
            velocity,
            orientation: facing(velocity),
        }
    }

    /// Spawns a boid with a random position inside the spawn sphere and a
    /// random velocity whose magnitude lies in `[min_speed, max_speed]`.
    pub fn spawn(id: u32, settings: &FlockSettings, rng: &mut SmallRng) -> Self {
        let position = random_in_sphere(rng) * settings.spawn_radius;
        let speed = rng.gen_range(settings.min_speed..=settings.max_speed);
        let velocity = random_direction(rng) * speed;
        Self::new(id, position, velocity)
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}

/// Uniform random point inside the unit sphere, by rejection sampling.
pub(crate) fn random_in_sphere(rng: &mut SmallRng) -> Vec3 {
    loop {
        let v = Vec3::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        );
        if v.length_squared() <= 1.0 {
            return v;
        }
    }
}

/// Uniform random unit vector.
pub(crate) fn random_direction(rng: &mut SmallRng) -> Vec3 {
    loop {
        if let Some(dir) = random_in_sphere(rng).try_normalize() {
            return dir;
        }
    }
}

/// Orientation rotating +Z onto the direction of `velocity`. Identity when
/// the velocity is zero (facing is undefined).
pub(crate) fn facing(velocity: Vec3) -> Quat {
    match velocity.try_normalize() {
        Some(dir) => Quat::from_rotation_arc(Vec3::Z, dir),
        None => Quat::IDENTITY,
    }
}
