//! Ambient Noise Field
//!
//! Deterministic scalar noise over 3D positions, used for the wander
//! contribution. The scalar sample is mapped onto a unit vector in the XY
//! plane so that wander nudges boids sideways rather than radially.

use glam::Vec3;
use noise::{NoiseFn, Perlin};
use std::f32::consts::TAU;

/// Seeded, pure scalar noise over positions.
pub struct NoiseField {
    perlin: Perlin,
}

impl NoiseField {
    pub fn new(seed: u32) -> Self {
        Self {
            perlin: Perlin::new(seed),
        }
    }

    /// Samples the field at `position`. Pure; the result lies in `[-1, 1]`.
    pub fn sample(&self, position: Vec3) -> f32 {
        let value = self
            .perlin
            .get([position.x as f64, position.y as f64, position.z as f64]) as f32;
        value.clamp(-1.0, 1.0)
    }

    /// Maps the sample at `position` to a unit wander vector in the XY plane.
    pub fn wander(&self, position: Vec3) -> Vec3 {
        let angle = self.sample(position) * TAU;
        Vec3::new(angle.cos(), angle.sin(), 0.0)
    }
}
