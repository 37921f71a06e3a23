//! Murmuration
//!
//! Headless 3D boid flocking simulation core. Each boid senses nearby flock
//! members and a spherical containment boundary, sums weighted steering
//! rules into an acceleration, and integrates its own velocity, position and
//! orientation once per externally driven tick. The host calls
//! [`FlockManager::tick`] with an elapsed-time value; renderers read agent
//! poses through the snapshot surface in [`output`].

pub mod agent;
pub mod config;
pub mod flock;
pub mod integrator;
pub mod neighbors;
pub mod noise_field;
pub mod output;
pub mod steering;

pub use agent::Boid;
pub use config::{ConfigError, FlockSettings, SettingsError};
pub use flock::FlockManager;
pub use noise_field::NoiseField;
pub use output::{AgentSnapshot, FlockSnapshot};
