//! Flock Manager
//!
//! Owns the population, the settings, the RNG and the noise field, and
//! drives the per-tick pipeline: containment correction, neighbor refresh,
//! steering, integration. Nothing else holds a writable reference to the
//! population.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::agent::Boid;
use crate::config::{FlockSettings, SettingsError};
use crate::integrator;
use crate::neighbors;
use crate::noise_field::NoiseField;
use crate::output::{AgentSnapshot, FlockSnapshot};
use crate::steering;

pub struct FlockManager {
    settings: FlockSettings,
    boids: Vec<Boid>,
    noise: NoiseField,
    rng: SmallRng,
    tick_count: u64,
}

impl FlockManager {
    /// Validates `settings`, then spawns `num_boids` agents from `seed`.
    pub fn new(settings: FlockSettings, seed: u64) -> Result<Self, SettingsError> {
        settings.validate()?;
        let mut rng = SmallRng::seed_from_u64(seed);
        let boids = (0..settings.num_boids)
            .map(|i| Boid::spawn(i as u32, &settings, &mut rng))
            .collect();
        tracing::info!(num_boids = settings.num_boids, seed, "flock initialized");
        Ok(Self {
            noise: NoiseField::new(seed as u32),
            settings,
            boids,
            rng,
            tick_count: 0,
        })
    }

    /// Builds a flock from an explicit population instead of random spawns,
    /// for scripted scenarios and tests. `num_boids` in the settings is
    /// ignored; the population is exactly `boids`.
    pub fn with_boids(
        settings: FlockSettings,
        seed: u64,
        boids: Vec<Boid>,
    ) -> Result<Self, SettingsError> {
        settings.validate()?;
        Ok(Self {
            noise: NoiseField::new(seed as u32),
            settings,
            boids,
            rng: SmallRng::seed_from_u64(seed),
            tick_count: 0,
        })
    }

    /// Advances the whole population by one step of `dt` seconds.
    ///
    /// Neighbor queries and steering read a snapshot of the population taken
    /// at the start of the tick, so every boid sees strictly previous-tick
    /// state of the others regardless of update order. `dt == 0` is a no-op
    /// on positions and orientations, but accelerations still accumulate
    /// into velocities and out-of-bounds positions are still corrected.
    pub fn tick(&mut self, dt: f32) {
        debug_assert!(dt.is_finite() && dt >= 0.0, "dt must be finite and non-negative");

        let previous = self.boids.clone();
        for index in 0..self.boids.len() {
            let boid = &mut self.boids[index];
            steering::contain(boid, &self.settings);
            let neighbors =
                neighbors::find_neighbors(boid, &previous, &self.settings, &mut self.rng);
            let acceleration = steering::compute_acceleration(
                boid,
                &neighbors,
                &previous,
                &self.noise,
                &self.settings,
            );
            integrator::advance(boid, acceleration, dt, &self.settings);
        }
        self.tick_count += 1;
    }

    pub fn settings(&self) -> &FlockSettings {
        &self.settings
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Read-only access to the population, for renderers and tests.
    pub fn boids(&self) -> &[Boid] {
        &self.boids
    }

    /// Read-only view of one agent, or `None` for an unknown id.
    pub fn agent_snapshot(&self, id: u32) -> Option<AgentSnapshot> {
        self.boids.iter().find(|b| b.id == id).map(AgentSnapshot::from)
    }

    /// Snapshot of the whole population at the current tick.
    pub fn snapshot(&self) -> FlockSnapshot {
        FlockSnapshot {
            tick: self.tick_count,
            agents: self.boids.iter().map(AgentSnapshot::from).collect(),
        }
    }
}
