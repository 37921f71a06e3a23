//! Snapshot Output
//!
//! Serde schema for observer and renderer consumption, plus JSON writers.
//! Snapshots are read-only views; nothing in here can mutate the flock.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::agent::Boid;

/// Read-only view of one boid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentSnapshot {
    pub id: u32,
    pub position: Vec3,
    pub velocity: Vec3,
    pub orientation: Quat,
}

impl From<&Boid> for AgentSnapshot {
    fn from(boid: &Boid) -> Self {
        Self {
            id: boid.id,
            position: boid.position,
            velocity: boid.velocity,
            orientation: boid.orientation,
        }
    }
}

/// Complete population state at one tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlockSnapshot {
    pub tick: u64,
    pub agents: Vec<AgentSnapshot>,
}

/// Writes a snapshot as pretty-printed JSON.
pub fn write_snapshot(snapshot: &FlockSnapshot, path: impl AsRef<Path>) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(path, json)?;
    Ok(())
}

/// Writes a snapshot into `dir` as `snap_{tick:06}.json`.
pub fn write_snapshot_to_dir(snapshot: &FlockSnapshot, dir: impl AsRef<Path>) -> std::io::Result<()> {
    let path = dir.as_ref().join(format!("snap_{:06}.json", snapshot.tick));
    write_snapshot(snapshot, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_snapshot() -> FlockSnapshot {
        let boid = Boid::new(3, Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.0, 5.0, 0.0));
        FlockSnapshot {
            tick: 42,
            agents: vec![AgentSnapshot::from(&boid)],
        }
    }

    #[test]
    fn test_snapshot_serialization_round_trip() {
        let snapshot = sample_snapshot();
        let json = serde_json::to_string_pretty(&snapshot).unwrap();
        assert!(json.contains("\"tick\": 42"));

        let parsed: FlockSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, snapshot);
    }

    #[test]
    fn test_write_snapshot_to_dir() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = sample_snapshot();
        write_snapshot_to_dir(&snapshot, dir.path()).unwrap();

        let written = std::fs::read_to_string(dir.path().join("snap_000042.json")).unwrap();
        let parsed: FlockSnapshot = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed.agents[0].id, 3);
    }
}
