//! Integration
//!
//! Advances one boid per tick: accumulates the steering acceleration into
//! the velocity, clamps speed into `[min_speed, max_speed]`, steps the
//! position (smoothed or plain Euler) and turns the orientation toward the
//! direction of travel.

use glam::Vec3;

use crate::agent::{facing, Boid};
use crate::config::FlockSettings;

/// Advances `boid` by `dt` seconds given the already magnitude-clamped
/// steering acceleration. With `dt == 0` the velocity still accumulates but
/// position and orientation are untouched.
pub fn advance(boid: &mut Boid, acceleration: Vec3, dt: f32, settings: &FlockSettings) {
    let was_stationary = boid.velocity == Vec3::ZERO;

    boid.velocity += acceleration;
    boid.velocity = clamp_speed(boid.velocity, settings.min_speed, settings.max_speed);

    if dt <= 0.0 {
        return;
    }

    if settings.movement_smooth > 0.0 {
        // Exponential approach toward where a full step would land.
        let t = (settings.movement_smooth * dt).min(1.0);
        boid.position = boid.position.lerp(boid.position + boid.velocity, t);
    } else {
        boid.position += boid.velocity * dt;
    }

    // No boid ends a tick outside the containment sphere; the steering-time
    // correction alone only catches escapes one tick later.
    let distance = boid.position.length();
    if distance > settings.max_radius {
        boid.position *= settings.max_radius / distance;
    }

    if boid.velocity != Vec3::ZERO {
        let target = facing(boid.velocity);
        boid.orientation = if was_stationary {
            // Facing was undefined while stationary; snap instead of slerp.
            target
        } else {
            let t = (settings.rotation_smooth * dt).min(1.0);
            boid.orientation.slerp(target, t)
        };
    }
}

/// Clamps the speed into `[min, max]` preserving direction. An exactly zero
/// velocity has no direction to scale along and stays zero.
fn clamp_speed(velocity: Vec3, min: f32, max: f32) -> Vec3 {
    let speed = velocity.length();
    if speed == 0.0 {
        return velocity;
    }
    if speed > max {
        velocity * (max / speed)
    } else if speed < min {
        velocity * (min / speed)
    } else {
        velocity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Quat;

    fn settings() -> FlockSettings {
        FlockSettings::default()
    }

    #[test]
    fn test_slow_velocity_raised_to_min_speed() {
        let v = clamp_speed(Vec3::new(1.0, 0.0, 0.0), 5.0, 20.0);
        assert!((v.length() - 5.0).abs() < 1e-4);
        assert!(v.x > 0.0);
    }

    #[test]
    fn test_fast_velocity_lowered_to_max_speed() {
        let v = clamp_speed(Vec3::new(0.0, 100.0, 0.0), 5.0, 20.0);
        assert!((v.length() - 20.0).abs() < 1e-3);
        assert!(v.y > 0.0);
    }

    #[test]
    fn test_boundary_speeds_accepted() {
        let min = clamp_speed(Vec3::new(5.0, 0.0, 0.0), 5.0, 20.0);
        assert_eq!(min, Vec3::new(5.0, 0.0, 0.0));
        let max = clamp_speed(Vec3::new(20.0, 0.0, 0.0), 5.0, 20.0);
        assert_eq!(max, Vec3::new(20.0, 0.0, 0.0));
    }

    #[test]
    fn test_zero_velocity_stays_zero() {
        // min_speed must not be enforced along an undefined direction.
        let v = clamp_speed(Vec3::ZERO, 5.0, 20.0);
        assert_eq!(v, Vec3::ZERO);
    }

    #[test]
    fn test_zero_dt_accumulates_velocity_but_moves_nothing() {
        let mut boid = Boid::new(0, Vec3::new(1.0, 2.0, 3.0), Vec3::new(10.0, 0.0, 0.0));
        let orientation = boid.orientation;
        advance(&mut boid, Vec3::new(0.0, 1.0, 0.0), 0.0, &settings());
        assert_eq!(boid.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(boid.orientation, orientation);
        assert!(boid.velocity.y > 0.0);
    }

    #[test]
    fn test_euler_step_when_smoothing_disabled() {
        let cfg = FlockSettings {
            movement_smooth: 0.0,
            min_speed: 0.0,
            ..settings()
        };
        let mut boid = Boid::new(0, Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0));
        advance(&mut boid, Vec3::ZERO, 0.5, &cfg);
        assert!(boid.position.distance(Vec3::new(5.0, 0.0, 0.0)) < 1e-5);
    }

    #[test]
    fn test_smoothed_step_covers_full_velocity_at_unit_factor() {
        // movement_smooth = 1, dt = 1 degenerates to position += velocity.
        let mut boid = Boid::new(0, Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0));
        advance(&mut boid, Vec3::ZERO, 1.0, &settings());
        assert!(boid.position.distance(Vec3::new(10.0, 0.0, 0.0)) < 1e-4);
    }

    #[test]
    fn test_smoothed_step_shorter_for_small_dt() {
        let mut boid = Boid::new(0, Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0));
        advance(&mut boid, Vec3::ZERO, 0.1, &settings());
        assert!(boid.position.x > 0.0);
        assert!(boid.position.x < 10.0 * 0.1 + 1e-4);
    }

    #[test]
    fn test_position_clamped_to_containment_radius() {
        let cfg = FlockSettings {
            movement_smooth: 0.0,
            ..settings()
        };
        let mut boid = Boid::new(0, Vec3::new(14.0, 0.0, 0.0), Vec3::new(20.0, 0.0, 0.0));
        advance(&mut boid, Vec3::ZERO, 1.0, &cfg);
        assert!(boid.position.length() <= cfg.max_radius + 1e-4);
    }

    #[test]
    fn test_orientation_snaps_from_standstill() {
        let cfg = FlockSettings {
            min_speed: 0.0,
            rotation_smooth: 0.1,
            ..settings()
        };
        let mut boid = Boid::new(0, Vec3::ZERO, Vec3::ZERO);
        assert_eq!(boid.orientation, Quat::IDENTITY);
        advance(&mut boid, Vec3::new(0.0, 3.0, 0.0), 1.0, &cfg);
        // Despite the small smoothing factor the facing snaps immediately.
        let forward = boid.orientation * Vec3::Z;
        assert!(forward.distance(Vec3::Y) < 1e-4);
    }

    #[test]
    fn test_orientation_turns_gradually_when_moving() {
        let cfg = FlockSettings {
            min_speed: 0.0,
            max_speed: 100.0,
            rotation_smooth: 0.5,
            ..settings()
        };
        let mut boid = Boid::new(0, Vec3::ZERO, Vec3::new(5.0, 0.0, 0.0));
        // Strong sideways kick; the velocity turns but the facing lags.
        advance(&mut boid, Vec3::new(0.0, 5.0, 0.0), 0.1, &cfg);
        let forward = boid.orientation * Vec3::Z;
        let target = boid.velocity.normalize();
        let lag = forward.distance(target);
        assert!(lag > 1e-3, "facing should trail the velocity, lag = {lag}");
    }
}
