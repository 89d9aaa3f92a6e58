//! Scalar and planar helpers shared by the integrator and collision code

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use glam::Vec2;

/// Euclidean distance between two points
#[inline]
pub fn distance(p1: Vec2, p2: Vec2) -> f32 {
    p1.distance(p2)
}

/// Direction of the vector from `p1` to `p2`, in [0, 2π)
///
/// Computed from the slope with a half-turn correction when the vector points
/// left. A vertical vector has no slope, so it maps straight to π/2 (down the
/// screen) or 3π/2 (up); coincident points give 0.
pub fn angle(p1: Vec2, p2: Vec2) -> f32 {
    let d = p2 - p1;
    if d.x == 0.0 {
        return if d.y > 0.0 {
            FRAC_PI_2
        } else if d.y < 0.0 {
            PI + FRAC_PI_2
        } else {
            0.0
        };
    }
    let mut theta = (d.y / d.x).atan();
    if d.x < 0.0 {
        theta += PI;
    }
    let theta = theta.rem_euclid(TAU);
    // rem_euclid can round a tiny negative angle up to exactly TAU
    if theta >= TAU { 0.0 } else { theta }
}

/// Clamp `value` into [-limit, limit]
#[inline]
pub fn clamp_magnitude(value: f32, limit: f32) -> f32 {
    value.min(limit).max(-limit)
}

/// Move `value` toward zero by `amount`, stopping exactly at zero
#[inline]
pub fn decay(value: f32, amount: f32) -> f32 {
    if value.abs() <= amount {
        0.0
    } else if value > 0.0 {
        value - amount
    } else {
        value + amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn test_distance() {
        assert_eq!(distance(Vec2::new(0.0, 0.0), Vec2::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn test_angle_quadrants() {
        let o = Vec2::ZERO;
        assert!(close(angle(o, Vec2::new(1.0, 0.0)), 0.0));
        assert!(close(angle(o, Vec2::new(1.0, 1.0)), PI / 4.0));
        assert!(close(angle(o, Vec2::new(-1.0, 1.0)), 3.0 * PI / 4.0));
        assert!(close(angle(o, Vec2::new(-1.0, 0.0)), PI));
        assert!(close(angle(o, Vec2::new(-1.0, -1.0)), 5.0 * PI / 4.0));
        assert!(close(angle(o, Vec2::new(1.0, -1.0)), 7.0 * PI / 4.0));
    }

    #[test]
    fn test_angle_vertical() {
        let p = Vec2::new(5.0, 5.0);
        assert_eq!(angle(p, Vec2::new(5.0, 9.0)), FRAC_PI_2);
        assert_eq!(angle(p, Vec2::new(5.0, 1.0)), PI + FRAC_PI_2);
        assert_eq!(angle(p, p), 0.0);
    }

    #[test]
    fn test_decay_stops_at_zero() {
        assert_eq!(decay(0.05, 0.1), 0.0);
        assert_eq!(decay(-0.1, 0.1), 0.0);
        assert!(close(decay(1.0, 0.25), 0.75));
        assert!(close(decay(-1.0, 0.25), -0.75));
    }

    #[test]
    fn test_clamp_magnitude() {
        assert_eq!(clamp_magnitude(20.0, 15.0), 15.0);
        assert_eq!(clamp_magnitude(-20.0, 15.0), -15.0);
        assert_eq!(clamp_magnitude(3.0, 15.0), 3.0);
    }

    proptest! {
        #[test]
        fn prop_decay_never_overshoots(v in -10.0f32..10.0, d in 0.001f32..2.0) {
            let out = decay(v, d);
            if v.abs() <= d {
                prop_assert_eq!(out, 0.0);
            } else {
                prop_assert!(out.abs() < v.abs());
                prop_assert_eq!(out.signum(), v.signum());
            }
        }

        #[test]
        fn prop_clamp_magnitude_idempotent(v in -100.0f32..100.0, limit in 0.0f32..50.0) {
            let once = clamp_magnitude(v, limit);
            prop_assert_eq!(clamp_magnitude(once, limit), once);
            prop_assert!(once.abs() <= limit);
        }

        #[test]
        fn prop_angle_in_range(x in -50.0f32..50.0, y in -50.0f32..50.0) {
            let theta = angle(Vec2::ZERO, Vec2::new(x, y));
            prop_assert!((0.0..TAU).contains(&theta));
        }
    }
}
