//! Collision detection and response against walls and hazards
//!
//! The tricky part of the maze: a particle's tentative position is checked
//! against each thick wall. Hitting the flat side clamps the particle back out
//! and bounces it; hitting a rounded end rolls it around the cap instead of
//! stopping it dead.

use std::f32::consts::PI;

use glam::Vec2;

use super::geometry::{angle, distance};
use super::state::Hazard;
use super::wall::Wall;
use crate::tuning::Tuning;

/// Working kinematic state for one particle during one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Tentative position at the end of this tick
    pub next: Vec2,
}

impl Motion {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            next: pos + vel,
        }
    }
}

/// Which correction a wall applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallContact {
    /// Tentative position is clear of the wall
    None,
    /// Rolled around one of the rounded ends
    Cap,
    /// Bounced off the flat side
    Body,
}

/// Resolve one wall against a particle's tentative position
///
/// Caps are tested before the body so corner contacts roll rather than get
/// two conflicting corrections. At most one correction is applied per call.
pub fn resolve_wall(motion: &mut Motion, wall: &Wall, tuning: &Tuning) -> WallContact {
    let radius = tuning.particle_radius();
    let half = tuning.wall_half_thickness();
    let contact = tuning.contact_distance();

    let line = wall.across(wall.start);
    let next_across = wall.across(motion.next);
    if next_across + radius < line - half || next_across - radius > line + half {
        return WallContact::None;
    }

    let run_start = wall.along(wall.start);
    let run_end = run_start + wall.length;
    let next_along = wall.along(motion.next);

    if next_along + radius >= run_start - half
        && next_along < run_start
        && distance(wall.start, motion.next) < contact
    {
        *motion = roll_around_cap(wall.start, motion, contact);
        return WallContact::Cap;
    }

    let end = wall.end();
    if next_along - radius <= run_end + half
        && next_along > run_end
        && distance(end, motion.next) < contact
    {
        *motion = roll_around_cap(end, motion, contact);
        return WallContact::Cap;
    }

    if next_along >= run_start && next_along <= run_end {
        let clamped = if next_across < line {
            line - contact
        } else {
            line + contact
        };
        motion.next = wall.compose(next_along, clamped);
        motion.pos = wall.compose(wall.along(motion.pos), clamped);
        motion.vel = wall.compose(
            wall.along(motion.vel),
            -wall.across(motion.vel) / tuning.restitution_loss,
        );
        return WallContact::Body;
    }

    WallContact::None
}

/// Deflect a particle around a rounded wall end
///
/// The part of the velocity tangential to the impact direction is turned
/// into a rotation about the cap at `contact` distance. The new velocity runs
/// from that rotated point back through the current position, and the
/// tentative position is advanced by it within the same tick.
pub fn roll_around_cap(cap: Vec2, motion: &Motion, contact: f32) -> Motion {
    let impact = angle(motion.pos, cap);
    let heading = angle(Vec2::ZERO, motion.vel);
    let speed = motion.vel.length();

    let tangential = (impact - heading).sin() * speed;
    let rotation = (tangential / contact).atan();

    let theta = impact + PI - rotation;
    let rotated = cap + Vec2::new(theta.cos(), theta.sin()) * contact;

    let vel = motion.pos - rotated;
    Motion {
        pos: motion.pos,
        vel,
        next: motion.pos + vel,
    }
}

/// Index of the first hazard that captures a tentative position
pub fn hazard_capture(hazards: &[Hazard], next: Vec2) -> Option<usize> {
    hazards
        .iter()
        .position(|hazard| distance(hazard.center, next) <= hazard.radius)
}
