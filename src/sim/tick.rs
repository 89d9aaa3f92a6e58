//! Per-frame simulation tick
//!
//! Integrates tilt into velocity, resolves walls and hazards against each
//! particle's tentative position, commits, then checks the goal.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Motion, WallContact, hazard_capture, resolve_wall};
use super::geometry::{clamp_magnitude, decay, distance};
use super::state::{Hazard, Particle, SessionPhase, Session};
use super::tilt::TiltState;
use super::wall::Wall;
use crate::tuning::Tuning;

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickOutcome {
    /// Session is not running; nothing moved
    Inactive,
    /// Keep scheduling ticks
    Continue,
    /// Every particle is inside the goal
    Won,
    /// A particle hit a hazard; the rest of the frame was discarded
    Lost { hazard: usize },
}

/// Advance a running session by `elapsed` reference frames
pub fn tick(session: &mut Session, elapsed: f32) -> TickOutcome {
    if session.phase != SessionPhase::Running {
        return TickOutcome::Inactive;
    }
    session.time_ticks += 1;

    let hazards: &[Hazard] = if session.hard_mode {
        &session.hazards
    } else {
        &[]
    };
    let captured = advance_particles(
        &mut session.particles,
        &session.walls,
        hazards,
        session.tilt.as_ref(),
        elapsed,
        &session.tuning,
    );

    if let Some((particle, hazard)) = captured {
        log::debug!(
            "Tick {}: particle {} entered hazard {}",
            session.time_ticks,
            particle,
            hazard
        );
        session.lose(hazard, particle);
        return TickOutcome::Lost { hazard };
    }

    let goal = session.tuning.goal_center;
    let goal_radius = session.tuning.goal_radius;
    if session
        .particles
        .iter()
        .all(|p| distance(p.pos, goal) < goal_radius)
    {
        session.win();
        return TickOutcome::Won;
    }

    TickOutcome::Continue
}

/// Move every particle in order, committing each one as it finishes
///
/// Returns `(particle, hazard)` on the first capture; that particle and every
/// particle after it keep their previous state.
fn advance_particles(
    particles: &mut [Particle],
    walls: &[Wall],
    hazards: &[Hazard],
    tilt: Option<&TiltState>,
    elapsed: f32,
    tuning: &Tuning,
) -> Option<(usize, usize)> {
    for (index, particle) in particles.iter_mut().enumerate() {
        let vel = match tilt {
            Some(tilt) => apply_tilt(particle.vel, tilt, elapsed, tuning),
            None => particle.vel,
        };

        let mut motion = Motion::new(particle.pos, vel);
        for (wall_index, wall) in walls.iter().enumerate() {
            let contact = resolve_wall(&mut motion, wall, tuning);
            if contact != WallContact::None {
                log::trace!("particle {index} {contact:?} contact with wall {wall_index}");
            }
        }

        if let Some(hazard) = hazard_capture(hazards, motion.next) {
            return Some((index, hazard));
        }

        particle.pos = motion.next;
        particle.vel = motion.vel;
    }
    None
}

/// Velocity after one tick of tilt, per axis
pub fn apply_tilt(vel: Vec2, tilt: &TiltState, elapsed: f32, tuning: &Tuning) -> Vec2 {
    Vec2::new(
        accelerate_axis(
            vel.x,
            tilt.acceleration.x,
            tilt.friction.x,
            elapsed,
            tuning.max_velocity,
        ),
        accelerate_axis(
            vel.y,
            tilt.acceleration.y,
            tilt.friction.y,
            elapsed,
            tuning.max_velocity,
        ),
    )
}

fn accelerate_axis(vel: f32, accel: f32, friction: f32, elapsed: f32, max_velocity: f32) -> f32 {
    let drag = friction * elapsed;
    if accel == 0.0 {
        // Level axis: friction only, never past zero
        return decay(vel, drag);
    }
    clamp_magnitude(vel + accel * elapsed, max_velocity) - accel.signum() * drag
}
