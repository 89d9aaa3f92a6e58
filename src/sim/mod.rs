//! Simulation core
//!
//! All physics lives here. This module must stay pure and deterministic:
//! - Time only enters through the `elapsed` argument of a tick
//! - Stable iteration order (layout order for walls and particles)
//! - No rendering or platform dependencies

pub mod clock;
pub mod collision;
pub mod geometry;
pub mod state;
pub mod tick;
pub mod tilt;
pub mod wall;

pub use clock::FrameClock;
pub use collision::{Motion, WallContact, hazard_capture, resolve_wall, roll_around_cap};
pub use geometry::{angle, clamp_magnitude, decay, distance};
pub use state::{Hazard, Particle, Session, SessionEvent, SessionPhase};
pub use tick::{TickOutcome, apply_tilt, tick};
pub use tilt::{Joystick, TiltState};
pub use wall::{Wall, build_walls};
