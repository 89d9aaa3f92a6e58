//! Board tilt and the joystick that drives it

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::clamp_magnitude;
use crate::tuning::Tuning;

/// Acceleration and friction per axis derived from the board's inclination
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TiltState {
    pub acceleration: Vec2,
    pub friction: Vec2,
}

impl TiltState {
    pub fn new(acceleration: Vec2, friction: Vec2) -> Self {
        Self {
            acceleration,
            friction,
        }
    }

    /// Tilt for a board rotated by `rotation_deg` (x = about the vertical axis)
    pub fn from_rotation(rotation_deg: Vec2, tuning: &Tuning) -> Self {
        let rx = rotation_deg.x.to_radians();
        let ry = rotation_deg.y.to_radians();
        Self {
            acceleration: Vec2::new(tuning.gravity * rx.sin(), tuning.gravity * ry.sin()),
            friction: Vec2::new(
                tuning.gravity * rx.cos() * tuning.friction,
                tuning.gravity * ry.cos() * tuning.friction,
            ),
        }
    }
}

/// Pointer-drag joystick; the drag from the press point tilts the board
#[derive(Debug, Clone, Copy, Default)]
pub struct Joystick {
    origin: Option<Vec2>,
}

impl Joystick {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record where the pointer went down
    pub fn press(&mut self, at: Vec2) {
        self.origin = Some(at);
    }

    pub fn release(&mut self) {
        self.origin = None;
    }

    /// Clamped drag offset of the joystick head, for drawing
    pub fn offset(&self, pointer: Vec2, tuning: &Tuning) -> Option<Vec2> {
        self.origin.map(|origin| {
            let delta = pointer - origin;
            Vec2::new(
                clamp_magnitude(delta.x, tuning.drag_limit),
                clamp_magnitude(delta.y, tuning.drag_limit),
            )
        })
    }

    /// Tilt for the current pointer position, or `None` before a press
    pub fn tilt(&self, pointer: Vec2, tuning: &Tuning) -> Option<TiltState> {
        self.offset(pointer, tuning)
            .map(|offset| TiltState::from_rotation(offset * tuning.tilt_degrees_per_px, tuning))
    }
}
