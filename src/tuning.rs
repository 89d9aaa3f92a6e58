//! Physics tuning
//!
//! Every numeric constant the simulation reads. Kept separate from the maze
//! layout so the same board can be played with different feel.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Physics and geometry constants, fixed for the lifetime of a session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Open corridor width between walls (px)
    pub path_width: f32,
    /// Wall thickness (px), shared by every wall
    pub wall_thickness: f32,
    /// Particle diameter (px)
    pub particle_size: f32,
    /// Hazard capture diameter (px)
    pub hazard_size: f32,
    /// Center of the goal region
    pub goal_center: Vec2,
    /// Goal radius; every particle must be strictly inside to win
    pub goal_radius: f32,
    /// Per-axis velocity ceiling (px per reference frame)
    pub max_velocity: f32,
    /// Perpendicular velocity is divided by this on a wall bounce
    pub restitution_loss: f32,
    /// Gravity scale applied to board tilt
    pub gravity: f32,
    /// Friction scale applied to board tilt
    pub friction: f32,
    /// Maximum joystick drag per axis (px)
    pub drag_limit: f32,
    /// Board rotation per dragged pixel (degrees)
    pub tilt_degrees_per_px: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            path_width: 25.0,
            wall_thickness: 10.0,
            particle_size: 10.0,
            hazard_size: 18.0,
            goal_center: Vec2::new(350.0 / 2.0, 315.0 / 2.0),
            goal_radius: 65.0 / 2.0,
            max_velocity: 1.5,
            restitution_loss: 3.0,
            gravity: 2.0,
            friction: 0.01,
            drag_limit: 15.0,
            tilt_degrees_per_px: 0.8,
        }
    }
}

impl Tuning {
    /// Distance between neighbouring grid lines
    #[inline]
    pub fn cell_pitch(&self) -> f32 {
        self.path_width + self.wall_thickness
    }

    #[inline]
    pub fn particle_radius(&self) -> f32 {
        self.particle_size / 2.0
    }

    #[inline]
    pub fn wall_half_thickness(&self) -> f32 {
        self.wall_thickness / 2.0
    }

    #[inline]
    pub fn hazard_radius(&self) -> f32 {
        self.hazard_size / 2.0
    }

    /// Closest a particle center can get to a wall centerline or cap
    #[inline]
    pub fn contact_distance(&self) -> f32 {
        self.wall_half_thickness() + self.particle_radius()
    }

    /// Pixel center of a grid cell
    pub fn cell_center(&self, column: u32, row: u32) -> Vec2 {
        let offset = self.wall_thickness / 2.0 + self.path_width / 2.0;
        Vec2::new(
            column as f32 * self.cell_pitch() + offset,
            row as f32 * self.cell_pitch() + offset,
        )
    }

    /// Parse tuning from JSON; missing fields fall back to defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values that would make the interaction radii meaningless
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("path_width", self.path_width),
            ("wall_thickness", self.wall_thickness),
            ("particle_size", self.particle_size),
            ("hazard_size", self.hazard_size),
            ("goal_radius", self.goal_radius),
            ("max_velocity", self.max_velocity),
            ("restitution_loss", self.restitution_loss),
            ("drag_limit", self.drag_limit),
        ];
        for (field, value) in positive {
            // Written as a negation so NaN is rejected too
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        let non_negative = [
            ("gravity", self.gravity),
            ("friction", self.friction),
            ("tilt_degrees_per_px", self.tilt_degrees_per_px),
        ];
        for (field, value) in non_negative {
            if !(value >= 0.0) || !value.is_finite() {
                return Err(ConfigError::Negative { field, value });
            }
        }
        Ok(())
    }
}
