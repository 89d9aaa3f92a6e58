//! Axis-aligned wall segments in pixel space
//!
//! A wall is a centerline from `start` running `length` pixels right
//! (horizontal) or down (vertical), thickened by the shared wall thickness and
//! rounded at both ends.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::layout::WallPlacement;

/// An immutable wall segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    /// Anchor (top/left end of the centerline)
    pub start: Vec2,
    pub horizontal: bool,
    /// Centerline length (px)
    pub length: f32,
}

impl Wall {
    pub fn new(start: Vec2, horizontal: bool, length: f32) -> Self {
        Self {
            start,
            horizontal,
            length,
        }
    }

    /// Far end of the centerline
    #[inline]
    pub fn end(&self) -> Vec2 {
        if self.horizontal {
            self.start + Vec2::new(self.length, 0.0)
        } else {
            self.start + Vec2::new(0.0, self.length)
        }
    }

    /// Component of `p` along the wall's run axis
    #[inline]
    pub fn along(&self, p: Vec2) -> f32 {
        if self.horizontal { p.x } else { p.y }
    }

    /// Component of `p` perpendicular to the run axis
    #[inline]
    pub fn across(&self, p: Vec2) -> f32 {
        if self.horizontal { p.y } else { p.x }
    }

    /// Build a point from run/perpendicular components
    #[inline]
    pub fn compose(&self, along: f32, across: f32) -> Vec2 {
        if self.horizontal {
            Vec2::new(along, across)
        } else {
            Vec2::new(across, along)
        }
    }
}

/// Convert grid placements into pixel walls
///
/// Pure and order-preserving: the same placements and pitch always give the
/// same walls in the same order.
pub fn build_walls(placements: &[WallPlacement], cell_pitch: f32) -> Vec<Wall> {
    placements
        .iter()
        .map(|p| {
            Wall::new(
                Vec2::new(p.column as f32 * cell_pitch, p.row as f32 * cell_pitch),
                p.horizontal,
                p.length as f32 * cell_pitch,
            )
        })
        .collect()
}
