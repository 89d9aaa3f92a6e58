//! Construction-time configuration errors
//!
//! The tick loop itself never fails; everything that can be wrong with a maze
//! is caught here, once, when a session is built.

use std::fmt;

/// Invalid maze layout or tuning
#[derive(Debug)]
pub enum ConfigError {
    /// Wall with a run length of zero cells
    ZeroLengthWall { index: usize },
    /// Wall that leaves the grid
    WallOutOfBounds { index: usize },
    /// Two collinear walls sharing at least one cell of run
    OverlappingWalls { first: usize, second: usize },
    /// Hazard or start cell outside the grid
    CellOutOfBounds { kind: &'static str, column: u32, row: u32 },
    /// Layout without any particles
    NoParticles,
    /// Tuning value that must be strictly positive
    NonPositive { field: &'static str, value: f32 },
    /// Tuning value that must be finite and at least zero
    Negative { field: &'static str, value: f32 },
    /// Layout/tuning JSON could not be parsed
    Json(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroLengthWall { index } => {
                write!(f, "wall {index} has zero length")
            }
            ConfigError::WallOutOfBounds { index } => {
                write!(f, "wall {index} extends outside the grid")
            }
            ConfigError::OverlappingWalls { first, second } => {
                write!(f, "walls {first} and {second} overlap")
            }
            ConfigError::CellOutOfBounds { kind, column, row } => {
                write!(f, "{kind} cell ({column}, {row}) is outside the grid")
            }
            ConfigError::NoParticles => write!(f, "layout has no particles"),
            ConfigError::NonPositive { field, value } => {
                write!(f, "tuning value {field} must be positive, got {value}")
            }
            ConfigError::Negative { field, value } => {
                write!(f, "tuning value {field} must be finite and non-negative, got {value}")
            }
            ConfigError::Json(err) => write!(f, "config decode error: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Json(err)
    }
}
