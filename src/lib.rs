//! Tilt Maze - gravity-driven particles rolling through a tilted maze
//!
//! Core modules:
//! - `sim`: Simulation core (integration, wall collisions, hazards, session state)
//! - `layout`: Static maze tables (walls, hazard cells, start cells)
//! - `tuning`: Data-driven physics constants
//! - `platform`: Host bindings (browser facade on wasm32)

pub mod error;
pub mod layout;
pub mod platform;
pub mod sim;
pub mod tuning;

pub use error::ConfigError;
pub use layout::{Cell, MazeLayout, StartCell, WallPlacement};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Reference frame duration in milliseconds; elapsed time is measured in these units
    pub const FRAME_MS: f64 = 16.0;

    /// Default maze grid (cells)
    pub const GRID_COLUMNS: u32 = 10;
    pub const GRID_ROWS: u32 = 9;
}
