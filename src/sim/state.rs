//! Session state and core simulation types
//!
//! A `Session` owns everything a playthrough mutates: particles, walls,
//! hazards, the current tilt and the phase. Nothing here is global.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::tick::{TickOutcome, tick};
use super::tilt::TiltState;
use super::wall::{Wall, build_walls};
use crate::error::ConfigError;
use crate::layout::MazeLayout;
use crate::tuning::Tuning;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Particles at their start cells, waiting for the first pointer press
    Idle,
    /// Ticks are being scheduled
    Running,
    /// Every particle reached the goal
    Won,
    /// A particle fell into a hazard
    Lost { hazard: usize },
}

/// Transition notifications for the UI layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    Running,
    Won,
    Lost { hazard: usize, particle: usize },
    /// Session was reset (or the mode toggled)
    Idle { hard_mode: bool },
}

/// A rolling particle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub id: u32,
    pub name: String,
    pub color: String,
    pub pos: Vec2,
    pub vel: Vec2,
}

/// A point hazard that swallows particles in hard mode
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hazard {
    pub center: Vec2,
    pub radius: f32,
}

impl Hazard {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }
}

/// One playthrough of a maze
#[derive(Debug, Clone)]
pub struct Session {
    pub tuning: Tuning,
    /// Walls derived from the layout (fixed until the mode is toggled)
    pub walls: Vec<Wall>,
    /// Empty unless hard mode is on
    pub hazards: Vec<Hazard>,
    pub particles: Vec<Particle>,
    /// Absent until the pointer first moves after a start
    pub tilt: Option<TiltState>,
    pub phase: SessionPhase,
    pub hard_mode: bool,
    /// Ticks since the last reset
    pub time_ticks: u64,
    layout: MazeLayout,
    events: Vec<SessionEvent>,
}

impl Session {
    /// Build an idle session; the layout and tuning are validated here, once
    pub fn new(layout: MazeLayout, tuning: Tuning) -> Result<Self, ConfigError> {
        layout.validate()?;
        tuning.validate()?;

        let walls = build_walls(&layout.walls, tuning.cell_pitch());
        log::info!(
            "Maze {}x{}: {} walls, {} hazard cells, {} particles",
            layout.columns,
            layout.rows,
            walls.len(),
            layout.hazards.len(),
            layout.starts.len()
        );

        let mut session = Self {
            tuning,
            walls,
            hazards: Vec::new(),
            particles: Vec::new(),
            tilt: None,
            phase: SessionPhase::Idle,
            hard_mode: false,
            time_ticks: 0,
            layout,
            events: Vec::new(),
        };
        session.seed();
        Ok(session)
    }

    /// Start positions for the current layout, in particle order
    pub fn start_positions(&self) -> Vec<Vec2> {
        self.layout
            .starts
            .iter()
            .map(|start| self.tuning.cell_center(start.cell.column, start.cell.row))
            .collect()
    }

    /// Idle -> Running; returns false in any other phase
    pub fn start(&mut self) -> bool {
        if self.phase != SessionPhase::Idle {
            return false;
        }
        self.phase = SessionPhase::Running;
        self.events.push(SessionEvent::Running);
        log::info!("Session running (hard mode: {})", self.hard_mode);
        true
    }

    /// Return to Idle with particles back at their start cells
    pub fn reset(&mut self) {
        self.seed();
        self.phase = SessionPhase::Idle;
        self.events.push(SessionEvent::Idle {
            hard_mode: self.hard_mode,
        });
        log::info!("Session reset");
    }

    /// Flip hard mode; always resets the session
    pub fn toggle_hazard_mode(&mut self) {
        self.hard_mode = !self.hard_mode;
        self.walls = build_walls(&self.layout.walls, self.tuning.cell_pitch());
        log::info!(
            "Hard mode {}",
            if self.hard_mode { "enabled" } else { "disabled" }
        );
        self.reset();
    }

    /// Push a new tilt; ignored unless running
    pub fn set_tilt(&mut self, tilt: TiltState) -> bool {
        if self.phase != SessionPhase::Running {
            return false;
        }
        self.tilt = Some(tilt);
        true
    }

    /// Advance one tick; `elapsed` is in reference frames
    pub fn step(&mut self, elapsed: f32) -> TickOutcome {
        tick(self, elapsed)
    }

    /// Take queued transition events
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn win(&mut self) {
        self.phase = SessionPhase::Won;
        self.tilt = None;
        self.events.push(SessionEvent::Won);
        log::info!("All particles reached the goal after {} ticks", self.time_ticks);
    }

    pub(crate) fn lose(&mut self, hazard: usize, particle: usize) {
        self.phase = SessionPhase::Lost { hazard };
        self.tilt = None;
        self.events.push(SessionEvent::Lost { hazard, particle });
        log::info!("Particle {particle} captured by hazard {hazard}");
    }

    fn seed(&mut self) {
        let starts = self.start_positions();
        self.particles = self
            .layout
            .starts
            .iter()
            .zip(starts)
            .enumerate()
            .map(|(i, (start, pos))| Particle {
                id: i as u32,
                name: start.name.clone(),
                color: start.color.clone(),
                pos,
                vel: Vec2::ZERO,
            })
            .collect();

        self.hazards = if self.hard_mode {
            self.layout
                .hazards
                .iter()
                .map(|cell| {
                    Hazard::new(
                        self.tuning.cell_center(cell.column, cell.row),
                        self.tuning.hazard_radius(),
                    )
                })
                .collect()
        } else {
            Vec::new()
        };

        self.tilt = None;
        self.time_ticks = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stock() -> Session {
        Session::new(MazeLayout::default(), Tuning::default()).unwrap()
    }

    #[test]
    fn test_new_session_is_idle_at_start_cells() {
        let session = stock();
        assert_eq!(session.phase, SessionPhase::Idle);
        assert_eq!(session.particles.len(), 4);
        assert_eq!(session.particles[0].pos, Vec2::new(17.5, 17.5));
        assert_eq!(session.particles[3].pos, Vec2::new(332.5, 297.5));
        assert!(session.particles.iter().all(|p| p.vel == Vec2::ZERO));
        assert!(session.hazards.is_empty());
        assert!(session.tilt.is_none());
    }

    #[test]
    fn test_invalid_layout_fails_fast() {
        let mut layout = MazeLayout::default();
        layout.walls[5].length = 0;
        assert!(matches!(
            Session::new(layout, Tuning::default()),
            Err(ConfigError::ZeroLengthWall { index: 5 })
        ));
    }

    #[test]
    fn test_start_only_from_idle() {
        let mut session = stock();
        assert!(session.start());
        assert!(!session.start());
        assert_eq!(session.drain_events(), vec![SessionEvent::Running]);
        assert!(session.drain_events().is_empty());
    }

    #[test]
    fn test_tilt_ignored_unless_running() {
        let mut session = stock();
        let tilt = TiltState::new(Vec2::new(0.1, 0.0), Vec2::splat(0.02));
        assert!(!session.set_tilt(tilt));
        assert!(session.tilt.is_none());

        session.start();
        assert!(session.set_tilt(tilt));
        assert_eq!(session.tilt, Some(tilt));
    }

    #[test]
    fn test_toggle_populates_hazards_and_resets() {
        let mut session = stock();
        session.start();
        session.toggle_hazard_mode();
        assert!(session.hard_mode);
        assert_eq!(session.phase, SessionPhase::Idle);
        assert_eq!(session.hazards.len(), 8);
        assert_eq!(session.hazards[0].center, Vec2::new(17.5, 192.5));
        assert_eq!(session.hazards[0].radius, 9.0);

        let walls = session.walls.clone();
        session.toggle_hazard_mode();
        assert!(!session.hard_mode);
        assert!(session.hazards.is_empty());
        assert_eq!(session.walls, walls);
        assert_eq!(
            session.drain_events().last(),
            Some(&SessionEvent::Idle { hard_mode: false })
        );
    }
}
