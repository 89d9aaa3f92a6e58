//! Platform abstraction layer
//!
//! `Driver` is the host-agnostic glue between raw host callbacks (pointer
//! events, key presses, animation-frame timestamps) and a `Session`. The
//! browser facade in `web` and the native runner both sit on top of it.

#[cfg(target_arch = "wasm32")]
pub mod web;

use glam::Vec2;
use serde::Serialize;

use crate::sim::{
    FrameClock, Joystick, Particle, Session, SessionEvent, SessionPhase, TickOutcome,
};

/// Everything a renderer/UI needs after one animation frame
#[derive(Debug, Clone, Serialize)]
pub struct FrameSnapshot {
    pub phase: SessionPhase,
    pub hard_mode: bool,
    pub outcome: TickOutcome,
    /// Whether the host should request another frame
    pub running: bool,
    pub particles: Vec<Particle>,
    pub events: Vec<SessionEvent>,
}

/// Session plus the input state that feeds it
#[derive(Debug, Clone)]
pub struct Driver {
    pub session: Session,
    joystick: Joystick,
    clock: FrameClock,
}

impl Driver {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            joystick: Joystick::new(),
            clock: FrameClock::new(),
        }
    }

    /// Press on the joystick; starts an idle session
    pub fn pointer_down(&mut self, at: Vec2) -> bool {
        if self.session.phase != SessionPhase::Idle {
            return false;
        }
        self.joystick.press(at);
        self.clock.reset();
        self.session.start()
    }

    /// Pointer moved; returns the clamped joystick head offset when it tilted the board
    pub fn pointer_move(&mut self, at: Vec2) -> Option<Vec2> {
        if self.session.phase != SessionPhase::Running {
            return None;
        }
        let tuning = self.session.tuning;
        let offset = self.joystick.offset(at, &tuning)?;
        let tilt = self.joystick.tilt(at, &tuning)?;
        self.session.set_tilt(tilt);
        Some(offset)
    }

    /// Space resets, `h` toggles hard mode; returns whether the key was handled
    pub fn key(&mut self, key: &str) -> bool {
        match key {
            " " => {
                self.reset();
                true
            }
            "h" | "H" => {
                self.session.toggle_hazard_mode();
                self.release();
                true
            }
            _ => false,
        }
    }

    pub fn reset(&mut self) {
        self.session.reset();
        self.release();
    }

    /// Run the tick for one animation frame
    pub fn frame(&mut self, timestamp_ms: f64) -> FrameSnapshot {
        let outcome = if self.session.phase == SessionPhase::Running {
            match self.clock.advance(timestamp_ms) {
                Some(elapsed) => self.session.step(elapsed),
                None => TickOutcome::Continue,
            }
        } else {
            TickOutcome::Inactive
        };

        if matches!(outcome, TickOutcome::Won | TickOutcome::Lost { .. }) {
            self.release();
        }

        FrameSnapshot {
            phase: self.session.phase,
            hard_mode: self.session.hard_mode,
            outcome,
            running: self.session.phase == SessionPhase::Running,
            particles: self.session.particles.clone(),
            events: self.session.drain_events(),
        }
    }

    fn release(&mut self) {
        self.joystick.release();
        self.clock.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MazeLayout, Tuning};

    fn driver() -> Driver {
        Driver::new(Session::new(MazeLayout::default(), Tuning::default()).unwrap())
    }

    #[test]
    fn test_press_starts_and_first_frame_primes() {
        let mut driver = driver();
        assert!(driver.pointer_down(Vec2::new(50.0, 50.0)));
        assert!(!driver.pointer_down(Vec2::new(50.0, 50.0)));

        let first = driver.frame(1000.0);
        assert_eq!(first.outcome, TickOutcome::Continue);
        assert!(first.running);
        assert_eq!(first.events, vec![SessionEvent::Running]);
        assert_eq!(driver.session.time_ticks, 0);

        driver.frame(1016.0);
        assert_eq!(driver.session.time_ticks, 1);
    }

    #[test]
    fn test_pointer_move_tilts_only_while_running() {
        let mut driver = driver();
        assert_eq!(driver.pointer_move(Vec2::new(60.0, 50.0)), None);

        driver.pointer_down(Vec2::new(50.0, 50.0));
        let offset = driver.pointer_move(Vec2::new(100.0, 45.0));
        assert_eq!(offset, Some(Vec2::new(15.0, -5.0)));
        let tilt = driver.session.tilt.unwrap();
        assert!(tilt.acceleration.x > 0.0);
        assert!(tilt.acceleration.y < 0.0);
    }

    #[test]
    fn test_tilted_frames_move_particles() {
        let mut driver = driver();
        driver.pointer_down(Vec2::ZERO);
        driver.pointer_move(Vec2::new(0.0, 15.0));
        let start = driver.session.particles[0].pos;

        driver.frame(0.0);
        for i in 1..=10 {
            driver.frame(i as f64 * 16.0);
        }
        assert!(driver.session.particles[0].pos.y > start.y);
    }

    #[test]
    fn test_keys() {
        let mut driver = driver();
        driver.pointer_down(Vec2::ZERO);

        assert!(driver.key("h"));
        assert!(driver.session.hard_mode);
        assert_eq!(driver.session.phase, SessionPhase::Idle);
        assert_eq!(driver.pointer_move(Vec2::new(5.0, 0.0)), None);

        driver.pointer_down(Vec2::ZERO);
        assert!(driver.key(" "));
        assert_eq!(driver.session.phase, SessionPhase::Idle);
        assert!(driver.session.hard_mode);

        assert!(!driver.key("x"));
    }

    #[test]
    fn test_idle_frame_is_inactive() {
        let mut driver = driver();
        let snapshot = driver.frame(0.0);
        assert_eq!(snapshot.outcome, TickOutcome::Inactive);
        assert!(!snapshot.running);
        assert_eq!(snapshot.particles.len(), 4);
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut driver = driver();
        let json = serde_json::to_string(&driver.frame(0.0)).unwrap();
        assert!(json.contains("\"phase\":\"Idle\""));
        assert!(json.contains("Alpha"));
    }
}
