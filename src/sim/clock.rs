//! Host timestamps to normalized tick durations
//!
//! The host calls back once per animation frame with a millisecond timestamp.
//! The first frame after a start only primes the clock.

use crate::consts::FRAME_MS;

#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    previous: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Elapsed reference frames since the last call, or `None` when priming
    pub fn advance(&mut self, timestamp_ms: f64) -> Option<f32> {
        let previous = self.previous.replace(timestamp_ms)?;
        Some(((timestamp_ms - previous) / FRAME_MS) as f32)
    }

    pub fn reset(&mut self) {
        self.previous = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_primes() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.advance(1000.0), None);
        assert_eq!(clock.advance(1016.0), Some(1.0));
        assert_eq!(clock.advance(1040.0), Some(1.5));
    }

    #[test]
    fn test_reset_primes_again() {
        let mut clock = FrameClock::new();
        clock.advance(0.0);
        clock.advance(16.0);
        clock.reset();
        assert_eq!(clock.advance(500.0), None);
        assert_eq!(clock.advance(508.0), Some(0.5));
    }
}
