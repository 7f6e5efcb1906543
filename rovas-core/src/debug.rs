//! Manually stepped clock for checking the face by hand
//!
//! With debug input enabled the up and down buttons step the hour and the
//! minute, so every reading can be reached without waiting for the real
//! clock. The counter starts from the first real tick it sees.

use crate::time::ClockTime;

/// Hand-stepped hour/minute counter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DebugClock {
    time: ClockTime,
    seeded: bool,
}

impl Default for DebugClock {
    fn default() -> Self {
        Self::new()
    }
}

impl DebugClock {
    /// Create an unseeded counter at midnight
    pub const fn new() -> Self {
        Self {
            time: ClockTime::MIDNIGHT,
            seeded: false,
        }
    }

    /// Start counting from `time`
    ///
    /// Only the first call has an effect; returns true if it did.
    pub fn seed(&mut self, time: ClockTime) -> bool {
        if self.seeded {
            return false;
        }
        self.time = time;
        self.seeded = true;
        true
    }

    pub const fn is_seeded(&self) -> bool {
        self.seeded
    }

    /// Current counter value
    pub const fn time(&self) -> ClockTime {
        self.time
    }

    /// Step the hour, wrapping 23 to 0
    pub fn increment_hour(&mut self) -> ClockTime {
        self.time = self.time.next_hour();
        self.time
    }

    /// Step the minute, wrapping 59 to 0 without carrying into the hour
    pub fn increment_minute(&mut self) -> ClockTime {
        self.time = self.time.next_minute();
        self.time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hour: u8, minute: u8) -> ClockTime {
        ClockTime::new(hour, minute).unwrap()
    }

    #[test]
    fn test_starts_unseeded_at_midnight() {
        let clock = DebugClock::new();
        assert!(!clock.is_seeded());
        assert_eq!(clock.time(), ClockTime::MIDNIGHT);
    }

    #[test]
    fn test_only_first_seed_counts() {
        let mut clock = DebugClock::new();
        assert!(clock.seed(at(8, 15)));
        assert!(!clock.seed(at(9, 0)));
        assert_eq!(clock.time(), at(8, 15));
    }

    #[test]
    fn test_hour_wraps() {
        let mut clock = DebugClock::new();
        clock.seed(at(22, 10));
        assert_eq!(clock.increment_hour(), at(23, 10));
        assert_eq!(clock.increment_hour(), at(0, 10));
    }

    #[test]
    fn test_minute_wraps_without_carry() {
        let mut clock = DebugClock::new();
        clock.seed(at(5, 58));
        assert_eq!(clock.increment_minute(), at(5, 59));
        assert_eq!(clock.increment_minute(), at(5, 0));
    }

    #[test]
    fn test_full_day_of_hours() {
        let mut clock = DebugClock::new();
        for _ in 0..24 {
            clock.increment_hour();
        }
        assert_eq!(clock.time(), ClockTime::MIDNIGHT);
    }

    #[test]
    fn test_increment_before_seed() {
        // Stepping before the first tick counts up from midnight
        let mut clock = DebugClock::new();
        assert_eq!(clock.increment_minute(), at(0, 1));
        assert!(!clock.is_seeded());
    }
}
