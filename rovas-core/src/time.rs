//! Wall-clock time values
//!
//! A [`ClockTime`] can only be built from an hour in `0..=23` and a minute in
//! `0..=59`, so every value that reaches the encoder is in range.

/// Errors raised when building a [`ClockTime`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimeError {
    /// Hour outside `0..=23` or minute outside `0..=59`
    InvalidInput { hour: i32, minute: i32 },
}

/// Hour and minute of a 24-hour clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    pub const HOURS_PER_DAY: u8 = 24;
    pub const MINUTES_PER_HOUR: u8 = 60;

    /// 00:00
    pub const MIDNIGHT: Self = Self { hour: 0, minute: 0 };
    /// 12:00
    pub const NOON: Self = Self { hour: 12, minute: 0 };

    /// Build a time, rejecting out-of-range fields
    pub fn new(hour: u8, minute: u8) -> Result<Self, TimeError> {
        if hour < Self::HOURS_PER_DAY && minute < Self::MINUTES_PER_HOUR {
            Ok(Self { hour, minute })
        } else {
            Err(TimeError::InvalidInput {
                hour: hour.into(),
                minute: minute.into(),
            })
        }
    }

    /// Build a time from broken-down `tm_hour` / `tm_min` style fields
    ///
    /// Negative values are rejected like any other out-of-range value.
    pub fn from_tm(hour: i32, minute: i32) -> Result<Self, TimeError> {
        let invalid = TimeError::InvalidInput { hour, minute };
        let hour = u8::try_from(hour).map_err(|_| invalid)?;
        let minute = u8::try_from(minute).map_err(|_| invalid)?;
        Self::new(hour, minute).map_err(|_| invalid)
    }

    /// Hour in `0..=23`
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    /// Minute in `0..=59`
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    /// Hour on a 12-hour dial: 0 becomes 12, 13–23 become 1–11
    ///
    /// Always in `1..=12`.
    pub const fn normalized_hour(&self) -> u8 {
        match self.hour {
            0 => 12,
            h if h > 12 => h - 12,
            h => h,
        }
    }

    pub const fn is_midnight(&self) -> bool {
        self.hour == 0 && self.minute == 0
    }

    pub const fn is_noon(&self) -> bool {
        self.hour == 12 && self.minute == 0
    }

    /// Same minute, next hour; 23 wraps to 0
    pub const fn next_hour(&self) -> Self {
        Self {
            hour: (self.hour + 1) % Self::HOURS_PER_DAY,
            minute: self.minute,
        }
    }

    /// Same hour, next minute; 59 wraps to 0 without touching the hour
    pub const fn next_minute(&self) -> Self {
        Self {
            hour: self.hour,
            minute: (self.minute + 1) % Self::MINUTES_PER_HOUR,
        }
    }
}

impl TryFrom<(u8, u8)> for ClockTime {
    type Error = TimeError;

    fn try_from((hour, minute): (u8, u8)) -> Result<Self, Self::Error> {
        Self::new(hour, minute)
    }
}

/// Source of the current wall-clock time
///
/// Implemented by the host over its RTC or system clock. Timezone handling
/// is the host's concern; the face only sees local hour and minute.
pub trait TimeSource {
    /// Current local time
    fn now(&self) -> ClockTime;
}

/// A clock that is always at the same time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedTime(pub ClockTime);

impl TimeSource for FixedTime {
    fn now(&self) -> ClockTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_bounds() {
        assert!(ClockTime::new(0, 0).is_ok());
        assert!(ClockTime::new(23, 59).is_ok());
    }

    #[test]
    fn test_invalid_hour() {
        assert_eq!(
            ClockTime::new(24, 0),
            Err(TimeError::InvalidInput { hour: 24, minute: 0 })
        );
    }

    #[test]
    fn test_invalid_minute() {
        assert_eq!(
            ClockTime::new(5, 60),
            Err(TimeError::InvalidInput { hour: 5, minute: 60 })
        );
    }

    #[test]
    fn test_from_tm_rejects_negative() {
        assert_eq!(
            ClockTime::from_tm(-1, 30),
            Err(TimeError::InvalidInput { hour: -1, minute: 30 })
        );
        assert_eq!(
            ClockTime::from_tm(4, -5),
            Err(TimeError::InvalidInput { hour: 4, minute: -5 })
        );
        assert_eq!(
            ClockTime::from_tm(300, 0),
            Err(TimeError::InvalidInput { hour: 300, minute: 0 })
        );
    }

    #[test]
    fn test_from_tm_accepts_valid() {
        let t = ClockTime::from_tm(17, 42).unwrap();
        assert_eq!((t.hour(), t.minute()), (17, 42));
    }

    #[test]
    fn test_normalized_hour() {
        assert_eq!(ClockTime::MIDNIGHT.normalized_hour(), 12);
        assert_eq!(ClockTime::NOON.normalized_hour(), 12);
        assert_eq!(ClockTime::new(1, 0).unwrap().normalized_hour(), 1);
        assert_eq!(ClockTime::new(13, 0).unwrap().normalized_hour(), 1);
        assert_eq!(ClockTime::new(23, 0).unwrap().normalized_hour(), 11);
    }

    #[test]
    fn test_normalized_hour_range() {
        for hour in 0..24 {
            let h = ClockTime::new(hour, 0).unwrap().normalized_hour();
            assert!((1..=12).contains(&h));
        }
    }

    #[test]
    fn test_wraparound() {
        let late = ClockTime::new(23, 59).unwrap();
        assert_eq!(late.next_hour(), ClockTime::new(0, 59).unwrap());
        assert_eq!(late.next_minute(), ClockTime::new(23, 0).unwrap());
    }

    #[test]
    fn test_fixed_time_source() {
        let source = FixedTime(ClockTime::NOON);
        assert!(source.now().is_noon());
    }
}
