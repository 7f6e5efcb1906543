//! Time-to-words encoding
//!
//! Turns an hour and minute into the four lines of the face:
//!
//! ```text
//! line 1  hour word, or "teen" prefix     (bold)
//! line 2  hour mark, or hour word         (bold)
//! line 3  minute word, prefix, or mark    (light)
//! line 4  minute mark, or ones word       (light)
//! ```
//!
//! Every line is either empty or exactly one word from [`crate::vocab`].

use crate::time::{ClockTime, TimeError};
use crate::vocab::{Special, ONES, TENS};

/// Number of lines on the face
pub const LINE_COUNT: usize = 4;

/// The four lines spelling out one time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WordTime {
    lines: [&'static str; LINE_COUNT],
}

/// Encode a 24-hour time into its four lines
///
/// Fails with [`TimeError::InvalidInput`] if `hour > 23` or `minute > 59`.
pub fn encode(hour: u8, minute: u8) -> Result<WordTime, TimeError> {
    ClockTime::new(hour, minute).map(WordTime::from_time)
}

impl WordTime {
    /// Encode a time that is already known to be valid
    pub fn from_time(time: ClockTime) -> Self {
        if time.is_midnight() {
            return Self::day_mark(Special::Midnight);
        }
        if time.is_noon() {
            return Self::day_mark(Special::Noon);
        }

        let [line1, line2] = hour_lines(time.normalized_hour(), time.minute());
        let [line3, line4] = minute_lines(time.minute());
        Self {
            lines: [line1, line2, line3, line4],
        }
    }

    fn day_mark(which: Special) -> Self {
        Self {
            lines: ["", which.word(), Special::DayMark.word(), ""],
        }
    }

    /// All four lines, top to bottom
    pub const fn lines(&self) -> &[&'static str; LINE_COUNT] {
        &self.lines
    }

    /// A single line, or `None` past the last row
    pub fn line(&self, index: usize) -> Option<&'static str> {
        self.lines.get(index).copied()
    }

    /// Lines as a tuple, top to bottom
    pub const fn into_tuple(self) -> (&'static str, &'static str, &'static str, &'static str) {
        let [a, b, c, d] = self.lines;
        (a, b, c, d)
    }
}

/// Lines 1 and 2, from the 12-hour dial value (`1..=12`)
///
/// Twelve takes the "teen" form like eleven, since ONES stops at ten.
fn hour_lines(hour: u8, minute: u8) -> [&'static str; 2] {
    match (hour, minute) {
        (1..=10, 0) => ["", ONES[hour as usize]],
        (1..=10, _) => [ONES[hour as usize], Special::HourMark.word()],
        _ => [Special::Teen.word(), ONES[(hour % 10) as usize]],
    }
}

/// Lines 3 and 4 from the raw minute (`0..=59`)
///
/// Minute zero never reaches here with a 12 o'clock hour: 00:00 and 12:00
/// are handled as midnight and noon.
fn minute_lines(minute: u8) -> [&'static str; 2] {
    let tens = (minute / 10 % 10) as usize;
    let ones = (minute % 10) as usize;

    match minute {
        0 => [Special::HourMark.word(), ""],
        1..=10 => [ONES[minute as usize], Special::MinuteMark.word()],
        _ if ones == 0 => [TENS[tens], Special::MinuteMark.word()],
        11..=19 => [Special::Teen.word(), ONES[ones]],
        21..=29 => [Special::Twenty.word(), ONES[ones]],
        _ => [TENS[tens], ONES[ones]],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::{is_vocabulary_word, SPECIAL};
    use proptest::prelude::*;

    fn lines(hour: u8, minute: u8) -> [&'static str; 4] {
        *encode(hour, minute).unwrap().lines()
    }

    #[test]
    fn test_midnight() {
        assert_eq!(lines(0, 0), ["", SPECIAL[1], SPECIAL[2], ""]);
    }

    #[test]
    fn test_noon() {
        assert_eq!(lines(12, 0), ["", SPECIAL[0], SPECIAL[2], ""]);
    }

    #[test]
    fn test_quarter_past_three() {
        assert_eq!(lines(3, 15), [ONES[3], SPECIAL[3], SPECIAL[4], ONES[5]]);
    }

    #[test]
    fn test_ten_on_the_hour() {
        assert_eq!(lines(10, 0), ["", ONES[10], SPECIAL[3], ""]);
    }

    #[test]
    fn test_half_past_eleven_pm() {
        assert_eq!(lines(23, 30), [SPECIAL[4], ONES[1], TENS[3], SPECIAL[6]]);
    }

    #[test]
    fn test_eleven_on_the_hour() {
        assert_eq!(lines(11, 0), [SPECIAL[4], ONES[1], SPECIAL[3], ""]);
        assert_eq!(lines(23, 0), [SPECIAL[4], ONES[1], SPECIAL[3], ""]);
    }

    #[test]
    fn test_twelve_past_the_hour() {
        // 12:05 and 00:05 both read as twelve
        assert_eq!(lines(12, 5), [SPECIAL[4], ONES[2], ONES[5], SPECIAL[6]]);
        assert_eq!(lines(0, 5), lines(12, 5));
    }

    #[test]
    fn test_afternoon_matches_morning() {
        assert_eq!(lines(13, 47), lines(1, 47));
        assert_eq!(lines(22, 0), lines(10, 0));
    }

    #[test]
    fn test_ten_past_the_hour() {
        assert_eq!(lines(7, 10), [ONES[7], SPECIAL[3], ONES[10], SPECIAL[6]]);
    }

    #[test]
    fn test_one_minute_past() {
        assert_eq!(lines(1, 1), [ONES[1], SPECIAL[3], ONES[1], SPECIAL[6]]);
    }

    #[test]
    fn test_whole_tens_of_minutes() {
        assert_eq!(lines(4, 20)[2..], [TENS[2], SPECIAL[6]]);
        assert_eq!(lines(4, 40)[2..], [TENS[4], SPECIAL[6]]);
        assert_eq!(lines(4, 50)[2..], [TENS[5], SPECIAL[6]]);
    }

    #[test]
    fn test_minute_teens_and_twenties() {
        assert_eq!(lines(6, 11)[2..], [SPECIAL[4], ONES[1]]);
        assert_eq!(lines(6, 19)[2..], [SPECIAL[4], ONES[9]]);
        assert_eq!(lines(6, 21)[2..], [SPECIAL[5], ONES[1]]);
        assert_eq!(lines(6, 29)[2..], [SPECIAL[5], ONES[9]]);
    }

    #[test]
    fn test_late_minutes() {
        assert_eq!(lines(9, 31)[2..], [TENS[3], ONES[1]]);
        assert_eq!(lines(9, 59)[2..], [TENS[5], ONES[9]]);
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(
            encode(24, 0),
            Err(TimeError::InvalidInput { hour: 24, minute: 0 })
        );
        assert_eq!(
            encode(0, 60),
            Err(TimeError::InvalidInput { hour: 0, minute: 60 })
        );
        assert!(encode(255, 255).is_err());
    }

    #[test]
    fn test_line_accessors() {
        let word_time = encode(3, 15).unwrap();
        assert_eq!(word_time.line(0), Some(ONES[3]));
        assert_eq!(word_time.line(3), Some(ONES[5]));
        assert_eq!(word_time.line(4), None);
        assert_eq!(
            word_time.into_tuple(),
            (ONES[3], SPECIAL[3], SPECIAL[4], ONES[5])
        );
    }

    proptest! {
        #[test]
        fn prop_lines_come_from_tables(hour in 0u8..24, minute in 0u8..60) {
            let word_time = encode(hour, minute).unwrap();
            for line in word_time.lines() {
                prop_assert!(line.is_empty() || is_vocabulary_word(line));
            }
        }

        #[test]
        fn prop_encoding_is_deterministic(hour in 0u8..24, minute in 0u8..60) {
            prop_assert_eq!(encode(hour, minute), encode(hour, minute));
        }

        #[test]
        fn prop_half_days_agree(hour in 1u8..12, minute in 0u8..60) {
            prop_assert_eq!(encode(hour, minute), encode(hour + 12, minute));
        }

        #[test]
        fn prop_out_of_range_hour_rejected(hour in 24u8..=255, minute in 0u8..60) {
            prop_assert!(encode(hour, minute).is_err());
        }

        #[test]
        fn prop_out_of_range_minute_rejected(hour in 0u8..24, minute in 60u8..=255) {
            prop_assert!(encode(hour, minute).is_err());
        }

        #[test]
        fn prop_negative_tm_rejected(hour in i32::MIN..0, minute in 0i32..60) {
            prop_assert!(ClockTime::from_tm(hour, minute).is_err());
        }
    }
}
