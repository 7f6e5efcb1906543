//! Word tables for the face
//!
//! Three fixed tables drive every line the face can show. Entries are
//! authored to fit the display's line buffer; this is checked at compile
//! time below.

use rovas_protocol::MAX_TEXT_LEN;

/// Size of one display line buffer in bytes, terminator included
pub const LINE_BUFFER_SIZE: usize = 44;

/// Longest line in bytes
pub const MAX_LINE_LEN: usize = LINE_BUFFER_SIZE - 1;

/// Connective and boundary phrases, indexed by [`Special`]
pub const SPECIAL: [&str; 7] = ["lEd", "lEfjE", "nav", "arO", "nezit", "noSuh", "crep"];

/// Blank placeholder followed by the words for one through ten
pub const ONES: [&str; 11] = [
    " ", "Ge", "Qttek", "morAh", "GEn", "tq", "tah", "tEh", "cloò", "cnelik", "zIt",
];

/// Blank placeholder followed by the words for 10, 20, 30, 40 and 50
pub const TENS: [&str; 6] = [" ", "zIt", "SUh", "cnimrah", "nevGen", "nevtq"];

/// Slots of the [`SPECIAL`] table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Special {
    /// Twelve noon
    Noon = 0,
    /// Midnight
    Midnight = 1,
    /// Suffix shown under noon and midnight
    DayMark = 2,
    /// Joins the hour to the minutes; stands alone on the hour
    HourMark = 3,
    /// Prefix for eleven through nineteen
    Teen = 4,
    /// Prefix for twenty-one through twenty-nine
    Twenty = 5,
    /// Suffix after a whole number of minutes
    MinuteMark = 6,
}

impl Special {
    /// The phrase for this slot
    pub const fn word(self) -> &'static str {
        SPECIAL[self as usize]
    }
}

/// Returns true if `word` is an entry of one of the three tables
pub fn is_vocabulary_word(word: &str) -> bool {
    SPECIAL
        .iter()
        .chain(ONES.iter())
        .chain(TENS.iter())
        .any(|entry| *entry == word)
}

const fn table_fits(table: &[&str]) -> bool {
    let mut i = 0;
    while i < table.len() {
        if table[i].len() > MAX_LINE_LEN {
            return false;
        }
        i += 1;
    }
    true
}

const _: () = assert!(table_fits(&SPECIAL));
const _: () = assert!(table_fits(&ONES));
const _: () = assert!(table_fits(&TENS));
const _: () = assert!(MAX_LINE_LEN == MAX_TEXT_LEN);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sizes() {
        assert_eq!(SPECIAL.len(), 7);
        assert_eq!(ONES.len(), 11);
        assert_eq!(TENS.len(), 6);
    }

    #[test]
    fn test_placeholders_are_blank() {
        assert_eq!(ONES[0], " ");
        assert_eq!(TENS[0], " ");
    }

    #[test]
    fn test_special_slots() {
        assert_eq!(Special::Noon.word(), "lEd");
        assert_eq!(Special::Midnight.word(), "lEfjE");
        assert_eq!(Special::DayMark.word(), "nav");
        assert_eq!(Special::HourMark.word(), "arO");
        assert_eq!(Special::Teen.word(), "nezit");
        assert_eq!(Special::Twenty.word(), "noSuh");
        assert_eq!(Special::MinuteMark.word(), "crep");
    }

    #[test]
    fn test_ten_is_shared() {
        // "ten" is both the last ONES word and the first TENS word
        assert_eq!(ONES[10], TENS[1]);
    }

    #[test]
    fn test_is_vocabulary_word() {
        assert!(is_vocabulary_word("cloò"));
        assert!(is_vocabulary_word("nevtq"));
        assert!(is_vocabulary_word("crep"));
        assert!(!is_vocabulary_word(""));
        assert!(!is_vocabulary_word("arOcrep"));
    }

    #[test]
    fn test_entries_fit_line_buffer() {
        for word in SPECIAL.iter().chain(ONES.iter()).chain(TENS.iter()) {
            assert!(word.len() < LINE_BUFFER_SIZE, "{word} too long");
        }
    }
}
