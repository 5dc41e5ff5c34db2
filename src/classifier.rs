//! Character classification against the policy's ASCII classes.

use std::fmt;

/// Class of a single password character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Lower,
    Upper,
    Digit,
    Special,
    Other,
}

impl CharClass {
    /// Classifies `c`, consulting `special_chars` only for characters outside
    /// the ASCII letter and digit ranges.
    ///
    /// Total over every `char`: whitespace, punctuation missing from the
    /// special set and non-ASCII codepoints all map to [`CharClass::Other`].
    pub fn of(c: char, special_chars: &str) -> Self {
        match c {
            'a'..='z' => CharClass::Lower,
            'A'..='Z' => CharClass::Upper,
            '0'..='9' => CharClass::Digit,
            _ if special_chars.contains(c) => CharClass::Special,
            _ => CharClass::Other,
        }
    }

    /// True for the classes whose members form a contiguous ASCII range.
    pub fn is_ranged(self) -> bool {
        matches!(self, CharClass::Lower | CharClass::Upper | CharClass::Digit)
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CharClass::Lower => "lowercase",
            CharClass::Upper => "uppercase",
            CharClass::Digit => "digit",
            CharClass::Special => "special",
            CharClass::Other => "other",
        };
        f.write_str(name)
    }
}

/// Counts the characters of `password` that fall into `class`.
pub fn count_class(password: &str, special_chars: &str, class: CharClass) -> usize {
    password
        .chars()
        .filter(|&c| CharClass::of(c, special_chars) == class)
        .count()
}
