//! Policy configuration: thresholds, character sets and static corpora.

use std::collections::HashSet;
use std::sync::LazyLock;
use thiserror::Error;

use crate::classifier::CharClass;

const DEFAULT_SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{}|;:,./<>?";

const DEFAULT_ALPHABET: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*()_-+={}[]:;'<>?,./";

const PROHIBITED_PASSWORDS: &[&str] = &[
    "password", "123456", "12345678", "abcd", "abc123", "@#$%^&", "qwerty", "asdfgh", "zxcvbn",
    "1234567890", "zzzzzz", "dictionary", "default", "username", "host", "0123", "9876", "111111",
    "iloveyou", "letmein", "monkey", "trustno1",
];

const KEYBOARD_SEQUENCES: &[&str] = &[
    "`1234567890-=",
    "~!@#$%^&*()_+",
    "qwertyuiop[]\\",
    "QWERTYUIOP{}|",
    "asdfghjkl;'",
    "ASDFGHJKL:\"",
    "zxcvbnm,./",
    "ZXCVBNM<>?",
];

const PERSONAL_KEYWORDS: &[&str] = &["name", "phone", "birth", "address", "alma", "mater"];

const DICTIONARY_WORDS: &[&str] = &[
    "apple", "banana", "orange", "grape", "melon", "water", "fire", "earth", "air", "wind",
];

const DEFAULT_PASSWORDS: &[&str] = &[
    "P@ssw0rd", "W3lc0m3", "Ch@ng3m3", "L0v3y0u", "S3cur3m3", "H3ll0w0rld", "G00dbY3", "N0t4y0u",
    "Y3s4m3", "N0p3n0p3",
];

const USERNAME_OR_HOST: &[&str] = &[
    "admin", "user", "guest", "root", "localhost", "server", "domain", "network", "computer",
    "system",
];

static GLOBAL_POLICY: LazyLock<PolicyConfig> = LazyLock::new(PolicyConfig::default);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    #[error("Minimum length {min_length} cannot hold {required} required class characters")]
    Unsatisfiable { required: usize, min_length: usize },
    #[error("Alphabet has no {0} characters but the policy requires some")]
    MissingClass(CharClass),
    #[error("Alphabet is empty")]
    EmptyAlphabet,
    #[error("Threshold {name} = {value} rejects every password")]
    InvalidThreshold { name: &'static str, value: usize },
}

/// Immutable password policy.
///
/// Built once (usually via [`Default`]) and shared by reference. The `with_*`
/// methods return modified copies for alternate policies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyConfig {
    pub min_length: usize,
    pub min_lower: usize,
    pub min_upper: usize,
    pub min_digit: usize,
    pub min_special: usize,
    /// Length of the shortest forbidden run of identical characters.
    pub max_repeated_length: usize,
    /// Width of the keyboard-sequence windows searched for in a password.
    pub max_sequential_length: usize,
    /// Membership-only set of characters counted as special.
    pub special_chars: String,
    /// Characters sampled, uniformly by position, when generating.
    pub alphabet: String,
    /// Lowercase; exact match against the lowercased password.
    pub prohibited_passwords: HashSet<String>,
    /// Case-sensitive source strings for the sequence windows.
    pub keyboard_sequences: Vec<String>,
    /// Lowercase; substring match against the lowercased password.
    pub personal_keywords: Vec<String>,
    /// Lowercase; exact match against the lowercased password.
    pub dictionary_words: HashSet<String>,
    /// Case-sensitive exact match.
    pub default_passwords: HashSet<String>,
    /// Lowercase; exact match against the lowercased password.
    pub username_or_host: HashSet<String>,
    /// Resamples allowed per position before the generator gives up.
    pub max_resample_attempts: usize,
    /// Candidates the factory may generate before giving up.
    pub max_generation_attempts: usize,
}

fn to_set(words: &[&str]) -> HashSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn to_vec(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            min_length: 10,
            min_lower: 1,
            min_upper: 1,
            min_digit: 1,
            min_special: 1,
            max_repeated_length: 3,
            max_sequential_length: 3,
            special_chars: DEFAULT_SPECIAL_CHARS.to_string(),
            alphabet: DEFAULT_ALPHABET.to_string(),
            prohibited_passwords: to_set(PROHIBITED_PASSWORDS),
            keyboard_sequences: to_vec(KEYBOARD_SEQUENCES),
            personal_keywords: to_vec(PERSONAL_KEYWORDS),
            dictionary_words: to_set(DICTIONARY_WORDS),
            default_passwords: to_set(DEFAULT_PASSWORDS),
            username_or_host: to_set(USERNAME_OR_HOST),
            max_resample_attempts: 1_000,
            max_generation_attempts: 10_000,
        }
    }
}

impl PolicyConfig {
    /// Process-wide default policy.
    pub fn global() -> &'static PolicyConfig {
        &GLOBAL_POLICY
    }

    pub fn classify(&self, c: char) -> CharClass {
        CharClass::of(c, &self.special_chars)
    }

    /// Minimum count configured for `class` (zero for [`CharClass::Other`]).
    pub fn min_count(&self, class: CharClass) -> usize {
        match class {
            CharClass::Lower => self.min_lower,
            CharClass::Upper => self.min_upper,
            CharClass::Digit => self.min_digit,
            CharClass::Special => self.min_special,
            CharClass::Other => 0,
        }
    }

    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    /// Sets the four class minimums in lower, upper, digit, special order.
    pub fn with_class_minimums(mut self, lower: usize, upper: usize, digit: usize, special: usize) -> Self {
        self.min_lower = lower;
        self.min_upper = upper;
        self.min_digit = digit;
        self.min_special = special;
        self
    }

    pub fn with_max_repeated_length(mut self, len: usize) -> Self {
        self.max_repeated_length = len;
        self
    }

    pub fn with_max_sequential_length(mut self, len: usize) -> Self {
        self.max_sequential_length = len;
        self
    }

    pub fn with_special_chars(mut self, chars: impl Into<String>) -> Self {
        self.special_chars = chars.into();
        self
    }

    pub fn with_alphabet(mut self, alphabet: impl Into<String>) -> Self {
        self.alphabet = alphabet.into();
        self
    }

    /// Replaces the prohibited-passwords corpus. Entries are lowercased.
    pub fn with_prohibited_passwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.prohibited_passwords = words.into_iter().map(|w| w.as_ref().to_lowercase()).collect();
        self
    }

    /// Merges `words` (e.g. a loaded corpus file) into the prohibited corpus.
    pub fn with_extra_prohibited<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.prohibited_passwords
            .extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
        self
    }

    pub fn with_keyboard_sequences<I, S>(mut self, sequences: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keyboard_sequences = sequences.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_personal_keywords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.personal_keywords = words.into_iter().map(|w| w.as_ref().to_lowercase()).collect();
        self
    }

    pub fn with_dictionary_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.dictionary_words = words.into_iter().map(|w| w.as_ref().to_lowercase()).collect();
        self
    }

    /// Replaces the default-passwords corpus. Entries keep their case.
    pub fn with_default_passwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default_passwords = words.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_username_or_host<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.username_or_host = words.into_iter().map(|w| w.as_ref().to_lowercase()).collect();
        self
    }

    pub fn with_max_resample_attempts(mut self, attempts: usize) -> Self {
        self.max_resample_attempts = attempts;
        self
    }

    pub fn with_max_generation_attempts(mut self, attempts: usize) -> Self {
        self.max_generation_attempts = attempts;
        self
    }

    /// Checks that a password of `min_length` drawn from `alphabet` can
    /// satisfy the policy at all.
    ///
    /// Does not prove that generation terminates; corpus and pattern rules
    /// can still reject every candidate, which the attempt caps cover.
    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.alphabet.is_empty() {
            return Err(PolicyError::EmptyAlphabet);
        }
        if self.max_sequential_length == 0 {
            return Err(PolicyError::InvalidThreshold {
                name: "max_sequential_length",
                value: self.max_sequential_length,
            });
        }
        if self.max_repeated_length < 2 {
            return Err(PolicyError::InvalidThreshold {
                name: "max_repeated_length",
                value: self.max_repeated_length,
            });
        }

        if self.max_resample_attempts == 0 {
            return Err(PolicyError::InvalidThreshold {
                name: "max_resample_attempts",
                value: 0,
            });
        }
        if self.max_generation_attempts == 0 {
            return Err(PolicyError::InvalidThreshold {
                name: "max_generation_attempts",
                value: 0,
            });
        }

        let required = self.min_lower + self.min_upper + self.min_digit + self.min_special;
        if required > self.min_length {
            return Err(PolicyError::Unsatisfiable {
                required,
                min_length: self.min_length,
            });
        }

        for class in [CharClass::Lower, CharClass::Upper, CharClass::Digit, CharClass::Special] {
            if self.min_count(class) > 0 && !self.alphabet.chars().any(|c| self.classify(c) == class) {
                return Err(PolicyError::MissingClass(class));
            }
        }
        Ok(())
    }
}
