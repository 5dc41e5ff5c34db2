//! Pattern rules - detects keyboard sequences and repeated characters.

use crate::policy::PolicyConfig;

/// Fails when the password contains any `max_sequential_length`-wide window
/// of a configured keyboard sequence. Case-sensitive.
///
/// A window width of zero matches the empty string, so every password fails.
pub fn not_sequential(password: &str, config: &PolicyConfig) -> bool {
    let width = config.max_sequential_length;
    if width == 0 {
        return false;
    }

    for sequence in &config.keyboard_sequences {
        let chars: Vec<char> = sequence.chars().collect();
        for window in chars.windows(width) {
            let needle: String = window.iter().collect();
            if password.contains(&needle) {
                return false;
            }
        }
    }
    true
}

/// Fails on a run of `max_repeated_length` or more identical characters.
pub fn not_repeated(password: &str, config: &PolicyConfig) -> bool {
    let limit = config.max_repeated_length.saturating_sub(1);
    let mut prev: Option<char> = None;
    let mut repeat_count = 0usize;

    for c in password.chars() {
        if prev == Some(c) {
            repeat_count += 1;
        } else {
            repeat_count = 0;
        }
        prev = Some(c);

        if repeat_count >= limit {
            return false;
        }
    }
    true
}
