//! Edge rules - inspect the first and last characters of the password.
//!
//! An empty password has no edges and passes both rules; the length rule
//! already rejects it. A one-character password uses the same character
//! as both edges.

use crate::classifier::CharClass;
use crate::policy::PolicyConfig;

fn edges(password: &str) -> Option<(char, char)> {
    let first = password.chars().next()?;
    let last = password.chars().next_back()?;
    Some((first, last))
}

/// Fails when the password starts or ends with a digit (`1password`, `password1`).
pub fn not_single_digit_edge(password: &str, config: &PolicyConfig) -> bool {
    match edges(password) {
        Some((first, last)) => {
            config.classify(first) != CharClass::Digit && config.classify(last) != CharClass::Digit
        }
        None => true,
    }
}

/// Fails when the last character is the successor of the first within the
/// same letter case or within the digits (`a...b`, `Q...R`, `4...5`).
pub fn not_incremental_edge(password: &str, config: &PolicyConfig) -> bool {
    let Some((first, last)) = edges(password) else {
        return true;
    };

    let class = config.classify(first);
    if !class.is_ranged() || config.classify(last) != class {
        return true;
    }
    u32::from(last) != u32::from(first) + 1
}
