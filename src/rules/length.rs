//! Length rule - checks password minimum length.

use crate::policy::PolicyConfig;

/// Passes when the password has at least `min_length` characters.
pub fn min_length(password: &str, config: &PolicyConfig) -> bool {
    password.chars().count() >= config.min_length
}
