//! Character variety rules - minimum lowercase, uppercase, digit and special counts.

use crate::classifier::{CharClass, count_class};
use crate::policy::PolicyConfig;

fn meets_minimum(password: &str, config: &PolicyConfig, class: CharClass) -> bool {
    count_class(password, &config.special_chars, class) >= config.min_count(class)
}

pub fn min_lower(password: &str, config: &PolicyConfig) -> bool {
    meets_minimum(password, config, CharClass::Lower)
}

pub fn min_upper(password: &str, config: &PolicyConfig) -> bool {
    meets_minimum(password, config, CharClass::Upper)
}

pub fn min_digit(password: &str, config: &PolicyConfig) -> bool {
    meets_minimum(password, config, CharClass::Digit)
}

/// Only characters of the configured special set count.
pub fn min_special(password: &str, config: &PolicyConfig) -> bool {
    meets_minimum(password, config, CharClass::Special)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variety_missing_uppercase() {
        let config = PolicyConfig::default();
        assert!(!min_upper("lowercase123!", &config));
        assert!(min_lower("lowercase123!", &config));
    }

    #[test]
    fn test_variety_missing_lowercase() {
        let config = PolicyConfig::default();
        assert!(!min_lower("UPPERCASE123!", &config));
    }

    #[test]
    fn test_variety_missing_digit() {
        let config = PolicyConfig::default();
        assert!(!min_digit("NoNumbers!", &config));
    }

    #[test]
    fn test_variety_special_outside_set() {
        let config = PolicyConfig::default();
        // apostrophe and space are not in the special set
        assert!(!min_special("No Special'123", &config));
        assert!(min_special("Has#Special", &config));
    }

    #[test]
    fn test_variety_all_categories() {
        let config = PolicyConfig::default();
        let pwd = "HasAll123!@#";
        assert!(min_lower(pwd, &config));
        assert!(min_upper(pwd, &config));
        assert!(min_digit(pwd, &config));
        assert!(min_special(pwd, &config));
    }

    #[test]
    fn test_variety_higher_minimums() {
        let config = PolicyConfig::default().with_class_minimums(1, 2, 3, 2);
        assert!(!min_upper("aB123!!", &config));
        assert!(min_upper("aBC123!!", &config));
        assert!(!min_digit("aBC12!!", &config));
        assert!(!min_special("aBC123!", &config));
    }

    #[test]
    fn test_variety_zero_minimum_always_passes() {
        let config = PolicyConfig::default().with_class_minimums(0, 0, 0, 0);
        assert!(min_lower("", &config));
        assert!(min_special("", &config));
    }
}
