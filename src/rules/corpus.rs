//! Corpus rules - common, personal, dictionary, default and username/host lists.

use crate::policy::PolicyConfig;

/// Fails when the lowercased password is a prohibited password.
pub fn not_common(password: &str, config: &PolicyConfig) -> bool {
    !config.prohibited_passwords.contains(&password.to_lowercase())
}

/// Fails when the lowercased password contains any personal keyword.
pub fn not_personal(password: &str, config: &PolicyConfig) -> bool {
    let lowered = password.to_lowercase();
    !config
        .personal_keywords
        .iter()
        .any(|keyword| lowered.contains(keyword.as_str()))
}

pub fn not_dictionary(password: &str, config: &PolicyConfig) -> bool {
    !config.dictionary_words.contains(&password.to_lowercase())
}

/// Case-sensitive: `p@ssw0rd` is not the default `P@ssw0rd`.
pub fn not_default(password: &str, config: &PolicyConfig) -> bool {
    !config.default_passwords.contains(password)
}

pub fn not_username_or_host(password: &str, config: &PolicyConfig) -> bool {
    !config.username_or_host.contains(&password.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_common_case_insensitive_exact() {
        let config = PolicyConfig::default();
        assert!(!not_common("password", &config));
        assert!(!not_common("PASSWORD", &config));
        assert!(not_common("Pa55w0rd!", &config));
        // exact match only, not substring
        assert!(not_common("mypassword", &config));
    }

    #[test]
    fn test_not_personal_substring() {
        let config = PolicyConfig::default();
        assert!(!not_personal("MyNameIsBob1!", &config));
        assert!(!not_personal("xxBIRTHxx", &config));
        assert!(not_personal("Tr0ub4dor&3X", &config));
    }

    #[test]
    fn test_not_dictionary() {
        let config = PolicyConfig::default();
        assert!(!not_dictionary("Banana", &config));
        assert!(not_dictionary("Bananas", &config));
    }

    #[test]
    fn test_not_default_case_sensitive() {
        let config = PolicyConfig::default();
        assert!(!not_default("P@ssw0rd", &config));
        assert!(not_default("p@ssw0rd", &config));
    }

    #[test]
    fn test_not_username_or_host() {
        let config = PolicyConfig::default();
        assert!(!not_username_or_host("LocalHost", &config));
        assert!(not_username_or_host("localhost1", &config));
    }

    #[test]
    fn test_swapped_corpus() {
        let config = PolicyConfig::default()
            .with_prohibited_passwords(["Hunter2"])
            .with_dictionary_words(["kiwi"]);
        assert!(!not_common("HUNTER2", &config));
        assert!(not_common("password", &config));
        assert!(!not_dictionary("Kiwi", &config));
        assert!(not_dictionary("apple", &config));
    }
}
