//! Password policy rules
//!
//! Each rule is an independent predicate over the password and the policy.
//! Predicates return `true` when the password satisfies the rule.

mod corpus;
mod edge;
mod length;
mod pattern;
mod variety;

use std::fmt;

use crate::policy::PolicyConfig;

pub use corpus::{not_common, not_default, not_dictionary, not_personal, not_username_or_host};
pub use edge::{not_incremental_edge, not_single_digit_edge};
pub use length::min_length;
pub use pattern::{not_repeated, not_sequential};
pub use variety::{min_digit, min_lower, min_special, min_upper};

/// Signature shared by every rule predicate.
pub type RuleFn = fn(&str, &PolicyConfig) -> bool;

/// The fixed rule battery, declared in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rule {
    MinLength,
    MinLower,
    MinUpper,
    MinDigit,
    MinSpecial,
    NotCommon,
    NotPersonal,
    NotSequential,
    NotRepeated,
    NotDictionary,
    NotDefault,
    NotUsernameOrHost,
    NotSingleDigitEdge,
    NotIncrementalEdge,
}

impl Rule {
    pub const ALL: [Rule; 14] = [
        Rule::MinLength,
        Rule::MinLower,
        Rule::MinUpper,
        Rule::MinDigit,
        Rule::MinSpecial,
        Rule::NotCommon,
        Rule::NotPersonal,
        Rule::NotSequential,
        Rule::NotRepeated,
        Rule::NotDictionary,
        Rule::NotDefault,
        Rule::NotUsernameOrHost,
        Rule::NotSingleDigitEdge,
        Rule::NotIncrementalEdge,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Rule::MinLength => "MinLength",
            Rule::MinLower => "MinLower",
            Rule::MinUpper => "MinUpper",
            Rule::MinDigit => "MinDigit",
            Rule::MinSpecial => "MinSpecial",
            Rule::NotCommon => "NotCommon",
            Rule::NotPersonal => "NotPersonal",
            Rule::NotSequential => "NotSequential",
            Rule::NotRepeated => "NotRepeated",
            Rule::NotDictionary => "NotDictionary",
            Rule::NotDefault => "NotDefault",
            Rule::NotUsernameOrHost => "NotUsernameOrHost",
            Rule::NotSingleDigitEdge => "NotSingleDigitEdge",
            Rule::NotIncrementalEdge => "NotIncrementalEdge",
        }
    }

    /// Reason reported when the rule fails.
    pub fn description(self) -> &'static str {
        match self {
            Rule::MinLength => "Password is too short",
            Rule::MinLower => "Not enough lowercase letters",
            Rule::MinUpper => "Not enough uppercase letters",
            Rule::MinDigit => "Not enough digits",
            Rule::MinSpecial => "Not enough special characters",
            Rule::NotCommon => "Password is a commonly used password",
            Rule::NotPersonal => "Password contains personal information keywords",
            Rule::NotSequential => "Password contains a keyboard sequence",
            Rule::NotRepeated => "Password contains repeated characters",
            Rule::NotDictionary => "Password is a dictionary word",
            Rule::NotDefault => "Password is a default or suggested password",
            Rule::NotUsernameOrHost => "Password is a username or host name",
            Rule::NotSingleDigitEdge => "Password starts or ends with a digit",
            Rule::NotIncrementalEdge => "Password first and last characters are consecutive",
        }
    }

    pub fn predicate(self) -> RuleFn {
        match self {
            Rule::MinLength => min_length,
            Rule::MinLower => min_lower,
            Rule::MinUpper => min_upper,
            Rule::MinDigit => min_digit,
            Rule::MinSpecial => min_special,
            Rule::NotCommon => not_common,
            Rule::NotPersonal => not_personal,
            Rule::NotSequential => not_sequential,
            Rule::NotRepeated => not_repeated,
            Rule::NotDictionary => not_dictionary,
            Rule::NotDefault => not_default,
            Rule::NotUsernameOrHost => not_username_or_host,
            Rule::NotSingleDigitEdge => not_single_digit_edge,
            Rule::NotIncrementalEdge => not_incremental_edge,
        }
    }

    pub fn check(self, password: &str, config: &PolicyConfig) -> bool {
        (self.predicate())(password, config)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
