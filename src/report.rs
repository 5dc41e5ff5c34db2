//! Per-call result of a policy check.

use std::collections::BTreeMap;

use crate::rules::Rule;

/// Outcome of every rule for one password, `true` meaning satisfied.
///
/// Built fresh by each evaluation and owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CheckReport {
    outcomes: BTreeMap<Rule, bool>,
}

impl CheckReport {
    pub(crate) fn record(&mut self, rule: Rule, satisfied: bool) {
        self.outcomes.insert(rule, satisfied);
    }

    /// Overall verdict: all rules satisfied.
    ///
    /// A report missing any rule does not pass.
    pub fn passed(&self) -> bool {
        self.outcomes.len() == Rule::ALL.len() && self.outcomes.values().all(|&ok| ok)
    }

    pub fn outcome(&self, rule: Rule) -> Option<bool> {
        self.outcomes.get(&rule).copied()
    }

    pub fn failed_rules(&self) -> impl Iterator<Item = Rule> + '_ {
        self.outcomes
            .iter()
            .filter(|&(_, &ok)| !ok)
            .map(|(&rule, _)| rule)
    }

    /// Failure reasons in rule order.
    pub fn reasons(&self) -> Vec<String> {
        self.failed_rules()
            .map(|rule| rule.description().to_string())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Rule, bool)> + '_ {
        self.outcomes.iter().map(|(&rule, &ok)| (rule, ok))
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}
