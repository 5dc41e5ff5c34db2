//! Policy evaluator - runs the rule battery over a password.

use secrecy::{ExposeSecret, SecretString};

use crate::policy::PolicyConfig;
use crate::report::CheckReport;
use crate::rules::Rule;

/// Evaluates every rule against `password` and returns a fresh report.
///
/// All rules run unconditionally, so the report is complete even when an
/// early rule fails. Pure in `(password, config)`.
pub fn evaluate_password(password: &SecretString, config: &PolicyConfig) -> CheckReport {
    evaluate_str(password.expose_secret(), config)
}

fn evaluate_str(pwd: &str, config: &PolicyConfig) -> CheckReport {
    let mut report = CheckReport::default();

    for rule in Rule::ALL {
        report.record(rule, rule.check(pwd, config));
    }

    report
}

/// Full report for `password` under the process-wide default policy.
pub fn check_password_security_report(password: &SecretString) -> CheckReport {
    evaluate_password(password, PolicyConfig::global())
}

/// Verdict for `password` under the process-wide default policy.
pub fn check_password_security(password: &SecretString) -> bool {
    check_password_security_report(password).passed()
}
