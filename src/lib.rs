//! Password policy checking and compliant password generation
//!
//! This library checks passwords against a fixed battery of policy rules
//! and generates random passwords guaranteed to pass the same rules.
//!
//! # Features
//!
//! - `async` (default): Enables cancellable generation and channel delivery
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_POLICY_CORPUS_PATH`: Path of an extra prohibited-passwords file
//!   read by [`load_corpus`] (default: `./assets/prohibited.txt`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_policy::{check_password_security_report, get_secure_strong_password};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Tr0ub4dor&3X".to_string().into());
//! let report = check_password_security_report(&password);
//! println!("Passed: {}", report.passed());
//! for reason in report.reasons() {
//!     println!("- {}", reason);
//! }
//!
//! let generated = get_secure_strong_password().expect("default policy is satisfiable");
//! ```

mod classifier;
mod corpus;
mod evaluator;
mod factory;
mod generator;
mod policy;
mod report;
mod rules;

// Public API
pub use classifier::CharClass;
pub use corpus::{CorpusError, get_corpus_path, load_corpus, load_corpus_from_path};
pub use evaluator::{check_password_security, check_password_security_report, evaluate_password};
pub use factory::{FactoryError, get_secure_password, get_secure_password_with_rng, get_secure_strong_password};
pub use generator::{GenerateError, generate_candidate, generate_password};
pub use policy::{PolicyConfig, PolicyError};
pub use report::CheckReport;
pub use rules::Rule;

#[cfg(feature = "async")]
pub use factory::{get_secure_password_cancellable, get_secure_password_tx};
