//! Random candidate generation from the policy alphabet.

use rand::Rng;
use rand::seq::SliceRandom;
use secrecy::SecretString;
use thiserror::Error;

use crate::policy::PolicyConfig;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("Cannot generate from an empty alphabet")]
    EmptyAlphabet,
    #[error("No acceptable character for position {position} after {attempts} attempts")]
    ResampleExhausted { position: usize, attempts: usize },
}

/// Generates a `length`-character candidate with the thread-local RNG.
///
/// See [`generate_candidate`].
pub fn generate_password(length: usize, config: &PolicyConfig) -> Result<SecretString, GenerateError> {
    generate_candidate(length, config, &mut rand::thread_rng())
}

/// Generates a `length`-character candidate, sampling each position
/// uniformly from `config.alphabet`.
///
/// A sampled character is redrawn while prepending or appending it to the
/// characters chosen so far would spell a prohibited password exactly. The
/// result is not guaranteed to pass the rule battery.
pub fn generate_candidate<R: Rng + ?Sized>(
    length: usize,
    config: &PolicyConfig,
    rng: &mut R,
) -> Result<SecretString, GenerateError> {
    let alphabet: Vec<char> = config.alphabet.chars().collect();
    if alphabet.is_empty() {
        return Err(GenerateError::EmptyAlphabet);
    }

    let mut password = String::with_capacity(length);
    for position in 0..length {
        let c = sample_guarded(&alphabet, &password, config, rng).ok_or_else(|| {
            GenerateError::ResampleExhausted {
                position,
                attempts: config.max_resample_attempts,
            }
        })?;
        password.push(c);
    }

    Ok(SecretString::new(password.into()))
}

fn sample_guarded<R: Rng + ?Sized>(
    alphabet: &[char],
    prefix: &str,
    config: &PolicyConfig,
    rng: &mut R,
) -> Option<char> {
    for _ in 0..config.max_resample_attempts {
        let c = *alphabet.choose(rng)?;
        if !spells_prohibited(prefix, c, config) {
            return Some(c);
        }
    }
    None
}

fn spells_prohibited(prefix: &str, c: char, config: &PolicyConfig) -> bool {
    let prepended = format!("{c}{prefix}");
    let appended = format!("{prefix}{c}");
    config.prohibited_passwords.contains(&prepended) || config.prohibited_passwords.contains(&appended)
}
