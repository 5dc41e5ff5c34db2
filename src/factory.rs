//! Secure password factory - generate-and-retest loop.
//!
//! Generates `min_length` candidates and runs each through the full rule
//! battery until one passes. The loop is bounded by
//! `PolicyConfig::max_generation_attempts` and, with the `async` feature,
//! can be cancelled between attempts.

use rand::Rng;
use secrecy::SecretString;
use thiserror::Error;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::evaluator::evaluate_password;
use crate::generator::{GenerateError, generate_candidate};
use crate::policy::{PolicyConfig, PolicyError};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FactoryError {
    #[error("Invalid policy: {0}")]
    Policy(#[from] PolicyError),
    #[error("Generation failed: {0}")]
    Generate(#[from] GenerateError),
    #[error("No compliant password after {attempts} attempts")]
    RetryExhausted { attempts: usize },
    #[error("Password generation cancelled")]
    Cancelled,
}

/// Returns a password satisfying every rule of `config`, using the
/// thread-local RNG.
///
/// # Errors
///
/// - [`FactoryError::Policy`] if `config` fails [`PolicyConfig::validate`]
/// - [`FactoryError::Generate`] if the generator guard gives up
/// - [`FactoryError::RetryExhausted`] if no candidate passes within the cap
pub fn get_secure_password(config: &PolicyConfig) -> Result<SecretString, FactoryError> {
    get_secure_password_with_rng(config, &mut rand::thread_rng())
}

/// Same as [`get_secure_password`] with a caller-supplied RNG.
pub fn get_secure_password_with_rng<R: Rng + ?Sized>(
    config: &PolicyConfig,
    rng: &mut R,
) -> Result<SecretString, FactoryError> {
    generate_until_valid(config, rng, || false)
}

/// Compliant password under the process-wide default policy.
pub fn get_secure_strong_password() -> Result<SecretString, FactoryError> {
    get_secure_password(PolicyConfig::global())
}

/// Cancellable variant; the token is checked before every attempt.
#[cfg(feature = "async")]
pub fn get_secure_password_cancellable<R: Rng + ?Sized>(
    config: &PolicyConfig,
    rng: &mut R,
    token: &CancellationToken,
) -> Result<SecretString, FactoryError> {
    generate_until_valid(config, rng, || token.is_cancelled())
}

/// Async version that sends the generated password via channel.
#[cfg(feature = "async")]
pub async fn get_secure_password_tx(
    config: &PolicyConfig,
    token: CancellationToken,
    tx: mpsc::Sender<Result<SecretString, FactoryError>>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("password generation is about to start...");

    let result = {
        let mut rng = rand::thread_rng();
        get_secure_password_cancellable(config, &mut rng, &token)
    };

    if let Err(_e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send generated password: {}", _e);
    }
}

fn generate_until_valid<R, F>(
    config: &PolicyConfig,
    rng: &mut R,
    is_cancelled: F,
) -> Result<SecretString, FactoryError>
where
    R: Rng + ?Sized,
    F: Fn() -> bool,
{
    config.validate()?;

    for _attempt in 1..=config.max_generation_attempts {
        if is_cancelled() {
            #[cfg(feature = "tracing")]
            tracing::warn!("Password generation cancelled before attempt {}", _attempt);
            return Err(FactoryError::Cancelled);
        }

        let candidate = generate_candidate(config.min_length, config, rng)?;
        let report = evaluate_password(&candidate, config);
        if report.passed() {
            #[cfg(feature = "tracing")]
            tracing::debug!("Compliant password found on attempt {}", _attempt);
            return Ok(candidate);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "Candidate {} rejected: {:?}",
            _attempt,
            report.failed_rules().collect::<Vec<_>>()
        );
    }

    #[cfg(feature = "tracing")]
    tracing::warn!(
        "No compliant password after {} attempts",
        config.max_generation_attempts
    );

    Err(FactoryError::RetryExhausted {
        attempts: config.max_generation_attempts,
    })
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;
    use crate::evaluator::check_password_security;
    use secrecy::ExposeSecret;

    #[tokio::test]
    async fn test_cancelled_before_start() {
        let token = CancellationToken::new();
        token.cancel();

        let result = get_secure_password_cancellable(
            PolicyConfig::global(),
            &mut rand::thread_rng(),
            &token,
        );
        assert!(matches!(result, Err(FactoryError::Cancelled)));
    }

    #[tokio::test]
    async fn test_not_cancelled() {
        let token = CancellationToken::new();
        let result = get_secure_password_cancellable(
            PolicyConfig::global(),
            &mut rand::thread_rng(),
            &token,
        );
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_get_secure_password_tx() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        get_secure_password_tx(PolicyConfig::global(), token, tx).await;

        let pwd = rx
            .recv()
            .await
            .expect("Should receive result")
            .expect("Should generate password");
        assert_eq!(pwd.expose_secret().chars().count(), 10);
        assert!(check_password_security(&pwd));
    }

    #[tokio::test]
    async fn test_get_secure_password_tx_cancelled() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        get_secure_password_tx(PolicyConfig::global(), token, tx).await;

        let result = rx.recv().await.expect("Should receive result");
        assert!(matches!(result, Err(FactoryError::Cancelled)));
    }
}
