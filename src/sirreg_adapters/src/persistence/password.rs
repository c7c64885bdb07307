use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordVerifier, Version,
    password_hash::{PasswordHasher, SaltString, rand_core},
};
use secrecy::{ExposeSecret, Secret};
use sirreg_core::Password;

fn hasher() -> Result<Argon2<'static>, String> {
    Ok(Argon2::new(
        Algorithm::Argon2id,
        Version::V0x13,
        Params::new(15000, 2, 1, None).map_err(|e| e.to_string())?,
    ))
}

/// Hash a password off the async runtime, keeping the caller's span.
#[tracing::instrument(name = "Computing password hash", skip_all)]
pub async fn compute_password_hash(password: Password) -> Result<Secret<String>, String> {
    let current_span: tracing::Span = tracing::Span::current();

    tokio::task::spawn_blocking(move || {
        current_span.in_scope(move || {
            let salt: SaltString = SaltString::generate(rand_core::OsRng);
            hasher()?
                .hash_password(password.as_ref().expose_secret().as_bytes(), &salt)
                .map(|h| Secret::new(h.to_string()))
                .map_err(|e| e.to_string())
        })
    })
    .await
    .map_err(|e| e.to_string())?
}

/// Fails when the candidate does not match, or the stored hash is malformed.
#[tracing::instrument(name = "Verify password hash", skip_all)]
pub async fn verify_password_hash(
    expected_password_hash: Secret<String>,
    password_candidate: Password,
) -> Result<(), String> {
    let current_span: tracing::Span = tracing::Span::current();

    tokio::task::spawn_blocking(move || {
        current_span.in_scope(|| {
            let expected_password_hash: PasswordHash<'_> =
                PasswordHash::new(expected_password_hash.expose_secret())
                    .map_err(|e| e.to_string())?;

            hasher()?
                .verify_password(
                    password_candidate.as_ref().expose_secret().as_bytes(),
                    &expected_password_hash,
                )
                .map_err(|e| e.to_string())
        })
    })
    .await
    .map_err(|e| e.to_string())?
}
