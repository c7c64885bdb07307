use axum_extra::extract::{
    CookieJar,
    cookie::{Cookie, SameSite},
};
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Validation, decode, encode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use sirreg_core::{AuthContext, Principal, Role};
use thiserror::Error;

use crate::config::constants::defaults;

/// Session cookie settings, deserialized from the `session` config section.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    pub jwt_secret: Secret<String>,
    #[serde(default = "default_ttl")]
    pub ttl_in_seconds: i64,
    #[serde(default = "default_secure_cookie")]
    pub secure_cookie: bool,
}

fn default_cookie_name() -> String {
    defaults::SESSION_COOKIE_NAME.to_string()
}

fn default_ttl() -> i64 {
    defaults::SESSION_TTL_IN_SECONDS
}

fn default_secure_cookie() -> bool {
    true
}

impl SessionConfig {
    pub fn new(jwt_secret: Secret<String>) -> Self {
        Self {
            cookie_name: default_cookie_name(),
            jwt_secret,
            ttl_in_seconds: default_ttl(),
            secure_cookie: default_secure_cookie(),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.jwt_secret.expose_secret().as_bytes()
    }
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Missing token")]
    MissingToken,
    #[error("Token error: {0}")]
    TokenError(jsonwebtoken::errors::Error),
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    pub sub: String,
    pub roles: Vec<String>,
    pub exp: usize,
}

impl From<Claims> for Principal {
    fn from(claims: Claims) -> Self {
        Principal::new(claims.sub, claims.roles.into_iter().map(Role::new).collect())
    }
}

// Create cookie with a new session token for the principal
pub fn generate_session_cookie(
    principal: &Principal,
    config: &SessionConfig,
) -> Result<Cookie<'static>, SessionError> {
    let token = generate_session_token(principal, config.ttl_in_seconds, config.as_bytes())?;
    Ok(create_session_cookie(token, config))
}

// Create cookie and set the value to the passed-in token string
pub fn create_session_cookie(token: String, config: &SessionConfig) -> Cookie<'static> {
    Cookie::build((config.cookie_name.clone(), token))
        .path("/")
        .http_only(true)
        .secure(config.secure_cookie)
        .same_site(SameSite::Lax)
        .build()
}

pub fn create_removal_cookie(config: &SessionConfig) -> Cookie<'static> {
    let mut cookie = create_session_cookie(String::new(), config);
    cookie.make_removal();
    cookie
}

pub fn generate_session_token(
    principal: &Principal,
    token_ttl_seconds: i64,
    secret: &[u8],
) -> Result<String, SessionError> {
    let delta = chrono::Duration::try_seconds(token_ttl_seconds).ok_or(
        SessionError::UnexpectedError("Failed to create session duration".to_string()),
    )?;

    let exp = Utc::now()
        .checked_add_signed(delta)
        .ok_or(SessionError::UnexpectedError(
            "Duration out of range".to_string(),
        ))?
        .timestamp();

    let exp: usize = exp
        .try_into()
        .map_err(|_| SessionError::UnexpectedError("Failed to cast i64 to usize".to_string()))?;

    let claims = Claims {
        sub: principal.username().to_string(),
        roles: principal.roles().iter().map(ToString::to_string).collect(),
        exp,
    };

    encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &EncodingKey::from_secret(secret),
    )
    .map_err(SessionError::TokenError)
}

// Check the signature and expiry of a session token
pub fn validate_session_token(token: &str, config: &SessionConfig) -> Result<Claims, SessionError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(SessionError::TokenError)
}

fn extract_token<'a>(jar: &'a CookieJar, cookie_name: &str) -> Result<&'a str, SessionError> {
    match jar.get(cookie_name) {
        Some(cookie) => Ok(cookie.value()),
        None => Err(SessionError::MissingToken),
    }
}

/// Derive the authentication context of a request from its session cookie.
///
/// Any problem with the token (missing, expired, tampered) yields `Anonymous`.
pub fn auth_context(jar: &CookieJar, config: &SessionConfig) -> AuthContext {
    let claims = extract_token(jar, &config.cookie_name)
        .and_then(|token| validate_session_token(token, config));

    match claims {
        Ok(claims) => AuthContext::Authenticated(claims.into()),
        Err(e) => {
            tracing::debug!(reason = %e, "No valid session");
            AuthContext::Anonymous
        }
    }
}
