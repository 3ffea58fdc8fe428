//! # satchel-token
//!
//! Thin HS256 JWT wrappers over [`jsonwebtoken`].
//!
//! Claims are arbitrary serde values: [`sign`] serializes the caller's
//! claims to a JSON object and stamps `iat`/`exp` into it, [`verify`]
//! decodes while accepting HS256 signatures only, and
//! [`claims`]/[`claims_into`] pull the payload back out as a JSON map or
//! a typed struct.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::Duration;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Session {
//!     sub: String,
//!     role: String,
//! }
//!
//! let secret = b"dev-secret";
//! let session = Session { sub: "42".into(), role: "admin".into() };
//!
//! let token = satchel_token::sign(&session, Duration::minutes(15), secret).unwrap();
//! let restored: Session = satchel_token::claims_into(&token, secret).unwrap();
//! assert_eq!(restored.sub, "42");
//! ```

use chrono::{Duration, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, TokenData, Validation, decode, encode,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};
use thiserror::Error;
use tracing::debug;

/// Failures from signing or verifying tokens.
#[derive(Debug, Error)]
pub enum TokenError {
    /// The claims value did not serialize to a JSON object, so `iat`/`exp`
    /// cannot be stamped into it.
    #[error("claims must serialize to a JSON object")]
    NonObjectClaims,

    /// Signature, expiry, or structural failure from the JWT layer.
    #[error(transparent)]
    Jwt(#[from] jsonwebtoken::errors::Error),

    /// Claims (de)serialization failure.
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}

/// Signs `claims` as an HS256 JWT valid for `ttl`.
///
/// The claims must serialize to a JSON object; `iat` (now) and `exp`
/// (now + `ttl`) are stamped in as Unix seconds, overwriting any values
/// the caller put there.
pub fn sign<C: Serialize>(claims: &C, ttl: Duration, secret: &[u8]) -> Result<String, TokenError> {
    let Value::Object(mut map) = serde_json::to_value(claims)? else {
        return Err(TokenError::NonObjectClaims);
    };
    let now = Utc::now();
    map.insert("iat".to_string(), json!(now.timestamp()));
    map.insert("exp".to_string(), json!((now + ttl).timestamp()));

    let token = encode(&Header::default(), &map, &EncodingKey::from_secret(secret))?;
    debug!(alg = "HS256", "signed token");
    Ok(token)
}

/// Verifies an HS256 token and returns the decoded header and claims.
///
/// Only HS256 signatures are accepted. `exp` is honored when present but
/// tokens without one still verify; no audience is enforced — a generic
/// wrapper has no fixed audience to pin.
pub fn verify(token: &str, secret: &[u8]) -> Result<TokenData<Map<String, Value>>, TokenError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.required_spec_claims.clear();
    validation.validate_aud = false;

    let data = decode::<Map<String, Value>>(token, &DecodingKey::from_secret(secret), &validation)?;
    Ok(data)
}

/// Verifies a token and returns its claims as a JSON map.
pub fn claims(token: &str, secret: &[u8]) -> Result<Map<String, Value>, TokenError> {
    Ok(verify(token, secret)?.claims)
}

/// Verifies a token and deserializes its claims into `T`.
///
/// Extra claims (`iat`, `exp`, anything the caller's type does not name)
/// are ignored unless `T` denies unknown fields.
pub fn claims_into<T: DeserializeOwned>(token: &str, secret: &[u8]) -> Result<T, TokenError> {
    let map = claims(token, secret)?;
    Ok(serde_json::from_value(Value::Object(map))?)
}
