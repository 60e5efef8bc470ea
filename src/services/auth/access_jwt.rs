//! Access token (JWT) claim verification.
//!
//! Three steps, each failing with its own `AuthError`:
//! - `extract_token`: pull the raw token out of `Authorization: Bearer <token>`
//! - `ClaimVerifier::verify`: `kid` lookup, signature, exp/nbf/iss/aud
//! - `authorize`: the required permission is in the `permissions` claim
//!
//! Nothing here keeps state between calls. The same token verified twice gives
//! the same answer.

use axum::http::{HeaderMap, header};
use jsonwebtoken::{Algorithm, Validation, errors::ErrorKind};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::services::auth::error::AuthError;
use crate::services::auth::key_set::KeySet;
use crate::services::auth::permission::Permission;

const AUTHORIZATION_MALFORMED: &str = "Authorization malformed";
const KEY_NOT_FOUND: &str = "Unable to find the appropriate key";
const INCORRECT_CLAIMS: &str = "Incorrect claims. Please, check the audience and issuer";
const UNABLE_TO_PARSE: &str = "Unable to parse authentication token";
const PERMISSIONS_MISSING: &str = "Permissions not included in JWT";

/// Decoded token payload: claim name → value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Claims(Map<String, Value>);

impl Claims {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// `None` when the claim is absent or is not an array.
    /// Non-string entries are ignored.
    pub fn permissions(&self) -> Option<impl Iterator<Item = &str>> {
        self.0
            .get("permissions")
            .and_then(Value::as_array)
            .map(|perms| perms.iter().filter_map(Value::as_str))
    }
}

/// `Authorization: Bearer <token>` → `<token>`.
pub fn extract_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or_else(AuthError::header_missing)?
        .to_str()
        .map_err(|_| AuthError::invalid_header("Authorization header is malformed"))?;

    let parts: Vec<&str> = value.split_whitespace().collect();

    match parts.as_slice() {
        ["Bearer", token] => Ok(*token),
        [first, ..] if *first != "Bearer" => Err(AuthError::invalid_header(
            "Authorization header must start with \"Bearer\"",
        )),
        [] => Err(AuthError::invalid_header(
            "Authorization header must start with \"Bearer\"",
        )),
        [_] => Err(AuthError::invalid_header("Token not found")),
        _ => Err(AuthError::invalid_header(
            "Authorization header must be bearer token",
        )),
    }
}

/// Fails with 403 `unauthorized` when `permission` is missing from the claims.
pub fn authorize(claims: &Claims, permission: Permission) -> Result<(), AuthError> {
    let mut granted = claims
        .permissions()
        .ok_or_else(|| AuthError::invalid_claims(PERMISSIONS_MISSING))?;

    if granted.any(|p| p == permission.as_str()) {
        Ok(())
    } else {
        Err(AuthError::forbidden())
    }
}

/// Verifies access tokens against a fixed key set, issuer and audience.
#[derive(Clone, Debug)]
pub struct ClaimVerifier {
    key_set: KeySet,
    validation: Validation,
}

impl ClaimVerifier {
    pub fn new(
        key_set: KeySet,
        issuer: &str,
        audience: &str,
        algorithm: Algorithm,
        leeway_seconds: u64,
    ) -> Self {
        let mut validation = Validation::new(algorithm);
        validation.set_issuer(&[issuer]);
        validation.set_audience(&[audience]);
        validation.set_required_spec_claims(&["exp", "iss", "aud"]);
        validation.validate_nbf = true;
        validation.leeway = leeway_seconds;

        Self {
            key_set,
            validation,
        }
    }

    /// Verify the signature and standard claims, then return the payload.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let header = jsonwebtoken::decode_header(token)
            .map_err(|_| AuthError::invalid_header(AUTHORIZATION_MALFORMED))?;

        let kid = header
            .kid
            .ok_or_else(|| AuthError::invalid_header(AUTHORIZATION_MALFORMED))?;

        let key = self
            .key_set
            .find(&kid)
            .ok_or_else(|| AuthError::invalid_header(KEY_NOT_FOUND))?;

        jsonwebtoken::decode::<Claims>(token, key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!(error = %e, kid = %kid, "jwt decode failed");
                match e.kind() {
                    ErrorKind::ExpiredSignature => AuthError::token_expired(),
                    ErrorKind::InvalidAudience | ErrorKind::InvalidIssuer => {
                        AuthError::invalid_claims(INCORRECT_CLAIMS)
                    }
                    ErrorKind::MissingRequiredClaim(claim) if claim == "iss" || claim == "aud" => {
                        AuthError::invalid_claims(INCORRECT_CLAIMS)
                    }
                    _ => AuthError::invalid_header(UNABLE_TO_PARSE),
                }
            })
    }

    /// extract → verify → authorize, stopping at the first failure.
    pub fn check(&self, headers: &HeaderMap, permission: Permission) -> Result<Claims, AuthError> {
        let token = extract_token(headers)?;
        let claims = self.verify(token)?;
        authorize(&claims, permission)?;
        Ok(claims)
    }
}
