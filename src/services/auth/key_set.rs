//! Trusted signing keys (JWKS) used to verify access tokens.
//!
//! The key set is loaded once at startup, either from a local file or from the
//! identity provider's well-known endpoint, and is read-only afterwards.

use std::{collections::HashMap, path::PathBuf};

use jsonwebtoken::{DecodingKey, jwk::JwkSet};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KeySetError {
    #[error("failed to read jwks file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to fetch jwks from {url}: {source}")]
    Fetch { url: String, source: reqwest::Error },
    #[error("invalid jwks document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("jwks contains no usable keys")]
    Empty,
}

/// Where the JWKS document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JwksSource {
    File(PathBuf),
    Url(String),
}

/// `kid` → public verification key.
///
/// Key material is not printable via Debug.
#[derive(Clone, Default)]
pub struct KeySet {
    keys: HashMap<String, DecodingKey>,
}

impl std::fmt::Debug for KeySet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut kids: Vec<&str> = self.keys.keys().map(String::as_str).collect();
        kids.sort_unstable();
        f.debug_struct("KeySet").field("kids", &kids).finish()
    }
}

impl KeySet {
    /// Build from a parsed JWKS. Keys without a `kid`, or whose material
    /// cannot be turned into a decoding key, are skipped.
    pub fn from_jwks(jwks: &JwkSet) -> Self {
        let mut keys = HashMap::with_capacity(jwks.keys.len());

        for jwk in &jwks.keys {
            let Some(kid) = jwk.common.key_id.as_deref() else {
                tracing::warn!("skipping jwk without kid");
                continue;
            };

            match DecodingKey::from_jwk(jwk) {
                Ok(key) => {
                    keys.insert(kid.to_string(), key);
                }
                Err(e) => tracing::warn!(kid, error = %e, "skipping unusable jwk"),
            }
        }

        Self { keys }
    }

    pub fn from_json(document: &str) -> Result<Self, KeySetError> {
        let jwks: JwkSet = serde_json::from_str(document)?;
        let set = Self::from_jwks(&jwks);
        if set.is_empty() {
            return Err(KeySetError::Empty);
        }
        Ok(set)
    }

    pub async fn load(source: &JwksSource) -> Result<Self, KeySetError> {
        let document = match source {
            JwksSource::File(path) => {
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| KeySetError::Io {
                        path: path.clone(),
                        source,
                    })?
            }
            JwksSource::Url(url) => fetch(url).await.map_err(|source| KeySetError::Fetch {
                url: url.clone(),
                source,
            })?,
        };

        let set = Self::from_json(&document)?;
        tracing::info!(keys = set.len(), ?source, "loaded jwks");
        Ok(set)
    }

    pub fn find(&self, kid: &str) -> Option<&DecodingKey> {
        self.keys.get(kid)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

async fn fetch(url: &str) -> Result<String, reqwest::Error> {
    reqwest::Client::new()
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await
}
