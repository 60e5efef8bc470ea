//! Factory: build `ClaimVerifier` from application `Config`.
use std::sync::Arc;

use crate::config::Config;
use crate::services::auth::ClaimVerifier;
use crate::services::auth::key_set::{KeySet, KeySetError};

pub async fn build_claim_verifier(config: &Config) -> Result<Arc<ClaimVerifier>, KeySetError> {
    let key_set = KeySet::load(&config.jwks_source).await?;

    let verifier = ClaimVerifier::new(
        key_set,
        &config.auth_issuer,
        &config.auth_audience,
        config.auth_algorithm,
        config.access_token_leeway_seconds,
    );

    Ok(Arc::new(verifier))
}
