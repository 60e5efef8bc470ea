pub mod access_jwt;
pub mod error;
pub mod factory;
pub mod key_set;
pub mod permission;

#[cfg(test)]
pub mod test_support;

pub use access_jwt::ClaimVerifier;
pub use error::AuthError;
pub use factory::build_claim_verifier;
pub use permission::Permission;
