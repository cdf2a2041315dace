use async_trait::async_trait;

use crate::{auth::claims::IdentityClaims, errors::AppResult};

pub const INVALID_TOKEN: &str = "Invalid token";

/// Verifies bearer tokens issued by an external identity provider.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> AppResult<IdentityClaims>;
}
