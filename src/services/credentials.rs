use std::{fmt::Display, future::Future, sync::Arc};

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    services::model_client::InvocationError,
};

pub const CLOUD_PLATFORM_SCOPE: &str = "https://www.googleapis.com/auth/cloud-platform";

/// Supplies the OAuth2 bearer token sent with every Vertex AI call.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccessTokenSource: Send + Sync {
    async fn access_token(&self) -> Result<SecretString, InvocationError>;
}

/// A token handed in through `GCP_ACCESS_TOKEN`. It is never refreshed.
pub struct StaticAccessToken(SecretString);

impl StaticAccessToken {
    pub fn new(token: SecretString) -> Self {
        Self(token)
    }
}

#[async_trait]
impl AccessTokenSource for StaticAccessToken {
    async fn access_token(&self) -> Result<SecretString, InvocationError> {
        Ok(SecretString::from(self.0.expose_secret().to_string()))
    }
}

/// Application Default Credentials. `gcp_auth` caches the token and fetches
/// a new one shortly before it expires.
pub struct ApplicationDefaultCredentials {
    provider: Arc<dyn gcp_auth::TokenProvider>,
}

#[async_trait]
impl AccessTokenSource for ApplicationDefaultCredentials {
    async fn access_token(&self) -> Result<SecretString, InvocationError> {
        let token = self
            .provider
            .token(&[CLOUD_PLATFORM_SCOPE])
            .await
            .map_err(|e| InvocationError::Credentials(e.to_string()))?;
        Ok(SecretString::from(token.as_str().to_string()))
    }
}

/// Picks the credential source for Vertex AI: the static token when one is
/// configured, Application Default Credentials otherwise.
pub async fn resolve(config: &Config) -> AppResult<Arc<dyn AccessTokenSource>> {
    resolve_with(config, gcp_auth::provider()).await
}

async fn resolve_with<E: Display>(
    config: &Config,
    application_default: impl Future<Output = Result<Arc<dyn gcp_auth::TokenProvider>, E>>,
) -> AppResult<Arc<dyn AccessTokenSource>> {
    if let Some(token) = &config.gcp_access_token {
        log::warn!("Using GCP_ACCESS_TOKEN for Vertex AI; it expires and is not refreshed");
        return Ok(Arc::new(StaticAccessToken::new(token.clone())));
    }

    let provider = application_default.await.map_err(|e| {
        AppError::ConfigurationError(format!(
            "No Google Cloud credentials found. Set GCP_ACCESS_TOKEN or configure Application Default Credentials: {}",
            e
        ))
    })?;

    log::info!("Using Application Default Credentials for Vertex AI");
    Ok(Arc::new(ApplicationDefaultCredentials { provider }))
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn no_application_default() -> Result<Arc<dyn gcp_auth::TokenProvider>, &'static str> {
        Err("no credentials file, gcloud or metadata server")
    }

    #[tokio::test]
    async fn configured_token_is_used_without_application_default() {
        let mut config = Config::test_config();
        config.gcp_access_token = Some(SecretString::from("ya29.static".to_string()));

        let source = resolve_with(&config, no_application_default()).await.unwrap();
        let token = source.access_token().await.unwrap();

        assert_eq!(token.expose_secret(), "ya29.static");
    }

    #[tokio::test]
    async fn missing_credentials_fail_at_startup() {
        let mut config = Config::test_config();
        config.gcp_access_token = None;

        let result = resolve_with(&config, no_application_default()).await;

        match result {
            Err(AppError::ConfigurationError(msg)) => {
                assert!(msg.contains("GCP_ACCESS_TOKEN"));
                assert!(msg.contains("metadata server"));
            }
            Err(other) => panic!("Expected ConfigurationError, got {:?}", other),
            Ok(_) => panic!("Expected ConfigurationError, got a credential source"),
        }
    }
}
