use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;

use crate::{
    auth::{
        claims::IdentityClaims,
        verifier::{IdentityVerifier, INVALID_TOKEN},
    },
    errors::{AppError, AppResult},
};

pub const GOOGLE_TOKENINFO_URL: &str = "https://oauth2.googleapis.com/tokeninfo";

#[derive(Debug, Deserialize)]
struct TokenInfo {
    // absent when the caller sent an access token rather than an ID token
    sub: Option<String>,
    aud: Option<String>,
    email: Option<String>,
    exp: Option<String>,
    iat: Option<String>,
}

impl TokenInfo {
    fn into_claims(self, audience: Option<&str>) -> AppResult<IdentityClaims> {
        if let Some(expected) = audience {
            if self.aud.as_deref() != Some(expected) {
                log::info!("Rejected Google ID token for audience {:?}", self.aud);
                return Err(AppError::AuthFailure(INVALID_TOKEN.to_string()));
            }
        }

        let Some(sub) = self.sub.filter(|s| !s.is_empty()) else {
            log::info!("Rejected Google token without a subject");
            return Err(AppError::AuthFailure(INVALID_TOKEN.to_string()));
        };

        let claims = IdentityClaims {
            sub,
            email: self.email,
            exp: self.exp.and_then(|e| e.parse().ok()).unwrap_or(0),
            iat: self.iat.and_then(|i| i.parse().ok()).unwrap_or(0),
        };

        if claims.is_expired() {
            return Err(AppError::AuthFailure(INVALID_TOKEN.to_string()));
        }

        Ok(claims)
    }
}

/// Verifies Google ID tokens through the OAuth2 `tokeninfo` endpoint.
pub struct GoogleTokenVerifier {
    http_client: reqwest::Client,
    tokeninfo_url: String,
    audience: Option<String>,
}

impl GoogleTokenVerifier {
    pub fn new(http_client: reqwest::Client, audience: Option<String>) -> Self {
        Self {
            http_client,
            tokeninfo_url: GOOGLE_TOKENINFO_URL.to_string(),
            audience,
        }
    }
}

#[async_trait]
impl IdentityVerifier for GoogleTokenVerifier {
    async fn verify(&self, token: &str) -> AppResult<IdentityClaims> {
        let response = self
            .http_client
            .get(&self.tokeninfo_url)
            .query(&[("id_token", token)])
            .send()
            .await
            .map_err(|e| {
                log::error!("Failed to reach Google tokeninfo: {}", e);
                AppError::UpstreamFailure(format!("identity provider unreachable: {}", e))
            })?;

        match response.status() {
            StatusCode::OK => {}
            status if status.is_client_error() => {
                return Err(AppError::AuthFailure(INVALID_TOKEN.to_string()));
            }
            status => {
                return Err(AppError::UpstreamFailure(format!(
                    "identity provider returned HTTP {}",
                    status
                )));
            }
        }

        let info: TokenInfo = response.json().await.map_err(|e| {
            AppError::UpstreamFailure(format!("unreadable tokeninfo response: {}", e))
        })?;

        info.into_claims(self.audience.as_deref())
    }
}
