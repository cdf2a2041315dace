use async_trait::async_trait;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};

use crate::{
    auth::{
        claims::IdentityClaims,
        verifier::{IdentityVerifier, INVALID_TOKEN},
    },
    errors::{AppError, AppResult},
};

/// HS256 tokens from a local identity provider sharing `IDENTITY_JWT_SECRET`.
#[derive(Clone)]
pub struct JwtVerifier {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtVerifier {
    pub fn new(secret: &SecretString) -> Self {
        let secret_bytes = secret.expose_secret().as_bytes();

        Self {
            encoding_key: EncodingKey::from_secret(secret_bytes),
            decoding_key: DecodingKey::from_secret(secret_bytes),
            validation: Validation::new(Algorithm::HS256),
        }
    }

    pub fn issue_token(&self, claims: &IdentityClaims) -> AppResult<String> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("Failed to create JWT: {}", e)))
    }

    fn decode_token(&self, token: &str) -> AppResult<IdentityClaims> {
        decode::<IdentityClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        log::info!("Rejected expired identity token")
                    }
                    _ => log::info!("Rejected identity token: {}", e),
                }
                AppError::AuthFailure(INVALID_TOKEN.to_string())
            })
    }
}

#[async_trait]
impl IdentityVerifier for JwtVerifier {
    async fn verify(&self, token: &str) -> AppResult<IdentityClaims> {
        self.decode_token(token)
    }
}
