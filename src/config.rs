use std::{env, time::Duration};

use secrecy::SecretString;

use crate::errors::{AppError, AppResult};

pub const DEFAULT_LOCATION: &str = "us-central1";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash-001";
const DEFAULT_MAX_PAYLOAD_BYTES: usize = 4 * 1024 * 1024;

/// Which identity provider verifies bearer tokens on authenticated routes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdentityProvider {
    Google,
    Jwt,
}

impl IdentityProvider {
    fn parse(value: &str) -> AppResult<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "google" => Ok(IdentityProvider::Google),
            "jwt" => Ok(IdentityProvider::Jwt),
            other => Err(AppError::ConfigurationError(format!(
                "IDENTITY_PROVIDER must be 'google' or 'jwt', got '{}'",
                other
            ))),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub gcp_project: String,
    pub gcp_location: String,
    pub model_name: String,
    pub vertex_api_base: String,
    pub gcp_access_token: Option<SecretString>,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub model_timeout: Duration,
    pub request_timeout: Duration,
    pub retry_backoff: Duration,
    pub max_payload_bytes: usize,
    pub identity_provider: IdentityProvider,
    pub google_client_id: Option<String>,
    pub identity_jwt_secret: SecretString,
}

impl Config {
    /// Reads the process environment. Fails when `GCP_PROJECT` is absent,
    /// everything else falls back to a default.
    pub fn from_env() -> AppResult<Self> {
        let gcp_project = env::var("GCP_PROJECT")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .ok_or_else(|| {
                AppError::ConfigurationError("GCP_PROJECT environment variable not set".to_string())
            })?;

        let gcp_location = env::var("GCP_LOCATION").unwrap_or_else(|_| DEFAULT_LOCATION.to_string());
        let vertex_api_base = env::var("VERTEX_API_BASE")
            .unwrap_or_else(|_| default_api_base(&gcp_location));

        let identity_provider = match env::var("IDENTITY_PROVIDER") {
            Ok(value) => IdentityProvider::parse(&value)?,
            Err(_) => IdentityProvider::Google,
        };

        Ok(Self {
            gcp_project,
            gcp_location,
            model_name: env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            vertex_api_base,
            gcp_access_token: env::var("GCP_ACCESS_TOKEN")
                .ok()
                .filter(|t| !t.trim().is_empty())
                .map(SecretString::from),
            web_server_host: env::var("WEB_SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .or_else(|_| env::var("PORT"))
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            model_timeout: Duration::from_secs(env_number("MODEL_TIMEOUT_SECS", 60)),
            request_timeout: Duration::from_secs(env_number("REQUEST_TIMEOUT_SECS", 180)),
            retry_backoff: Duration::from_millis(env_number("MODEL_RETRY_BACKOFF_MS", 250)),
            max_payload_bytes: env_number("MAX_PAYLOAD_BYTES", DEFAULT_MAX_PAYLOAD_BYTES as u64)
                as usize,
            identity_provider,
            google_client_id: env::var("GOOGLE_CLIENT_ID").ok(),
            identity_jwt_secret: SecretString::from(
                env::var("IDENTITY_JWT_SECRET")
                    .unwrap_or_else(|_| "dev_identity_secret_change_in_production".to_string()),
            ),
        })
    }

    /// Rejects combinations that cannot work once deployed.
    pub fn validate(&self) -> AppResult<()> {
        use secrecy::ExposeSecret;

        if self.model_timeout.is_zero() || self.request_timeout.is_zero() {
            return Err(AppError::ConfigurationError(
                "MODEL_TIMEOUT_SECS and REQUEST_TIMEOUT_SECS must be greater than zero".to_string(),
            ));
        }

        if self.identity_provider == IdentityProvider::Jwt
            && self.identity_jwt_secret.expose_secret().len() < 16
        {
            return Err(AppError::ConfigurationError(format!(
                "IDENTITY_JWT_SECRET is too short ({}). Must be at least 16 characters.",
                self.identity_jwt_secret.expose_secret().len()
            )));
        }

        Ok(())
    }

    pub fn generate_content_url(&self) -> String {
        format!(
            "{}/projects/{}/locations/{}/publishers/google/models/{}:generateContent",
            self.vertex_api_base.trim_end_matches('/'),
            self.gcp_project,
            self.gcp_location,
            self.model_name
        )
    }

    pub fn test_config() -> Self {
        Self {
            gcp_project: "test-project".to_string(),
            gcp_location: DEFAULT_LOCATION.to_string(),
            model_name: DEFAULT_MODEL.to_string(),
            vertex_api_base: default_api_base(DEFAULT_LOCATION),
            gcp_access_token: Some(SecretString::from("test-access-token".to_string())),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 5000,
            model_timeout: Duration::from_secs(5),
            request_timeout: Duration::from_secs(10),
            retry_backoff: Duration::ZERO,
            max_payload_bytes: DEFAULT_MAX_PAYLOAD_BYTES,
            identity_provider: IdentityProvider::Jwt,
            google_client_id: None,
            identity_jwt_secret: SecretString::from("test_identity_secret_key".to_string()),
        }
    }
}

fn default_api_base(location: &str) -> String {
    format!("https://{}-aiplatform.googleapis.com/v1", location)
}

fn env_number(key: &str, default: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
