use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

/// The identity asserted by a verified bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityClaims {
    pub sub: String, // Subject (user id at the identity provider)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub exp: usize, // Expiration time (as UTC timestamp)
    #[serde(default)]
    pub iat: usize, // Issued at (as UTC timestamp)
}

impl IdentityClaims {
    pub fn new(sub: impl Into<String>, email: Option<String>, expiration_hours: i64) -> Self {
        let now = Utc::now();
        let exp = now + Duration::hours(expiration_hours);

        Self {
            sub: sub.into(),
            email,
            iat: now.timestamp() as usize,
            exp: exp.timestamp() as usize,
        }
    }

    pub fn is_expired(&self) -> bool {
        (self.exp as i64) <= Utc::now().timestamp()
    }
}
