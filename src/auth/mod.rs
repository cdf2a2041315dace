pub mod claims;
pub mod google;
pub mod jwt;
pub mod middleware;
pub mod verifier;

pub use claims::IdentityClaims;
pub use google::GoogleTokenVerifier;
pub use jwt::JwtVerifier;
pub use middleware::AuthenticatedUser;
pub use verifier::IdentityVerifier;
