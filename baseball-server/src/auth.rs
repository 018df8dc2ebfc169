use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

/// Grace period after nominal expiry during which a token still verifies.
/// Tokens expire at their issuance instant, so this is the effective
/// lifetime of a token.
pub const EXPIRY_LEEWAY_SECS: u64 = 600;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub iat: u64,
    pub exp: u64,
}

/// Issues and verifies the HS256 tokens carried by authenticated requests.
/// Stateless: validity is a pure function of signature, expiry and leeway.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = EXPIRY_LEEWAY_SECS;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Issue a token carrying the user id under the `userId` claim.
    pub fn create_token(&self, user_id: &str) -> Result<String, AuthError> {
        if user_id.is_empty() {
            return Err(AuthError::EmptyUserId);
        }

        let now = unix_now();
        let claims = TokenClaims {
            user_id: user_id.to_string(),
            iat: now,
            exp: now,
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            tracing::warn!("failed to sign token: {:?}", e);
            AuthError::Signing
        })
    }

    /// Verify signature and expiry, then return the user id claim. Malformed,
    /// tampered-with and stale tokens all surface as `InvalidToken`.
    pub fn user_id_from_token(&self, token: &str) -> Result<String, AuthError> {
        let data =
            decode::<TokenClaims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                tracing::warn!("token verification failed: {:?}", e);
                AuthError::InvalidToken
            })?;

        Ok(data.claims.user_id)
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0)
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid token")]
    InvalidToken,
    #[error("user id must not be empty")]
    EmptyUserId,
    #[error("failed to sign token")]
    Signing,
}
