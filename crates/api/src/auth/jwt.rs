//! Bearer credential generation and validation.
//!
//! Credentials are HS256-signed JWTs containing a [`Claims`] payload.
//! They are stateless: nothing is persisted server-side and there is no
//! revocation list, so a credential stays valid until it expires.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use partstore_core::types::DbId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims embedded in every issued credential.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the user's internal database id.
    pub sub: DbId,
    /// The user's role name (`"user"` or `"admin"`).
    pub role: String,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Unique token identifier (UUID v4) for audit trails.
    pub jti: String,
}

/// Configuration for credential generation and validation.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    /// Credential lifetime in minutes (default: 60).
    pub token_expiry_mins: i64,
}

/// Default credential expiry in minutes (one hour).
const DEFAULT_TOKEN_EXPIRY_MINS: i64 = 60;

impl JwtConfig {
    /// Load credential configuration from environment variables.
    ///
    /// | Env Var             | Required | Default |
    /// |---------------------|----------|---------|
    /// | `TOKEN_SECRET`      | **yes**  | --      |
    /// | `TOKEN_EXPIRY_MINS` | no       | `60`    |
    ///
    /// # Panics
    ///
    /// Panics if `TOKEN_SECRET` is not set or is empty.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("TOKEN_SECRET").expect("TOKEN_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "TOKEN_SECRET must not be empty");

        let token_expiry_mins: i64 = std::env::var("TOKEN_EXPIRY_MINS")
            .unwrap_or_else(|_| DEFAULT_TOKEN_EXPIRY_MINS.to_string())
            .parse()
            .expect("TOKEN_EXPIRY_MINS must be a valid i64");

        Self {
            secret,
            token_expiry_mins,
        }
    }
}

/// Generate an HS256 credential for the given user.
///
/// The token embeds the user id, role, issue time, expiration, and a
/// unique `jti` claim.
pub fn generate_token(
    user_id: DbId,
    role: &str,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();
    let exp = now + config.token_expiry_mins * 60;

    let claims = Claims {
        sub: user_id,
        role: role.to_string(),
        exp,
        iat: now,
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Validate and decode a credential, returning the embedded [`Claims`].
///
/// Validates the signature and expiration automatically. Any defect --
/// bad signature, garbled payload, expired -- yields an error; callers
/// do not learn which check failed, and must not leak it to clients.
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(), // HS256, validates exp
    )?;
    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper to build a test config with a known secret.
    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            token_expiry_mins: 60,
        }
    }

    #[test]
    fn test_generate_and_validate_token() {
        let config = test_config();
        let token = generate_token(42, "admin", &config).expect("token generation should succeed");

        let claims = validate_token(&token, &config).expect("token validation should succeed");
        assert_eq!(claims.sub, 42);
        assert_eq!(claims.role, "admin");
        assert_eq!(claims.exp - claims.iat, 3600); // one hour
        assert!(!claims.jti.is_empty());
    }

    #[test]
    fn test_expired_token_fails() {
        let config = test_config();

        // Manually create an already-expired token.
        // Use a margin well beyond the default 60-second leeway.
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: 1,
            role: "user".to_string(),
            exp: now - 300, // expired 5 minutes ago (well past leeway)
            iat: now - 600,
            jti: Uuid::new_v4().to_string(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .expect("encoding should succeed");

        let result = validate_token(&token, &config);
        assert!(result.is_err(), "expired token must fail validation");
    }

    #[test]
    fn test_different_secrets_fail() {
        let config_a = JwtConfig {
            secret: "secret-alpha".to_string(),
            token_expiry_mins: 60,
        };
        let config_b = JwtConfig {
            secret: "secret-bravo".to_string(),
            token_expiry_mins: 60,
        };

        let token = generate_token(1, "user", &config_a).expect("token generation should succeed");

        let result = validate_token(&token, &config_b);
        assert!(
            result.is_err(),
            "token signed with a different secret must fail"
        );
    }

    #[test]
    fn test_tampered_token_fails() {
        let config = test_config();
        let token = generate_token(7, "user", &config).expect("token generation should succeed");

        // Flip a character in the payload segment.
        let mut tampered = token.into_bytes();
        let mid = tampered.len() / 2;
        tampered[mid] = if tampered[mid] == b'a' { b'b' } else { b'a' };
        let tampered = String::from_utf8(tampered).unwrap();

        let result = validate_token(&tampered, &config);
        assert!(result.is_err(), "tampered token must fail validation");
    }
}
