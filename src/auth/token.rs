use crate::error::AppError;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Token lifetime: one day from issuance.
const TOKEN_VALIDITY_HOURS: i64 = 24;

/// Represents the claims encoded within a session token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject of the token: the user's store-assigned identifier.
    pub sub: i64,
    /// Expiration timestamp (seconds since epoch) for the token.
    pub exp: usize,
}

/// Issues and verifies signed session tokens.
///
/// The signing key is read from configuration once at startup and both JWT keys
/// are derived from it here, so a process always signs and checks with the same
/// key: the login handler and the auth middleware share clones of one service.
/// Changing the key invalidates every outstanding token; there is no
/// revocation list.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Produces a signed token for `user_id`, expiring in 24 hours.
    ///
    /// # Arguments
    /// * `user_id` - The ID of the user for whom the token is issued.
    ///
    /// # Returns
    /// A `Result` containing the token string. Encoding failures are reported as
    /// `AppError::ServerError` but do not occur for well-formed claims.
    pub fn issue(&self, user_id: i64) -> Result<String, AppError> {
        let expiration = chrono::Utc::now()
            .checked_add_signed(chrono::Duration::hours(TOKEN_VALIDITY_HOURS))
            .expect("valid timestamp")
            .timestamp() as usize;

        let claims = Claims {
            sub: user_id,
            exp: expiration,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::ServerError(format!("Failed to issue token: {}", e)))
    }

    /// Verifies a token string and decodes its claims.
    ///
    /// A token is accepted only if it is well formed, its signature matches this
    /// service's key, and it has not expired. Expiry is checked without leeway:
    /// the token is invalid from its expiration instant onward. Every rejection
    /// maps to `AppError::BadCredential`.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        let mut validation = Validation::default();
        validation.leeway = 0;

        Ok(decode::<Claims>(token, &self.decoding_key, &validation)?.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};

    #[test]
    fn test_token_issue_and_verify() {
        let tokens = TokenService::new("test_secret_for_issue_verify");
        let user_id = 1;
        let token = tokens.issue(user_id).unwrap();
        let claims = tokens.verify(&token).unwrap();
        assert_eq!(claims.sub, user_id);
    }

    #[test]
    fn test_token_expiration() {
        let secret = "test_secret_for_expiration";
        let tokens = TokenService::new(secret);

        let expiration = chrono::Utc::now()
            .checked_sub_signed(chrono::Duration::hours(2))
            .expect("valid timestamp")
            .timestamp() as usize;

        let claims_expired = Claims {
            sub: 2,
            exp: expiration,
        };
        // Signed with the same secret the service verifies with, so only the
        // expiry can be at fault.
        let expired_token = encode(
            &Header::default(),
            &claims_expired,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap();

        match tokens.verify(&expired_token) {
            Err(AppError::BadCredential(msg)) => {
                assert!(
                    msg.contains("ExpiredSignature"),
                    "Unexpected error message for expired token: {}",
                    msg
                );
            }
            Ok(_) => panic!("Token should have been invalid due to expiration"),
            Err(e) => panic!("Unexpected error type for expired token: {:?}", e),
        }
    }

    #[test]
    fn test_token_signed_with_other_key_is_rejected() {
        let issuing = TokenService::new("one_signing_key");
        let verifying = TokenService::new("a_completely_different_key");

        let token = issuing.issue(3).unwrap();

        match verifying.verify(&token) {
            Err(AppError::BadCredential(msg)) => {
                // jsonwebtoken reports InvalidSignature when only the key differs,
                // or InvalidToken for a generally malformed JWT. Both are correct
                // rejections here.
                assert!(
                    msg.contains("InvalidSignature") || msg.contains("InvalidToken"),
                    "Unexpected error message for wrong-key token: {}",
                    msg
                );
            }
            Ok(_) => panic!("Token should have been invalid due to signature mismatch"),
            Err(e) => panic!("Unexpected error type for wrong-key token: {:?}", e),
        }
    }

    #[test]
    fn test_altered_signature_is_rejected() {
        let tokens = TokenService::new("test_secret_for_tampering");
        let token = tokens.issue(4).unwrap();

        // Flip the first character of the signature segment.
        let dot = token.rfind('.').unwrap();
        let mut tampered = String::with_capacity(token.len());
        tampered.push_str(&token[..=dot]);
        let sig = &token[dot + 1..];
        let replacement = if sig.starts_with('A') { "B" } else { "A" };
        tampered.push_str(replacement);
        tampered.push_str(&sig[1..]);

        assert!(tokens.verify(&tampered).is_err());
        // The untouched token still verifies.
        assert!(tokens.verify(&token).is_ok());
    }

    #[test]
    fn test_malformed_token_is_rejected() {
        let tokens = TokenService::new("test_secret_for_malformed");
        assert!(tokens.verify("not-a-token").is_err());
        assert!(tokens.verify("").is_err());
        assert!(tokens.verify("a.b.c").is_err());
    }
}
