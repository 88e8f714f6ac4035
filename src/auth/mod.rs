pub mod extractors;
pub mod middleware;
pub mod password;
pub mod token;

use serde::{Deserialize, Serialize};

// Re-export necessary items
pub use extractors::AuthenticatedUserId;
pub use middleware::AuthMiddleware;
pub use password::{hash_password, verify_password};
pub use token::{Claims, TokenService};

/// Represents the payload for a user login request.
///
/// Both fields are required; a body missing either is rejected at
/// deserialization (presence is the only check applied).
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// User's email address.
    pub email: String,
    /// User's plaintext password. Compared against the stored digest and
    /// then dropped; never persisted.
    pub password: String,
}

/// Response structure after a successful login. Contains only the session
/// token; the client learns nothing else about the account.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    /// The JWT (JSON Web Token) for session authentication.
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_requires_both_fields() {
        let complete = r#"{"email": "test@example.com", "password": "password123"}"#;
        assert!(serde_json::from_str::<LoginRequest>(complete).is_ok());

        let missing_password = r#"{"email": "test@example.com"}"#;
        assert!(serde_json::from_str::<LoginRequest>(missing_password).is_err());

        let missing_email = r#"{"password": "password123"}"#;
        assert!(serde_json::from_str::<LoginRequest>(missing_email).is_err());
    }
}
