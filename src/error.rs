//!
//! # Custom Error Handling
//!
//! This module defines the custom error type `AppError` used throughout the application.
//! Every failure a handler or the auth gate can produce is represented here and mapped to
//! an HTTP status plus a plain-text message at the response boundary; nothing propagates
//! past a handler.
//!
//! `AppError` implements `actix_web::error::ResponseError`, so handlers and middleware can
//! return it directly (or via `?` through the `From` impls for `sqlx::Error`,
//! `bcrypt::BcryptError`, and `jsonwebtoken::errors::Error`).
//!
//! The credential failures intentionally send fixed bodies: a login rejection never says
//! whether the email or the password was wrong, and a rejected token never says what was
//! wrong with it. Detail is kept for the log.

use actix_web::{error::ResponseError, HttpResponse};
use std::fmt;

/// All failures the API can report.
#[derive(Debug)]
pub enum AppError {
    /// No usable credential on a protected request: the `Authorization` header is
    /// absent, unreadable, or empty (HTTP 401).
    MissingCredential,
    /// A credential was presented but did not verify: bad signature, malformed
    /// payload, or expired (HTTP 400). Carries the verification detail for logging.
    BadCredential(String),
    /// Login failed. Covers both "no such user" and "wrong password" with one
    /// message so the two cases cannot be told apart (HTTP 401).
    InvalidCredentials,
    /// The requested record does not exist, or is not visible to the caller
    /// (HTTP 404). Ownership misses report exactly this.
    NotFound(String),
    /// The store rejected a write, e.g. a constraint violation. The store's reason
    /// is surfaced as-is (HTTP 400).
    ValidationError(String),
    /// Unclassified store or runtime failure (HTTP 500). Carries detail for logging.
    ServerError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::MissingCredential => write!(f, "Access denied"),
            AppError::BadCredential(msg) => write!(f, "Invalid token: {}", msg),
            AppError::InvalidCredentials => write!(f, "Invalid credentials"),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            AppError::ServerError(msg) => write!(f, "Server error: {}", msg),
        }
    }
}

/// Converts `AppError` variants into plain-text HTTP responses.
///
/// Failure bodies are plain text; only successful payloads are JSON. `NotFound` and
/// `ValidationError` pass their message through, the rest send fixed strings.
impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::MissingCredential => HttpResponse::Unauthorized().body("Access denied"),
            AppError::BadCredential(_) => HttpResponse::BadRequest().body("Invalid token"),
            AppError::InvalidCredentials => {
                HttpResponse::Unauthorized().body("Invalid credentials")
            }
            AppError::NotFound(msg) => HttpResponse::NotFound().body(msg.clone()),
            AppError::ValidationError(msg) => HttpResponse::BadRequest().body(msg.clone()),
            AppError::ServerError(_) => {
                log::error!("{}", self);
                HttpResponse::InternalServerError().body("Server error")
            }
        }
    }
}

/// Converts `sqlx::Error` into `AppError`.
///
/// `RowNotFound` becomes `NotFound`; anything else is an unclassified store failure.
impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> AppError {
        match error {
            sqlx::Error::RowNotFound => AppError::NotFound("Record not found".into()),
            _ => AppError::ServerError(error.to_string()),
        }
    }
}

/// Converts `bcrypt::BcryptError` into `AppError::ServerError`.
///
/// Hashing and verification only fail on runtime problems (e.g. a malformed stored
/// digest), never on a wrong password.
impl From<bcrypt::BcryptError> for AppError {
    fn from(error: bcrypt::BcryptError) -> AppError {
        AppError::ServerError(error.to_string())
    }
}

/// Converts `jsonwebtoken::errors::Error` into `AppError::BadCredential`.
///
/// Signature mismatch, malformed payload, and expiry all land here.
impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(error: jsonwebtoken::errors::Error) -> AppError {
        AppError::BadCredential(error.to_string())
    }
}
