use crate::{
    auth::{hash_password, verify_password, AuthResponse, LoginRequest, TokenService},
    error::AppError,
    models::{Credentials, UserInput},
};
use actix_web::{post, web, HttpResponse, Responder};
use sqlx::SqlitePool;

/// Login
///
/// Authenticates by email and password and returns a session token.
///
/// An unknown email and a wrong password take the same failure path: both
/// produce the identical 401 response, so the caller cannot tell whether the
/// account exists.
#[post("/login")]
pub async fn login(
    pool: web::Data<SqlitePool>,
    tokens: web::Data<TokenService>,
    login_data: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    let user = sqlx::query_as::<_, Credentials>("SELECT id, password_hash FROM users WHERE email = ?")
        .bind(&login_data.email)
        .fetch_optional(&**pool)
        .await?;

    match user {
        Some(user) if verify_password(&login_data.password, &user.password_hash)? => {
            let token = tokens.issue(user.id)?;
            Ok(HttpResponse::Ok().json(AuthResponse { token }))
        }
        _ => Err(AppError::InvalidCredentials),
    }
}

/// Register a new user
///
/// Digests the password, persists the account, and discards the plaintext.
/// A rejected insert (e.g. the unique email constraint) is surfaced with the
/// store's own message as a 400.
#[post("/registro")]
pub async fn register(
    pool: web::Data<SqlitePool>,
    register_data: web::Json<UserInput>,
) -> Result<impl Responder, AppError> {
    let password_hash = hash_password(&register_data.password)?;

    sqlx::query("INSERT INTO users (name, email, password_hash, role) VALUES (?, ?, ?, ?)")
        .bind(&register_data.name)
        .bind(&register_data.email)
        .bind(&password_hash)
        .bind(&register_data.role)
        .execute(&**pool)
        .await
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    Ok(HttpResponse::Created().body("User registered successfully"))
}
