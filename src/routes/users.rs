use crate::{
    auth::hash_password,
    error::AppError,
    models::{RoleCount, User, UserInput, UserUpdate},
};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use sqlx::SqlitePool;

/// Retrieves every user account.
///
/// Visible to any authenticated caller. The response type carries no digest
/// field, so password hashes never leave the store.
#[get("")]
pub async fn list_users(pool: web::Data<SqlitePool>) -> Result<impl Responder, AppError> {
    let users = sqlx::query_as::<_, User>("SELECT id, name, email, role FROM users ORDER BY id")
        .fetch_all(&**pool)
        .await?;

    Ok(HttpResponse::Ok().json(users))
}

/// Creates a user account.
///
/// Same write path as registration; only the route is behind the gate.
#[post("")]
pub async fn create_user(
    pool: web::Data<SqlitePool>,
    user_data: web::Json<UserInput>,
) -> Result<impl Responder, AppError> {
    let password_hash = hash_password(&user_data.password)?;

    sqlx::query("INSERT INTO users (name, email, password_hash, role) VALUES (?, ?, ?, ?)")
        .bind(&user_data.name)
        .bind(&user_data.email)
        .bind(&password_hash)
        .bind(&user_data.role)
        .execute(&**pool)
        .await
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    Ok(HttpResponse::Created().body("User created successfully"))
}

/// Updates a user's name, email, and role.
///
/// A wholesale replacement of exactly those three fields; the password is
/// never touched by this handler. Unknown id yields 404.
#[put("/{id}")]
pub async fn update_user(
    pool: web::Data<SqlitePool>,
    user_id: web::Path<i64>,
    user_data: web::Json<UserUpdate>,
) -> Result<impl Responder, AppError> {
    let result = sqlx::query("UPDATE users SET name = ?, email = ?, role = ? WHERE id = ?")
        .bind(&user_data.name)
        .bind(&user_data.email)
        .bind(&user_data.role)
        .bind(user_id.into_inner())
        .execute(&**pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("User not found".into()));
    }

    Ok(HttpResponse::Ok().body("User updated successfully"))
}

/// Deletes a user account.
///
/// Unconditional: deleting an id that does not exist is still a 200. The
/// user's tasks are left untouched; their owner reference simply dangles.
#[delete("/{id}")]
pub async fn delete_user(
    pool: web::Data<SqlitePool>,
    user_id: web::Path<i64>,
) -> Result<impl Responder, AppError> {
    sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(user_id.into_inner())
        .execute(&**pool)
        .await?;

    Ok(HttpResponse::Ok().body("User deleted successfully"))
}

/// Returns user counts grouped by role, ordered by role for a stable shape.
#[get("/contagem")]
pub async fn count_users_by_role(
    pool: web::Data<SqlitePool>,
) -> Result<impl Responder, AppError> {
    let counts = sqlx::query_as::<_, RoleCount>(
        "SELECT role, COUNT(*) AS count FROM users GROUP BY role ORDER BY role",
    )
    .fetch_all(&**pool)
    .await?;

    Ok(HttpResponse::Ok().json(counts))
}
