use crate::{
    auth::AuthenticatedUserId,
    error::AppError,
    models::{Task, TaskInput, TaskUpdate},
};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use sqlx::SqlitePool;
use uuid::Uuid;

/// Retrieves the authenticated user's tasks.
///
/// Scoped strictly to the caller: the owner filter comes from the verified
/// token, never from client input.
#[get("")]
pub async fn list_tasks(
    pool: web::Data<SqlitePool>,
    user: AuthenticatedUserId,
) -> Result<impl Responder, AppError> {
    let tasks = sqlx::query_as::<_, Task>(
        "SELECT id, title, description, completion, user_id FROM tasks WHERE user_id = ?",
    )
    .bind(user.0)
    .fetch_all(&**pool)
    .await?;

    Ok(HttpResponse::Ok().json(tasks))
}

/// Creates a task owned by the authenticated user.
///
/// Responds 201 with the created task.
#[post("")]
pub async fn create_task(
    pool: web::Data<SqlitePool>,
    user: AuthenticatedUserId,
    task_data: web::Json<TaskInput>,
) -> Result<impl Responder, AppError> {
    let task = Task::new(task_data.into_inner(), user.0);

    sqlx::query(
        "INSERT INTO tasks (id, title, description, completion, user_id) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(task.id)
    .bind(&task.title)
    .bind(&task.description)
    .bind(task.completion)
    .bind(task.user_id)
    .execute(&**pool)
    .await
    .map_err(|e| AppError::ValidationError(e.to_string()))?;

    Ok(HttpResponse::Created().json(task))
}

/// Partially updates a task's description and completion flag.
///
/// The lookup filters on id and owner in one statement, so a nonexistent task
/// and someone else's task produce the same 404. Fields absent from the body
/// keep their current value; the title is immutable.
#[put("/{id}")]
pub async fn update_task(
    pool: web::Data<SqlitePool>,
    user: AuthenticatedUserId,
    task_id: web::Path<Uuid>,
    task_data: web::Json<TaskUpdate>,
) -> Result<impl Responder, AppError> {
    let task_uuid = task_id.into_inner();
    let update = task_data.into_inner();

    let task = sqlx::query_as::<_, Task>(
        "SELECT id, title, description, completion, user_id FROM tasks \
         WHERE id = ? AND user_id = ?",
    )
    .bind(task_uuid)
    .bind(user.0)
    .fetch_optional(&**pool)
    .await?
    .ok_or_else(|| AppError::NotFound("Task not found".into()))?;

    let description = update.description.unwrap_or(task.description);
    let completion = update.completion.unwrap_or(task.completion);

    sqlx::query("UPDATE tasks SET description = ?, completion = ? WHERE id = ? AND user_id = ?")
        .bind(&description)
        .bind(completion)
        .bind(task_uuid)
        .bind(user.0)
        .execute(&**pool)
        .await?;

    Ok(HttpResponse::Ok().body("Task updated successfully"))
}

/// Deletes a task owned by the authenticated user.
///
/// Same combined id-and-owner filter as the update: an ownership miss is a
/// plain 404.
#[delete("/{id}")]
pub async fn delete_task(
    pool: web::Data<SqlitePool>,
    user: AuthenticatedUserId,
    task_id: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    let result = sqlx::query("DELETE FROM tasks WHERE id = ? AND user_id = ?")
        .bind(task_id.into_inner())
        .bind(user.0)
        .execute(&**pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Task not found".into()));
    }

    Ok(HttpResponse::Ok().body("Task deleted successfully"))
}

/// Retrieves every task that has no owner. Visible to any authenticated
/// caller.
#[get("/sem-usuario")]
pub async fn list_unassigned_tasks(
    pool: web::Data<SqlitePool>,
) -> Result<impl Responder, AppError> {
    let tasks = sqlx::query_as::<_, Task>(
        "SELECT id, title, description, completion, user_id FROM tasks WHERE user_id IS NULL",
    )
    .fetch_all(&**pool)
    .await?;

    Ok(HttpResponse::Ok().json(tasks))
}

/// Assigns a task to the authenticated user.
///
/// Deliberately has no ownership filter: any authenticated user may claim any
/// task, including one currently owned by someone else.
#[put("/{id}/atribuir")]
pub async fn assign_task(
    pool: web::Data<SqlitePool>,
    user: AuthenticatedUserId,
    task_id: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    let result = sqlx::query("UPDATE tasks SET user_id = ? WHERE id = ?")
        .bind(user.0)
        .bind(task_id.into_inner())
        .execute(&**pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Task not found".into()));
    }

    Ok(HttpResponse::Ok().body("Task owner assigned successfully"))
}
