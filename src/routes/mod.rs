pub mod auth;
pub mod health;
pub mod tasks;
pub mod users;

use crate::auth::{AuthMiddleware, TokenService};
use actix_web::web;

/// Builds the route table.
///
/// Public routes (`/health`, `/login`, `/registro`) sit outside the gate; the
/// `/usuarios` and `/tarefas` scopes are each wrapped in `AuthMiddleware`, so
/// the gate covers exactly the protected surface. Within a scope, literal
/// segments are registered before `/{id}` so they win the match. The token
/// service is also registered as app data for the login handler.
pub fn config(tokens: TokenService) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(web::Data::new(tokens.clone()))
            .service(health::health)
            .service(auth::login)
            .service(auth::register)
            .service(
                web::scope("/usuarios")
                    .wrap(AuthMiddleware::new(tokens.clone()))
                    .service(users::count_users_by_role)
                    .service(users::list_users)
                    .service(users::create_user)
                    .service(users::update_user)
                    .service(users::delete_user),
            )
            .service(
                web::scope("/tarefas")
                    .wrap(AuthMiddleware::new(tokens.clone()))
                    .service(tasks::list_unassigned_tasks)
                    .service(tasks::assign_task)
                    .service(tasks::list_tasks)
                    .service(tasks::create_task)
                    .service(tasks::update_task)
                    .service(tasks::delete_task),
            );
    }
}
