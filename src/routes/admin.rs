use crate::{auth::CurrentUser, error::AppError, routes::positive_id, state::AppState};
use actix_web::{delete, get, web, HttpResponse, Responder};

/// Lists every todo of every user. Admins only.
#[get("/todo")]
pub async fn read_all(
    state: web::Data<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<impl Responder, AppError> {
    user.require_admin()?;

    let todos = state.todos.list_all().await?;
    Ok(HttpResponse::Ok().json(todos))
}

/// Deletes any todo by id. Admins only.
#[delete("/todo/{todo_id}")]
pub async fn delete_todo(
    state: web::Data<AppState>,
    CurrentUser(user): CurrentUser,
    todo_id: web::Path<i32>,
) -> Result<impl Responder, AppError> {
    user.require_admin()?;
    let todo_id = positive_id(todo_id.into_inner())?;

    if !state.todos.delete_any(todo_id).await? {
        return Err(AppError::NotFound(format!(
            "Todo id {}, not found!",
            todo_id
        )));
    }

    log::info!("admin {} deleted todo {}", user.id, todo_id);
    Ok(HttpResponse::NoContent().finish())
}
