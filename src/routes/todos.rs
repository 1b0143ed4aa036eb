use crate::{
    auth::CurrentUser,
    error::AppError,
    models::TodoInput,
    routes::positive_id,
    state::AppState,
};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use validator::Validate;

fn not_found(todo_id: i32) -> AppError {
    AppError::NotFound(format!("todo_id {}, not found.", todo_id))
}

/// Lists every todo owned by the caller.
#[get("/")]
pub async fn read_all(
    state: web::Data<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<impl Responder, AppError> {
    let todos = state.todos.list_owned(user.id).await?;
    Ok(HttpResponse::Ok().json(todos))
}

/// Retrieves a single todo.
///
/// A todo owned by someone else answers `404 Not Found`, exactly like a
/// missing one, so its existence is never revealed.
#[get("/{todo_id}")]
pub async fn read_todo(
    state: web::Data<AppState>,
    CurrentUser(user): CurrentUser,
    todo_id: web::Path<i32>,
) -> Result<impl Responder, AppError> {
    let todo_id = positive_id(todo_id.into_inner())?;

    match state.todos.find_owned(todo_id, user.id).await? {
        Some(todo) => Ok(HttpResponse::Ok().json(todo)),
        None => Err(not_found(todo_id)),
    }
}

/// Creates a todo owned by the caller.
///
/// ## Responses:
/// - `201 Created`: the stored `Todo`, including its new `id` and `owner_id`.
/// - `422 Unprocessable Entity`: validation failed (e.g. priority outside 1..=5).
#[post("/")]
pub async fn create_todo(
    state: web::Data<AppState>,
    CurrentUser(user): CurrentUser,
    todo_data: web::Json<TodoInput>,
) -> Result<impl Responder, AppError> {
    todo_data.validate()?;

    let todo = state.todos.create(todo_data.into_inner(), user.id).await?;
    log::info!("user {} created todo {}", user.id, todo.id);
    Ok(HttpResponse::Created().json(todo))
}

/// Replaces every mutable field of a todo the caller owns.
#[put("/{todo_id}")]
pub async fn update_todo(
    state: web::Data<AppState>,
    CurrentUser(user): CurrentUser,
    todo_id: web::Path<i32>,
    todo_data: web::Json<TodoInput>,
) -> Result<impl Responder, AppError> {
    let todo_id = positive_id(todo_id.into_inner())?;
    todo_data.validate()?;

    state
        .todos
        .update_owned(todo_id, user.id, todo_data.into_inner())
        .await?
        .ok_or_else(|| not_found(todo_id))?;

    Ok(HttpResponse::NoContent().finish())
}

/// Deletes a todo the caller owns.
#[delete("/{todo_id}")]
pub async fn delete_todo(
    state: web::Data<AppState>,
    CurrentUser(user): CurrentUser,
    todo_id: web::Path<i32>,
) -> Result<impl Responder, AppError> {
    let todo_id = positive_id(todo_id.into_inner())?;

    if !state.todos.delete_owned(todo_id, user.id).await? {
        return Err(not_found(todo_id));
    }

    log::info!("user {} deleted todo {}", user.id, todo_id);
    Ok(HttpResponse::NoContent().finish())
}
