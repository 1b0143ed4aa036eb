use crate::{
    auth::{hash_password, verify_password, CurrentUser},
    error::AppError,
    models::{PasswordChange, PhoneNumberUpdate},
    state::AppState,
};
use actix_web::{get, put, web, HttpResponse, Responder};
use validator::Validate;

fn user_not_found() -> AppError {
    AppError::NotFound("User not found!".into())
}

/// Returns the caller's own profile.
#[get("")]
pub async fn get_user(
    state: web::Data<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<impl Responder, AppError> {
    let profile = state
        .users
        .find_by_id(user.id)
        .await?
        .ok_or_else(user_not_found)?;

    Ok(HttpResponse::Ok().json(profile))
}

/// Changes the caller's password after re-checking the current one.
///
/// ## Responses:
/// - `202 Accepted`: new password stored.
/// - `401 Unauthorized`: `password` does not match the stored hash.
/// - `422 Unprocessable Entity`: `new_password` shorter than 6 characters.
#[put("/change_password")]
pub async fn change_password(
    state: web::Data<AppState>,
    CurrentUser(user): CurrentUser,
    verification: web::Json<PasswordChange>,
) -> Result<impl Responder, AppError> {
    verification.validate()?;

    let stored = state
        .users
        .find_by_id(user.id)
        .await?
        .ok_or_else(user_not_found)?;

    if !verify_password(&verification.password, &stored.hashed_password)? {
        log::warn!("user {} failed password change check", user.id);
        return Err(AppError::Unauthorized("Old password is incorrect".into()));
    }

    let hashed = hash_password(&verification.new_password, state.bcrypt_cost)?;
    if !state.users.update_password(user.id, &hashed).await? {
        return Err(user_not_found());
    }

    log::info!("user {} changed password", user.id);
    Ok(HttpResponse::Accepted().finish())
}

/// Sets the caller's phone number.
///
/// ## Responses:
/// - `204 No Content`: number stored.
/// - `422 Unprocessable Entity`: longer than 32 characters.
#[put("/phone_number/{phone_number}")]
pub async fn change_phone_number(
    state: web::Data<AppState>,
    CurrentUser(user): CurrentUser,
    update: web::Path<PhoneNumberUpdate>,
) -> Result<impl Responder, AppError> {
    update.validate()?;

    if !state
        .users
        .update_phone_number(user.id, &update.phone_number)
        .await?
    {
        return Err(user_not_found());
    }

    Ok(HttpResponse::NoContent().finish())
}
