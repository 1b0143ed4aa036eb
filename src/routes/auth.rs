use crate::{
    auth::{authenticate, hash_password, LoginForm, TokenResponse},
    error::AppError,
    models::{CreateUserRequest, NewUser},
    state::AppState,
};
use actix_web::{post, web, HttpResponse, Responder};
use validator::Validate;

/// Register a new user
///
/// Stores a new account with a bcrypt-hashed password and returns its profile.
///
/// The endpoint is public and the caller picks `role`, so anyone can sign up
/// as `admin`. Put it behind something else if that matters for a deployment.
///
/// ## Responses:
/// - `201 Created`: the stored `User` (without the password hash).
/// - `400 Bad Request`: username or email already registered, or malformed JSON.
/// - `422 Unprocessable Entity`: validation failed.
#[post("/")]
pub async fn create_user(
    state: web::Data<AppState>,
    request: web::Json<CreateUserRequest>,
) -> Result<impl Responder, AppError> {
    request.validate()?;

    let request = request.into_inner();
    let hashed_password = hash_password(&request.password, state.bcrypt_cost)?;
    let user = state
        .users
        .create_user(NewUser::from_request(request, hashed_password))
        .await?;

    log::info!("registered user {} with role {}", user.id, user.role);
    Ok(HttpResponse::Created().json(user))
}

/// Login
///
/// Takes a form-encoded `username`/`password` pair and returns a bearer token.
///
/// ## Responses:
/// - `200 OK`: `{"access_token": "...", "token_type": "bearer"}`.
/// - `401 Unauthorized`: unknown username or wrong password (same message for both).
#[post("/token")]
pub async fn login(
    state: web::Data<AppState>,
    form: web::Form<LoginForm>,
) -> Result<impl Responder, AppError> {
    let user = authenticate(state.users.as_ref(), &form.username, &form.password).await?;
    let token = state.tokens.issue(&user)?;

    Ok(HttpResponse::Ok().json(TokenResponse::bearer(token)))
}
