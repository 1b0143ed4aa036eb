pub mod admin;
pub mod auth;
pub mod health;
pub mod todos;
pub mod users;

use actix_web::web;

use crate::error::AppError;

/// Registers every endpoint. Wrap the app in `AuthMiddleware` so protected
/// routes see a resolved identity.
///
/// Extractor failures (bad JSON, incomplete forms, unparsable path segments)
/// are rendered through `AppError` like every other error.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        AppError::BadRequest(err.to_string()).into()
    }))
    .app_data(web::FormConfig::default().error_handler(|err, _req| {
        AppError::BadRequest(err.to_string()).into()
    }))
    .app_data(web::PathConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(err.to_string()).into()
    }));

    cfg.service(health::health)
        .service(
            web::scope("/auth")
                .service(auth::create_user)
                .service(auth::login),
        )
        .service(todos::read_all)
        .service(
            web::scope("/todo")
                .service(todos::create_todo)
                .service(todos::read_todo)
                .service(todos::update_todo)
                .service(todos::delete_todo),
        )
        .service(
            web::scope("/admin")
                .service(admin::read_all)
                .service(admin::delete_todo),
        )
        .service(
            web::scope("/user")
                .service(users::get_user)
                .service(users::change_password)
                .service(users::change_phone_number),
        );
}

/// Path ids must be strictly positive.
pub(crate) fn positive_id(id: i32) -> Result<i32, AppError> {
    if id > 0 {
        Ok(id)
    } else {
        Err(AppError::ValidationError(format!(
            "id must be greater than 0, got {}",
            id
        )))
    }
}
