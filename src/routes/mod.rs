use axum::{extract::rejection::FormRejection, Form, Router};

use crate::error::AppError;

pub mod club;
pub mod thread;

pub fn app() -> Router {
    Router::new().merge(club::app()).merge(thread::app())
}

pub async fn not_found() -> AppError {
    AppError::not_found("the page does not exist")
}

/// Unwraps a submitted form, reporting missing or malformed fields as a bad
/// request.
fn require_form<T>(form: Result<Form<T>, FormRejection>) -> Result<T, AppError> {
    form.map(|Form(req)| req)
        .map_err(|rejection| AppError::bad_request(rejection.body_text()))
}
