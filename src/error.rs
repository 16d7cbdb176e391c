use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use askama::Template;
use std::borrow::Cow;

use crate::views::ErrorPage;

#[derive(Debug)]
pub enum AppError {
    InternalServerError(anyhow::Error),
    ResponseStatusError(StatusCode, Cow<'static, str>),
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::InternalServerError(err) => {
                tracing::error!("request failed: {err:#}");
                AppError::from(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
                    .into_response()
            }
            AppError::ResponseStatusError(code, message) => {
                let page = ErrorPage {
                    status: code.as_u16(),
                    message: &message,
                };
                match page.render() {
                    Ok(html) => (code, Html(html)).into_response(),
                    Err(err) => {
                        tracing::error!("failed to render error page: {err}");
                        (code, message.into_owned()).into_response()
                    }
                }
            }
        }
    }
}

impl<E: Into<anyhow::Error>> From<E> for AppError {
    fn from(e: E) -> AppError {
        AppError::InternalServerError(e.into())
    }
}

impl AppError {
    pub fn from(code: StatusCode, s: impl Into<Cow<'static, str>>) -> AppError {
        AppError::ResponseStatusError(code, s.into())
    }

    pub fn not_found(s: impl Into<Cow<'static, str>>) -> AppError {
        AppError::from(StatusCode::NOT_FOUND, s)
    }

    pub fn bad_request(s: impl Into<Cow<'static, str>>) -> AppError {
        AppError::from(StatusCode::BAD_REQUEST, s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_failures_are_internal() {
        let err: AppError = diesel::result::Error::BrokenTransactionManager.into();
        assert!(matches!(err, AppError::InternalServerError(_)));
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn status_errors_keep_their_code() {
        let response = AppError::not_found("the club does not exist").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = AppError::bad_request("missing field `title`").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn internal_errors_hide_details() {
        let response = AppError::InternalServerError(anyhow::anyhow!("disk I/O error")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
